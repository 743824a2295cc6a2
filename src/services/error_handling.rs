use thiserror::Error;

/// Custom error types with descriptive messages
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Setting not found: {key}")]
    SettingNotFound { key: String },

    #[error("Validation failed for {field}: {reason}")]
    ValidationError { field: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::SettingNotFound {
            key: "theme".to_string(),
        };
        assert_eq!(err.to_string(), "Setting not found: theme");

        let err = StoreError::ValidationError {
            field: "key".to_string(),
            reason: "must not be empty".to_string(),
        };
        assert_eq!(err.to_string(), "Validation failed for key: must not be empty");
    }
}
