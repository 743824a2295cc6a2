use serde::{Deserialize, Serialize};

/// A single persisted key/value pair. The key identifies the row; the value
/// carries arbitrary associated data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Setting {
    pub key: String,
    pub value: String,
}

impl Setting {
    pub fn new(key: String, value: String) -> Self {
        Self { key, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_setting() {
        let setting = Setting::new("theme".to_string(), "dark".to_string());

        assert_eq!(setting.key, "theme");
        assert_eq!(setting.value, "dark");
    }

    #[test]
    fn test_fixture_roundtrip() {
        let json = r#"{"key": "theme", "value": "dark"}"#;
        let setting: Setting = serde_json::from_str(json).unwrap();

        assert_eq!(setting, Setting::new("theme".to_string(), "dark".to_string()));
    }
}
