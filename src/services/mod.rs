mod error_handling;
mod settings_service;

pub use error_handling::StoreError;
pub use settings_service::SettingsService;
