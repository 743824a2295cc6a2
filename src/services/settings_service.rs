use crate::domain::setting::Setting;
use crate::repository::Repository;
use crate::services::StoreError;
use anyhow::Result;
use std::sync::Arc;

#[derive(Clone)]
pub struct SettingsService {
    pub repository: Arc<Repository>,
}

impl SettingsService {
    pub fn new(repository: Arc<Repository>) -> Self {
        Self { repository }
    }

    /// Creates the setting, or rewrites its value if the key already exists.
    pub async fn set(&self, key: String, value: String) -> Result<Setting> {
        if key.is_empty() {
            return Err(StoreError::ValidationError {
                field: "key".to_string(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        let setting = Setting::new(key, value);
        if !self.repository.settings.update(&setting).await? {
            self.repository.settings.create(&setting).await?;
        }
        Ok(setting)
    }

    /// Rewrites an existing setting. Fails when the key is not present.
    pub async fn update(&self, key: &str, value: String) -> Result<Setting> {
        let setting = Setting::new(key.to_string(), value);
        if !self.repository.settings.update(&setting).await? {
            return Err(StoreError::SettingNotFound {
                key: key.to_string(),
            }
            .into());
        }
        Ok(setting)
    }

    pub async fn get(&self, key: &str) -> Result<Option<Setting>> {
        self.repository.settings.find(key).await
    }

    pub async fn delete(&self, key: &str) -> Result<bool> {
        self.repository.settings.remove(key).await
    }

    pub async fn list_all(&self) -> Result<Vec<Setting>> {
        self.repository.settings.list_all().await
    }

    pub async fn reset(&self) -> Result<u64> {
        self.repository.settings.clear().await
    }
}
