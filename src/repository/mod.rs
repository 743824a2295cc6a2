pub mod database;
pub mod setting_repository;

use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct Repository {
    pub pool: Arc<SqlitePool>,
    pub settings: setting_repository::SettingRepository,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        let pool = Arc::new(pool);
        Self {
            settings: setting_repository::SettingRepository::new(pool.clone()),
            pool,
        }
    }
}
