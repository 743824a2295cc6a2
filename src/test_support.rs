// Test helpers for integration testing

use crate::domain::setting::Setting;
use crate::repository::{Repository, database};
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

pub struct TestContext {
    pub repository: Arc<Repository>,
}

impl TestContext {
    pub async fn new() -> Result<Self> {
        let pool = database::init_test_database().await?;
        Ok(Self {
            repository: Arc::new(Repository::new(pool)),
        })
    }
}

/// Reads a JSON dataset of settings rows.
pub fn load_fixture(path: impl AsRef<Path>) -> Result<Vec<Setting>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Inserts every row of the dataset in a single transaction.
pub async fn seed(repository: &Repository, rows: &[Setting]) -> Result<()> {
    let mut tx = repository.pool.begin().await?;

    for row in rows {
        sqlx::query("INSERT INTO settings (key, value) VALUES (?, ?)")
            .bind(&row.key)
            .bind(&row.value)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(())
}

/// Asserts that the settings table holds exactly the expected dataset,
/// ignoring row order.
pub async fn assert_store_matches(repository: &Repository, expected: &[Setting]) -> Result<()> {
    let actual = repository.settings.list_all().await?;

    let mut expected = expected.to_vec();
    expected.sort_by(|a, b| a.key.cmp(&b.key));

    assert_eq!(
        actual, expected,
        "settings table does not match expected dataset"
    );
    Ok(())
}
