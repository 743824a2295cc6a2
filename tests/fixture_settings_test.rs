//! The fixture-assisted version of the settings integration tests: the same
//! scenarios as `manual_settings_test.rs`, with seeding and whole-table
//! verification driven by JSON datasets instead of hand-written queries.

use prefstore::domain::setting::Setting;
use prefstore::test_support::{TestContext, assert_store_matches, load_fixture, seed};

#[tokio::test]
async fn create_single_setting_matches_expected_dataset() {
    let ctx = TestContext::new().await.unwrap();

    ctx.repository
        .settings
        .create(&Setting::new("k1".to_string(), "v1".to_string()))
        .await
        .unwrap();

    let expected = load_fixture("tests/fixtures/expected_single_setting.json").unwrap();
    assert_store_matches(&ctx.repository, &expected).await.unwrap();
}

#[tokio::test]
async fn update_seeded_setting_matches_expected_dataset() {
    let ctx = TestContext::new().await.unwrap();

    let rows = load_fixture("tests/fixtures/two_settings_seed.json").unwrap();
    seed(&ctx.repository, &rows).await.unwrap();

    let changed = ctx
        .repository
        .settings
        .update(&Setting::new("a".to_string(), "99".to_string()))
        .await
        .unwrap();
    assert!(changed);

    let expected = load_fixture("tests/fixtures/expected_after_update.json").unwrap();
    assert_store_matches(&ctx.repository, &expected).await.unwrap();
}

#[tokio::test]
async fn reset_matches_empty_dataset() {
    let ctx = TestContext::new().await.unwrap();

    let rows = load_fixture("tests/fixtures/two_settings_seed.json").unwrap();
    seed(&ctx.repository, &rows).await.unwrap();

    ctx.repository.settings.clear().await.unwrap();

    let expected = load_fixture("tests/fixtures/empty.json").unwrap();
    assert_store_matches(&ctx.repository, &expected).await.unwrap();
}
