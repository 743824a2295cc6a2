use prefstore::repository::{Repository, database::init_database};
use prefstore::services::SettingsService;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    println!("Opening settings store...");
    let pool = init_database("demo_settings.db").await?;
    let repository = Arc::new(Repository::new(pool));
    let service = SettingsService::new(repository.clone());

    // Start from a clean table so repeated runs print the same thing
    service.reset().await?;

    println!("Creating settings...");
    service.set("theme".to_string(), "light".to_string()).await?;
    service
        .set("font_size".to_string(), "medium".to_string())
        .await?;

    println!("Updating theme...");
    service.update("theme", "dark".to_string()).await?;

    let settings = service.list_all().await?;
    println!("\nSettings in store: {}", settings.len());
    for setting in &settings {
        println!("  - {} = {}", setting.key, setting.value);
    }

    Ok(())
}
