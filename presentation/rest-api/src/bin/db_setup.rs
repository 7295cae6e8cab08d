use dotenvy::dotenv;
use tracing::info;

use persistence::db::{DatabaseConfig, create_sqlite_pool};
use persistence::menu_csv::CsvMenuExport;
use persistence::schema;

/// Database bootstrap
///
/// Drops and recreates the schema, then seeds the items table from the CSV
/// menu export. Destructive: any existing users, orders, and bills are
/// wiped. Run once before starting the API, and again only to reset.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    dotenv().ok();

    let db_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite:food_order_chatbot.db".to_string());
    let export_path = std::env::var("MENU_EXPORT_PATH")
        .unwrap_or_else(|_| "restaurant-1-orders.csv".to_string());

    let pool = create_sqlite_pool(&DatabaseConfig::new(db_url)).await?;

    schema::rebuild(&pool).await?;

    let items = CsvMenuExport::new(&export_path).menu_items()?;
    let seeded = schema::seed_items(&pool, &items).await?;

    info!("Database ready: {seeded} menu items seeded from {export_path}");
    Ok(())
}
