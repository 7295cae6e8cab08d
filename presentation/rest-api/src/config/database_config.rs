use persistence::db::{DatabaseConfig, create_sqlite_pool};
use sqlx::SqlitePool;
use std::env;

/// Initialize database connection pool from environment variables
///
/// Environment variables:
/// - DATABASE_URL: SQLite connection string
///   (default: "sqlite:food_order_chatbot.db")
///
/// # Errors
/// Returns error if the database file cannot be opened or created
pub async fn init_database() -> anyhow::Result<SqlitePool> {
    let db_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:food_order_chatbot.db".to_string());
    let pool = create_sqlite_pool(&DatabaseConfig::new(db_url)).await?;
    Ok(pool)
}
