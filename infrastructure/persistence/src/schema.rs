use sqlx::SqlitePool;
use tracing::info;

use crate::db::DatabaseError;

/// Drops and recreates the full schema. Destructive: existing users, orders,
/// and bills are gone after this runs. Only the bootstrap binary calls it.
pub async fn rebuild(pool: &SqlitePool) -> Result<(), DatabaseError> {
    let statements = [
        "DROP TABLE IF EXISTS bills",
        "DROP TABLE IF EXISTS orders",
        "DROP TABLE IF EXISTS items",
        "DROP TABLE IF EXISTS users",
        "CREATE TABLE users (
            user_id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL
        )",
        "CREATE TABLE items (
            item_id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            price REAL NOT NULL,
            popularity INTEGER NOT NULL DEFAULT 0
        )",
        "CREATE TABLE orders (
            order_id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            item_id INTEGER NOT NULL,
            quantity INTEGER NOT NULL,
            order_date TIMESTAMP,
            FOREIGN KEY (item_id) REFERENCES items (item_id),
            FOREIGN KEY (user_id) REFERENCES users (user_id)
        )",
        "CREATE TABLE bills (
            bill_id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            total_cost REAL NOT NULL,
            bill_date TIMESTAMP,
            FOREIGN KEY (user_id) REFERENCES users (user_id)
        )",
    ];

    for statement in statements {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|_| DatabaseError::SchemaError)?;
    }

    info!("Schema rebuilt");
    Ok(())
}

/// Seeds the items table from (name, price) pairs. Popularity starts at the
/// column default of zero.
pub async fn seed_items(
    pool: &SqlitePool,
    items: &[(String, f64)],
) -> Result<usize, DatabaseError> {
    for (name, price) in items {
        sqlx::query("INSERT INTO items (name, price) VALUES (?, ?)")
            .bind(name)
            .bind(price)
            .execute(pool)
            .await
            .map_err(|_| DatabaseError::SchemaError)?;
    }

    info!("Seeded {} menu items", items.len());
    Ok(items.len())
}
