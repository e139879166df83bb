// src/common/migrations.rs
//! Database migration and schema management

use sqlx::SqlitePool;
use std::env;
use tracing::{info, warn};

use crate::auth::password::hash_password;
use crate::common::safe_email_log;

/// Run all database migrations
///
/// Tables are created if missing. Set RESET_DB=true to drop and recreate
/// the whole schema (destroys data, intended for local development).
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), anyhow::Error> {
    let should_reset_db = env::var("RESET_DB").unwrap_or_else(|_| "false".to_string()) == "true";

    if should_reset_db {
        warn!("RESET_DB=true - Dropping all tables and recreating schema...");
        drop_all_tables(pool).await?;
        info!("Dropped old tables");
    }

    create_user_tables(pool).await?;
    create_catalog_tables(pool).await?;
    create_indexes(pool).await?;

    seed_user_from_env(pool).await?;

    info!("Database migration completed successfully");

    Ok(())
}

async fn drop_all_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let tables = ["api_tokens", "books", "categories", "authors", "users"];
    for table in tables {
        sqlx::query(&format!("DROP TABLE IF EXISTS {}", table))
            .execute(pool)
            .await?;
    }
    Ok(())
}

async fn create_user_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // One row per issued bearer token; login clears all rows for the user
    // before inserting the replacement token.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS api_tokens (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            token TEXT NOT NULL UNIQUE,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_catalog_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS authors (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            nationality TEXT NOT NULL,
            age INTEGER NOT NULL,
            gender TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // author_id/category_id are plain integers: referential integrity is
    // enforced in the services (author cascade delete), not by the schema.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS books (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            category_id INTEGER NOT NULL,
            price REAL NOT NULL,
            publication_date TEXT NOT NULL,
            edition INTEGER NOT NULL,
            author_id INTEGER NOT NULL,
            isbn TEXT,
            cover TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_indexes(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let indexes = [
        "CREATE INDEX IF NOT EXISTS idx_books_author_id ON books(author_id)",
        "CREATE INDEX IF NOT EXISTS idx_books_category_id ON books(category_id)",
        "CREATE INDEX IF NOT EXISTS idx_api_tokens_user_id ON api_tokens(user_id)",
        "CREATE INDEX IF NOT EXISTS idx_api_tokens_token ON api_tokens(token)",
    ];

    for index in indexes {
        sqlx::query(index).execute(pool).await?;
    }

    Ok(())
}

/// Seed a single user from SEED_USER_* environment variables.
///
/// There is no signup endpoint, so this is the only way to get a user who
/// can log in. Skipped when the variables are absent or the email already
/// exists.
async fn seed_user_from_env(pool: &SqlitePool) -> Result<(), anyhow::Error> {
    let (name, email, password) = match (
        env::var("SEED_USER_NAME"),
        env::var("SEED_USER_EMAIL"),
        env::var("SEED_USER_PASSWORD"),
    ) {
        (Ok(n), Ok(e), Ok(p)) if !e.is_empty() && !p.is_empty() => (n, e, p),
        _ => return Ok(()),
    };

    let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE email = ?")
        .bind(&email)
        .fetch_optional(pool)
        .await?;

    if existing.is_some() {
        return Ok(());
    }

    let password_hash = hash_password(&password)
        .map_err(|e| anyhow::anyhow!("failed to hash seed password: {}", e))?;

    sqlx::query("INSERT INTO users (name, email, password) VALUES (?, ?, ?)")
        .bind(&name)
        .bind(&email)
        .bind(&password_hash)
        .execute(pool)
        .await?;

    info!(email = %safe_email_log(&email), "Seeded user from environment");

    Ok(())
}
