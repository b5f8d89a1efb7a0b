//! Content persistence module.
//!
//! SQLite is the source of truth for all editable content. The query layer
//! never talks to the database directly; it consumes the [`ContentSource`]
//! capability, which enumerates full collections.

mod store;

pub use store::*;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

use crate::errors::AppError;
use crate::models::{Activity, Career, Post, Project, Series};

/// One content record: an opaque id plus a typed data payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry<T> {
    pub id: String,
    pub data: T,
}

/// Read capability over the content collections.
///
/// Repositories receive this by constructor injection so the query layer is
/// testable against an in-memory source.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn posts(&self) -> Result<Vec<Entry<Post>>, AppError>;
    async fn projects(&self) -> Result<Vec<Entry<Project>>, AppError>;
    async fn series(&self) -> Result<Vec<Entry<Series>>, AppError>;
    async fn activities(&self) -> Result<Vec<Entry<Activity>>, AppError>;
    async fn careers(&self) -> Result<Vec<Entry<Career>>, AppError>;
}

/// Initialize the database connection pool and run migrations.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    // Run embedded migrations
    run_migrations(&pool).await?;

    Ok(pool)
}

/// Run database migrations.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS posts (
            id TEXT PRIMARY KEY,
            author TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            title TEXT NOT NULL,
            pinned INTEGER NOT NULL DEFAULT 0,
            draft INTEGER NOT NULL DEFAULT 0,
            tags TEXT,
            og_image TEXT,
            series TEXT,
            description TEXT
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS projects (
            id TEXT PRIMARY KEY,
            project_type TEXT NOT NULL,
            image_url TEXT,
            site_url TEXT,
            roles TEXT,
            company_name TEXT,
            project_name TEXT NOT NULL,
            short_description TEXT,
            started_at TEXT NOT NULL,
            ended_at TEXT NOT NULL DEFAULT '',
            stack_ids TEXT
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS series (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            og_image TEXT
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS activities (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT,
            url TEXT,
            started_at TEXT NOT NULL,
            ended_at TEXT NOT NULL DEFAULT ''
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS careers (
            id TEXT PRIMARY KEY,
            organization_name TEXT NOT NULL,
            role TEXT NOT NULL,
            description TEXT,
            started_at TEXT NOT NULL,
            ended_at TEXT NOT NULL DEFAULT ''
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS drafts (
            content_id TEXT PRIMARY KEY,
            form_data TEXT NOT NULL,
            markdown_content TEXT NOT NULL DEFAULT '',
            timestamp TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes for common queries
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_posts_created_at ON posts(created_at);
        CREATE INDEX IF NOT EXISTS idx_posts_series ON posts(series);
        CREATE INDEX IF NOT EXISTS idx_posts_title ON posts(title);
        CREATE INDEX IF NOT EXISTS idx_projects_project_name ON projects(project_name);
        CREATE INDEX IF NOT EXISTS idx_drafts_timestamp ON drafts(timestamp);
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
