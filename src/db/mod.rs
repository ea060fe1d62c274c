//! Database module: the store handle, mutators and readers over it.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `recipes.rs` / `ingredients.rs`: transactional create/list/delete
//! - `relations.rs`: recipe -> ingredient join reads

pub mod ingredients;
pub mod models;
pub mod recipes;
pub mod relations;
pub mod schema;

mod listing;

pub use ingredients::Ingredients;
pub use models::{DbIngredient, DbRecipe, DbRecipeIngredient, DeleteOutcome};
pub use recipes::Recipes;
pub use relations::RecipeRelations;
pub use schema::SQLITE_INIT;

use crate::error::PantryError;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::{str::FromStr, time::Duration};
use tracing::info;

/// Explicitly constructed store client. Cloning shares the underlying pool.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Opens (creating if needed) the SQLite database and applies the schema.
    pub async fn connect(database_url: &str) -> Result<Self, PantryError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5))
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .connect_with(connect_opts)
            .await?;

        apply_schema(&pool).await?;

        info!("store initialized");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), PantryError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}
