use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use super::listing::decode_rows;
use super::models::{DbRecipe, DeleteOutcome};
use super::Store;
use crate::config::DecodeErrorPolicy;
use crate::error::PantryError;

/// Create/list/delete for the `recipe` table.
#[derive(Debug, Clone)]
pub struct Recipes {
    pool: SqlitePool,
    on_decode_error: DecodeErrorPolicy,
}

impl Recipes {
    pub fn new(store: &Store, on_decode_error: DecodeErrorPolicy) -> Self {
        Self {
            pool: store.pool().clone(),
            on_decode_error,
        }
    }

    pub async fn create(&self, name: Option<&str>) -> Result<DbRecipe, PantryError> {
        let Some(name) = name else {
            return Err(PantryError::Validation(
                "missing 'name' in payload".to_string(),
            ));
        };

        let mut tx = self.pool.begin().await?;
        let recipe = sqlx::query_as::<_, DbRecipe>(
            r#"
            INSERT INTO recipe (name, created_at)
            VALUES (?, ?)
            RETURNING id, name, created_at
            "#,
        )
        .bind(name)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        debug!(id = recipe.id, name = %recipe.name, "recipe created");
        Ok(recipe)
    }

    pub async fn list(&self) -> Result<Vec<DbRecipe>, PantryError> {
        let rows = sqlx::query(
            r#"
        SELECT id, name, created_at
        FROM recipe
        ORDER BY id
        "#,
        )
        .fetch_all(&self.pool)
        .await?;

        decode_rows("recipe", rows, self.on_decode_error)
    }

    /// Removes the recipe's join rows, then the recipe, in one transaction.
    /// Ingredients themselves are left alone.
    pub async fn delete(&self, id: i64) -> Result<DeleteOutcome, PantryError> {
        let mut tx = self.pool.begin().await?;

        let links_removed = sqlx::query("DELETE FROM recipe_ingredient WHERE recipe_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let rows_removed = sqlx::query("DELETE FROM recipe WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        debug!(id, links_removed, rows_removed, "recipe deleted");
        Ok(DeleteOutcome {
            links_removed,
            rows_removed,
        })
    }
}
