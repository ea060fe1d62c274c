use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use super::listing::decode_rows;
use super::models::{DbIngredient, DeleteOutcome};
use super::Store;
use crate::config::DecodeErrorPolicy;
use crate::error::PantryError;

/// Create/list/delete for the `ingredient` table.
#[derive(Debug, Clone)]
pub struct Ingredients {
    pool: SqlitePool,
    on_decode_error: DecodeErrorPolicy,
}

impl Ingredients {
    pub fn new(store: &Store, on_decode_error: DecodeErrorPolicy) -> Self {
        Self {
            pool: store.pool().clone(),
            on_decode_error,
        }
    }

    /// Inserts the ingredient and, when `recipe_id` is given, its join row.
    ///
    /// Both inserts share one transaction: if the link fails (e.g. the recipe
    /// does not exist) the ingredient is rolled back with it.
    pub async fn create(
        &self,
        name: Option<&str>,
        recipe_id: Option<i64>,
    ) -> Result<DbIngredient, PantryError> {
        let Some(name) = name else {
            return Err(PantryError::Validation(
                "missing 'name' in payload".to_string(),
            ));
        };

        let mut tx = self.pool.begin().await?;
        let ingredient = sqlx::query_as::<_, DbIngredient>(
            r#"
            INSERT INTO ingredient (name, created_at)
            VALUES (?, ?)
            RETURNING id, name, created_at
            "#,
        )
        .bind(name)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        if let Some(recipe_id) = recipe_id {
            sqlx::query("INSERT INTO recipe_ingredient (ingredient_id, recipe_id) VALUES (?, ?)")
                .bind(ingredient.id)
                .bind(recipe_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        debug!(
            id = ingredient.id,
            name = %ingredient.name,
            recipe_id,
            "ingredient created"
        );
        Ok(ingredient)
    }

    pub async fn list(&self) -> Result<Vec<DbIngredient>, PantryError> {
        let rows = sqlx::query(
            r#"
        SELECT id, name, created_at
        FROM ingredient
        ORDER BY id
        "#,
        )
        .fetch_all(&self.pool)
        .await?;

        decode_rows("ingredient", rows, self.on_decode_error)
    }

    pub async fn delete(&self, id: i64) -> Result<DeleteOutcome, PantryError> {
        let mut tx = self.pool.begin().await?;

        let links_removed = sqlx::query("DELETE FROM recipe_ingredient WHERE ingredient_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let rows_removed = sqlx::query("DELETE FROM ingredient WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        debug!(id, links_removed, rows_removed, "ingredient deleted");
        Ok(DeleteOutcome {
            links_removed,
            rows_removed,
        })
    }
}
