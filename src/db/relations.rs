use sqlx::SqlitePool;

use super::Store;
use super::models::DbRecipeIngredient;
use crate::error::PantryError;

/// Reads the ingredients linked to a recipe through `recipe_ingredient`.
#[derive(Debug, Clone)]
pub struct RecipeRelations {
    pool: SqlitePool,
}

impl RecipeRelations {
    pub fn new(store: &Store) -> Self {
        Self {
            pool: store.pool().clone(),
        }
    }

    /// Join rows for `recipe_id` in insertion order. An unknown recipe or one
    /// without ingredients yields an empty list. Any undecodable row fails
    /// the whole read.
    pub async fn list_for_recipe(
        &self,
        recipe_id: i64,
    ) -> Result<Vec<DbRecipeIngredient>, PantryError> {
        let rows = sqlx::query_as::<_, DbRecipeIngredient>(
            r#"
        SELECT recipe_ingredient.id AS id,
               recipe_ingredient.ingredient_id AS ingredient_id,
               ingredient.name AS name
        FROM recipe_ingredient
        LEFT JOIN ingredient ON ingredient.id = recipe_ingredient.ingredient_id
        WHERE recipe_ingredient.recipe_id = ?
        ORDER BY recipe_ingredient.id
        "#,
        )
        .bind(recipe_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
