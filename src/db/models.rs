use chrono::{DateTime, Utc};
use pantry_schema::{IngredientView, RecipeIngredientView, RecipeView};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbRecipe {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbIngredient {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A join row resolved against its ingredient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbRecipeIngredient {
    /// Join row id.
    pub id: i64,
    pub ingredient_id: i64,
    pub name: String,
}

/// Rows removed by a cascading delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub links_removed: u64,
    pub rows_removed: u64,
}

impl From<DbRecipe> for RecipeView {
    fn from(r: DbRecipe) -> Self {
        Self {
            id: r.id,
            name: r.name,
            created_at: r.created_at,
        }
    }
}

impl From<DbIngredient> for IngredientView {
    fn from(i: DbIngredient) -> Self {
        Self {
            id: i.id,
            name: i.name,
            created_at: i.created_at,
        }
    }
}

impl From<DbRecipeIngredient> for RecipeIngredientView {
    fn from(ri: DbRecipeIngredient) -> Self {
        Self {
            id: ri.id,
            ingredient_id: ri.ingredient_id,
            name: ri.name,
        }
    }
}
