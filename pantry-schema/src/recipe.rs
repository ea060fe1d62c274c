use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/recipes`.
///
/// `name` stays optional here so that a missing field reaches the mutator and
/// is rejected there as a validation failure instead of a JSON error.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CreateRecipeRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// Response of `POST /api/recipes`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CreatedRecipe {
    pub id: i64,
    pub name: String,
}

/// One element of `GET /api/recipes`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeView {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// One element of `GET /api/recipe-details/{recipeId}`.
///
/// `id` is the join row id, not the ingredient id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredientView {
    pub id: i64,
    pub ingredient_id: i64,
    pub name: String,
}
