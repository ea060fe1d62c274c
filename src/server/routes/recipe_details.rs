use crate::error::ErrorResponder;
use crate::server::extract::ItemId;
use crate::server::router::PantryState;
use axum::{Json, Router, extract::State, response::Response, routing::get};
use pantry_schema::RecipeIngredientView;
use tracing::info;

pub fn router() -> Router<PantryState> {
    Router::new().route("/api/recipe-details/{id}", get(list_recipe_details))
}

/// GET /api/recipe-details/{recipeId}
pub(super) async fn list_recipe_details(
    State(state): State<PantryState>,
    ItemId(recipe_id): ItemId,
) -> Result<Json<Vec<RecipeIngredientView>>, Response> {
    let errors = ErrorResponder::new("recipe_details.list");
    info!(recipe_id, "Received list recipe details request");

    let rows = state
        .relations
        .list_for_recipe(recipe_id)
        .await
        .map_err(|e| errors.report("Failed to list recipe ingredients", &e))?;

    Ok(Json(rows.into_iter().map(RecipeIngredientView::from).collect()))
}
