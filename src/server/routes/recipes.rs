use crate::error::{ErrorResponder, PantryError};
use crate::server::extract::{ItemId, JsonBody};
use crate::server::router::PantryState;
use crate::utils::logging::with_pretty_json_debug;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::Response,
    routing::{delete, get},
};
use pantry_schema::{CreateRecipeRequest, CreatedRecipe, RecipeView};
use tracing::{debug, info};

pub fn router() -> Router<PantryState> {
    Router::new()
        .route("/api/recipes", get(list_recipes).post(create_recipe))
        .route("/api/recipes/{id}", delete(delete_recipe))
}

/// GET /api/recipes
pub(super) async fn list_recipes(
    State(state): State<PantryState>,
) -> Result<Json<Vec<RecipeView>>, Response> {
    let errors = ErrorResponder::new("recipes.list");
    info!("Received list all recipes request");

    let recipes = state
        .recipes
        .list()
        .await
        .map_err(|e| errors.report("Failed to list recipes", &e))?;

    Ok(Json(recipes.into_iter().map(RecipeView::from).collect()))
}

/// POST /api/recipes
pub(super) async fn create_recipe(
    State(state): State<PantryState>,
    body: Result<JsonBody<CreateRecipeRequest>, PantryError>,
) -> Result<(StatusCode, Json<CreatedRecipe>), Response> {
    let errors = ErrorResponder::new("recipes.create");
    info!("Received create recipe request");

    let JsonBody(req) = body.map_err(|e| errors.reject("Failed to read request body", e))?;
    with_pretty_json_debug(&req, |pretty_body| {
        debug!(body = %pretty_body, "create recipe payload");
    });

    let recipe = state
        .recipes
        .create(req.name.as_deref())
        .await
        .map_err(|e| errors.reject("Failed to insert recipe", e))?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedRecipe {
            id: recipe.id,
            name: recipe.name,
        }),
    ))
}

/// DELETE /api/recipes/{id}
pub(super) async fn delete_recipe(
    State(state): State<PantryState>,
    ItemId(id): ItemId,
) -> Result<&'static str, Response> {
    let errors = ErrorResponder::new("recipes.delete");
    info!(id, "Received remove recipe request");

    state
        .recipes
        .delete(id)
        .await
        .map_err(|e| errors.report("Failed to delete recipe", &e))?;

    Ok("Deleted")
}
