use crate::error::{ErrorResponder, PantryError};
use crate::server::extract::{ItemId, JsonBody};
use crate::server::router::PantryState;
use crate::utils::logging::with_pretty_json_debug;
use axum::{
    Json, Router,
    extract::State,
    response::Response,
    routing::{delete, get},
};
use pantry_schema::{CreateIngredientRequest, IngredientView};
use tracing::{debug, info};

pub fn router() -> Router<PantryState> {
    Router::new()
        .route(
            "/api/ingredients",
            get(list_ingredients).post(create_ingredient),
        )
        .route("/api/ingredients/{id}", delete(delete_ingredient))
}

/// GET /api/ingredients
pub(super) async fn list_ingredients(
    State(state): State<PantryState>,
) -> Result<Json<Vec<IngredientView>>, Response> {
    let errors = ErrorResponder::new("ingredients.list");
    info!("Received list all ingredients request");

    let ingredients = state
        .ingredients
        .list()
        .await
        .map_err(|e| errors.report("Failed to list ingredients", &e))?;

    Ok(Json(
        ingredients.into_iter().map(IngredientView::from).collect(),
    ))
}

/// POST /api/ingredients
///
/// Answers 200 (not 201) with the created row, including its timestamp.
pub(super) async fn create_ingredient(
    State(state): State<PantryState>,
    body: Result<JsonBody<CreateIngredientRequest>, PantryError>,
) -> Result<Json<IngredientView>, Response> {
    let errors = ErrorResponder::new("ingredients.create");
    info!("Received create ingredient request");

    let JsonBody(req) = body.map_err(|e| errors.reject("Failed to read request body", e))?;
    with_pretty_json_debug(&req, |pretty_body| {
        debug!(body = %pretty_body, "create ingredient payload");
    });

    let ingredient = state
        .ingredients
        .create(req.name.as_deref(), req.recipe_id)
        .await
        .map_err(|e| errors.reject("Failed to create ingredient", e))?;

    Ok(Json(ingredient.into()))
}

/// DELETE /api/ingredients/{id}
pub(super) async fn delete_ingredient(
    State(state): State<PantryState>,
    ItemId(id): ItemId,
) -> Result<&'static str, Response> {
    let errors = ErrorResponder::new("ingredients.delete");
    info!(id, "Received remove ingredient request");

    state
        .ingredients
        .delete(id)
        .await
        .map_err(|e| errors.report("Failed to delete ingredient", &e))?;

    Ok("OK")
}
