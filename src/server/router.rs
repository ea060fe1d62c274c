use crate::config::{ListingConfig, WebConfig};
use crate::db::{Ingredients, RecipeRelations, Recipes, Store};
use crate::server::dispatch::Dispatcher;
use crate::server::routes::{ingredients, recipe_details, recipes};
use crate::server::spa::SpaFallback;

use axum::{
    Router,
    extract::Request,
    http::{HeaderName, HeaderValue, StatusCode, Version, header::USER_AGENT},
    middleware::{self, Next},
    response::Response,
};
use base64::Engine as _;
use rand::RngCore;
use std::time::Instant;
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

const MAX_REQUEST_ID_LEN: usize = 128;
const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

fn generate_request_id() -> String {
    // 96 bits => 16 chars base64url (no padding).
    let mut bytes = [0u8; 12];
    rand::rng().fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

fn format_http_version(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "HTTP/0.9",
        Version::HTTP_10 => "HTTP/1.0",
        Version::HTTP_11 => "HTTP/1.1",
        Version::HTTP_2 => "HTTP/2",
        Version::HTTP_3 => "HTTP/3",
        _ => "HTTP/?",
    }
}

/// Store-backed mutators and readers shared by every API handler.
#[derive(Debug, Clone)]
pub struct PantryState {
    pub recipes: Recipes,
    pub ingredients: Ingredients,
    pub relations: RecipeRelations,
}

impl PantryState {
    pub fn new(store: &Store, listing: &ListingConfig) -> Self {
        Self {
            recipes: Recipes::new(store, listing.on_decode_error),
            ingredients: Ingredients::new(store, listing.on_decode_error),
            relations: RecipeRelations::new(store),
        }
    }
}

async fn not_found_handler() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn access_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let version = req.version();

    let request_id = req
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty() && v.len() <= MAX_REQUEST_ID_LEN)
        .map_or_else(generate_request_id, str::to_string);

    let user_agent = req
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let start = Instant::now();
    let mut resp = next.run(req).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        resp.headers_mut().insert(X_REQUEST_ID, value);
    }

    let status = resp.status();
    let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    let path = uri.path();
    let protocol = format_http_version(version);

    if status.is_server_error() {
        error!(
            "| {:>3} | {} | {:^7} | {:<8} | {} | {}ms | {}",
            status.as_u16(),
            request_id,
            method.as_str(),
            protocol,
            path,
            latency_ms,
            user_agent
        );
    } else if status.is_client_error() {
        warn!(
            "| {:>3} | {} | {:^7} | {:<8} | {} | {}ms | {}",
            status.as_u16(),
            request_id,
            method.as_str(),
            protocol,
            path,
            latency_ms,
            user_agent
        );
    } else {
        info!(
            "| {:>3} | {} | {:^7} | {:<8} | {} | {}ms | {}",
            status.as_u16(),
            request_id,
            method.as_str(),
            protocol,
            path,
            latency_ms,
            user_agent
        );
    }

    resp
}

/// The `/api` sub-tree: collection and item routes for recipes and
/// ingredients plus the recipe detail read.
pub fn api_router(state: PantryState) -> Router {
    Router::new()
        .merge(recipes::router())
        .merge(ingredients::router())
        .merge(recipe_details::router())
        .fallback(not_found_handler)
        .with_state(state)
}

/// Full application: API and SPA behind one dispatcher, wrapped in the
/// access log.
pub fn pantry_router(state: PantryState, web: &WebConfig) -> Router {
    let spa = SpaFallback::new(ServeDir::new(&web.public_dir), web.index_path());
    let dispatcher = Dispatcher::new(api_router(state), spa);

    Router::new()
        .fallback_service(dispatcher)
        .layer(middleware::from_fn(access_log))
}
