use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error as ThisError;

use super::responder::ErrorResponder;

#[derive(Debug, ThisError)]
pub enum PantryError {
    /// The client left out or malformed a required field.
    #[error("Invalid request: {0}")]
    Validation(String),

    /// A path segment that should carry an integer id did not parse.
    #[error("Bad id: {0:?}")]
    InvalidId(String),

    #[error("Database error: {0}")]
    Store(#[from] sqlx::Error),

    #[error("Request body exceeded the {limit} byte limit")]
    PayloadTooLarge { limit: usize },

    #[error("Failed to read request body: {0}")]
    BodyRead(#[source] axum::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PantryError {
    /// Client errors surface as 400 with a short message; everything else is
    /// a 500 whose detail stays in the log.
    pub fn is_client_error(&self) -> bool {
        matches!(self, PantryError::Validation(_) | PantryError::InvalidId(_))
    }

    fn client_message(&self) -> String {
        match self {
            PantryError::Validation(msg) => format!("Invalid request, {msg}"),
            PantryError::InvalidId(_) => "Bad id".to_string(),
            _ => String::new(),
        }
    }
}

impl IntoResponse for PantryError {
    fn into_response(self) -> Response {
        if self.is_client_error() {
            tracing::warn!(error = %self, "rejecting client request");
            (StatusCode::BAD_REQUEST, self.client_message()).into_response()
        } else {
            ErrorResponder::new("pantry").report("Unhandled request failure", &self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn invalid_id_maps_to_bad_request() {
        let resp = PantryError::InvalidId("abc".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Bad id");
    }

    #[tokio::test]
    async fn store_errors_hide_their_cause() {
        let resp = PantryError::Store(sqlx::Error::RowNotFound).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Internal server error");
    }

    #[test]
    fn oversized_payload_is_a_server_error() {
        assert!(!PantryError::PayloadTooLarge { limit: 1 }.is_client_error());
        assert!(PantryError::Validation("missing 'name'".into()).is_client_error());
    }
}
