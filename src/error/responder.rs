use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::fmt::Display;
use tracing::error;

use super::PantryError;

pub const INTERNAL_ERROR_BODY: &str = "Internal server error";

/// Logs a failure and produces the uniform 500 response for one handler.
///
/// Bound to the scope name of the handler that owns the in-flight response.
/// Callers return the produced `Response` immediately; reporting twice for one
/// request is a caller bug.
#[derive(Debug, Clone, Copy)]
pub struct ErrorResponder {
    scope: &'static str,
}

impl ErrorResponder {
    pub const fn new(scope: &'static str) -> Self {
        Self { scope }
    }

    /// One structured `error` line, then `500 Internal server error`.
    pub fn report(&self, message: &str, cause: &dyn Display) -> Response {
        error!(scope = self.scope, cause = %cause, "{message}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            INTERNAL_ERROR_BODY,
        )
            .into_response()
    }

    /// Client errors pass through as 400; anything else is reported.
    pub fn reject(&self, message: &str, err: PantryError) -> Response {
        if err.is_client_error() {
            err.into_response()
        } else {
            self.report(message, &err)
        }
    }
}
