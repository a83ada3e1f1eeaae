//! HTTP route handlers for the tally server.

pub mod assets;
pub mod tasks;

use axum::extract::rejection::JsonRejection;
use axum::Json;
use tally_core::ValidationError;

/// Health check endpoint.
pub async fn health() -> &'static str {
    "OK"
}

/// Unwraps a JSON body, turning an extractor rejection into a validation error
/// so each service can apply its own status code.
fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ValidationError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ValidationError::Malformed(rejection.body_text()))
}
