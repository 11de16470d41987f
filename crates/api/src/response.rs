//! Shared response shapes for API handlers.

use serde::Serialize;

/// Simple `{ "message": ... }` body returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
