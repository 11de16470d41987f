//! Domain-level error type shared across crates.

/// Domain errors produced by validation helpers and service logic.
///
/// The API crate maps each variant to an HTTP status code.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup by id found nothing.
    #[error("{entity} with id {id} not found")]
    NotFound {
        /// Entity kind, e.g. `"Work"` or `"Tag"`.
        entity: &'static str,
        /// The id that was looked up. Works use string (UUID) ids and
        /// tags use integer ids, so this is kept as a string.
        id: String,
    },

    /// A field constraint violation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A uniqueness or state conflict.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// An unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Build a `NotFound` for an entity with any displayable id.
    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        CoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
