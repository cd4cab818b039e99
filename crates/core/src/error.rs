#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The entity is absent or not visible to the caller. The message
    /// deliberately carries nothing beyond the entity name: callers must not
    /// be able to tell an unpublished campaign from a nonexistent one.
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// A collaborator (datastore, vote aggregation) was unreachable or
    /// returned an error. Surfaced as a single service-unavailable category.
    #[error("Upstream failure: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
