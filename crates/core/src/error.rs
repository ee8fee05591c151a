/// Classified error for every operation against the hosted data service.
///
/// Adapter implementations map transport and HTTP failures into these
/// variants; the engine stores them in list state and the HTTP services map
/// them onto status codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// Transport failure: the request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The server rejected the payload shape or content.
    #[error("validation failed: {0}")]
    Validation(String),

    /// `id` is whatever key the lookup used: a UUID for id-keyed reads, a
    /// slug for the public page lookups.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// Concurrent modification detected server-side.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Bearer token missing or rejected.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// A required secret or URL is not configured.
    #[error("configuration error: {0}")]
    Config(String),

    #[error("unexpected error: {0}")]
    Unknown(String),
}

impl ServiceError {
    /// Message suitable for end-user display.
    ///
    /// Validation and conflict messages come from the server and are shown
    /// verbatim; every other variant collapses to a generic message so
    /// transport details and internals never reach the UI.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Validation(msg) | ServiceError::Conflict(msg) => msg.clone(),
            ServiceError::NotFound { entity, .. } => {
                format!("{entity} no longer exists")
            }
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_and_conflict_messages_are_verbatim() {
        let err = ServiceError::Validation("email is invalid".into());
        assert_eq!(err.user_message(), "email is invalid");

        let err = ServiceError::Conflict("slug already taken".into());
        assert_eq!(err.user_message(), "slug already taken");
    }

    #[test]
    fn other_variants_are_sanitized() {
        let err = ServiceError::Network("dns lookup failed for db.internal".into());
        let msg = err.user_message();
        assert!(!msg.contains("db.internal"));

        let err = ServiceError::Unknown("stack trace: ...".into());
        assert_eq!(err.user_message(), "Something went wrong. Please try again.");
    }
}
