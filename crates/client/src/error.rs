//! HTTP → taxonomy error classification.

use reqwest::StatusCode;
use serde::Deserialize;
use velora_core::error::ServiceError;

/// Error envelope the data service returns on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Classify a transport-level failure: the request produced no usable
/// response (DNS, connect, TLS, timeout).
pub(crate) fn classify_transport(err: &reqwest::Error) -> ServiceError {
    ServiceError::Network(err.to_string())
}

/// Classify a non-2xx response into the shared taxonomy.
///
/// Validation and conflict messages are taken verbatim from the response
/// body so they can be shown to users; everything else keeps only the
/// status for diagnostics.
pub(crate) fn classify_status(
    status: StatusCode,
    body: &str,
    entity: &'static str,
    id: Option<String>,
) -> ServiceError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error.or(b.message))
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());

    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            ServiceError::Validation(message)
        }
        StatusCode::NOT_FOUND => match id {
            Some(id) => ServiceError::NotFound { entity, id },
            None => ServiceError::Unknown(format!("{entity} endpoint not found")),
        },
        StatusCode::CONFLICT => ServiceError::Conflict(message),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ServiceError::Unauthorized(message),
        _ => ServiceError::Unknown(format!("data service error ({status}): {message}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn validation_message_comes_from_the_body_verbatim() {
        let err = classify_status(
            StatusCode::BAD_REQUEST,
            r#"{"error":"slug must be url-safe"}"#,
            "Invitation",
            None,
        );
        assert_eq!(err, ServiceError::Validation("slug must be url-safe".into()));
    }

    #[test]
    fn not_found_with_lookup_key_maps_to_typed_variant() {
        let id = uuid::Uuid::new_v4();
        let err = classify_status(StatusCode::NOT_FOUND, "", "User", Some(id.to_string()));
        assert_eq!(
            err,
            ServiceError::NotFound {
                entity: "User",
                id: id.to_string()
            }
        );
    }

    #[test]
    fn unparseable_body_falls_back_to_status_reason() {
        let err = classify_status(StatusCode::CONFLICT, "<html>oops</html>", "User", None);
        assert_eq!(err, ServiceError::Conflict("Conflict".into()));
    }

    #[test]
    fn server_errors_collapse_to_unknown() {
        let err = classify_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"message":"pg timeout"}"#,
            "Reseller",
            None,
        );
        assert_matches!(err, ServiceError::Unknown(_));
    }
}
