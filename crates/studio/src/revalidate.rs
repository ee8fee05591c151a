//! Hop 1 of the cache-revalidation protocol.
//!
//! After a successful content mutation, the studio forwards a revalidation
//! request to the public viewer, authenticated with the shared secret. The
//! call runs synchronously within the caller's request lifetime; there is
//! no background queue and no automatic retry -- a failed revalidation
//! risks staleness, not correctness, so retrying is the caller's decision.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Per-request timeout for the viewer call. Bounds hop 1's response
/// latency, which includes hop 2's full round trip.
const FORWARD_TIMEOUT: Duration = Duration::from_secs(10);

/// Body forwarded to the viewer's `/api/revalidate` endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ForwardBody<'a> {
    slug: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_updated: Option<&'a str>,
    path: String,
}

/// Acknowledgement returned by the viewer on success.
#[derive(Debug, Deserialize)]
pub struct RevalidateAck {
    pub revalidated: bool,
    pub path: String,
    pub timestamp: String,
}

/// Failure modes of the forward call.
#[derive(Debug, thiserror::Error)]
pub enum RevalidationError {
    /// `REVALIDATE_SECRET` is not configured; the viewer would reject us.
    #[error("revalidation secret is not configured")]
    MissingSecret,

    /// The request never reached the viewer (or timed out).
    #[error("viewer unreachable: {0}")]
    Transport(String),

    /// The viewer answered with a non-2xx status.
    #[error("viewer rejected revalidation ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// The viewer answered 2xx but the body was not a valid acknowledgement.
    #[error("malformed viewer acknowledgement: {0}")]
    Malformed(String),
}

/// Client for the viewer's revalidation endpoint.
pub struct RevalidationClient {
    http: reqwest::Client,
    public_app_url: String,
    secret: Option<String>,
}

impl RevalidationClient {
    pub fn new(public_app_url: impl Into<String>, secret: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            public_app_url: public_app_url.into(),
            secret,
        }
    }

    /// Ask the viewer to invalidate the cached page for `slug`.
    ///
    /// `last_updated` is passed through so the viewer can persist a content
    /// version; omitting it still invalidates the cache entry.
    pub async fn trigger(
        &self,
        slug: &str,
        last_updated: Option<&str>,
    ) -> Result<RevalidateAck, RevalidationError> {
        let secret = self.secret.as_ref().ok_or(RevalidationError::MissingSecret)?;

        let url = format!(
            "{}/api/revalidate",
            self.public_app_url.trim_end_matches('/')
        );
        let body = ForwardBody {
            slug,
            last_updated,
            path: format!("/i/{slug}"),
        };

        let response = self
            .http
            .post(url)
            .timeout(FORWARD_TIMEOUT)
            .bearer_auth(secret)
            .json(&body)
            .send()
            .await
            .map_err(|e| RevalidationError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(RevalidationError::Rejected {
                status: status.as_u16(),
                body: text,
            });
        }

        let ack: RevalidateAck = serde_json::from_str(&text)
            .map_err(|e| RevalidationError::Malformed(e.to_string()))?;

        tracing::info!(slug, path = %ack.path, "Public page revalidated");
        Ok(ack)
    }
}
