//! Content-version fingerprints for published invitation pages.
//!
//! The fingerprint is a cheap change-detection token persisted alongside
//! `last_revalidated_at` when a page is revalidated. It is not a
//! cryptographic proof of anything: two revalidations of the same content
//! state must simply agree.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Number of characters kept from the encoded fingerprint.
pub const CONTENT_VERSION_LEN: usize = 12;

/// Derive the content-version token for a page.
///
/// `base64(last_updated ++ slug)` truncated to [`CONTENT_VERSION_LEN`]
/// characters. Deterministic: repeating a revalidation with the same
/// `last_updated` yields the same token.
pub fn content_version(last_updated: &str, slug: &str) -> String {
    let encoded = STANDARD.encode(format!("{last_updated}{slug}"));
    encoded.chars().take(CONTENT_VERSION_LEN).collect()
}
