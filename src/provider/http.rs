//! HTTP client construction, auth headers, and status mapping.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;

use crate::config::ApiKey;
use crate::error::SiteGenError;

/// Build a reqwest client. No timeout unless one is given.
pub fn build_client(timeout: Option<Duration>) -> Result<reqwest::Client, SiteGenError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| SiteGenError::Configuration(format!("failed to build HTTP client: {e}")))
}

/// Build default headers for a Bearer-token API.
pub fn bearer_headers(api_key: &ApiKey) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Ok(mut val) = HeaderValue::from_str(&format!("Bearer {}", api_key.expose())) {
        val.set_sensitive(true);
        headers.insert(AUTHORIZATION, val);
    }
    headers
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(default)]
    code: Option<String>,
}

/// Map a non-success HTTP status to a typed error.
///
/// The provider's `error.message` is kept when the body is an error envelope,
/// the raw body otherwise.
pub fn status_to_error(status: u16, body: &str) -> SiteGenError {
    let parsed = serde_json::from_str::<ErrorEnvelope>(body).ok();
    let code = parsed.as_ref().and_then(|e| e.error.code.clone());
    let message = parsed.map(|e| e.error.message).unwrap_or_else(|| body.to_string());

    match status {
        401 | 403 => SiteGenError::Authentication(message),
        429 if code.as_deref() == Some("insufficient_quota") => SiteGenError::QuotaExceeded(message),
        429 => SiteGenError::RateLimited(message),
        _ => SiteGenError::api(status, message),
    }
}
