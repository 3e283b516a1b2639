//! Configuration resolved from the process environment.

use std::fmt;

use crate::error::{Result, SiteGenError};

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";

/// API credential. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(..)")
    }
}

/// Runtime configuration for a generation run.
#[derive(Debug, Clone, Default)]
pub struct SiteGenConfig {
    api_key: Option<ApiKey>,
    base_url: Option<String>,
}

impl SiteGenConfig {
    /// Empty config: no credential, default endpoint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from `OPENAI_API_KEY` and `OPENAI_BASE_URL`.
    ///
    /// Empty values count as unset.
    pub fn from_env() -> Self {
        let read = |var: &str| std::env::var(var).ok().filter(|v| !v.trim().is_empty());

        Self {
            api_key: read(API_KEY_ENV).map(ApiKey::new),
            base_url: read(BASE_URL_ENV),
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(ApiKey::new(key));
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// The credential, or a [`SiteGenError::MissingCredential`] naming the variable.
    pub fn require_api_key(&self) -> Result<&ApiKey> {
        self.api_key
            .as_ref()
            .ok_or_else(|| SiteGenError::missing_credential(API_KEY_ENV))
    }
}
