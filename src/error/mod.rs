//! Error types for sitegen.

use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for all sitegen operations.
#[derive(Error, Debug)]
pub enum SiteGenError {
    #[error("{var} environment variable is not set")]
    MissingCredential { var: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SiteGenError {
    /// Create an API error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a missing-credential error for an environment variable.
    pub fn missing_credential(var: impl Into<String>) -> Self {
        Self::MissingCredential { var: var.into() }
    }

    /// Detected locally, before any request is sent.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingCredential { .. } | Self::Configuration(_))
    }

    /// Surfaced by, or on the way to, the completion service.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Authentication(_)
                | Self::RateLimited(_)
                | Self::QuotaExceeded(_)
                | Self::Api { .. }
                | Self::Network(_)
                | Self::Serialization(_)
        )
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SiteGenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_names_the_variable() {
        let err = SiteGenError::missing_credential("OPENAI_API_KEY");
        assert_eq!(err.to_string(), "OPENAI_API_KEY environment variable is not set");
        assert!(err.is_configuration());
        assert!(!err.is_remote());
    }

    #[test]
    fn api_error_display() {
        let err = SiteGenError::api(500, "upstream exploded");
        assert_eq!(err.to_string(), "API error (status 500): upstream exploded");
        assert!(err.is_remote());
    }

    #[test]
    fn write_error_keeps_io_source() {
        use std::error::Error as _;

        let err = SiteGenError::Write {
            path: PathBuf::from("out/index.html"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Failed to write out/index.html: denied");
        assert!(err.source().is_some());
        assert!(!err.is_remote());
        assert!(!err.is_configuration());
    }
}
