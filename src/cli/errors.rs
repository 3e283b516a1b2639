//! CLI-specific error formatting for user-facing messages.

use crate::error::SiteGenError;

/// Map a [`SiteGenError`] to a user-facing message with actionable guidance.
pub fn format_error_help(err: &SiteGenError) -> String {
    match err {
        SiteGenError::MissingCredential { var } => {
            format!("{var} environment variable is not set. Export it or add it to a .env file.")
        }
        SiteGenError::Authentication(msg) => {
            format!("Authentication failed: {msg}. Check the value of OPENAI_API_KEY.")
        }
        other => format!("{other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_mentions_env_file() {
        let err = SiteGenError::missing_credential("OPENAI_API_KEY");
        let help = format_error_help(&err);
        assert!(help.starts_with("OPENAI_API_KEY environment variable is not set"));
        assert!(help.contains(".env"));
    }

    #[test]
    fn authentication_error_points_at_key() {
        let help = format_error_help(&SiteGenError::Authentication("bad key".into()));
        assert!(help.contains("bad key"));
        assert!(help.contains("OPENAI_API_KEY"));
    }

    #[test]
    fn other_errors_fall_through_to_display() {
        let err = SiteGenError::QuotaExceeded("You exceeded your current quota".into());
        assert_eq!(format_error_help(&err), "Quota exceeded: You exceeded your current quota");
    }
}
