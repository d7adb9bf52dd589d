//! Syntactic URL validation for URL-typed notification fields.

use url::Url;

use crate::error::{NtfyError, Result};

/// Accepts an absolute URL with a host; rejects everything else with a
/// `Config` error naming the field and the offending value.
pub(crate) fn validate_url(field: &str, value: &str) -> Result<()> {
    match Url::parse(value) {
        Ok(parsed) if parsed.has_host() => Ok(()),
        _ => Err(NtfyError::config(format!(
            "the value for {field} ({value}) is not a valid URL"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls_pass() {
        assert!(validate_url("click", "https://ntfy.sh").is_ok());
        assert!(validate_url("click", "http://localhost:8080/path?x=1").is_ok());
        assert!(validate_url("icon", "https://example.com/icon.png").is_ok());
    }

    #[test]
    fn test_plain_text_is_rejected() {
        let err = validate_url("click", "this is not an url").unwrap_err();
        assert!(matches!(err, NtfyError::Config(_)));
        // the message names both the field and the value
        let msg = err.to_string();
        assert!(msg.contains("click"));
        assert!(msg.contains("this is not an url"));
    }

    #[test]
    fn test_relative_and_hostless_values_are_rejected() {
        assert!(validate_url("attach", "/just/a/path").is_err());
        assert!(validate_url("attach", "mailto:someone@example.com").is_err());
    }
}
