//! Shared-secret authentication for webhook requests.

use crate::{Error, Result};

/// Header the platform sends its configured secret in.
pub const SECRET_HEADER: &str = "x-vapi-secret";

/// Verify the caller-provided secret against the configured one.
///
/// When no secret is configured the check is a no-op, so an unconfigured
/// deployment accepts every caller. This must run before any calendar call.
pub fn verify_shared_secret(expected: Option<&str>, provided: Option<&str>) -> Result<()> {
    match expected {
        None => Ok(()),
        Some(expected) if provided == Some(expected) => Ok(()),
        Some(_) => Err(Error::Unauthorized),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_secret_configured_accepts_anything() {
        assert!(verify_shared_secret(None, None).is_ok());
        assert!(verify_shared_secret(None, Some("whatever")).is_ok());
    }

    #[test]
    fn test_matching_secret_accepted() {
        assert!(verify_shared_secret(Some("s3cret"), Some("s3cret")).is_ok());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let err = verify_shared_secret(Some("s3cret"), Some("nope")).unwrap_err();
        assert_eq!(err.status_code(), 401);
    }

    #[test]
    fn test_missing_header_rejected() {
        let err = verify_shared_secret(Some("s3cret"), None).unwrap_err();
        assert_eq!(err.status_code(), 401);
    }
}
