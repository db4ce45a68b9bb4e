//! Target URL validation.
//!
//! Stored URLs are immutable and returned to redirect callers verbatim, so
//! nothing here rewrites the input; it is accepted as-is or rejected.

use url::Url;

/// Maximum accepted target URL length, matching the column width.
pub const MAX_TARGET_URL_LENGTH: usize = 2048;

/// Errors that can occur during target URL validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL exceeds the maximum length of {MAX_TARGET_URL_LENGTH} characters")]
    TooLong,
}

/// Checks that the input is a well-formed absolute http(s) URL.
///
/// # Rules
///
/// 1. Must parse as an absolute URL
/// 2. Scheme must be `http` or `https`
/// 3. At most [`MAX_TARGET_URL_LENGTH`] characters
///
/// # Security
///
/// The accepted URL ends up verbatim in a `Location` header, so dangerous
/// schemes like `javascript:`, `data:`, and `file:` are rejected.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for malformed or relative
/// URLs and [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S)
/// schemes.
pub fn validate_target_url(input: &str) -> Result<(), UrlValidationError> {
    if input.len() > MAX_TARGET_URL_LENGTH {
        return Err(UrlValidationError::TooLong);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(UrlValidationError::UnsupportedProtocol),
    }
}
