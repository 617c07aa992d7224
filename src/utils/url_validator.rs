//! URL validation for shortening candidates.

use url::Url;

use crate::domain::ports::UrlValidator;

/// Reasons a URL is refused.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,
}

/// Checks that `input` is an absolute HTTP(S) URL with a host.
///
/// Rejects `javascript:`, `data:`, `file:` and every other scheme.
pub fn check_url(input: &str) -> Result<Url, UrlValidationError> {
    let url = Url::parse(input.trim())
        .map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlValidationError::MissingHost),
    }
}

/// [`UrlValidator`] accepting HTTP and HTTPS URLs only.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpUrlValidator;

impl UrlValidator for HttpUrlValidator {
    fn is_valid(&self, url: &str) -> bool {
        check_url(url).is_ok()
    }
}
