//! Checks for external links stored on records and snippets.

use url::Url;

/// Errors returned by [`check_web_url`].
#[derive(Debug, thiserror::Error)]
pub enum WebUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,
}

/// Accepts absolute `http`/`https` URLs with a host.
///
/// The input is not rewritten; stored links keep the exact text submitted.
///
/// # Errors
///
/// Returns [`WebUrlError`] describing why the URL was rejected.
pub fn check_web_url(input: &str) -> Result<(), WebUrlError> {
    let url = Url::parse(input).map_err(|e| WebUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(WebUrlError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(WebUrlError::MissingHost);
    }

    Ok(())
}
