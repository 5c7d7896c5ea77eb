//! URL validation and normalization.
//!
//! Input that names its own scheme (`ftp://...`, `mailto:...`) is checked
//! as-is. Anything else is tried as-is, then with an `https://` prefix, then
//! with an `https://www.` prefix. The first candidate that parses as an
//! absolute HTTP(S) URL wins; if none does, the error of the last candidate
//! is returned.

use url::Url;

use crate::domain::error::RegistryError;

/// Longest URL accepted, matching the common browser limit.
pub const MAX_URL_LENGTH: usize = 2083;

/// Errors that can occur during URL validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must contain a host")]
    MissingHost,

    #[error("URL exceeds {MAX_URL_LENGTH} characters")]
    TooLong,
}

impl From<UrlValidationError> for RegistryError {
    fn from(e: UrlValidationError) -> Self {
        Self::InvalidUrl {
            reason: e.to_string(),
        }
    }
}

/// Builds the ordered list of candidates tried for `input`.
pub fn candidates(input: &str) -> [String; 3] {
    [
        input.to_string(),
        format!("https://{input}"),
        format!("https://www.{input}"),
    ]
}

/// Returns true if `input` starts with a URI scheme (`scheme:`).
///
/// `host:port` shorthand such as `localhost:8080/x` is not a scheme: the
/// text after the colon starts with a digit.
fn has_explicit_scheme(input: &str) -> bool {
    let Some((scheme, rest)) = input.split_once(':') else {
        return false;
    };

    let well_formed = scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

    well_formed && !rest.starts_with(|c: char| c.is_ascii_digit())
}

/// Validates user input and returns the normalized absolute URL.
///
/// Leading and trailing whitespace is ignored. Input carrying a scheme is
/// validated as-is; otherwise candidates are tried in the order produced by
/// [`candidates`].
///
/// # Errors
///
/// Returns the error for a scheme-carrying input that is not a valid
/// HTTP(S) URL, or the error of the last candidate if no candidate is one.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(validate_url("example.com").unwrap(), "https://example.com/");
/// assert_eq!(
///     validate_url("HTTP://Example.COM:80/a").unwrap(),
///     "http://example.com/a"
/// );
/// ```
pub fn validate_url(input: &str) -> Result<String, UrlValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(UrlValidationError::InvalidFormat("empty input".to_string()));
    }

    if has_explicit_scheme(input) {
        return normalize_url(input);
    }

    let mut last_err = UrlValidationError::MissingHost;
    for candidate in candidates(input) {
        match normalize_url(&candidate) {
            Ok(url) => return Ok(url),
            Err(e) => last_err = e,
        }
    }

    Err(last_err)
}

/// Normalizes a single absolute URL to its canonical form.
///
/// # Normalization Rules
///
/// 1. **Protocol**: Only HTTP and HTTPS are allowed
/// 2. **Hostname**: Required, lowercased by the parser
/// 3. **Default ports**: Removed (80 for HTTP, 443 for HTTPS)
/// 4. **Path**: Empty path becomes `/`
/// 5. **Query and fragment**: Preserved
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for malformed URLs,
/// [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes,
/// [`UrlValidationError::MissingHost`] when no host is present and
/// [`UrlValidationError::TooLong`] past [`MAX_URL_LENGTH`].
pub fn normalize_url(input: &str) -> Result<String, UrlValidationError> {
    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => {}
        _ => return Err(UrlValidationError::MissingHost),
    }

    let normalized = url.to_string();
    if normalized.len() > MAX_URL_LENGTH {
        return Err(UrlValidationError::TooLong);
    }

    Ok(normalized)
}
