//! Short code generation.
//!
//! Codes are drawn from the operating system CSPRNG and encoded as URL-safe
//! base64 without padding.

use base64::Engine as _;

/// Number of random bytes behind each code (2^32 possible codes).
pub const CODE_LENGTH_BYTES: usize = 4;

/// Length of a generated code after encoding.
pub const CODE_LENGTH: usize = 6;

/// Source of candidate short codes for the registry.
pub trait CodeGenerator: Send + Sync {
    /// Produces a fresh candidate code.
    fn generate(&self) -> String;
}

/// Generator backed by the operating system random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        generate_code()
    }
}

/// Generates a cryptographically secure random short code.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 6-character code.
///
/// # Panics
///
/// Panics if the system random number generator fails. An unusable entropy
/// source leaves the process unable to do its job, so this is not reported
/// as a recoverable error.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

/// Returns true if `code` could have been produced by [`generate_code`].
///
/// Handlers use this to reject malformed codes without touching the store.
pub fn is_well_formed(code: &str) -> bool {
    code.len() == CODE_LENGTH
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
