//! Short code generation and validation utilities.
//!
//! Provides cryptographically secure random code generation and validation
//! for custom user-provided codes.

use crate::error::AppError;
use serde_json::json;

/// Length of generated short codes.
const CODE_LENGTH: usize = 6;

/// Alphabet for generated codes: the same character class custom codes
/// must satisfy.
const CODE_ALPHABET: &[u8; 62] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a cryptographically secure random short code.
///
/// Uses `getrandom` for entropy. Each byte is masked to 6 bits and mapped
/// onto the 62-symbol alphabet; values past the end of the alphabet are
/// discarded so the distribution stays uniform.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    let mut code = String::with_capacity(CODE_LENGTH);

    while code.len() < CODE_LENGTH {
        let mut buffer = [0u8; 16];
        getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

        for &byte in &buffer {
            let index = (byte & 0x3f) as usize;
            if index < CODE_ALPHABET.len() {
                code.push(CODE_ALPHABET[index] as char);
                if code.len() == CODE_LENGTH {
                    break;
                }
            }
        }
    }

    code
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Length: 6-8 characters
/// - Allowed characters: ASCII letters and digits
///
/// A supplied candidate is never altered; it either passes as-is or is
/// rejected.
///
/// # Errors
///
/// Returns [`AppError::Validation`] naming the `customCode` field if any
/// rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.len() < 6 || code.len() > 8 {
        return Err(AppError::bad_request(
            "Custom code must be 6-8 characters",
            json!({ "field": "customCode", "provided_length": code.len() }),
        ));
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::bad_request(
            "Custom code can only contain letters and digits",
            json!({ "field": "customCode", "code": code }),
        ));
    }

    Ok(())
}
