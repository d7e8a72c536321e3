use std::fmt;

/// Conversion errors
///
/// Every conversion either returns a complete value or one of these errors.
/// Nothing is retried and no partial output is produced.
///
/// # Example
/// ```rust
/// use webauthn_json::{CodecError, Result};
///
/// fn handle_decode_result(result: Result<Vec<u8>>) {
///     match result {
///         Ok(bytes) => println!("Decoded {} bytes", bytes.len()),
///         Err(CodecError::Base64Error(msg)) => println!("Base64URL error: {}", msg),
///         Err(e) => println!("Other error: {}", e),
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Base64URL decoding failed
    ///
    /// This error occurs when:
    /// - The input contains characters outside the Base64 alphabet
    /// - The input length cannot be produced by any byte sequence
    /// - Padding is present but not accepted, or misplaced
    Base64Error(String),

    /// A JSON payload does not have the expected shape
    ///
    /// This error occurs when a required field such as `challenge` is
    /// missing or a field has the wrong JSON type.
    InvalidShape(String),

    /// Rendering a value as JSON text failed
    JsonError(String),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Base64Error(msg) => {
                write!(f, "Base64URL decode error: {msg}")
            }
            CodecError::InvalidShape(msg) => {
                write!(f, "Invalid options shape: {msg}")
            }
            CodecError::JsonError(msg) => {
                write!(f, "JSON error: {msg}")
            }
        }
    }
}

impl std::error::Error for CodecError {}

pub type Result<T> = std::result::Result<T, CodecError>;
