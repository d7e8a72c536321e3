pub mod base64url;
pub mod value;

// Re-export main functions for easier access
pub use base64url::{base64url_decode, base64url_encode};
pub use value::{encode_value, PlatformValue};
