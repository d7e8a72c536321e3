use serde::Deserialize;

/// Configuration for Base64URL decoding
///
/// The defaults mirror the forgiving decoder browsers expose: padding is
/// optional and ASCII whitespace is ignored.
///
/// # Example
/// ```rust
/// use webauthn_json::CodecConfig;
///
/// let strict = CodecConfig {
///     accept_padding: false,
///     strip_whitespace: false,
/// };
/// assert!(CodecConfig::default().accept_padding);
/// assert!(!strict.accept_padding);
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CodecConfig {
    /// Accept trailing `=` padding on decode
    ///
    /// Base64URL as used by WebAuthn never carries padding, but some relying
    /// parties send it anyway. When `false`, padded input is rejected.
    pub accept_padding: bool,
    /// Remove ASCII whitespace (space, tab, LF, FF, CR) before decoding
    pub strip_whitespace: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            accept_padding: true,
            strip_whitespace: true,
        }
    }
}
