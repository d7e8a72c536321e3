use crate::{
    config::CodecConfig,
    error::{CodecError, Result},
};
use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    prelude::*,
    DecodeError,
};

/// Standard-alphabet decoder that takes padding or leaves it out.
const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Standard-alphabet decoder that rejects any padding.
const UNPADDED: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

/// Encode bytes as Base64URL text without padding
///
/// The output only ever contains `A-Z`, `a-z`, `0-9`, `-` and `_`.
///
/// # Example
/// ```rust
/// use webauthn_json::codec::base64url_encode;
///
/// assert_eq!(base64url_encode(&[0xfb, 0xff]), "-_8");
/// assert_eq!(base64url_encode(b"a"), "YQ");
/// ```
pub fn base64url_encode(data: &[u8]) -> String {
    BASE64_URL_SAFE_NO_PAD.encode(data)
}

/// Decode Base64URL text into bytes using the default [`CodecConfig`]
///
/// `-` and `_` are mapped back to `+` and `/` before decoding with the
/// standard alphabet, so input written in the standard alphabet is accepted
/// as well. Padding is optional.
///
/// # Returns
/// * `Ok(Vec<u8>)` - Decoded bytes
/// * `Err(CodecError::Base64Error)` - If the input is not valid Base64
///
/// # Example
/// ```rust
/// use webauthn_json::codec::base64url_decode;
///
/// assert_eq!(base64url_decode("YQ").unwrap(), vec![0x61]);
/// assert_eq!(base64url_decode("YQ==").unwrap(), vec![0x61]);
/// assert!(base64url_decode("Y*").is_err());
/// ```
pub fn base64url_decode(encoded: &str) -> Result<Vec<u8>> {
    decode_with(encoded, &CodecConfig::default())
        .map_err(|e| CodecError::Base64Error(e.to_string()))
}

/// Decode a single named field, attaching the field name to any error
pub(crate) fn decode_field(field: &str, encoded: &str, config: &CodecConfig) -> Result<Vec<u8>> {
    decode_with(encoded, config)
        .map_err(|e| CodecError::Base64Error(format!("Failed to decode {field}: {e}")))
}

pub(crate) fn decode_with(
    encoded: &str,
    config: &CodecConfig,
) -> std::result::Result<Vec<u8>, DecodeError> {
    let standard: String = encoded
        .chars()
        .filter(|c| !(config.strip_whitespace && is_ascii_whitespace(*c)))
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    // Padding only counts when it completes a 4-character group
    if config.accept_padding && standard.contains('=') && standard.len() % 4 != 0 {
        return Err(DecodeError::InvalidPadding);
    }

    if config.accept_padding {
        FORGIVING.decode(standard)
    } else {
        UNPADDED.decode(standard)
    }
}

fn is_ascii_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0C' | '\r')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_encode_known_values() {
        assert_eq!(base64url_encode(b""), "");
        assert_eq!(base64url_encode(b"a"), "YQ");
        assert_eq!(base64url_encode(b"ab"), "YWI");
        assert_eq!(base64url_encode(b"abc"), "YWJj");
        assert_eq!(base64url_encode(&[0xfb, 0xef, 0xff]), "--__");
    }

    #[test]
    fn test_encode_never_emits_standard_symbols() {
        let mut rng = rand::thread_rng();
        for len in 0..64 {
            let bytes: Vec<u8> = (0..len).map(|_| rng.r#gen()).collect();
            let encoded = base64url_encode(&bytes);
            assert!(!encoded.contains('+'));
            assert!(!encoded.contains('/'));
            assert!(!encoded.contains('='));
        }
    }

    #[test]
    fn test_random_bytes_survive_encode_decode() {
        let mut rng = rand::thread_rng();
        for len in 0..64 {
            let bytes: Vec<u8> = (0..len).map(|_| rng.r#gen()).collect();
            let decoded = base64url_decode(&base64url_encode(&bytes)).unwrap();
            assert_eq!(decoded, bytes);
        }
    }

    #[test]
    fn test_canonical_text_survives_decode_encode() {
        for text in ["", "YQ", "YWI", "YWJj", "--__", "AAECAwQF", "_w"] {
            let bytes = base64url_decode(text).unwrap();
            assert_eq!(base64url_encode(&bytes), text);
        }
    }

    #[test]
    fn test_decode_tolerates_missing_padding() {
        assert_eq!(base64url_decode("YQ").unwrap(), b"a");
        assert_eq!(base64url_decode("YQ==").unwrap(), b"a");
        assert_eq!(base64url_decode("YWI").unwrap(), b"ab");
        assert_eq!(base64url_decode("YWI=").unwrap(), b"ab");
    }

    #[test]
    fn test_decode_rejects_partial_padding() {
        assert!(matches!(base64url_decode("YQ="), Err(CodecError::Base64Error(_))));
        assert!(matches!(base64url_decode("YWJjZA="), Err(CodecError::Base64Error(_))));
        assert_eq!(base64url_decode("YWJjZA==").unwrap(), b"abcd");
        assert_eq!(base64url_decode(" YQ= = ").unwrap(), b"a");
    }

    #[test]
    fn test_decode_accepts_standard_alphabet() {
        assert_eq!(base64url_decode("++//").unwrap(), vec![0xfb, 0xef, 0xff]);
        assert_eq!(base64url_decode("--__").unwrap(), vec![0xfb, 0xef, 0xff]);
    }

    #[test]
    fn test_decode_invalid_characters() {
        let result = base64url_decode("YQ!");
        assert!(matches!(result, Err(CodecError::Base64Error(_))));

        let result = base64url_decode("invalid base64url*");
        assert!(matches!(result, Err(CodecError::Base64Error(_))));
    }

    #[test]
    fn test_decode_invalid_length() {
        let result = base64url_decode("YWJjZ");
        assert!(matches!(result, Err(CodecError::Base64Error(_))));
    }

    #[test]
    fn test_decode_whitespace_handling() {
        let forgiving = CodecConfig::default();
        assert_eq!(decode_with(" YW\nJj\t", &forgiving).unwrap(), b"abc");

        let strict = CodecConfig {
            strip_whitespace: false,
            ..CodecConfig::default()
        };
        assert!(decode_with(" YWJj", &strict).is_err());
    }

    #[test]
    fn test_decode_rejects_padding_when_configured() {
        let strict = CodecConfig {
            accept_padding: false,
            ..CodecConfig::default()
        };
        assert!(decode_with("YQ==", &strict).is_err());
        assert_eq!(decode_with("YQ", &strict).unwrap(), b"a");
    }

    #[test]
    fn test_decode_field_names_field_in_error() {
        let err = decode_field("challenge", "Y*", &CodecConfig::default()).unwrap_err();
        match err {
            CodecError::Base64Error(msg) => assert!(msg.starts_with("Failed to decode challenge")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
