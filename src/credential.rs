//! Ceremony results returned by the platform credential API.

use crate::{codec::value::PlatformValue, options::PublicKeyCredentialType};
use serde_json::Value;

/// Attestation response from a registration ceremony
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatorAttestationResponse {
    pub client_data_json: Vec<u8>,
    pub attestation_object: Vec<u8>,
    pub transports: Option<Vec<String>>,
}

/// Assertion response from an authentication ceremony
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatorAssertionResponse {
    pub client_data_json: Vec<u8>,
    pub authenticator_data: Vec<u8>,
    pub signature: Vec<u8>,
    pub user_handle: Option<Vec<u8>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthenticatorResponse {
    Attestation(AuthenticatorAttestationResponse),
    Assertion(AuthenticatorAssertionResponse),
}

/// A credential produced by a `create` or `get` ceremony
#[derive(Clone, Debug, PartialEq)]
pub struct PublicKeyCredential {
    /// Base64URL form of `raw_id`, as reported by the platform
    pub id: String,
    pub raw_id: Vec<u8>,
    pub type_: PublicKeyCredentialType,
    pub authenticator_attachment: Option<String>,
    pub response: AuthenticatorResponse,
    /// Extension outputs, an empty object when there are none
    pub client_extension_results: PlatformValue,
}

impl From<AuthenticatorResponse> for PlatformValue {
    fn from(response: AuthenticatorResponse) -> Self {
        let mut entries: Vec<(&str, PlatformValue)> = Vec::new();
        match response {
            AuthenticatorResponse::Attestation(attestation) => {
                entries.push(("clientDataJSON", attestation.client_data_json.into()));
                entries.push(("attestationObject", attestation.attestation_object.into()));
                if let Some(transports) = attestation.transports {
                    entries.push((
                        "transports",
                        PlatformValue::Array(transports.into_iter().map(PlatformValue::from).collect()),
                    ));
                }
            }
            AuthenticatorResponse::Assertion(assertion) => {
                entries.push(("clientDataJSON", assertion.client_data_json.into()));
                entries.push(("authenticatorData", assertion.authenticator_data.into()));
                entries.push(("signature", assertion.signature.into()));
                // A missing user handle is reported as null, not left out
                entries.push((
                    "userHandle",
                    match assertion.user_handle {
                        Some(handle) => PlatformValue::Bytes(handle),
                        None => PlatformValue::Leaf(Value::Null),
                    },
                ));
            }
        }
        PlatformValue::object(entries)
    }
}

impl From<PublicKeyCredential> for PlatformValue {
    fn from(credential: PublicKeyCredential) -> Self {
        let type_ = match credential.type_ {
            PublicKeyCredentialType::PublicKey => "public-key",
        };
        let mut entries: Vec<(&str, PlatformValue)> = vec![
            ("id", credential.id.into()),
            ("rawId", credential.raw_id.into()),
            ("type", type_.into()),
        ];
        if let Some(attachment) = credential.authenticator_attachment {
            entries.push(("authenticatorAttachment", attachment.into()));
        }
        entries.push(("response", credential.response.into()));
        entries.push(("clientExtensionResults", credential.client_extension_results));
        PlatformValue::object(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_assertion_without_user_handle_has_null_handle() {
        let response = AuthenticatorResponse::Assertion(AuthenticatorAssertionResponse {
            client_data_json: vec![1],
            authenticator_data: vec![2],
            signature: vec![3],
            user_handle: None,
        });

        let PlatformValue::Object(entries) = PlatformValue::from(response) else {
            panic!("expected an object");
        };
        assert_eq!(entries["userHandle"], PlatformValue::Leaf(json!(null)));
        assert_eq!(entries["signature"], PlatformValue::Bytes(vec![3]));
    }

    #[test]
    fn test_attestation_without_transports_omits_key() {
        let response = AuthenticatorResponse::Attestation(AuthenticatorAttestationResponse {
            client_data_json: vec![1],
            attestation_object: vec![2],
            transports: None,
        });

        let PlatformValue::Object(entries) = PlatformValue::from(response) else {
            panic!("expected an object");
        };
        assert!(!entries.contains_key("transports"));
        assert_eq!(entries.len(), 2);
    }
}
