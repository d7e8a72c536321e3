//! Ceremony option types in their two representations.
//!
//! The `*Json` types are what a relying party sends over the wire: byte
//! fields are Base64URL text. The plain types are what the platform
//! credential API takes: byte fields are raw buffers. Every other field is
//! identical between the two.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// The credential type tag. WebAuthn defines a single value.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum PublicKeyCredentialType {
    #[default]
    #[serde(rename = "public-key")]
    PublicKey,
}

/// Relying-party descriptor
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublicKeyCredentialRpEntity {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// One acceptable public-key algorithm, identified by its COSE number
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PublicKeyCredentialParameters {
    #[serde(rename = "type")]
    pub type_: PublicKeyCredentialType,
    pub alg: i64,
    /// Members this crate does not model, kept as received
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Authenticator-selection criteria, passed to the platform as given
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatorSelectionCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authenticator_attachment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resident_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_resident_key: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_verification: Option<String>,
    /// Members this crate does not model, kept as received
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// User descriptor with a Base64URL user handle
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyCredentialUserEntityJson {
    /// Base64URL
    pub id: String,
    pub name: String,
    pub display_name: String,
}

/// User descriptor with a raw user handle
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKeyCredentialUserEntity {
    pub id: Vec<u8>,
    pub name: String,
    pub display_name: String,
}

/// Reference to a registered credential, id as Base64URL
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublicKeyCredentialDescriptorJson {
    #[serde(rename = "type")]
    pub type_: PublicKeyCredentialType,
    /// Base64URL
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transports: Option<Vec<String>>,
}

/// Reference to a registered credential, raw id
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKeyCredentialDescriptor {
    pub type_: PublicKeyCredentialType,
    pub id: Vec<u8>,
    pub transports: Option<Vec<String>>,
}

/// Registration options as sent by a relying party
///
/// ## Example JSON
/// ```json
/// {
///   "rp": { "name": "Example", "id": "example.com" },
///   "user": { "id": "dXNlcg", "name": "alice", "displayName": "Alice" },
///   "challenge": "Y2hhbGxlbmdl",
///   "pubKeyCredParams": [{ "type": "public-key", "alg": -7 }],
///   "timeout": 60000
/// }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyCredentialCreationOptionsJson {
    pub rp: PublicKeyCredentialRpEntity,
    pub user: PublicKeyCredentialUserEntityJson,
    /// Base64URL
    pub challenge: String,
    pub pub_key_cred_params: Vec<PublicKeyCredentialParameters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_credentials: Option<Vec<PublicKeyCredentialDescriptorJson>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authenticator_selection: Option<AuthenticatorSelectionCriteria>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attestation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

/// Registration options in the form the platform `create` call takes
#[derive(Clone, Debug, PartialEq)]
pub struct PublicKeyCredentialCreationOptions {
    pub rp: PublicKeyCredentialRpEntity,
    pub user: PublicKeyCredentialUserEntity,
    pub challenge: Vec<u8>,
    pub pub_key_cred_params: Vec<PublicKeyCredentialParameters>,
    pub timeout: Option<Number>,
    pub exclude_credentials: Option<Vec<PublicKeyCredentialDescriptor>>,
    pub authenticator_selection: Option<AuthenticatorSelectionCriteria>,
    pub attestation: Option<String>,
    pub extensions: Option<Value>,
}

/// Authentication options as sent by a relying party
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyCredentialRequestOptionsJson {
    /// Base64URL
    pub challenge: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rp_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_credentials: Option<Vec<PublicKeyCredentialDescriptorJson>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_verification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

/// Authentication options in the form the platform `get` call takes
#[derive(Clone, Debug, PartialEq)]
pub struct PublicKeyCredentialRequestOptions {
    pub challenge: Vec<u8>,
    pub timeout: Option<Number>,
    pub rp_id: Option<String>,
    pub allow_credentials: Option<Vec<PublicKeyCredentialDescriptor>>,
    pub user_verification: Option<String>,
    pub extensions: Option<Value>,
}
