//! # webauthn-json
//!
//! A Rust library for converting **WebAuthn credential options and results** between the
//! JSON form a relying party sends over the wire and the binary form the platform
//! credential API works with.
//!
//! ## Features
//!
//! - **Option Decoding** - Turn Base64URL challenges, user handles and credential ids into raw bytes
//! - **Result Encoding** - Replace every byte buffer in a ceremony result with Base64URL text, at any depth
//! - **Typed Results** - Registration and authentication responses as a tagged union
//! - **Forgiving Base64URL** - Optional padding and whitespace, configurable
//! - **Stateless Design** - Pure conversions, no storage and no verification
//!
//! ## Quick Start
//!
//! ```rust
//! use webauthn_json::{CredentialAdapter, PlatformValue};
//!
//! let adapter = CredentialAdapter::default();
//!
//! // Options received from the relying party
//! let options = adapter.parse_request_options(r#"{
//!     "challenge": "Y2hhbGxlbmdl",
//!     "allowCredentials": [{"type": "public-key", "id": "AQID"}]
//! }"#).unwrap();
//!
//! // Binary options for the platform `get` call
//! let binary = adapter.request_options_to_binary(options).unwrap();
//! assert_eq!(binary.challenge, b"challenge");
//!
//! // Result of the ceremony, encoded for the trip back
//! let result = PlatformValue::object([("rawId", PlatformValue::Bytes(vec![1, 2, 3]))]);
//! let json = adapter.credential_to_json(result);
//! assert_eq!(json["rawId"], "AQID");
//! ```
//!
//! ## Examples
//!
//! See `demos/basic_workflow.rs` in the repository for a registration and
//! authentication round trip:
//!
//! ```bash
//! cargo run --example basic_workflow
//! ```

pub mod adapter;
pub mod codec;
pub mod config;
pub mod credential;
pub mod error;
pub mod options;

// Re-export main types for easier access
pub use adapter::{
    convert_creation_options_to_binary, convert_creation_options_to_json,
    convert_descriptor_to_json, convert_public_key_credential_to_jsonable,
    convert_request_options_to_binary, convert_request_options_to_json, CredentialAdapter,
};
pub use codec::{base64url_decode, base64url_encode, encode_value, PlatformValue};
pub use config::CodecConfig;
pub use credential::{
    AuthenticatorAssertionResponse, AuthenticatorAttestationResponse, AuthenticatorResponse,
    PublicKeyCredential,
};
pub use error::{CodecError, Result};
pub use options::{
    AuthenticatorSelectionCriteria, PublicKeyCredentialCreationOptions,
    PublicKeyCredentialCreationOptionsJson, PublicKeyCredentialDescriptor,
    PublicKeyCredentialDescriptorJson, PublicKeyCredentialParameters,
    PublicKeyCredentialRequestOptions, PublicKeyCredentialRequestOptionsJson,
    PublicKeyCredentialRpEntity, PublicKeyCredentialType, PublicKeyCredentialUserEntity,
    PublicKeyCredentialUserEntityJson,
};
