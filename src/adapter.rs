use crate::{
    codec::{
        base64url::{base64url_encode, decode_field},
        value::{encode_value, PlatformValue},
    },
    config::CodecConfig,
    error::{CodecError, Result},
    options::{
        PublicKeyCredentialCreationOptions, PublicKeyCredentialCreationOptionsJson,
        PublicKeyCredentialDescriptor, PublicKeyCredentialDescriptorJson,
        PublicKeyCredentialRequestOptions, PublicKeyCredentialRequestOptionsJson,
        PublicKeyCredentialUserEntity, PublicKeyCredentialUserEntityJson,
    },
};
use serde_json::Value;

/// Adapter between relying-party JSON and the platform credential API
///
/// This service is stateless apart from its decoding configuration:
/// - Parsing option payloads received from a relying party
/// - Decoding option payloads into the binary form `create`/`get` take
/// - Encoding ceremony results into JSON for the trip back
///
/// The free functions in this module use [`CodecConfig::default`].
#[derive(Clone, Debug, Default)]
pub struct CredentialAdapter {
    pub config: CodecConfig,
}

impl CredentialAdapter {
    /// Create a new adapter with the given decoding configuration
    ///
    /// # Example
    /// ```rust
    /// use webauthn_json::{CodecConfig, CredentialAdapter};
    ///
    /// let adapter = CredentialAdapter::new(CodecConfig {
    ///     accept_padding: false,
    ///     strip_whitespace: true,
    /// });
    /// ```
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Parse registration options JSON text
    ///
    /// # Errors
    /// - `InvalidShape` - A required field is missing or has the wrong type
    pub fn parse_creation_options(&self, json: &str) -> Result<PublicKeyCredentialCreationOptionsJson> {
        serde_json::from_str(json)
            .map_err(|e| CodecError::InvalidShape(format!("Failed to parse creation options: {e}")))
    }

    /// Parse authentication options JSON text
    ///
    /// # Errors
    /// - `InvalidShape` - A required field is missing or has the wrong type
    pub fn parse_request_options(&self, json: &str) -> Result<PublicKeyCredentialRequestOptionsJson> {
        serde_json::from_str(json)
            .map_err(|e| CodecError::InvalidShape(format!("Failed to parse request options: {e}")))
    }

    /// Decode registration options into the form the platform `create` call takes
    ///
    /// `challenge` and `user.id` are decoded and every entry of
    /// `excludeCredentials` goes through the descriptor decoder. All other
    /// fields are moved across as they are. An absent `excludeCredentials`
    /// stays absent.
    ///
    /// # Errors
    /// - `Base64Error` - A Base64URL field could not be decoded
    ///
    /// # Example
    /// ```rust
    /// use webauthn_json::CredentialAdapter;
    ///
    /// let adapter = CredentialAdapter::default();
    /// let options = adapter.parse_creation_options(r#"{
    ///     "rp": {"name": "r"},
    ///     "user": {"id": "Yg", "name": "n", "displayName": "d"},
    ///     "challenge": "YQ",
    ///     "pubKeyCredParams": []
    /// }"#).unwrap();
    ///
    /// let binary = adapter.creation_options_to_binary(options).unwrap();
    /// assert_eq!(binary.challenge, vec![0x61]);
    /// assert_eq!(binary.user.id, vec![0x62]);
    /// ```
    pub fn creation_options_to_binary(
        &self,
        options: PublicKeyCredentialCreationOptionsJson,
    ) -> Result<PublicKeyCredentialCreationOptions> {
        let challenge = decode_field("challenge", &options.challenge, &self.config)?;
        let user_id = decode_field("user.id", &options.user.id, &self.config)?;
        let exclude_credentials = options
            .exclude_credentials
            .map(|descriptors| self.descriptors_to_binary("excludeCredentials", descriptors))
            .transpose()?;

        tracing::debug!(
            exclude_credentials = exclude_credentials.as_ref().map_or(0, Vec::len),
            pub_key_cred_params = options.pub_key_cred_params.len(),
            "decoded creation options"
        );

        Ok(PublicKeyCredentialCreationOptions {
            rp: options.rp,
            user: PublicKeyCredentialUserEntity {
                id: user_id,
                name: options.user.name,
                display_name: options.user.display_name,
            },
            challenge,
            pub_key_cred_params: options.pub_key_cred_params,
            timeout: options.timeout,
            exclude_credentials,
            authenticator_selection: options.authenticator_selection,
            attestation: options.attestation,
            extensions: options.extensions,
        })
    }

    /// Decode authentication options into the form the platform `get` call takes
    ///
    /// Only `challenge` and the ids inside `allowCredentials` are decoded.
    /// An absent `allowCredentials` stays absent.
    ///
    /// # Errors
    /// - `Base64Error` - A Base64URL field could not be decoded
    pub fn request_options_to_binary(
        &self,
        options: PublicKeyCredentialRequestOptionsJson,
    ) -> Result<PublicKeyCredentialRequestOptions> {
        let challenge = decode_field("challenge", &options.challenge, &self.config)?;
        let allow_credentials = options
            .allow_credentials
            .map(|descriptors| self.descriptors_to_binary("allowCredentials", descriptors))
            .transpose()?;

        tracing::debug!(
            allow_credentials = allow_credentials.as_ref().map_or(0, Vec::len),
            "decoded request options"
        );

        Ok(PublicKeyCredentialRequestOptions {
            challenge,
            timeout: options.timeout,
            rp_id: options.rp_id,
            allow_credentials,
            user_verification: options.user_verification,
            extensions: options.extensions,
        })
    }

    /// Decode a single credential descriptor's id
    ///
    /// # Errors
    /// - `Base64Error` - The id could not be decoded
    pub fn descriptor_to_binary(
        &self,
        descriptor: PublicKeyCredentialDescriptorJson,
    ) -> Result<PublicKeyCredentialDescriptor> {
        self.decode_descriptor("credential id", descriptor)
    }

    fn descriptors_to_binary(
        &self,
        field: &str,
        descriptors: Vec<PublicKeyCredentialDescriptorJson>,
    ) -> Result<Vec<PublicKeyCredentialDescriptor>> {
        descriptors
            .into_iter()
            .enumerate()
            .map(|(index, descriptor)| {
                self.decode_descriptor(&format!("{field}[{index}].id"), descriptor)
            })
            .collect()
    }

    fn decode_descriptor(
        &self,
        label: &str,
        descriptor: PublicKeyCredentialDescriptorJson,
    ) -> Result<PublicKeyCredentialDescriptor> {
        Ok(PublicKeyCredentialDescriptor {
            type_: descriptor.type_,
            id: decode_field(label, &descriptor.id, &self.config)?,
            transports: descriptor.transports,
        })
    }

    /// Encode a ceremony result into a JSON value
    ///
    /// Every byte buffer in the result, at any depth, becomes Base64URL
    /// text. Encoding cannot fail.
    pub fn credential_to_json(&self, credential: impl Into<PlatformValue>) -> Value {
        encode_value(credential.into())
    }

    /// Encode a ceremony result into JSON text ready to send to the relying party
    ///
    /// # Errors
    /// - `JsonError` - The value could not be rendered as text
    pub fn credential_to_json_string(&self, credential: impl Into<PlatformValue>) -> Result<String> {
        serde_json::to_string(&self.credential_to_json(credential))
            .map_err(|e| CodecError::JsonError(format!("Failed to serialize credential: {e}")))
    }
}

/// Decode registration options with the default configuration
///
/// See [`CredentialAdapter::creation_options_to_binary`].
pub fn convert_creation_options_to_binary(
    options: PublicKeyCredentialCreationOptionsJson,
) -> Result<PublicKeyCredentialCreationOptions> {
    CredentialAdapter::default().creation_options_to_binary(options)
}

/// Decode authentication options with the default configuration
///
/// See [`CredentialAdapter::request_options_to_binary`].
pub fn convert_request_options_to_binary(
    options: PublicKeyCredentialRequestOptionsJson,
) -> Result<PublicKeyCredentialRequestOptions> {
    CredentialAdapter::default().request_options_to_binary(options)
}

/// Encode a ceremony result, typed or untyped, into a JSON value
///
/// # Example
/// ```rust
/// use webauthn_json::{convert_public_key_credential_to_jsonable, PlatformValue};
/// use serde_json::json;
///
/// let credential = PlatformValue::object([
///     ("rawId", PlatformValue::Bytes(vec![0xfb, 0xff])),
///     ("type", PlatformValue::from("public-key")),
/// ]);
/// assert_eq!(
///     convert_public_key_credential_to_jsonable(credential),
///     json!({"rawId": "-_8", "type": "public-key"})
/// );
/// ```
pub fn convert_public_key_credential_to_jsonable(credential: impl Into<PlatformValue>) -> Value {
    encode_value(credential.into())
}

/// Encode binary registration options back into their JSON form
pub fn convert_creation_options_to_json(
    options: &PublicKeyCredentialCreationOptions,
) -> PublicKeyCredentialCreationOptionsJson {
    PublicKeyCredentialCreationOptionsJson {
        rp: options.rp.clone(),
        user: PublicKeyCredentialUserEntityJson {
            id: base64url_encode(&options.user.id),
            name: options.user.name.clone(),
            display_name: options.user.display_name.clone(),
        },
        challenge: base64url_encode(&options.challenge),
        pub_key_cred_params: options.pub_key_cred_params.clone(),
        timeout: options.timeout.clone(),
        exclude_credentials: options
            .exclude_credentials
            .as_ref()
            .map(|descriptors| descriptors.iter().map(convert_descriptor_to_json).collect()),
        authenticator_selection: options.authenticator_selection.clone(),
        attestation: options.attestation.clone(),
        extensions: options.extensions.clone(),
    }
}

/// Encode binary authentication options back into their JSON form
pub fn convert_request_options_to_json(
    options: &PublicKeyCredentialRequestOptions,
) -> PublicKeyCredentialRequestOptionsJson {
    PublicKeyCredentialRequestOptionsJson {
        challenge: base64url_encode(&options.challenge),
        timeout: options.timeout.clone(),
        rp_id: options.rp_id.clone(),
        allow_credentials: options
            .allow_credentials
            .as_ref()
            .map(|descriptors| descriptors.iter().map(convert_descriptor_to_json).collect()),
        user_verification: options.user_verification.clone(),
        extensions: options.extensions.clone(),
    }
}

/// Encode a credential descriptor's id as Base64URL
pub fn convert_descriptor_to_json(
    descriptor: &PublicKeyCredentialDescriptor,
) -> PublicKeyCredentialDescriptorJson {
    PublicKeyCredentialDescriptorJson {
        type_: descriptor.type_,
        id: base64url_encode(&descriptor.id),
        transports: descriptor.transports.clone(),
    }
}
