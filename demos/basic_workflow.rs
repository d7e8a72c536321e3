// demos/basic_workflow.rs

use webauthn_json::{
    AuthenticatorAssertionResponse, AuthenticatorAttestationResponse, AuthenticatorResponse,
    CredentialAdapter, PlatformValue, PublicKeyCredential, PublicKeyCredentialType,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("webauthn-json Basic Workflow Example");

    let adapter = CredentialAdapter::default();

    // 1. Registration options as a relying party would send them
    let creation_json = r#"{
        "rp": {"name": "Example", "id": "example.com"},
        "user": {"id": "dXNlci0xMjM", "name": "alice", "displayName": "Alice"},
        "challenge": "cmVnaXN0cmF0aW9uLWNoYWxsZW5nZQ",
        "pubKeyCredParams": [{"type": "public-key", "alg": -7}],
        "timeout": 60000,
        "attestation": "none"
    }"#;

    let creation_options = adapter.parse_creation_options(creation_json)?;
    let creation_binary = adapter.creation_options_to_binary(creation_options)?;

    println!("\nRegistration options decoded");
    println!("   Challenge: {} bytes", creation_binary.challenge.len());
    println!("   User handle: {:?}", String::from_utf8_lossy(&creation_binary.user.id));

    // 2. Simulate the platform `create` result (a real app gets this from the browser)
    let registration = PublicKeyCredential {
        id: "AQIDBA".to_string(),
        raw_id: vec![1, 2, 3, 4],
        type_: PublicKeyCredentialType::PublicKey,
        authenticator_attachment: Some("platform".to_string()),
        response: AuthenticatorResponse::Attestation(AuthenticatorAttestationResponse {
            client_data_json: br#"{"type":"webauthn.create"}"#.to_vec(),
            attestation_object: vec![0xa3, 0x63, 0x66, 0x6d, 0x74],
            transports: Some(vec!["internal".to_string()]),
        }),
        client_extension_results: PlatformValue::object::<&str, _>([]),
    };

    println!("\nRegistration result for the relying party:");
    println!("   {}", adapter.credential_to_json_string(registration)?);

    // 3. Authentication options referencing the new credential
    let request_json = r#"{
        "challenge": "YXV0aGVudGljYXRpb24tY2hhbGxlbmdl",
        "rpId": "example.com",
        "allowCredentials": [{"type": "public-key", "id": "AQIDBA", "transports": ["internal"]}],
        "userVerification": "preferred"
    }"#;

    let request_options = adapter.parse_request_options(request_json)?;
    let request_binary = adapter.request_options_to_binary(request_options)?;

    println!("\nAuthentication options decoded");
    if let Some(allowed) = &request_binary.allow_credentials {
        for descriptor in allowed {
            println!("   Allowed credential id: {:?}", descriptor.id);
        }
    }

    // 4. Simulate the platform `get` result
    let assertion = PublicKeyCredential {
        id: "AQIDBA".to_string(),
        raw_id: vec![1, 2, 3, 4],
        type_: PublicKeyCredentialType::PublicKey,
        authenticator_attachment: None,
        response: AuthenticatorResponse::Assertion(AuthenticatorAssertionResponse {
            client_data_json: br#"{"type":"webauthn.get"}"#.to_vec(),
            authenticator_data: vec![0; 37],
            signature: vec![0x30, 0x44, 0x02, 0x20],
            user_handle: Some(creation_binary.user.id.clone()),
        }),
        client_extension_results: PlatformValue::object::<&str, _>([]),
    };

    println!("\nAuthentication result for the relying party:");
    println!("   {}", adapter.credential_to_json_string(assertion)?);

    println!("\nExample completed!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_runs() {
        // Test that the example runs without panicking
        main().unwrap();
    }

    #[test]
    fn test_user_handle_survives_round_trip() {
        let adapter = CredentialAdapter::default();
        let options = adapter
            .parse_creation_options(
                r#"{
                    "rp": {"name": "r"},
                    "user": {"id": "dXNlci0xMjM", "name": "n", "displayName": "d"},
                    "challenge": "YQ",
                    "pubKeyCredParams": []
                }"#,
            )
            .unwrap();
        let binary = adapter.creation_options_to_binary(options).unwrap();

        let json = adapter.credential_to_json(PlatformValue::Bytes(binary.user.id));
        assert_eq!(json, "dXNlci0xMjM");
    }
}
