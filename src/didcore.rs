//! Model of the DID document reconstructed from a peer DID address.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// === Structure of a did document ===

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    // The @context property defines the vocabulary used in the JSON-LD document.
    // It provides a way to map the keys in the JSON structure to specific terms,
    // properties, and classes from external vocabularies.
    #[serde(rename = "@context")]
    pub context: Context,

    // Identifier property is mandatory in a did document.
    // See https://www.w3.org/TR/did-core/#dfn-id
    pub id: String,

    // === Verification Methods ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_method: Option<Vec<VerificationMethod>>,

    // === Verification Relationships ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<Vec<VerificationMethodType>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assertion_method: Option<Vec<VerificationMethodType>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_agreement: Option<Vec<VerificationMethodType>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capability_invocation: Option<Vec<VerificationMethodType>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capability_delegation: Option<Vec<VerificationMethodType>>,

    // === Services ===
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<Vec<Service>>,
}

/// Represents the JSON-LD context of a DID document.
#[derive(Serialize, Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Context {
    SingleString(String),
    SetOfString(Vec<String>),
}

/// A verification method entry, carrying public key material in multibase form.
#[derive(Serialize, Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationMethod {
    pub id: String,

    #[serde(rename = "type")]
    pub key_type: String,

    pub controller: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key_multibase: Option<String>,
}

/// A verification relationship entry: either a relative reference to a
/// verification method of the document, or an embedded method.
#[derive(Serialize, Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum VerificationMethodType {
    Reference(String),
    Embedded(Box<VerificationMethod>),
}

/// A service endpoint declaration.
///
/// The `serviceEndpoint` value is kept as free-form JSON: peer DID services
/// range from a plain URI string to nested profile/uri/integrity mappings.
/// See https://www.w3.org/TR/did-core/#services
#[derive(Serialize, Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(rename = "type")]
    pub service_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_endpoint: Option<Value>,

    // === Additional properties ===
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(flatten)]
    pub additional_properties: Option<HashMap<String, Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_omits_absent_arrays() {
        let document = Document {
            context: Context::SetOfString(vec![
                String::from("https://www.w3.org/ns/did/v1"),
                String::from("https://w3id.org/security/multikey/v1"),
            ]),
            id: String::from("did:peer:2.Vz6Mkj3PUd1WjvaDhNZhhhXQdz5UnZXmS7ehtx8bsPpD47kKc"),
            verification_method: Some(vec![VerificationMethod {
                id: String::from("#key-1"),
                key_type: String::from("Multikey"),
                controller: String::from("did:peer:2.Vz6Mkj3PUd1WjvaDhNZhhhXQdz5UnZXmS7ehtx8bsPpD47kKc"),
                public_key_multibase: Some(String::from("z6Mkj3PUd1WjvaDhNZhhhXQdz5UnZXmS7ehtx8bsPpD47kKc")),
            }]),
            authentication: Some(vec![VerificationMethodType::Reference(String::from("#key-1"))]),
            assertion_method: None,
            key_agreement: None,
            capability_invocation: None,
            capability_delegation: None,
            service: None,
        };

        let value = serde_json::to_value(&document).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("verificationMethod"));
        assert!(obj.contains_key("authentication"));
        assert!(!obj.contains_key("assertionMethod"));
        assert!(!obj.contains_key("keyAgreement"));
        assert!(!obj.contains_key("service"));
        assert_eq!(value["authentication"], json!(["#key-1"]));
    }

    #[test]
    fn test_service_roundtrip_with_nested_endpoint() {
        let service: Service = serde_json::from_value(json!({
            "id": "#tr-1",
            "type": "TRQP",
            "serviceEndpoint": {
                "profile": "https://trustoverip.org/profiles/trp/v2",
                "uri": ["http://example.org/trust-registry-backend"],
                "integrity": "122041dd7b6443542e75701aa98a0c235952a28a0d851b11564d20022ab11d2589a8"
            }
        }))
        .unwrap();

        assert_eq!(service.service_type, "TRQP");
        let endpoint = service.service_endpoint.as_ref().unwrap();
        assert_eq!(endpoint["uri"][0], "http://example.org/trust-registry-backend");

        let value = serde_json::to_value(&service).unwrap();
        assert_eq!(value["type"], "TRQP");
        assert_eq!(value["serviceEndpoint"]["profile"], "https://trustoverip.org/profiles/trp/v2");
    }

    #[test]
    fn test_service_without_id_serializes_none() {
        let service: Service = serde_json::from_value(json!({
            "type": "DIDCommMessaging",
            "serviceEndpoint": "http://example.com/didcomm"
        }))
        .unwrap();

        assert!(service.id.is_empty());
        let value = serde_json::to_value(&service).unwrap();
        assert!(!value.as_object().unwrap().contains_key("id"));
    }
}
