use multibase::Base::Base64Url;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{
    errors::{DIDPeerMethodError, FormatError},
    util,
};
use crate::{
    crypto::{Ed25519KeyPair, Generate, KeyMaterial, ToMultibase, X25519KeyPair},
    didcore::{Context, Document as DIDDocument, Service, VerificationMethod, VerificationMethodType},
};

/// Method prefix of generated identifiers unless configured otherwise.
pub const DEFAULT_METHOD_PREFIX: &str = "did:peer:2";

lazy_static::lazy_static!(
    static ref MULTIBASE_B58_REGEX: Regex = Regex::new("^z[1-9a-km-zA-HJ-NP-Z]+$").unwrap();
);

/// Encoder and decoder for peer DID addresses of the multiple-inception-keys
/// flavor. Stateless apart from the configured method prefix; every operation
/// is a pure function of its arguments and safe to call concurrently.
pub struct DidPeer {
    /// Method prefix expected at the head of every identifier.
    method_prefix: String,
}

impl Default for DidPeer {
    fn default() -> Self {
        Self {
            method_prefix: String::from(DEFAULT_METHOD_PREFIX),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Purpose {
    Assertion,
    Encryption,   // Key Agreement
    Verification, // Authentication
    CapabilityInvocation,
    CapabilityDelegation,
    Service,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PurposedKey {
    pub purpose: Purpose,
    pub public_key_multibase: String,
}

/// The outcome of a fresh peer DID generation.
///
/// The key material is owned exclusively by the caller from the moment this
/// struct is returned; the codec retains no copy of it.
pub struct GeneratedPeerDid {
    pub did: String,
    pub signing_key: Ed25519KeyPair,
    pub agreement_key: X25519KeyPair,
}

impl GeneratedPeerDid {
    /// Lowercase hexadecimal form of the signing private key, for operator
    /// display or export. Private keys are never part of the identifier.
    pub fn signing_secret_hex(&self) -> Result<String, DIDPeerMethodError> {
        Ok(hex::encode(self.signing_key.private_key_bytes()?))
    }

    /// Lowercase hexadecimal form of the key-agreement private key.
    pub fn agreement_secret_hex(&self) -> Result<String, DIDPeerMethodError> {
        Ok(hex::encode(self.agreement_key.private_key_bytes()?))
    }
}

impl Purpose {
    /// Converts purpose to normalized one-letter code
    pub fn code(&self) -> char {
        match self {
            Purpose::Assertion => 'A',
            Purpose::Encryption => 'E',
            Purpose::Verification => 'V',
            Purpose::CapabilityInvocation => 'I',
            Purpose::CapabilityDelegation => 'D',
            Purpose::Service => 'S',
        }
    }

    /// Derives purpose from normalized one-letter code
    pub fn from_code(c: &char) -> Result<Self, DIDPeerMethodError> {
        match c {
            'A' => Ok(Purpose::Assertion),
            'E' => Ok(Purpose::Encryption),
            'V' => Ok(Purpose::Verification),
            'I' => Ok(Purpose::CapabilityInvocation),
            'D' => Ok(Purpose::CapabilityDelegation),
            'S' => Ok(Purpose::Service),
            _ => Err(DIDPeerMethodError::InvalidPurposeCode),
        }
    }
}

impl DidPeer {
    /// Creates a new instance expecting the `did:peer:2` method prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new instance expecting the given method prefix.
    ///
    /// A trailing delimiter on the prefix is tolerated and never doubled.
    pub fn with_method_prefix(prefix: impl Into<String>) -> Self {
        Self { method_prefix: prefix.into() }
    }

    fn normalized_prefix(&self) -> &str {
        self.method_prefix.trim_end_matches('.')
    }

    // ---------------------------------------------------------------------------
    // Generating peer DID addresses
    // ---------------------------------------------------------------------------

    /// Generates a fresh signing and key-agreement key pair and encodes them,
    /// together with `services`, into a peer DID address.
    ///
    /// Fails only on entropy-source exhaustion or an unserializable service;
    /// no partial identifier is ever returned.
    pub fn generate(&self, services: &[Service]) -> Result<GeneratedPeerDid, DIDPeerMethodError> {
        let signing_key = Ed25519KeyPair::new()?;
        let agreement_key = X25519KeyPair::new()?;

        let did = self.create(&signing_key, &agreement_key, services)?;

        Ok(GeneratedPeerDid {
            did,
            signing_key,
            agreement_key,
        })
    }

    /// Encodes already generated key pairs and services into a peer DID address.
    ///
    /// The signing key is chained as a `V` (authentication) segment and the
    /// agreement key as an `E` (key agreement) segment, in that fixed order,
    /// followed by one `S` segment per service in caller-supplied order. Given
    /// fixed keys and services, the output is deterministic.
    pub fn create(
        &self,
        signing_key: &Ed25519KeyPair,
        agreement_key: &X25519KeyPair,
        services: &[Service],
    ) -> Result<String, DIDPeerMethodError> {
        let keys = [
            PurposedKey {
                purpose: Purpose::Verification,
                public_key_multibase: signing_key.to_multibase()?,
            },
            PurposedKey {
                purpose: Purpose::Encryption,
                public_key_multibase: agreement_key.to_multibase()?,
            },
        ];

        self.create_from_purposed_keys(&keys, services)
    }

    /// Encodes an arbitrary ordered chain of purposed keys and services into
    /// a peer DID address.
    ///
    /// See https://identity.foundation/peer-did-method-spec/#method-2-multiple-inception-key-without-doc
    pub fn create_from_purposed_keys(&self, keys: &[PurposedKey], services: &[Service]) -> Result<String, DIDPeerMethodError> {
        if keys.is_empty() && services.is_empty() {
            return Err(DIDPeerMethodError::EmptyArguments);
        }

        // Initialization
        let mut chain = vec![];

        // Chain keys
        for key in keys {
            if matches!(key.purpose, Purpose::Service) {
                return Err(DIDPeerMethodError::UnexpectedPurpose);
            }

            chain.push(format!(".{}{}", key.purpose.code(), key.public_key_multibase));
        }

        // Chain services
        for service in services {
            let abbreviated_service = util::abbreviate_service(service)?;
            let encoded_service = Base64Url.encode(abbreviated_service);

            chain.push(format!(".{}{}", Purpose::Service.code(), encoded_service));
        }

        Ok(format!("{}{}", self.normalized_prefix(), chain.join("")))
    }

    // ---------------------------------------------------------------------------
    // Expanding peer DID addresses
    // ---------------------------------------------------------------------------

    /// Expands a peer DID address into its DID document.
    ///
    /// This is the pure inverse of [`DidPeer::create`]: no I/O, no randomness,
    /// no state. Verification methods receive positionally derived identifiers
    /// (`#key-1`, `#key-2`, ...) counted over all key segments regardless of
    /// purpose; services without an `id` of their own receive `#service`, then
    /// `#service-1`, `#service-2`, and so on. Relationship and service arrays
    /// that end up empty are omitted from the document altogether.
    ///
    /// See https://identity.foundation/peer-did-method-spec/#resolving-a-didpeer2
    pub fn expand(&self, did: &str) -> Result<DIDDocument, DIDPeerMethodError> {
        let prefix = self.normalized_prefix();
        let body = did.strip_prefix(prefix).ok_or_else(|| FormatError::MethodPrefixMismatch {
            expected: prefix.to_string(),
        })?;
        let body = body.strip_prefix('.').unwrap_or(body);

        // Initialize relationships

        let mut methods: Vec<VerificationMethod> = vec![];
        let mut authentication = vec![];
        let mut assertion_method = vec![];
        let mut key_agreement = vec![];
        let mut capability_invocation = vec![];
        let mut capability_delegation = vec![];
        let mut services: Vec<Service> = vec![];

        let mut key_count = 0;
        let mut service_next_id = 0;

        for (index, segment) in body.split('.').enumerate() {
            let code = segment.chars().next().ok_or_else(|| FormatError::MalformedSegment {
                segment: segment.to_string(),
                index,
            })?;
            let payload = &segment[code.len_utf8()..];
            if payload.is_empty() {
                return Err(FormatError::MalformedSegment {
                    segment: segment.to_string(),
                    index,
                }
                .into());
            }

            let purpose = Purpose::from_code(&code).map_err(|_| FormatError::UnknownPurposeCode { code, index })?;

            match purpose {
                Purpose::Service => {
                    services.push(Self::expand_service(payload, index, &mut service_next_id)?);
                }
                _ => {
                    if !MULTIBASE_B58_REGEX.is_match(payload) {
                        return Err(FormatError::InvalidKeyMaterial { index }.into());
                    }

                    key_count += 1;
                    let id = format!("#key-{key_count}");

                    match purpose {
                        Purpose::Assertion => assertion_method.push(VerificationMethodType::Reference(id.clone())),
                        Purpose::Encryption => key_agreement.push(VerificationMethodType::Reference(id.clone())),
                        Purpose::Verification => authentication.push(VerificationMethodType::Reference(id.clone())),
                        Purpose::CapabilityInvocation => capability_invocation.push(VerificationMethodType::Reference(id.clone())),
                        Purpose::CapabilityDelegation => capability_delegation.push(VerificationMethodType::Reference(id.clone())),
                        Purpose::Service => unreachable!(),
                    }

                    methods.push(VerificationMethod {
                        id,
                        key_type: String::from("Multikey"),
                        controller: did.to_string(),
                        public_key_multibase: Some(payload.to_string()),
                    });
                }
            }
        }

        // Build DID document, omitting every array left empty

        Ok(DIDDocument {
            context: Context::SetOfString(vec![
                String::from("https://www.w3.org/ns/did/v1"),
                String::from("https://w3id.org/security/multikey/v1"),
            ]),
            id: did.to_string(),
            verification_method: (!methods.is_empty()).then_some(methods),
            authentication: (!authentication.is_empty()).then_some(authentication),
            assertion_method: (!assertion_method.is_empty()).then_some(assertion_method),
            key_agreement: (!key_agreement.is_empty()).then_some(key_agreement),
            capability_invocation: (!capability_invocation.is_empty()).then_some(capability_invocation),
            capability_delegation: (!capability_delegation.is_empty()).then_some(capability_delegation),
            service: (!services.is_empty()).then_some(services),
        })
    }

    /// Decodes a single `S` segment payload into a service declaration.
    fn expand_service(payload: &str, index: usize, service_next_id: &mut usize) -> Result<Service, DIDPeerMethodError> {
        // Tolerate a padded base64url payload even though the encoder strips padding.
        let stripped = payload.trim_end_matches('=');

        let decoded_bytes = Base64Url
            .decode(stripped)
            .map_err(|_| FormatError::UndecodableService { index })?;
        let decoded = String::from_utf8(decoded_bytes).map_err(|_| FormatError::UndecodableService { index })?;

        // Reverse service abbreviation
        let mut service = util::reverse_abbreviate_service(&decoded).map_err(|_| FormatError::UndecodableService { index })?;

        // A caller-supplied id is always preserved; identifiers are only
        // synthesized for services that declare none.
        if service.id.is_empty() {
            service.id = if *service_next_id == 0 {
                String::from("#service")
            } else {
                format!("#service-{service_next_id}")
            };
            *service_next_id += 1;
        }

        Ok(service)
    }
}
