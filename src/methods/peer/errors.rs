use thiserror::Error;

use crate::crypto::Error as CryptoError;

/// Errors raised when an identifier string does not conform to the peer DID
/// segment grammar. Each variant names the offending segment or its index so
/// callers can diagnose the failure; none of these are recoverable locally.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("did does not start with method prefix `{expected}`")]
    MethodPrefixMismatch { expected: String },

    #[error("malformed segment `{segment}` at index {index}")]
    MalformedSegment { segment: String, index: usize },

    #[error("unknown purpose code `{code}` in segment at index {index}")]
    UnknownPurposeCode { code: char, index: usize },

    #[error("invalid multibase key material in segment at index {index}")]
    InvalidKeyMaterial { index: usize },

    #[error("undecodable service payload in segment at index {index}")]
    UndecodableService { index: usize },
}

/// Errors raised while producing an identifier or exporting key material.
/// Fatal for the whole call; no partial identifier is ever returned.
#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("service descriptor cannot be serialized")]
    UnserializableService(#[from] serde_json::Error),

    #[error(transparent)]
    KeyMaterial(#[from] CryptoError),
}

#[derive(Debug, Error)]
pub enum DIDPeerMethodError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error("at least one key or one service is required")]
    EmptyArguments,

    #[error("purpose `service` cannot tag a key segment")]
    UnexpectedPurpose,

    #[error("invalid purpose code")]
    InvalidPurposeCode,
}

impl From<CryptoError> for DIDPeerMethodError {
    fn from(err: CryptoError) -> Self {
        Self::Encoding(EncodingError::KeyMaterial(err))
    }
}
