//! DID method implementations.

pub mod peer;

pub use peer::{
    errors::{DIDPeerMethodError, EncodingError, FormatError},
    DidPeer, GeneratedPeerDid, Purpose, PurposedKey, DEFAULT_METHOD_PREFIX,
};
