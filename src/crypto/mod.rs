//! This module contains cryptographic utilities.
//!
//! Provides interfaces and implementations for the key material behind peer DID
//! addresses: generation, raw byte access, and multibase text encoding of
//! [Ed25519] signing keys and [X25519] key-agreement keys.
//!
//! [Ed25519]: https://en.wikipedia.org/wiki/EdDSA
//! [X25519]: https://en.wikipedia.org/wiki/X25519

mod ed25519;
mod errors;
mod traits;
mod utils;
mod x25519;

pub use ed25519::Ed25519KeyPair;
pub use errors::Error;
pub use traits::{Generate, KeyMaterial, ToMultibase, BYTES_LENGTH_32};
pub use x25519::X25519KeyPair;

/// A wrapper struct for an asymmetric key pair.
/// This struct holds a public key and an optional secret key.
pub struct AsymmetricKey<P, S> {
    pub public_key: P,
    pub secret_key: Option<S>,
}
