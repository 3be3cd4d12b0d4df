//! Traits for cryptographic operations.

// Inspired from https://github.com/decentralized-identity/did-key.rs
// A common interface over the supported curves, so that the curve can change
// without altering consuming modules.

use super::errors::Error;

/// The length of a 32-byte key material.
pub const BYTES_LENGTH_32: usize = 32;

/// A trait for types that hold key material bytes.
pub trait KeyMaterial {
    /// Returns the public key bytes.
    fn public_key_bytes(&self) -> Result<[u8; BYTES_LENGTH_32], Error>;

    /// Returns the secret key bytes.
    ///
    /// Fails with [`Error::InvalidSecretKey`] when the pair only carries
    /// public key material.
    fn private_key_bytes(&self) -> Result<[u8; BYTES_LENGTH_32], Error>;
}

/// A trait for types that support key generation.
pub trait Generate: KeyMaterial {
    /// Generates a new random key from the system randomness source.
    fn new() -> Result<Self, Error>
    where
        Self: Sized;

    /// Generates a new key deterministically using the given seed.
    ///
    /// An empty or undersized seed falls back to fresh entropy.
    fn new_with_seed(seed: &[u8]) -> Result<Self, Error>
    where
        Self: Sized;

    /// Builds a new instance from an existing public key.
    fn from_public_key(public_key: &[u8; BYTES_LENGTH_32]) -> Result<Self, Error>
    where
        Self: Sized;

    /// Builds a new instance from an existing secret key.
    fn from_secret_key(private_key: &[u8; BYTES_LENGTH_32]) -> Result<Self, Error>
    where
        Self: Sized;
}

/// A trait for keys that expose their public part in multibase text form.
pub trait ToMultibase {
    /// Encodes the raw public key bytes as `z` followed by their base58btc form.
    fn to_multibase(&self) -> Result<String, Error>;
}
