use thiserror::Error;

/// The set of errors that can occur during key operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Key length does not match the expected 32 bytes
    #[error("invalid key length")]
    InvalidKeyLength,
    /// Secret key material is absent from the pair
    #[error("invalid secret key")]
    InvalidSecretKey,
    /// Public key bytes do not form a valid curve point
    #[error("invalid public key")]
    InvalidPublicKey,
    /// The randomness source failed to produce a seed
    #[error("invalid seed")]
    InvalidSeed,
}
