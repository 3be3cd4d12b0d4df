use multibase::Base::Base58Btc;
use x25519_dalek::{PublicKey, StaticSecret};

use super::{
    errors::Error,
    traits::{Generate, KeyMaterial, ToMultibase, BYTES_LENGTH_32},
    utils::{clone_slice_to_array, generate_seed},
    AsymmetricKey,
};

/// An X25519 key pair, used as the key-agreement (encryption) key of a peer DID.
pub type X25519KeyPair = AsymmetricKey<PublicKey, StaticSecret>;

impl std::fmt::Debug for X25519KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:?}", self.public_key))
    }
}

impl KeyMaterial for X25519KeyPair {
    fn public_key_bytes(&self) -> Result<[u8; BYTES_LENGTH_32], Error> {
        Ok(clone_slice_to_array(self.public_key.as_bytes()))
    }

    fn private_key_bytes(&self) -> Result<[u8; BYTES_LENGTH_32], Error> {
        match &self.secret_key {
            Some(sk) => Ok(clone_slice_to_array(sk.as_bytes())),
            None => Err(Error::InvalidSecretKey),
        }
    }
}

impl Generate for X25519KeyPair {
    fn new() -> Result<X25519KeyPair, Error> {
        Self::new_with_seed(&[])
    }

    fn new_with_seed(seed: &[u8]) -> Result<X25519KeyPair, Error> {
        let secret_seed = generate_seed(seed)?;
        let sk = StaticSecret::from(secret_seed);
        Ok(X25519KeyPair {
            public_key: PublicKey::from(&sk),
            secret_key: Some(sk),
        })
    }

    fn from_public_key(public_key: &[u8; BYTES_LENGTH_32]) -> Result<X25519KeyPair, Error> {
        Ok(X25519KeyPair {
            public_key: PublicKey::from(clone_slice_to_array(public_key)),
            secret_key: None,
        })
    }

    fn from_secret_key(secret_key: &[u8; BYTES_LENGTH_32]) -> Result<X25519KeyPair, Error> {
        let sk = StaticSecret::from(clone_slice_to_array(secret_key));
        Ok(X25519KeyPair {
            public_key: PublicKey::from(&sk),
            secret_key: Some(sk),
        })
    }
}

impl ToMultibase for X25519KeyPair {
    fn to_multibase(&self) -> Result<String, Error> {
        let bytes = self.public_key_bytes()?;
        Ok(multibase::encode(Base58Btc, bytes))
    }
}
