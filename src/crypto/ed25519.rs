use multibase::Base::Base58Btc;

use super::{
    errors::Error,
    traits::{Generate, KeyMaterial, ToMultibase, BYTES_LENGTH_32},
    utils::{clone_slice_to_array, generate_seed},
    AsymmetricKey,
};
use ed25519_dalek::{SigningKey, VerifyingKey};

/// An Ed25519 key pair, used as the signing (authentication) key of a peer DID.
pub type Ed25519KeyPair = AsymmetricKey<VerifyingKey, SigningKey>;

impl std::fmt::Debug for Ed25519KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:?}", self.public_key))
    }
}

impl KeyMaterial for Ed25519KeyPair {
    fn public_key_bytes(&self) -> Result<[u8; BYTES_LENGTH_32], Error> {
        Ok(clone_slice_to_array(self.public_key.as_bytes()))
    }

    fn private_key_bytes(&self) -> Result<[u8; BYTES_LENGTH_32], Error> {
        match &self.secret_key {
            Some(sk) => Ok(clone_slice_to_array(&sk.to_bytes())),
            None => Err(Error::InvalidSecretKey),
        }
    }
}

impl Generate for Ed25519KeyPair {
    fn new() -> Result<Ed25519KeyPair, Error> {
        Self::new_with_seed(&[])
    }

    fn new_with_seed(seed: &[u8]) -> Result<Ed25519KeyPair, Error> {
        let secret_seed = generate_seed(seed)?;
        let sk = SigningKey::from_bytes(&secret_seed);
        Ok(Ed25519KeyPair {
            public_key: sk.verifying_key(),
            secret_key: Some(sk),
        })
    }

    fn from_public_key(public_key: &[u8; BYTES_LENGTH_32]) -> Result<Ed25519KeyPair, Error> {
        Ok(Ed25519KeyPair {
            public_key: VerifyingKey::from_bytes(public_key).map_err(|_| Error::InvalidPublicKey)?,
            secret_key: None,
        })
    }

    fn from_secret_key(secret_key: &[u8; BYTES_LENGTH_32]) -> Result<Ed25519KeyPair, Error> {
        let sk = SigningKey::from_bytes(secret_key);
        Ok(Ed25519KeyPair {
            public_key: sk.verifying_key(),
            secret_key: Some(sk),
        })
    }
}

impl ToMultibase for Ed25519KeyPair {
    fn to_multibase(&self) -> Result<String, Error> {
        let bytes = self.public_key_bytes()?;
        Ok(multibase::encode(Base58Btc, bytes))
    }
}

#[cfg(test)]
pub mod tests {
    use super::Ed25519KeyPair;
    use crate::crypto::traits::{Generate, KeyMaterial, ToMultibase, BYTES_LENGTH_32};

    #[test]
    fn test_new() {
        let keypair = Ed25519KeyPair::new().unwrap();
        assert_eq!(keypair.public_key_bytes().unwrap().len(), BYTES_LENGTH_32);
        assert_eq!(keypair.private_key_bytes().unwrap().len(), BYTES_LENGTH_32);
    }

    // Generate a new Ed25519KeyPair with a seed and check that bytes of both private
    // and public key equal the given hex vectors.
    #[test]
    fn test_new_with_seed() {
        // Beware that you need a seed of 32 bytes to produce the deterministic key pair.
        let seed = b"Sample seed bytes of thirtytwo!b";
        let keypair = Ed25519KeyPair::new_with_seed(seed).unwrap();
        let pub_key_hex = hex::encode(keypair.public_key_bytes().unwrap());
        let pri_key_hex = hex::encode(keypair.private_key_bytes().unwrap());
        assert_eq!(pub_key_hex, "412328b0201b71d0144a27d028057b6fdf58d22e0f3baaebaa5388140e57bbbd");
        assert_eq!(pri_key_hex, "53616d706c652073656564206279746573206f662074686972747974776f2162");
    }

    #[test]
    fn test_from_public_key_has_no_secret_material() {
        let keypair = Ed25519KeyPair::new().unwrap();
        let public_only = Ed25519KeyPair::from_public_key(&keypair.public_key_bytes().unwrap()).unwrap();
        assert!(public_only.private_key_bytes().is_err());
    }

    #[test]
    fn test_to_multibase() {
        let keypair = Ed25519KeyPair::new_with_seed(b"Sample seed bytes of thirtytwo!b").unwrap();
        let multibase = keypair.to_multibase().unwrap();
        assert!(multibase.starts_with('z'));

        let (base, decoded) = multibase::decode(&multibase).unwrap();
        assert_eq!(base, multibase::Base::Base58Btc);
        assert_eq!(decoded, keypair.public_key_bytes().unwrap());
    }
}
