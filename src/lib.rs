/*! # did-peer-codec

This library provides a self-contained codec for [`did:peer`] identifiers of the
"multiple inception keys without doc" flavor. It derives a self-certifying,
resolver-free identifier from a pair of cryptographic keys and a list of service
endpoint declarations, and reconstructs a structured DID document from such an
identifier without any network lookup.

## Features

- **Key Material Generation**: Ed25519 signing keys and X25519 key-agreement keys,
  backed by the operating system randomness source.
- **Identifier Encoding**: assembly of multibase-encoded keys and abbreviated,
  base64url-encoded services into a dot-delimited peer DID address.
- **Identifier Decoding**: pure expansion of a peer DID address into a DID document
  with positionally derived verification method and service identifiers.

[`did:peer`]: https://identity.foundation/peer-did-method-spec/
*/
pub mod crypto;
pub mod didcore;
pub mod methods;
