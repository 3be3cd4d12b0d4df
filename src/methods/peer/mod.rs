//! Peer DID method implementation: generation, encoding, and expansion of
//! `did:peer:2`-style identifiers.

pub mod errors;

mod method;
mod util;

pub use method::{DidPeer, GeneratedPeerDid, Purpose, PurposedKey, DEFAULT_METHOD_PREFIX};
