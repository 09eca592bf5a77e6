//! Key pair generation and key encodings
//!
//! Keys only ever live in caller-held `KeyPair` values; nothing here persists
//! key material.

pub mod keypair;

pub use keypair::{encode_public_key, parse_private_key, parse_public_key, KeyPair};
