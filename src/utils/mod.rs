//! Utility functions and helpers
//!
//! This module contains hashing, randomness, clock access and the text
//! encodings used for keys, digests and signatures.

pub mod crypto;
pub mod encoding;

pub use crypto::{current_timestamp, fill_random, sha256_digest};

pub use encoding::{base64_decode, base64_encode, decimal_decode, decimal_encode};
