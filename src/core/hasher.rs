//! SHA-256 digests of canonical messages

use crate::error::{Result, WalletError};
use crate::utils::{base64_decode, base64_encode, sha256_digest};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const DIGEST_LEN: usize = 32;

/// A SHA-256 digest; its transport form is standard base64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Digest {
        Digest(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }
}

/// Hash a canonical message. Pure: equal input, equal digest.
pub fn hash(message: &str) -> Digest {
    Digest(sha256_digest(message.as_bytes()))
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&base64_encode(&self.0))
    }
}

impl FromStr for Digest {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = base64_decode(s)?;
        let bytes: [u8; DIGEST_LEN] = bytes.try_into().map_err(|v: Vec<u8>| {
            WalletError::Encoding(format!("Digest must be {DIGEST_LEN} bytes, got {}", v.len()))
        })?;
        Ok(Digest(bytes))
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
