//! Mining requests
//!
//! A mining request proves the submitter holds a key pair at a point in time.
//! The signed digest is `hash(publicKey ‖ timestamp)`, but only the timestamp
//! and signature travel in the JSON body; the node has to learn the public
//! key some other way.

use crate::core::{hash, signer, CanonicalMessage, Clock, Digest, Signature};
use crate::error::Result;
use crate::wallet::KeyPair;
use serde::{Deserialize, Serialize};

/// The exact JSON body of `POST /api/mineRequest`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiningRequest {
    timestamp: i64,
    sign: Signature,
}

impl MiningRequest {
    pub fn build(key_pair: &KeyPair, clock: &impl Clock) -> Result<MiningRequest> {
        let timestamp = clock.now_millis()?;
        let digest = request_digest(key_pair.get_public_key(), timestamp);
        let sign = signer::sign_with(&digest, key_pair)?;

        log::info!("Assembled mining request at {timestamp}");
        Ok(MiningRequest { timestamp, sign })
    }

    /// Check the request against the public key the node associates with it.
    pub fn verify(&self, public_key: &str) -> bool {
        let digest = request_digest(public_key, self.timestamp);
        signer::verify(&digest, public_key, &self.sign)
    }

    pub fn from_json(json: &str) -> Result<MiningRequest> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn get_timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn get_sign(&self) -> &Signature {
        &self.sign
    }
}

pub fn canonical_message(public_key: &str, timestamp: i64) -> String {
    CanonicalMessage::new()
        .field(public_key)
        .field(&timestamp)
        .finish()
}

fn request_digest(public_key: &str, timestamp: i64) -> Digest {
    hash(&canonical_message(public_key, timestamp))
}
