// This file implements the value-transfer record that the wallet signs and sends to the node
// The hash covers senderKey + recipientKey + amount + timestamp, concatenated with no separator,
// and the signature covers the hash, never the raw fields

use crate::core::{hash, signer, Amount, CanonicalMessage, Clock, Digest, Signature};
use crate::error::Result;
use crate::wallet::KeyPair;
use serde::{Deserialize, Serialize};

// This is the exact JSON body of POST /api/sendTransaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    sender_key: String,    // Sender public key, also the key the signature verifies under
    recipient_key: String, // Recipient public key, opaque to the wallet
    amount: Amount,        // Not range-checked here, the node owns that policy
    timestamp: i64,        // Milliseconds since the Unix epoch
    hash: Digest,          // Digest of the canonical message
    sign: Signature,       // Sender's signature over `hash`
}

impl Transaction {
    /// Assemble a signed transfer from `key_pair` to `recipient_key`.
    ///
    /// `raw_amount` is parsed before anything else happens; if it is not a
    /// number the call fails with `ValidationError::NotANumber` without
    /// reading the clock or touching the keys.
    pub fn build(
        key_pair: &KeyPair,
        recipient_key: &str,
        raw_amount: &str,
        clock: &impl Clock,
    ) -> Result<Transaction> {
        let amount = Amount::parse(raw_amount)?;
        let timestamp = clock.now_millis()?;

        let sender_key = key_pair.get_public_key();
        let message = canonical_message(sender_key, recipient_key, amount, timestamp);
        let hash = hash(&message);
        let sign = signer::sign_with(&hash, key_pair)?;

        log::info!("Assembled transaction {hash} for amount {amount}");
        Ok(Transaction {
            sender_key: sender_key.to_string(),
            recipient_key: recipient_key.to_string(),
            amount,
            timestamp,
            hash,
            sign,
        })
    }

    pub fn from_json(json: &str) -> Result<Transaction> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    // The string that `hash` is supposed to be the digest of
    pub fn canonical_message(&self) -> String {
        canonical_message(
            &self.sender_key,
            &self.recipient_key,
            self.amount,
            self.timestamp,
        )
    }

    /// Node-side acceptance check: the stored hash matches the fields and the
    /// signature verifies under the sender key.
    pub fn verify(&self) -> bool {
        if hash(&self.canonical_message()) != self.hash {
            log::warn!("Transaction hash does not match its fields");
            return false;
        }
        signer::verify(&self.hash, &self.sender_key, &self.sign)
    }

    pub fn get_sender_key(&self) -> &str {
        self.sender_key.as_str()
    }

    pub fn get_recipient_key(&self) -> &str {
        self.recipient_key.as_str()
    }

    pub fn get_amount(&self) -> Amount {
        self.amount
    }

    pub fn get_timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn get_hash(&self) -> &Digest {
        &self.hash
    }

    pub fn get_sign(&self) -> &Signature {
        &self.sign
    }
}

pub fn canonical_message(
    sender_key: &str,
    recipient_key: &str,
    amount: Amount,
    timestamp: i64,
) -> String {
    CanonicalMessage::new()
        .field(sender_key)
        .field(recipient_key)
        .field(&amount)
        .field(&timestamp)
        .finish()
}
