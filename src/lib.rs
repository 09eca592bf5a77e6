//! # Wallet Signer - a thin wallet client for a P-256 blockchain node
//!
//! The wallet never stores keys and never holds state between calls. It
//! generates key pairs, builds signed requests, and hands them to the node.
//!
//! ## The signing protocol
//! - **Canonical message**: the record's fields concatenated in a fixed order
//!   with no separator (`senderKey ‖ recipientKey ‖ amount ‖ timestamp` for a
//!   transaction, `publicKey ‖ timestamp` for a mining request)
//! - **Digest**: SHA-256 of that string, base64 on the wire
//! - **Signature**: ECDSA P-256 over the digest bytes, `"<r>-<s>"` in base-10
//!   on the wire
//!
//! ## How the code is organized
//! - `core/`: amounts, canonical messages, hashing, signing, the assemblers
//! - `wallet/`: key pair generation and key encodings
//! - `network/`: HTTP client for the node's wallet API
//! - `config/`: node URL and timeout settings
//! - `utils/`: digest, randomness, clock and text-encoding helpers
//! - `cli/`: command-line interface

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod network;
pub mod utils;
pub mod wallet;

// Re-export commonly used types for convenience
pub use cli::{Command, KeyArgs, Opt};
pub use config::{Config, Settings, GLOBAL_CONFIG};
pub use crate::core::{
    hash, sign, sign_with, verify, verify_encoded, Amount, CanonicalField, CanonicalMessage,
    Clock, Digest, FixedClock, MiningRequest, Signature, SystemClock, Transaction,
};
pub use error::{Result, ValidationError, WalletError};
pub use network::NodeClient;
pub use utils::{base64_decode, base64_encode, current_timestamp, sha256_digest};
pub use wallet::KeyPair;
