//! Core signing protocol
//!
//! This module contains the canonical message builder, the hasher, the
//! signer and the two request assemblers built on top of them. Everything
//! here is a pure function of its inputs.

pub mod amount;
pub mod clock;
pub mod hasher;
pub mod message;
pub mod mining;
pub mod signer;
pub mod transaction;

pub use amount::Amount;
pub use clock::{Clock, FixedClock, SystemClock};
pub use hasher::{hash, Digest, DIGEST_LEN};
pub use message::{CanonicalField, CanonicalMessage};
pub use mining::MiningRequest;
pub use signer::{sign, sign_with, verify, verify_encoded, Signature};
pub use transaction::Transaction;
