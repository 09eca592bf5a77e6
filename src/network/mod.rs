//! Node API client
//!
//! This module talks to a node's HTTP wallet API: balance queries,
//! transaction submission and mining requests.

pub mod client;

pub use client::{NodeClient, BALANCE_PATH, MINE_REQUEST_PATH, SEND_TRANSACTION_PATH};
