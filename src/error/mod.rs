//! Error handling for the wallet
//!
//! This module provides the error types for key handling, request assembly
//! and node communication.

use std::fmt;

/// Result type alias for wallet operations
pub type Result<T> = std::result::Result<T, WalletError>;

/// Input validation failures detected before any crypto or network work
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The raw amount could not be read as a finite number
    NotANumber(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NotANumber(raw) => write!(f, "amount is not a number: {raw:?}"),
        }
    }
}

/// Error types for wallet operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// Caller input rejected before a payload was built
    Validation(ValidationError),
    /// Malformed, empty or mismatched key material
    InvalidKey(String),
    /// Entropy source or system clock failures
    Crypto(String),
    /// Malformed digest, signature or JSON text
    Encoding(String),
    /// HTTP failures, passed through as reported by the transport
    Transport(String),
    /// Configuration errors
    Config(String),
    /// File I/O errors
    Io(String),
}

impl fmt::Display for WalletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalletError::Validation(err) => write!(f, "Validation error: {err}"),
            WalletError::InvalidKey(msg) => write!(f, "Invalid key: {msg}"),
            WalletError::Crypto(msg) => write!(f, "Cryptographic error: {msg}"),
            WalletError::Encoding(msg) => write!(f, "Encoding error: {msg}"),
            WalletError::Transport(msg) => write!(f, "{msg}"),
            WalletError::Config(msg) => write!(f, "Configuration error: {msg}"),
            WalletError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for WalletError {}

impl From<ValidationError> for WalletError {
    fn from(err: ValidationError) -> Self {
        WalletError::Validation(err)
    }
}

impl From<std::io::Error> for WalletError {
    fn from(err: std::io::Error) -> Self {
        WalletError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        WalletError::Encoding(err.to_string())
    }
}

impl From<toml::de::Error> for WalletError {
    fn from(err: toml::de::Error) -> Self {
        WalletError::Config(err.to_string())
    }
}

impl From<reqwest::Error> for WalletError {
    fn from(err: reqwest::Error) -> Self {
        WalletError::Transport(err.to_string())
    }
}
