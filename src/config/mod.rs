//! Configuration management
//!
//! This module holds the wallet's client settings: which node to talk to and
//! how long to wait for it. Defaults can be overridden by a TOML file and by
//! environment variables.

pub mod settings;

pub use settings::{Config, Settings, GLOBAL_CONFIG};
