//! Configuration module for the family ledger
//!
//! This module provides configuration management including:
//! - Base/data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
