//! Input/output operations and error handling
//!
//! This module contains:
//! - The crate-wide error type and result alias
//! - Runtime configuration constants
//! - JSON export of artifacts and outcome logs
//! - The command-line interface

/// Command-line interface for batch map generation
pub mod cli;
/// Engine constants and runtime configuration defaults
pub mod configuration;
/// Error types for generation operations
pub mod error;
/// JSON export of artifacts and outcome logs
pub mod export;
