//! Public API traits and types for the btcrypt library
//!
//! This crate provides the public API surface shared by every btcrypt crate:
//! the error taxonomy, the network selector, and the signature scheme trait.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use traits::Signature;
pub use types::Network;
