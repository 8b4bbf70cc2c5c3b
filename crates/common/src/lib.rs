//! Common implementations and shared functionality for the btcrypt library
//!
//! Holds the zeroizing containers that keep private-key material and
//! nonce-derivation state off the heap and wipe them on drop.

#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::{SecretBuffer, ZeroizeGuard};
