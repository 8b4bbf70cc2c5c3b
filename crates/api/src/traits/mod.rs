//! Trait definitions for the btcrypt public API

pub mod signature;

pub use signature::Signature;
