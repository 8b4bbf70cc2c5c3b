//! Constant values for the btcrypt library
//!
//! This crate has no dependencies and no code beyond `const` items, so every
//! other crate in the workspace can depend on it without pulling anything in.

#![no_std]

pub mod network;
pub mod secp256k1;
