//! Elliptic Curve Primitives
//!
//! The only named curve is secp256k1; arbitrary curves over small fields are
//! available through [`crate::curve`].

pub mod k256; // For secp256k1
