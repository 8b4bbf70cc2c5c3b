//! Arithmetic and encoding primitives for the Bitcoin cryptographic core
//!
//! The modules build on one another leaf-first:
//!
//! - [`field`]: elements of a prime field with checked arithmetic
//! - [`curve`]: the short-Weierstrass group law over any prime field
//! - [`ec::k256`]: the secp256k1 instantiation with SEC encodings and addresses
//! - [`hash`] and [`encoding`]: the digests and Base58Check text form those rely on
//!
//! None of the arithmetic here is constant-time; it favours exact, readable
//! big-integer code over side-channel resistance.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

// Error types are shared with the rest of the workspace
pub use btcrypt_api::error::validate;
pub use btcrypt_api::{Error, Result};

// Prime field arithmetic
pub mod field;
pub use field::FieldElement;

// Generic elliptic-curve group
pub mod curve;
pub use curve::{CurveParams, Point};

// Elliptic Curve primitives
pub mod ec;
pub use ec::k256::{self, S256Point};

// Hash helpers
pub mod hash;
pub use hash::{hash160, hash256, sha256};

// Text encodings
pub mod encoding;
pub use encoding::base58;
