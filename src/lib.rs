//! # btcrypt
//!
//! The cryptographic core of a Bitcoin node: prime-field arithmetic, the
//! secp256k1 group, deterministic ECDSA, and the SEC, DER, Base58Check and
//! WIF encodings.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! btcrypt = "0.3"
//! ```
//!
//! ```
//! use btcrypt::prelude::*;
//!
//! let key = PrivateKey::new(BigUint::from(888u32).pow(3)).unwrap();
//! assert_eq!(
//!     key.public_key().address(true, Network::Mainnet),
//!     "148dY81A9BmdpMhvYEVznrM45kWN32vSCN"
//! );
//!
//! let sig = key.sign_message(b"hello").unwrap();
//! let der = sig.to_der();
//! assert_eq!(Signature::from_der(&der).unwrap(), sig);
//! ```
//!
//! ## Features
//!
//! - `sign` (default): ECDSA keys and signatures
//! - `serde`: serialization for [`Network`](api::Network) and signatures
//! - `trace`: `log` records from the signing path
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`btcrypt-algorithms`]: Field, curve, secp256k1, hashes and Base58
//! - [`btcrypt-sign`]: Deterministic ECDSA, DER and WIF

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use btcrypt_algorithms as algorithms;
pub use btcrypt_api as api;
pub use btcrypt_common as common;
pub use btcrypt_params as params;
pub use num_bigint;

// Feature-gated re-exports
#[cfg(feature = "sign")]
pub use btcrypt_sign as sign;

/// Common imports for btcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Network, Result, ResultExt};

    // Re-export core algorithms
    pub use crate::algorithms::{
        hash160, hash256, sha256, CurveParams, FieldElement, Point, S256Point,
    };
    pub use crate::algorithms::base58::{decode_base58_checksum, encode_base58_checksum};

    pub use num_bigint::BigUint;

    // Re-export security types
    pub use crate::common::{SecretBuffer, ZeroizeGuard};

    #[cfg(feature = "sign")]
    pub use crate::api::Signature as SignatureScheme;

    #[cfg(feature = "sign")]
    pub use crate::sign::{PrivateKey, Secp256k1Ecdsa, Signature};
}
