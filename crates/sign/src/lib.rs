//! Digital Signature Schemes
//!
//! Deterministic ECDSA over secp256k1 as Bitcoin uses it: RFC 6979 nonces,
//! low-s normalisation, DER-encoded signatures and WIF-exported keys.

#![forbid(unsafe_code)]

/// Emit a `log::trace!` record when the `trace` feature is on; compiles to
/// nothing otherwise.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "trace")]
        log::trace!($($arg)*);
    };
}

pub mod ecdsa;

pub use ecdsa::{public_key, sign, verify, PrivateKey, Secp256k1Ecdsa, Signature};
