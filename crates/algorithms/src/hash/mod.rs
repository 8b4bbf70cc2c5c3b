//! Hash functions used by Bitcoin keys and encodings
//!
//! Thin wrappers over the RustCrypto digests returning fixed-size arrays.

use btcrypt_params::network::{HASH160_SIZE, SHA256_SIZE};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// SHA-256
pub fn sha256(data: &[u8]) -> [u8; SHA256_SIZE] {
    Sha256::digest(data).into()
}

/// Double SHA-256, `SHA256(SHA256(data))`
pub fn hash256(data: &[u8]) -> [u8; SHA256_SIZE] {
    Sha256::digest(Sha256::digest(data)).into()
}

/// `RIPEMD160(SHA256(data))`
pub fn hash160(data: &[u8]) -> [u8; HASH160_SIZE] {
    Ripemd160::digest(Sha256::digest(data)).into()
}
