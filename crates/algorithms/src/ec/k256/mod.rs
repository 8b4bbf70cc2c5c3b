//! Koblitz secp256k1 Elliptic Curve Primitives
//!
//! The curve equation is y² = x³ + 7 over the prime field F_p where:
//! - p = 2^256 - 2^32 - 977
//! - The curve order n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
//!
//! Points are built on the generic group law in [`crate::curve`]; this module
//! fixes the domain parameters and adds SEC encodings and P2PKH addresses.

mod constants;
mod field;
mod point;

pub use constants::{
    SECP256K1_FIELD_ELEMENT_SIZE, SECP256K1_POINT_COMPRESSED_SIZE,
    SECP256K1_POINT_UNCOMPRESSED_SIZE, SECP256K1_SCALAR_SIZE,
};
pub use field::{s256_field, sqrt, to_be_bytes32};
pub use point::{PointFormat, S256Point};

use crate::encoding::base58::decode_base58_checksum;
use crate::field::SECP256K1_P;
use crate::{validate, Error, Result};
use btcrypt_api::Network;
use btcrypt_params::network::HASH160_SIZE;
use constants::SECP256K1;
use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};

/// Get the standard base point G of the secp256k1 curve
pub fn base_point_g() -> S256Point {
    S256Point::generator()
}

/// The order n of the subgroup generated by G
pub fn curve_order() -> &'static BigUint {
    &SECP256K1.n
}

/// The field prime p
pub fn field_prime() -> &'static BigUint {
    &SECP256K1_P
}

/// Scalar multiplication with the base point: scalar * G
pub fn scalar_mult_base_g(scalar: &BigUint) -> Result<S256Point> {
    base_point_g().mul(scalar)
}

/// General scalar multiplication: compute scalar * point
pub fn scalar_mult(scalar: &BigUint, point: &S256Point) -> Result<S256Point> {
    if point.is_identity() {
        return Ok(S256Point::identity());
    }
    point.mul(scalar)
}

/// Draw a secret uniformly from [1, n-1] and return it with its public point
pub fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(BigUint, S256Point)> {
    let mut scalar_bytes = [0u8; SECP256K1_SCALAR_SIZE];
    loop {
        rng.fill_bytes(&mut scalar_bytes);
        let candidate = BigUint::from_bytes_be(&scalar_bytes);
        if candidate.is_zero() || candidate >= SECP256K1.n {
            continue;
        }
        let public_key = scalar_mult_base_g(&candidate)?;
        return Ok((candidate, public_key));
    }
}

/// Split a P2PKH address into its network and public-key hash
pub fn decode_address(address: &str) -> Result<(Network, [u8; HASH160_SIZE])> {
    let payload = decode_base58_checksum(address)?;
    validate::length("decode_address", payload.len(), 1 + HASH160_SIZE)?;
    let network = Network::from_p2pkh_prefix(payload[0]).ok_or_else(|| {
        Error::encoding(
            "decode_address",
            format!("unknown address version 0x{:02x}", payload[0]),
        )
    })?;
    let mut hash = [0u8; HASH160_SIZE];
    hash.copy_from_slice(&payload[1..]);
    Ok((network, hash))
}
