//! secp256k1 elliptic curve point operations

use super::constants::{
    SECP256K1, SECP256K1_FIELD_ELEMENT_SIZE, SECP256K1_POINT_COMPRESSED_SIZE,
    SECP256K1_POINT_UNCOMPRESSED_SIZE,
};
use super::field::{s256_field, sqrt, to_be_bytes32};
use crate::curve::Point;
use crate::encoding::base58::encode_base58_checksum;
use crate::hash::hash160;
use crate::{validate, Error, Result};
use btcrypt_api::Network;
use btcrypt_params::network::HASH160_SIZE;
use btcrypt_params::secp256k1::{
    SEC_TAG_EVEN, SEC_TAG_INFINITY, SEC_TAG_ODD, SEC_TAG_UNCOMPRESSED,
};
use core::fmt;
use num_bigint::BigUint;

/// Format of a serialized secp256k1 point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointFormat {
    /// The point at infinity: 0x00
    Identity,
    /// Uncompressed format: 0x04 || x || y
    Uncompressed,
    /// Compressed format: 0x02/0x03 || x
    Compressed,
}

impl PointFormat {
    /// Classify a SEC encoding by its tag byte
    pub fn detect(bytes: &[u8]) -> Result<Self> {
        validate::point_format(!bytes.is_empty(), "PointFormat::detect", "empty encoding")?;
        match bytes[0] {
            SEC_TAG_INFINITY => Ok(PointFormat::Identity),
            SEC_TAG_UNCOMPRESSED => Ok(PointFormat::Uncompressed),
            SEC_TAG_EVEN | SEC_TAG_ODD => Ok(PointFormat::Compressed),
            tag => Err(Error::malformed_point(
                "PointFormat::detect",
                format!("unknown SEC tag 0x{:02x}", tag),
            )),
        }
    }
}

/// A point on the secp256k1 curve
///
/// Always lies on `y² = x³ + 7` over the secp256k1 prime; the point at
/// infinity is represented explicitly.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct S256Point(Point);

impl S256Point {
    /// Create a point from affine integer coordinates.
    ///
    /// Fails with `Range` if a coordinate is not below p and with
    /// `PointNotOnCurve` if the pair does not satisfy the curve equation.
    pub fn new(x: BigUint, y: BigUint) -> Result<Self> {
        let x = s256_field(x)?;
        let y = s256_field(y)?;
        Point::new(&SECP256K1.curve, x, y)
            .map(S256Point)
            .map_err(|e| e.with_context("S256Point::new"))
    }

    /// The standard generator G
    pub fn generator() -> Self {
        S256Point(SECP256K1.g.clone())
    }

    /// The point at infinity
    pub fn identity() -> Self {
        S256Point(Point::infinity(&SECP256K1.curve))
    }

    /// Whether this is the point at infinity
    pub fn is_identity(&self) -> bool {
        self.0.is_infinity()
    }

    /// Affine x as an integer
    pub fn x(&self) -> Option<&BigUint> {
        self.0.x().map(|x| x.value())
    }

    /// Affine y as an integer
    pub fn y(&self) -> Option<&BigUint> {
        self.0.y().map(|y| y.value())
    }

    /// The underlying generic curve point
    pub fn as_point(&self) -> &Point {
        &self.0
    }

    /// Group addition
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.0.add(&other.0).map(S256Point)
    }

    /// Add the point to itself
    pub fn double(&self) -> Result<Self> {
        self.0.double().map(S256Point)
    }

    /// The inverse point (x, p - y)
    pub fn negate(&self) -> Self {
        S256Point(self.0.neg())
    }

    /// Scalar multiplication: compute `k · self`.
    ///
    /// `k` is reduced modulo the group order n first.
    pub fn mul(&self, k: &BigUint) -> Result<Self> {
        let k = k % &SECP256K1.n;
        self.0.scalar_mul(&k).map(S256Point)
    }

    /// SEC encoding, compressed (33 bytes) or uncompressed (65 bytes).
    ///
    /// The point at infinity encodes as the single byte 0x00.
    pub fn serialize_sec(&self, compressed: bool) -> Vec<u8> {
        let (x, y) = match (self.0.x(), self.0.y()) {
            (Some(x), Some(y)) => (x, y),
            _ => return vec![SEC_TAG_INFINITY],
        };
        if compressed {
            let mut out = Vec::with_capacity(SECP256K1_POINT_COMPRESSED_SIZE);
            out.push(if y.is_odd() { SEC_TAG_ODD } else { SEC_TAG_EVEN });
            out.extend_from_slice(&to_be_bytes32(x.value()));
            out
        } else {
            let mut out = Vec::with_capacity(SECP256K1_POINT_UNCOMPRESSED_SIZE);
            out.push(SEC_TAG_UNCOMPRESSED);
            out.extend_from_slice(&to_be_bytes32(x.value()));
            out.extend_from_slice(&to_be_bytes32(y.value()));
            out
        }
    }

    /// Parse a SEC encoding produced by [`S256Point::serialize_sec`]
    pub fn parse_sec(bytes: &[u8]) -> Result<Self> {
        match PointFormat::detect(bytes)? {
            PointFormat::Identity => {
                validate::length("S256Point::parse_sec", bytes.len(), 1)?;
                Ok(Self::identity())
            }
            PointFormat::Uncompressed => {
                validate::length(
                    "S256Point::parse_sec",
                    bytes.len(),
                    SECP256K1_POINT_UNCOMPRESSED_SIZE,
                )?;
                let x = BigUint::from_bytes_be(&bytes[1..1 + SECP256K1_FIELD_ELEMENT_SIZE]);
                let y = BigUint::from_bytes_be(&bytes[1 + SECP256K1_FIELD_ELEMENT_SIZE..]);
                Self::new(x, y).map_err(|e| e.with_context("S256Point::parse_sec"))
            }
            PointFormat::Compressed => {
                validate::length(
                    "S256Point::parse_sec",
                    bytes.len(),
                    SECP256K1_POINT_COMPRESSED_SIZE,
                )?;
                let x = s256_field(BigUint::from_bytes_be(&bytes[1..]))
                    .map_err(|e| e.with_context("S256Point::parse_sec"))?;

                // y² = x³ + 7
                let alpha = x.square().mul(&x)?.add(SECP256K1.curve.b())?;
                let beta = sqrt(&alpha);
                if beta.square() != alpha {
                    return Err(Error::PointNotOnCurve {
                        context: "S256Point::parse_sec",
                    });
                }
                let want_odd = bytes[0] == SEC_TAG_ODD;
                let y = if beta.is_odd() == want_odd {
                    beta
                } else {
                    beta.neg()
                };
                Point::new(&SECP256K1.curve, x, y).map(S256Point)
            }
        }
    }

    /// RIPEMD160(SHA256(sec))
    pub fn hash160(&self, compressed: bool) -> [u8; HASH160_SIZE] {
        hash160(&self.serialize_sec(compressed))
    }

    /// Base58Check P2PKH address of this public point
    pub fn address(&self, compressed: bool, network: Network) -> String {
        let mut payload = Vec::with_capacity(1 + HASH160_SIZE);
        payload.push(network.p2pkh_prefix());
        payload.extend_from_slice(&self.hash160(compressed));
        encode_base58_checksum(&payload)
    }
}

impl fmt::Display for S256Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.x(), self.y()) {
            (Some(x), Some(y)) => write!(f, "S256Point({:064x}, {:064x})", x, y),
            _ => write!(f, "S256Point(infinity)"),
        }
    }
}
