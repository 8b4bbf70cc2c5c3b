//! Process-wide secp256k1 constants, built once on first use

use crate::curve::{CurveParams, Point};
use crate::field::{FieldElement, SECP256K1_P};
use btcrypt_params::secp256k1::{
    SECP256K1_A, SECP256K1_B, SECP256K1_GX_HEX, SECP256K1_GY_HEX, SECP256K1_N_HEX,
};
use num_bigint::BigUint;
use once_cell::sync::Lazy;

pub use btcrypt_params::secp256k1::{
    SECP256K1_FIELD_ELEMENT_SIZE, SECP256K1_POINT_COMPRESSED_SIZE,
    SECP256K1_POINT_UNCOMPRESSED_SIZE, SECP256K1_SCALAR_SIZE,
};

/// secp256k1 domain parameters
pub(crate) struct Secp256k1Params {
    pub(crate) n: BigUint,
    pub(crate) curve: CurveParams,
    pub(crate) g: Point,
    /// (p + 1) / 4, the square-root exponent for p ≡ 3 mod 4
    pub(crate) sqrt_exp: BigUint,
}

fn parse_hex(hex: &str) -> BigUint {
    BigUint::parse_bytes(hex.as_bytes(), 16).expect("secp256k1 constant is valid hex")
}

fn element(value: BigUint) -> FieldElement {
    FieldElement::new(value, SECP256K1_P.clone()).expect("secp256k1 constant is below p")
}

pub(crate) static SECP256K1: Lazy<Secp256k1Params> = Lazy::new(|| {
    let curve = CurveParams::new(
        element(BigUint::from(SECP256K1_A)),
        element(BigUint::from(SECP256K1_B)),
    )
    .expect("secp256k1 is non-singular");
    let g = Point::new(
        &curve,
        element(parse_hex(SECP256K1_GX_HEX)),
        element(parse_hex(SECP256K1_GY_HEX)),
    )
    .expect("standard base point must be valid");
    Secp256k1Params {
        n: parse_hex(SECP256K1_N_HEX),
        curve,
        g,
        sqrt_exp: (&*SECP256K1_P + 1u32) >> 2,
    }
});
