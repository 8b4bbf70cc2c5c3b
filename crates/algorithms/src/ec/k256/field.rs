//! Helpers for elements of the secp256k1 base field

use super::constants::{SECP256K1, SECP256K1_FIELD_ELEMENT_SIZE};
use crate::field::{FieldElement, SECP256K1_P};
use crate::Result;
use num_bigint::BigUint;

/// Element of F_p for the secp256k1 prime; fails with `Range` if `value >= p`
pub fn s256_field(value: BigUint) -> Result<FieldElement> {
    FieldElement::new(value, SECP256K1_P.clone())
}

/// A square root of `value` in the secp256k1 field.
///
/// Computed as `value^((p+1)/4)`. The result only squares back to `value`
/// when `value` is a quadratic residue; callers must check.
pub fn sqrt(value: &FieldElement) -> FieldElement {
    value.pow_unsigned(&SECP256K1.sqrt_exp)
}

/// Fixed-width big-endian encoding of an integer below 2^256
pub fn to_be_bytes32(value: &BigUint) -> [u8; SECP256K1_FIELD_ELEMENT_SIZE] {
    let bytes = value.to_bytes_be();
    let mut out = [0u8; SECP256K1_FIELD_ELEMENT_SIZE];
    let start = SECP256K1_FIELD_ELEMENT_SIZE.saturating_sub(bytes.len());
    let skip = bytes.len().saturating_sub(SECP256K1_FIELD_ELEMENT_SIZE);
    out[start..].copy_from_slice(&bytes[skip..]);
    out
}
