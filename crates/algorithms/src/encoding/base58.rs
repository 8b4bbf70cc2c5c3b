//! Base58 and Base58Check
//!
//! A payload is read as one big-endian integer and written in the Bitcoin
//! base-58 alphabet. Each leading zero byte becomes a leading `'1'`, so the
//! encoding is length-preserving for zero prefixes. Base58Check appends the
//! first four bytes of `hash256(payload)` before encoding.

use crate::hash::hash256;
use crate::{validate, Error, Result};
use btcrypt_params::network::{BASE58_ALPHABET, BASE58_CHECKSUM_SIZE};
use num_bigint::BigUint;
use num_traits::Zero;
use subtle::ConstantTimeEq;

const ZERO_DIGIT: char = '1';

/// Encode bytes in base 58
pub fn encode_base58(payload: &[u8]) -> String {
    let zeros = payload.iter().take_while(|&&b| b == 0).count();
    let num = BigUint::from_bytes_be(payload);

    let mut out = String::with_capacity(zeros + payload.len() * 138 / 100 + 1);
    out.extend(core::iter::repeat(ZERO_DIGIT).take(zeros));
    if !num.is_zero() {
        out.extend(
            num.to_radix_be(58)
                .into_iter()
                .map(|digit| BASE58_ALPHABET[digit as usize] as char),
        );
    }
    out
}

/// Encode bytes followed by their 4-byte double-SHA256 checksum
pub fn encode_base58_checksum(payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + BASE58_CHECKSUM_SIZE);
    data.extend_from_slice(payload);
    data.extend_from_slice(&hash256(payload)[..BASE58_CHECKSUM_SIZE]);
    encode_base58(&data)
}

/// Decode a base-58 string; the inverse of [`encode_base58`]
pub fn decode_base58(s: &str) -> Result<Vec<u8>> {
    let zeros = s.chars().take_while(|&c| c == ZERO_DIGIT).count();

    let mut digits = Vec::with_capacity(s.len() - zeros);
    for (i, c) in s.char_indices().skip(zeros) {
        let digit = BASE58_ALPHABET
            .iter()
            .position(|&a| a as char == c)
            .ok_or_else(|| {
                Error::encoding(
                    "decode_base58",
                    format!("invalid character {:?} at position {}", c, i),
                )
            })?;
        digits.push(digit as u8);
    }

    let mut out = vec![0u8; zeros];
    if !digits.is_empty() {
        let num = BigUint::from_radix_be(&digits, 58).ok_or_else(|| {
            Error::encoding("decode_base58", "digit outside the base-58 range")
        })?;
        out.extend_from_slice(&num.to_bytes_be());
    }
    Ok(out)
}

/// Decode a Base58Check string, verify its checksum and strip it
pub fn decode_base58_checksum(s: &str) -> Result<Vec<u8>> {
    let mut data = decode_base58(s)?;
    validate::min_length("decode_base58_checksum", data.len(), BASE58_CHECKSUM_SIZE)?;

    let split = data.len() - BASE58_CHECKSUM_SIZE;
    let expected = hash256(&data[..split]);
    let checksum_ok: bool = data[split..]
        .ct_eq(&expected[..BASE58_CHECKSUM_SIZE])
        .into();
    if !checksum_ok {
        return Err(Error::ChecksumMismatch {
            context: "decode_base58_checksum",
        });
    }
    data.truncate(split);
    Ok(data)
}
