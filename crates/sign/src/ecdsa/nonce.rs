//! Deterministic nonce generation (RFC 6979, HMAC-SHA256)

use btcrypt_algorithms::ec::k256::{curve_order, to_be_bytes32};
use btcrypt_api::{Error, Result};
use btcrypt_common::{SecretBuffer, ZeroizeGuard};
use btcrypt_params::secp256k1::SECP256K1_SCALAR_SIZE;
use hmac::{Hmac, Mac};
use num_bigint::BigUint;
use num_traits::Zero;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// HMAC_key(parts[0] || parts[1] || ...)
fn hmac(key: &[u8; 32], parts: &[&[u8]]) -> Result<[u8; 32]> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|_| Error::InvalidLength {
        context: "deterministic_k",
        expected: SECP256K1_SCALAR_SIZE,
        actual: key.len(),
    })?;
    for part in parts {
        mac.update(part);
    }
    Ok(mac.finalize().into_bytes().into())
}

/// Derive the signing nonce for `(secret, z)`.
///
/// The same pair always yields the same `k`, which lies in `[1, n-1]`.
/// `z` is reduced by subtracting n once when it exceeds n; it must already
/// be below 2^256.
pub fn deterministic_k(
    secret: &SecretBuffer<SECP256K1_SCALAR_SIZE>,
    z: &BigUint,
) -> Result<BigUint> {
    let n = curve_order();

    let mut k_buf = [0x00u8; 32];
    let mut v_buf = [0x01u8; 32];
    let mut k = ZeroizeGuard::new(&mut k_buf);
    let mut v = ZeroizeGuard::new(&mut v_buf);

    let z = if z > n { z - n } else { z.clone() };
    let z_bytes = to_be_bytes32(&z);
    let secret_bytes = secret.as_slice();

    // K = HMAC_K(V || 0x00 || secret || z), V = HMAC_K(V)
    *k = hmac(&k, &[&v[..], &[0x00], secret_bytes, &z_bytes])?;
    *v = hmac(&k, &[&v[..]])?;

    // K = HMAC_K(V || 0x01 || secret || z), V = HMAC_K(V)
    *k = hmac(&k, &[&v[..], &[0x01], secret_bytes, &z_bytes])?;
    *v = hmac(&k, &[&v[..]])?;

    loop {
        *v = hmac(&k, &[&v[..]])?;
        let candidate = BigUint::from_bytes_be(&v[..]);
        if !candidate.is_zero() && candidate < *n {
            return Ok(candidate);
        }

        // K = HMAC_K(V || 0x00), V = HMAC_K(V)
        trace!("nonce candidate outside [1, n-1], retrying");
        *k = hmac(&k, &[&v[..], &[0x00]])?;
        *v = hmac(&k, &[&v[..]])?;
    }
}
