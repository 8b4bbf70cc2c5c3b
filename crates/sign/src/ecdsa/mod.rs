//! ECDSA over secp256k1
//!
//! Signing follows SEC 1 §4.1.3 with the nonce from RFC 6979 and Bitcoin's
//! low-s rule:
//!
//! 1. k = deterministic_k(e, z)
//! 2. r = (k·G).x mod n
//! 3. s = (z + r·e) · k⁻¹ mod n, with k⁻¹ = k^(n-2) mod n
//! 4. if s > n/2, s = n − s
//!
//! Verification computes u = z·s⁻¹, v = r·s⁻¹ and accepts iff
//! (u·G + v·P).x mod n equals r.

mod der;
mod key;
mod nonce;
mod signature;

pub use key::PrivateKey;
pub use nonce::deterministic_k;
pub use signature::Signature;

use btcrypt_algorithms::ec::k256::{
    curve_order, scalar_mult, scalar_mult_base_g, to_be_bytes32, S256Point,
};
use btcrypt_algorithms::hash::hash256;
use btcrypt_api::error::validate;
use btcrypt_api::{Error, Result, ResultExt, Signature as SignatureTrait};
use btcrypt_common::SecretBuffer;
use btcrypt_params::network::SHA256_SIZE;
use btcrypt_params::secp256k1::SECP256K1_SCALAR_SIZE;
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;

/// Deterministic ECDSA over secp256k1 with hash256 message digests
pub struct Secp256k1Ecdsa;

/// Sign `z` with the secret held in `secret`
pub(crate) fn sign_digest(
    secret: &SecretBuffer<SECP256K1_SCALAR_SIZE>,
    z: &BigUint,
) -> Result<Signature> {
    if z.bits() > 256 {
        return Err(Error::range("ecdsa::sign", "digest must be below 2^256"));
    }
    let n = curve_order();
    let e = BigUint::from_bytes_be(secret.as_slice());

    let k = deterministic_k(secret, z)?;
    let r = match scalar_mult_base_g(&k)?.x() {
        Some(x) => x % n,
        None => {
            return Err(Error::range("ecdsa::sign", "nonce point is the identity"));
        }
    };
    let k_inv = k.modpow(&(n - 2u32), n);
    let mut s = ((z + &r * &e) * k_inv) % n;
    if s > n >> 1 {
        s = n - s;
    }

    let sig = Signature::new(r, s).with_context("ecdsa::sign")?;
    trace!("created {}", sig);
    Ok(sig)
}

/// Sign the digest `z` with secret `e`.
///
/// Fails with `InvalidSecret` unless `1 <= e <= n-1`.
pub fn sign(secret: &BigUint, z: &BigUint) -> Result<Signature> {
    PrivateKey::new(secret.clone())?.sign(z)
}

/// Check `signature` over the digest `z` against `public_key`.
///
/// Returns `Ok(false)` for a signature that does not match, including any
/// signature checked against the point at infinity.
pub fn verify(public_key: &S256Point, z: &BigUint, signature: &Signature) -> Result<bool> {
    let n = curve_order();
    if public_key.is_identity() {
        trace!("verify against the point at infinity rejected");
        return Ok(false);
    }

    let s_inv = signature.s().modpow(&(n - 2u32), n);
    let u = (z * &s_inv) % n;
    let v = (signature.r() * &s_inv) % n;
    let total = scalar_mult_base_g(&u)?.add(&scalar_mult(&v, public_key)?)?;

    let valid = match total.x() {
        Some(x) => {
            let x = x % n;
            to_be_bytes32(&x)[..]
                .ct_eq(&to_be_bytes32(signature.r())[..])
                .into()
        }
        None => false,
    };
    trace!("verify {}: {}", signature, valid);
    Ok(valid)
}

/// The public point `secret·G`
pub fn public_key(secret: &BigUint) -> Result<S256Point> {
    Ok(PrivateKey::new(secret.clone())?.public_key().clone())
}

fn digest_to_int(digest: &[u8], context: &'static str) -> Result<BigUint> {
    validate::length(context, digest.len(), SHA256_SIZE)?;
    Ok(BigUint::from_bytes_be(digest))
}

impl SignatureTrait for Secp256k1Ecdsa {
    type PublicKey = S256Point;
    type SecretKey = PrivateKey;
    type SignatureData = Signature;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        "ECDSA-secp256k1"
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair> {
        let secret_key = PrivateKey::random(rng)?;
        Ok((secret_key.public_key().clone(), secret_key))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    /// Sign a 32-byte digest such as a Bitcoin sighash
    fn sign_prehashed(digest: &[u8], secret_key: &Self::SecretKey) -> Result<Self::SignatureData> {
        let z = digest_to_int(digest, "Secp256k1Ecdsa::sign_prehashed")?;
        sign_digest(secret_key.secret_buffer(), &z)
    }

    fn verify_prehashed(
        digest: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<bool> {
        let z = digest_to_int(digest, "Secp256k1Ecdsa::verify_prehashed")?;
        verify(public_key, &z, signature)
    }

    /// Sign `hash256(message)`
    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> Result<Self::SignatureData> {
        Self::sign_prehashed(&hash256(message), secret_key)
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<bool> {
        Self::verify_prehashed(&hash256(message), signature, public_key)
    }
}
