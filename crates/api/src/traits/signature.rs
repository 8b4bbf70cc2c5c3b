//! Digital signature traits for btcrypt
//!
//! This module defines the trait a signature scheme implements so that
//! collaborators (transaction validation, SPV checks) can sign and verify
//! without knowing which curve sits underneath.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Core trait for digital signature schemes
///
/// Secret keys are opaque types that cannot be directly manipulated as bytes.
/// Schemes that sign a pre-computed digest (as Bitcoin does with its
/// double-SHA256 sighash) expose that through [`Signature::sign_prehashed`]
/// and [`Signature::verify_prehashed`]; [`Signature::sign`] and
/// [`Signature::verify`] hash the message with the scheme's own digest first.
pub trait Signature {
    /// Public key type for this algorithm
    type PublicKey: Clone;

    /// Secret key type - must be zeroizable but not byte-accessible
    type SecretKey: Zeroize + Clone;

    /// Signature data type
    type SignatureData: Clone;

    /// Key pair type (typically a tuple of public and secret keys)
    type KeyPair;

    /// Returns the name of this signature algorithm
    fn name() -> &'static str;

    /// Generate a new key pair using the provided RNG
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract the public key from a key pair
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract the secret key from a key pair
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Sign a big-endian message digest.
    ///
    /// Signing the same digest with the same key must always produce the
    /// same signature.
    fn sign_prehashed(digest: &[u8], secret_key: &Self::SecretKey)
        -> Result<Self::SignatureData>;

    /// Check a signature over a big-endian message digest.
    ///
    /// Returns `Ok(false)` for a well-formed signature that does not match;
    /// errors are reserved for malformed inputs.
    fn verify_prehashed(
        digest: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<bool>;

    /// Hash a message with the scheme's digest and sign it
    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> Result<Self::SignatureData>;

    /// Hash a message with the scheme's digest and verify a signature over it
    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<bool>;
}
