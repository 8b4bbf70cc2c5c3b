//! secp256k1 private keys

use super::{sign_digest, Signature};
use btcrypt_algorithms::ec::k256::{
    curve_order, generate_keypair, scalar_mult_base_g, to_be_bytes32, S256Point,
};
use btcrypt_algorithms::encoding::base58::{decode_base58_checksum, encode_base58_checksum};
use btcrypt_algorithms::hash::hash256;
use btcrypt_api::{Error, Network, Result, ResultExt};
use btcrypt_common::SecretBuffer;
use btcrypt_params::network::WIF_COMPRESSED_SUFFIX;
use btcrypt_params::secp256k1::SECP256K1_SCALAR_SIZE;
use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// A secret scalar `e` in `[1, n-1]` with its public point `e·G`
///
/// The secret is held in a [`SecretBuffer`] and wiped when the key is dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrivateKey {
    secret: SecretBuffer<SECP256K1_SCALAR_SIZE>,
    point: S256Point,
}

impl Zeroize for PrivateKey {
    fn zeroize(&mut self) {
        self.secret.zeroize();
    }
}

impl PrivateKey {
    /// Create a key from its secret scalar.
    ///
    /// Fails with `InvalidSecret` unless `1 <= secret <= n-1`.
    pub fn new(secret: BigUint) -> Result<Self> {
        if secret.is_zero() || secret >= *curve_order() {
            return Err(Error::secret(
                "PrivateKey::new",
                "secret must lie in [1, n-1]",
            ));
        }
        let point = scalar_mult_base_g(&secret)?;
        let mut bytes = to_be_bytes32(&secret);
        let key = Self {
            secret: SecretBuffer::new(bytes),
            point,
        };
        bytes.zeroize();
        Ok(key)
    }

    /// Create a key from a 32-byte big-endian secret
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let buffer = SecretBuffer::<SECP256K1_SCALAR_SIZE>::from_slice(bytes)
            .with_context("PrivateKey::from_bytes")?;
        Self::new(BigUint::from_bytes_be(buffer.as_slice()))
    }

    /// Generate a fresh key from a cryptographic RNG
    pub fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self> {
        let (secret, point) = generate_keypair(rng)?;
        Ok(Self {
            secret: SecretBuffer::new(to_be_bytes32(&secret)),
            point,
        })
    }

    /// The secret scalar
    pub fn secret(&self) -> BigUint {
        BigUint::from_bytes_be(self.secret.as_slice())
    }

    pub(crate) fn secret_buffer(&self) -> &SecretBuffer<SECP256K1_SCALAR_SIZE> {
        &self.secret
    }

    /// The public point `secret·G`
    pub fn public_key(&self) -> &S256Point {
        &self.point
    }

    /// The secret as 64 lowercase hex digits
    pub fn to_hex(&self) -> String {
        self.secret
            .as_slice()
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect()
    }

    /// Sign the digest `z`, which must be below 2^256
    pub fn sign(&self, z: &BigUint) -> Result<Signature> {
        sign_digest(&self.secret, z)
    }

    /// Sign `hash256(message)`
    pub fn sign_message(&self, message: &[u8]) -> Result<Signature> {
        let z = BigUint::from_bytes_be(&hash256(message));
        self.sign(&z)
    }

    /// Export in Wallet Import Format
    pub fn wif(&self, compressed: bool, network: Network) -> String {
        let mut payload = Vec::with_capacity(2 + SECP256K1_SCALAR_SIZE);
        payload.push(network.wif_prefix());
        payload.extend_from_slice(self.secret.as_slice());
        if compressed {
            payload.push(WIF_COMPRESSED_SUFFIX);
        }
        let encoded = encode_base58_checksum(&payload);
        payload.zeroize();
        encoded
    }

    /// Import a WIF string.
    ///
    /// Returns the key, whether its public point is meant to be used
    /// compressed, and the network of the version byte.
    pub fn from_wif(wif: &str) -> Result<(Self, bool, Network)> {
        const CTX: &str = "PrivateKey::from_wif";

        let mut payload = decode_base58_checksum(wif)?;
        let compressed = match payload.len() {
            n if n == 1 + SECP256K1_SCALAR_SIZE => false,
            n if n == 2 + SECP256K1_SCALAR_SIZE => {
                if payload[n - 1] != WIF_COMPRESSED_SUFFIX {
                    payload.zeroize();
                    return Err(Error::encoding(CTX, "invalid compression marker"));
                }
                true
            }
            n => {
                payload.zeroize();
                return Err(Error::InvalidLength {
                    context: CTX,
                    expected: 1 + SECP256K1_SCALAR_SIZE,
                    actual: n,
                });
            }
        };
        let network = match Network::from_wif_prefix(payload[0]) {
            Some(network) => network,
            None => {
                let prefix = payload[0];
                payload.zeroize();
                return Err(Error::encoding(
                    CTX,
                    format!("unknown WIF version 0x{:02x}", prefix),
                ));
            }
        };
        let key = Self::from_bytes(&payload[1..1 + SECP256K1_SCALAR_SIZE]);
        payload.zeroize();
        Ok((key?, compressed, network))
    }
}
