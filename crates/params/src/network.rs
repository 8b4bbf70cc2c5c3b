//! Version bytes and sizes for Base58Check payloads

/// P2PKH address version byte on mainnet
pub const P2PKH_MAINNET_PREFIX: u8 = 0x00;

/// P2PKH address version byte on testnet
pub const P2PKH_TESTNET_PREFIX: u8 = 0x6f;

/// WIF secret export version byte on mainnet
pub const WIF_MAINNET_PREFIX: u8 = 0x80;

/// WIF secret export version byte on testnet
pub const WIF_TESTNET_PREFIX: u8 = 0xef;

/// Trailing marker in a WIF payload for keys whose public point is compressed
pub const WIF_COMPRESSED_SUFFIX: u8 = 0x01;

/// Length of a RIPEMD160(SHA256(x)) digest
pub const HASH160_SIZE: usize = 20;

/// Length of a SHA256 digest
pub const SHA256_SIZE: usize = 32;

/// Number of checksum bytes appended by Base58Check
pub const BASE58_CHECKSUM_SIZE: usize = 4;

/// Base58 alphabet used by Bitcoin (no 0, O, I or l)
pub const BASE58_ALPHABET: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
