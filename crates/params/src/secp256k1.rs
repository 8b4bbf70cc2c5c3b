//! Constants for the secp256k1 curve (SEC 2, section 2.4.1)
//!
//! The curve is y² = x³ + 7 over the prime field F_p. Large integers are kept
//! as big-endian hex strings; the algorithms crate parses them once on first use.

/// Coefficient `a` of the curve equation
pub const SECP256K1_A: u64 = 0;

/// Coefficient `b` of the curve equation
pub const SECP256K1_B: u64 = 7;

/// Field prime p = 2^256 - 2^32 - 977
pub const SECP256K1_P_HEX: &str =
    "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f";

/// Order n of the subgroup generated by G
pub const SECP256K1_N_HEX: &str =
    "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";

/// x-coordinate of the generator G
pub const SECP256K1_GX_HEX: &str =
    "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

/// y-coordinate of the generator G
pub const SECP256K1_GY_HEX: &str =
    "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";

/// Size of a secp256k1 scalar in bytes (32 bytes = 256 bits)
pub const SECP256K1_SCALAR_SIZE: usize = 32;

/// Size of a secp256k1 field element in bytes (32 bytes = 256 bits)
pub const SECP256K1_FIELD_ELEMENT_SIZE: usize = 32;

/// Uncompressed SEC point: 0x04 || x || y
pub const SECP256K1_POINT_UNCOMPRESSED_SIZE: usize = 1 + 2 * SECP256K1_FIELD_ELEMENT_SIZE;

/// Compressed SEC point: 0x02/0x03 || x
pub const SECP256K1_POINT_COMPRESSED_SIZE: usize = 1 + SECP256K1_FIELD_ELEMENT_SIZE;

/// SEC tag for an uncompressed point
pub const SEC_TAG_UNCOMPRESSED: u8 = 0x04;

/// SEC tag for a compressed point with even y
pub const SEC_TAG_EVEN: u8 = 0x02;

/// SEC tag for a compressed point with odd y
pub const SEC_TAG_ODD: u8 = 0x03;

/// SEC encoding of the point at infinity
pub const SEC_TAG_INFINITY: u8 = 0x00;
