//! Text encodings for keys and addresses

pub mod base58;

pub use base58::{
    decode_base58, decode_base58_checksum, encode_base58, encode_base58_checksum,
};
