//! DER encoding of ECDSA signatures
//!
//! `SEQUENCE { INTEGER r, INTEGER s }` with short-form lengths:
//! `0x30 len 0x02 rlen r 0x02 slen s`.

use super::signature::Signature;
use btcrypt_api::error::validate;
use btcrypt_api::{Error, Result};
use num_bigint::BigUint;

const SEQUENCE_TAG: u8 = 0x30;
const INTEGER_TAG: u8 = 0x02;

/// Largest INTEGER body: 32 bytes plus a sign-padding zero
const MAX_INTEGER_LEN: usize = 33;

impl Signature {
    /// Serialize signature to DER format
    pub fn to_der(&self) -> Vec<u8> {
        let r = encode_integer(self.r());
        let s = encode_integer(self.s());

        let mut der = Vec::with_capacity(6 + r.len() + s.len());
        der.push(SEQUENCE_TAG);
        der.push((4 + r.len() + s.len()) as u8);
        for body in [&r, &s] {
            der.push(INTEGER_TAG);
            der.push(body.len() as u8);
            der.extend_from_slice(body);
        }
        der
    }

    /// Parse signature from DER format.
    ///
    /// Every structural violation fails with `MalformedSignature`, including
    /// components that decode outside `[1, n-1]`.
    pub fn from_der(der: &[u8]) -> Result<Self> {
        const CTX: &str = "Signature::from_der";

        validate::signature_format(der.len() >= 2, CTX, "DER signature too short")?;
        validate::signature_format(der[0] == SEQUENCE_TAG, CTX, "invalid DER SEQUENCE tag")?;
        validate::signature_format(
            der[1] as usize + 2 == der.len(),
            CTX,
            "DER length does not match the signature length",
        )?;

        let mut pos = 2;
        let r = decode_integer(der, &mut pos, "r")?;
        let s = decode_integer(der, &mut pos, "s")?;

        validate::signature_format(pos == der.len(), CTX, "trailing bytes after s")?;

        Signature::new(r, s).map_err(|e| Error::malformed_signature(CTX, e.to_string()))
    }
}

/// Minimal big-endian bytes with a leading zero if the high bit is set
fn encode_integer(value: &BigUint) -> Vec<u8> {
    let bytes = value.to_bytes_be();
    if bytes[0] & 0x80 == 0 {
        bytes
    } else {
        let mut result = Vec::with_capacity(bytes.len() + 1);
        result.push(0x00);
        result.extend_from_slice(&bytes);
        result
    }
}

/// Read one `0x02 len body` field starting at `pos` and advance past it
fn decode_integer(der: &[u8], pos: &mut usize, name: &'static str) -> Result<BigUint> {
    const CTX: &str = "Signature::from_der";

    let header = der.get(*pos..*pos + 2).ok_or_else(|| {
        Error::malformed_signature(CTX, format!("missing INTEGER header for {}", name))
    })?;
    if header[0] != INTEGER_TAG {
        return Err(Error::malformed_signature(
            CTX,
            format!("invalid DER INTEGER tag for {}", name),
        ));
    }
    let len = header[1] as usize;
    if len == 0 || len > MAX_INTEGER_LEN {
        return Err(Error::malformed_signature(
            CTX,
            format!("invalid INTEGER length {} for {}", len, name),
        ));
    }
    *pos += 2;

    let body = der.get(*pos..*pos + len).ok_or_else(|| {
        Error::malformed_signature(CTX, format!("truncated INTEGER for {}", name))
    })?;
    *pos += len;
    Ok(BigUint::from_bytes_be(body))
}
