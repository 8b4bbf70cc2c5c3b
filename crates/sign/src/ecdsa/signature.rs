//! ECDSA signature value

use btcrypt_algorithms::ec::k256::curve_order;
use btcrypt_api::{Error, Result};
use core::fmt;
use num_bigint::BigUint;
use num_traits::Zero;

/// An ECDSA signature `(r, s)` with both components in `[1, n-1]`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "SignatureParts", into = "SignatureParts")
)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Build a signature, rejecting components outside `[1, n-1]` with `Range`
    pub fn new(r: BigUint, s: BigUint) -> Result<Self> {
        check_component("r", &r)?;
        check_component("s", &s)?;
        Ok(Self { r, s })
    }

    /// The `r` component
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// The `s` component
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Whether `s` is in the lower half of `[1, n-1]`
    pub fn is_low_s(&self) -> bool {
        self.s <= curve_order() >> 1
    }
}

fn check_component(name: &str, value: &BigUint) -> Result<()> {
    if value.is_zero() || value >= curve_order() {
        return Err(Error::range(
            "Signature::new",
            format!("{} must lie in [1, n-1]", name),
        ));
    }
    Ok(())
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({:x},{:x})", self.r, self.s)
    }
}

/// Unchecked wire form used by serde; validated on the way in
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct SignatureParts {
    r: BigUint,
    s: BigUint,
}

#[cfg(feature = "serde")]
impl TryFrom<SignatureParts> for Signature {
    type Error = Error;

    fn try_from(parts: SignatureParts) -> Result<Self> {
        Signature::new(parts.r, parts.s)
    }
}

#[cfg(feature = "serde")]
impl From<Signature> for SignatureParts {
    fn from(sig: Signature) -> Self {
        SignatureParts { r: sig.r, s: sig.s }
    }
}
