//! Prime field arithmetic
//!
//! A [`FieldElement`] is an integer in `[0, p)` tagged with its prime modulus
//! `p`. Elements are immutable; every operation returns a fresh element.
//! Combining elements of different fields is an error rather than a silent
//! reduction into one of them.

mod prime;

pub use prime::is_prime;
pub(crate) use prime::SECP256K1_P;

use crate::{Error, Result};
use core::fmt;
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

/// An element of the prime field F_p
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldElement {
    value: BigUint,
    modulus: BigUint,
}

impl FieldElement {
    /// Create an element of F_`modulus`.
    ///
    /// Fails with `InvalidModulus` if `modulus` is not prime and with `Range`
    /// if `value` is not below `modulus`. The secp256k1 prime is accepted
    /// without running the primality test.
    pub fn new(value: BigUint, modulus: BigUint) -> Result<Self> {
        if modulus != *SECP256K1_P && !is_prime(&modulus) {
            return Err(Error::InvalidModulus {
                context: "FieldElement::new",
                modulus: modulus.to_string(),
            });
        }
        Self::check_range(&value, &modulus, "FieldElement::new")?;
        Ok(Self { value, modulus })
    }

    /// Create an element from machine integers
    pub fn from_u64(value: u64, modulus: u64) -> Result<Self> {
        Self::new(BigUint::from(value), BigUint::from(modulus))
    }

    /// Another element of the same field.
    ///
    /// The modulus was validated when `self` was built, so only the range of
    /// `value` is checked.
    pub fn sibling(&self, value: BigUint) -> Result<Self> {
        Self::check_range(&value, &self.modulus, "FieldElement::sibling")?;
        Ok(Self {
            value,
            modulus: self.modulus.clone(),
        })
    }

    /// Element of the same field holding `value mod p`
    pub fn sibling_reduced(&self, value: &BigUint) -> Self {
        self.with_value(value % &self.modulus)
    }

    /// The additive identity of this element's field
    pub fn zero_like(&self) -> Self {
        self.with_value(BigUint::zero())
    }

    /// The multiplicative identity of this element's field
    pub fn one_like(&self) -> Self {
        self.with_value(BigUint::one())
    }

    /// The integer representative in `[0, p)`
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// The prime modulus
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Whether this is the additive identity
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Whether the integer representative is odd
    pub fn is_odd(&self) -> bool {
        self.value.bit(0)
    }

    /// Whether `other` belongs to the same field
    pub fn same_field(&self, other: &Self) -> bool {
        self.modulus == other.modulus
    }

    /// Field addition
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.ensure_same_field(other, "FieldElement::add")?;
        Ok(self.with_value((&self.value + &other.value) % &self.modulus))
    }

    /// Field subtraction
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.ensure_same_field(other, "FieldElement::sub")?;
        let value = (&self.value + &self.modulus - &other.value) % &self.modulus;
        Ok(self.with_value(value))
    }

    /// Field multiplication
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.ensure_same_field(other, "FieldElement::mul")?;
        Ok(self.with_value((&self.value * &other.value) % &self.modulus))
    }

    /// Multiply by a small integer constant, e.g. the `2` in `2·y`
    pub fn scale(&self, k: u32) -> Self {
        self.with_value((&self.value * k) % &self.modulus)
    }

    /// `self · self`
    pub fn square(&self) -> Self {
        self.with_value((&self.value * &self.value) % &self.modulus)
    }

    /// Additive inverse
    pub fn neg(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        self.with_value(&self.modulus - &self.value)
    }

    /// Exponentiation by any integer, including negative exponents.
    ///
    /// The exponent is first reduced into `[0, p − 1)`, the order of the
    /// multiplicative group, so `a^(-1)` is the inverse of a non-zero `a`.
    /// The reduction applies to every base: `0^(k·(p−1))` is 1 and a
    /// negative power of zero is 0.
    pub fn pow<E: Into<BigInt>>(&self, exponent: E) -> Result<Self> {
        let exponent = exponent.into();
        let order = BigInt::from(&self.modulus - 1u32);
        let mut reduced = exponent % &order;
        if reduced.sign() == Sign::Minus {
            reduced += &order;
        }
        Ok(self.pow_unsigned(reduced.magnitude()))
    }

    /// Exponentiation by a non-negative integer (square-and-multiply)
    pub fn pow_unsigned(&self, exponent: &BigUint) -> Self {
        self.with_value(self.value.modpow(exponent, &self.modulus))
    }

    /// Multiplicative inverse via Fermat's little theorem: `a^(p−2)`
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::Division {
                context: "FieldElement::invert",
            });
        }
        let exponent = &self.modulus - 2u32;
        Ok(self.pow_unsigned(&exponent))
    }

    /// Field division `self · other^(p−2)`
    pub fn div(&self, other: &Self) -> Result<Self> {
        self.ensure_same_field(other, "FieldElement::div")?;
        let inverse = other
            .invert()
            .map_err(|e| e.with_context("FieldElement::div"))?;
        self.mul(&inverse)
    }

    fn with_value(&self, value: BigUint) -> Self {
        Self {
            value,
            modulus: self.modulus.clone(),
        }
    }

    fn ensure_same_field(&self, other: &Self, context: &'static str) -> Result<()> {
        if !self.same_field(other) {
            return Err(Error::IncompatibleField { context });
        }
        Ok(())
    }

    fn check_range(value: &BigUint, modulus: &BigUint, context: &'static str) -> Result<()> {
        if value >= modulus {
            return Err(Error::range(
                context,
                format!("{} is not below the modulus {}", value, modulus),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement_{}({})", self.modulus, self.value)
    }
}
