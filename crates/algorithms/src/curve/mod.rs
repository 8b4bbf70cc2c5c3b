//! Short-Weierstrass elliptic curves over prime fields
//!
//! A curve `y² = x³ + a·x + b` is described by [`CurveParams`], whose
//! coefficients are validated once. [`Point`] carries its curve and either an
//! affine coordinate pair or the explicit point at infinity.

use crate::field::FieldElement;
use crate::{Error, Result};
use core::fmt;
use num_bigint::{BigInt, BigUint, Sign};

/// Coefficients of a non-singular curve `y² = x³ + a·x + b`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CurveParams {
    a: FieldElement,
    b: FieldElement,
}

impl CurveParams {
    /// Validate a pair of coefficients.
    ///
    /// Both must belong to the same field and the discriminant
    /// `4a³ + 27b²` must be non-zero.
    pub fn new(a: FieldElement, b: FieldElement) -> Result<Self> {
        if !a.same_field(&b) {
            return Err(Error::IncompatibleField {
                context: "CurveParams::new",
            });
        }
        let four_a_cubed = a.square().mul(&a)?.scale(4);
        let twenty_seven_b_squared = b.square().scale(27);
        if four_a_cubed.add(&twenty_seven_b_squared)?.is_zero() {
            return Err(Error::SingularCurve {
                context: "CurveParams::new",
            });
        }
        Ok(Self { a, b })
    }

    /// The `a` coefficient
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    /// The `b` coefficient
    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// Whether `(x, y)` satisfies the curve equation
    pub fn contains(&self, x: &FieldElement, y: &FieldElement) -> Result<bool> {
        let lhs = y.square();
        let rhs = x.square().mul(x)?.add(&self.a.mul(x)?)?.add(&self.b)?;
        Ok(lhs == rhs)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct Affine {
    x: FieldElement,
    y: FieldElement,
}

/// A point on a [`CurveParams`] curve
///
/// Equality compares the curve as well as the coordinates, so the point at
/// infinity of one curve differs from that of another.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    curve: CurveParams,
    coords: Option<Affine>,
}

impl Point {
    /// Create a finite point, checking the curve equation
    pub fn new(curve: &CurveParams, x: FieldElement, y: FieldElement) -> Result<Self> {
        let point = Self::new_unchecked(curve, x, y)?;
        if !point.is_on_curve()? {
            return Err(Error::PointNotOnCurve {
                context: "Point::new",
            });
        }
        Ok(point)
    }

    /// Create a finite point without checking the curve equation.
    ///
    /// Coordinates must still share the curve's field. Use
    /// [`Point::is_on_curve`] to inspect the result.
    pub fn new_unchecked(curve: &CurveParams, x: FieldElement, y: FieldElement) -> Result<Self> {
        if !x.same_field(&y) || !x.same_field(&curve.a) {
            return Err(Error::IncompatibleField {
                context: "Point::new",
            });
        }
        Ok(Self {
            curve: curve.clone(),
            coords: Some(Affine { x, y }),
        })
    }

    /// The identity of the group on `curve`
    pub fn infinity(curve: &CurveParams) -> Self {
        Self {
            curve: curve.clone(),
            coords: None,
        }
    }

    /// The curve this point lives on
    pub fn curve(&self) -> &CurveParams {
        &self.curve
    }

    /// Whether this is the point at infinity
    pub fn is_infinity(&self) -> bool {
        self.coords.is_none()
    }

    /// Affine x, absent for the point at infinity
    pub fn x(&self) -> Option<&FieldElement> {
        self.coords.as_ref().map(|c| &c.x)
    }

    /// Affine y, absent for the point at infinity
    pub fn y(&self) -> Option<&FieldElement> {
        self.coords.as_ref().map(|c| &c.y)
    }

    /// Whether the coordinates satisfy the curve equation
    pub fn is_on_curve(&self) -> Result<bool> {
        match &self.coords {
            None => Ok(true),
            Some(Affine { x, y }) => self.curve.contains(x, y),
        }
    }

    /// Whether `other` lies on the same curve
    pub fn is_same_curve(&self, other: &Self) -> bool {
        self.curve == other.curve
    }

    /// The inverse `-P = (x, -y)`
    pub fn neg(&self) -> Self {
        Self {
            curve: self.curve.clone(),
            coords: self.coords.as_ref().map(|c| Affine {
                x: c.x.clone(),
                y: c.y.neg(),
            }),
        }
    }

    /// Group addition
    pub fn add(&self, other: &Self) -> Result<Self> {
        if !self.is_same_curve(other) {
            return Err(Error::CurveMismatch {
                context: "Point::add",
            });
        }
        let (p, q) = match (&self.coords, &other.coords) {
            (None, _) => return Ok(other.clone()),
            (_, None) => return Ok(self.clone()),
            (Some(p), Some(q)) => (p, q),
        };

        if p.x == q.x && p.y != q.y {
            return Ok(Self::infinity(&self.curve));
        }
        if p == q {
            return self.double();
        }

        // m = (y2 - y1) / (x2 - x1)
        let m = q.y.sub(&p.y)?.div(&q.x.sub(&p.x)?)?;
        let x3 = m.square().sub(&p.x)?.sub(&q.x)?;
        let y3 = m.mul(&p.x.sub(&x3)?)?.sub(&p.y)?;
        Ok(self.with_coords(x3, y3))
    }

    /// Add the point to itself
    pub fn double(&self) -> Result<Self> {
        let p = match &self.coords {
            None => return Ok(self.clone()),
            Some(p) => p,
        };
        // Vertical tangent
        if p.y.is_zero() {
            return Ok(Self::infinity(&self.curve));
        }

        // m = (3x² + a) / 2y
        let m = p
            .x
            .square()
            .scale(3)
            .add(&self.curve.a)?
            .div(&p.y.scale(2))?;
        let x3 = m.square().sub(&p.x.scale(2))?;
        let y3 = m.mul(&p.x.sub(&x3)?)?.sub(&p.y)?;
        Ok(self.with_coords(x3, y3))
    }

    /// Scalar multiplication `k·P` by double-and-add, least significant bit first
    pub fn scalar_mul(&self, k: &BigUint) -> Result<Self> {
        let mut current = self.clone();
        let mut result = Self::infinity(&self.curve);
        for i in 0..k.bits() {
            if k.bit(i) {
                result = result.add(&current)?;
            }
            current = current.double()?;
        }
        Ok(result)
    }

    /// Scalar multiplication by a signed integer; negative scalars are rejected
    pub fn scalar_mul_signed(&self, k: &BigInt) -> Result<Self> {
        if k.sign() == Sign::Minus {
            return Err(Error::InvalidScalar {
                context: "Point::scalar_mul",
                message: format!("negative multiplier {}", k),
            });
        }
        self.scalar_mul(k.magnitude())
    }

    fn with_coords(&self, x: FieldElement, y: FieldElement) -> Self {
        Self {
            curve: self.curve.clone(),
            coords: Some(Affine { x, y }),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coords {
            None => write!(f, "Point(infinity)"),
            Some(Affine { x, y }) => write!(
                f,
                "Point({},{})_{}_{} FieldElement({})",
                x.value(),
                y.value(),
                self.curve.a.value(),
                self.curve.b.value(),
                x.modulus()
            ),
        }
    }
}
