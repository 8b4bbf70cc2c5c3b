//! Group-law properties of the generic curve and of secp256k1

use btcrypt_algorithms::k256::{curve_order, scalar_mult_base_g};
use btcrypt_algorithms::{CurveParams, FieldElement, Point, S256Point};
use num_bigint::BigUint;
use proptest::prelude::*;
use std::sync::OnceLock;

const PRIME: u64 = 223;

fn curve() -> CurveParams {
    CurveParams::new(
        FieldElement::from_u64(0, PRIME).unwrap(),
        FieldElement::from_u64(7, PRIME).unwrap(),
    )
    .unwrap()
}

/// Every finite point of `y² = x³ + 7` over F_223
fn finite_points() -> &'static [Point] {
    static POINTS: OnceLock<Vec<Point>> = OnceLock::new();
    POINTS.get_or_init(|| {
        let curve = curve();
        let mut points = Vec::new();
        for x in 0..PRIME {
            let fx = FieldElement::from_u64(x, PRIME).unwrap();
            for y in 0..PRIME {
                let fy = FieldElement::from_u64(y, PRIME).unwrap();
                if curve.contains(&fx, &fy).unwrap() {
                    points.push(Point::new(&curve, fx.clone(), fy).unwrap());
                }
            }
        }
        points
    })
}

fn point() -> impl Strategy<Value = Point> {
    prop_oneof![
        1 => Just(Point::infinity(&curve())),
        20 => (0..finite_points().len()).prop_map(|i| finite_points()[i].clone()),
    ]
}

proptest! {
    #[test]
    fn identity_and_inverse(p in point()) {
        let inf = Point::infinity(&curve());
        prop_assert_eq!(p.add(&inf).unwrap(), p.clone());
        prop_assert_eq!(inf.add(&p).unwrap(), p.clone());
        prop_assert!(p.add(&p.neg()).unwrap().is_infinity());
    }

    #[test]
    fn addition_is_commutative(p in point(), q in point()) {
        prop_assert_eq!(p.add(&q).unwrap(), q.add(&p).unwrap());
    }

    #[test]
    fn addition_is_associative(p in point(), q in point(), r in point()) {
        let left = p.add(&q).unwrap().add(&r).unwrap();
        let right = p.add(&q.add(&r).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn sums_stay_on_curve(p in point(), q in point()) {
        prop_assert!(p.add(&q).unwrap().is_on_curve().unwrap());
        prop_assert_eq!(p.double().unwrap(), p.add(&p).unwrap());
    }

    #[test]
    fn scalar_multiplication_distributes(p in point(), k1 in 0u32..500, k2 in 0u32..500) {
        let sum = p.scalar_mul(&BigUint::from(k1 + k2)).unwrap();
        let split = p
            .scalar_mul(&BigUint::from(k1))
            .unwrap()
            .add(&p.scalar_mul(&BigUint::from(k2)).unwrap())
            .unwrap();
        prop_assert_eq!(sum, split);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn secp256k1_scalar_addition(k1 in any::<[u8; 32]>(), k2 in any::<[u8; 32]>()) {
        let n = curve_order();
        let k1 = BigUint::from_bytes_be(&k1) % n;
        let k2 = BigUint::from_bytes_be(&k2) % n;
        let combined = scalar_mult_base_g(&((&k1 + &k2) % n)).unwrap();
        let separate = scalar_mult_base_g(&k1)
            .unwrap()
            .add(&scalar_mult_base_g(&k2).unwrap())
            .unwrap();
        prop_assert_eq!(combined, separate);
    }

    #[test]
    fn secp256k1_multiples_stay_on_curve(k in any::<[u8; 32]>()) {
        let point = scalar_mult_base_g(&BigUint::from_bytes_be(&k)).unwrap();
        prop_assert!(point.as_point().is_on_curve().unwrap());
        prop_assert!(point.add(&point.negate()).unwrap().is_identity());
    }
}

#[test]
fn generator_has_order_n() {
    let g = S256Point::generator();
    let n = curve_order();
    assert!(g.mul(n).unwrap().is_identity());
    assert_eq!(g.mul(&(n + 1u32)).unwrap(), g);
    assert_eq!(g.mul(&(n - 1u32)).unwrap(), g.negate());
}

#[test]
fn small_curve_has_expected_size() {
    // Hasse bound for p = 223
    let count = finite_points().len() + 1;
    assert!(count > 223 + 1 - 30 && count < 223 + 1 + 30);
}
