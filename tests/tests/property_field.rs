//! Property tests for prime-field arithmetic

use btcrypt_algorithms::field::is_prime;
use btcrypt_algorithms::{Error, FieldElement};
use btcrypt_tests::init_logging;
use num_bigint::BigUint;
use proptest::prelude::*;

const PRIMES: [u64; 6] = [13, 19, 223, 65_537, 2_147_483_647, 18_446_744_073_709_551_557];

fn element() -> impl Strategy<Value = FieldElement> {
    (0..PRIMES.len(), any::<u64>()).prop_map(|(i, v)| {
        let p = PRIMES[i];
        FieldElement::from_u64(v % p, p).unwrap()
    })
}

fn nonzero_element() -> impl Strategy<Value = FieldElement> {
    element().prop_filter("non-zero", |e| !e.is_zero())
}

proptest! {
    #[test]
    fn fermat_little_theorem(a in nonzero_element()) {
        init_logging();
        let p_minus_one = a.modulus() - 1u32;
        prop_assert_eq!(a.pow_unsigned(&p_minus_one), a.one_like());
        prop_assert_eq!(a.pow(0).unwrap(), a.one_like());
    }

    #[test]
    fn division_by_self_is_one(a in nonzero_element()) {
        prop_assert_eq!(a.div(&a).unwrap(), a.one_like());
        prop_assert_eq!(a.mul(&a.invert().unwrap()).unwrap(), a.one_like());
    }

    #[test]
    fn negative_powers_invert(a in nonzero_element(), e in 1i64..1_000) {
        let forward = a.pow(e).unwrap();
        let backward = a.pow(-e).unwrap();
        prop_assert_eq!(forward.mul(&backward).unwrap(), a.one_like());
    }

    #[test]
    fn additive_inverse(a in element()) {
        prop_assert!(a.add(&a.neg()).unwrap().is_zero());
        prop_assert_eq!(a.sub(&a).unwrap(), a.zero_like());
    }

    #[test]
    fn distributivity((a, b, c) in (0..PRIMES.len(), any::<[u64; 3]>()).prop_map(|(i, v)| {
        let p = PRIMES[i];
        (
            FieldElement::from_u64(v[0] % p, p).unwrap(),
            FieldElement::from_u64(v[1] % p, p).unwrap(),
            FieldElement::from_u64(v[2] % p, p).unwrap(),
        )
    })) {
        let left = a.mul(&b.add(&c).unwrap()).unwrap();
        let right = a.mul(&b).unwrap().add(&a.mul(&c).unwrap()).unwrap();
        prop_assert_eq!(left, right);
        prop_assert_eq!(a.scale(3), a.add(&a).unwrap().add(&a).unwrap());
    }

    #[test]
    fn values_stay_reduced(a in element(), b in element()) {
        if let (Ok(sum), Ok(product)) = (a.add(&b), a.mul(&b)) {
            prop_assert!(sum.value() < sum.modulus());
            prop_assert!(product.value() < product.modulus());
        } else {
            prop_assert!(!a.same_field(&b));
        }
    }
}

#[test]
fn zero_inverse_and_powers() {
    let zero = FieldElement::from_u64(0, 223).unwrap();
    assert!(matches!(zero.invert(), Err(Error::Division { .. })));
    assert!(zero.pow(-1).unwrap().is_zero());
    assert_eq!(zero.pow(222).unwrap(), zero.one_like());
}

#[test]
fn candidate_primes_are_prime() {
    for p in PRIMES {
        assert!(is_prime(&BigUint::from(p)), "{} should be prime", p);
    }
    assert!(!is_prime(&BigUint::from(561u32)));
}
