//! Primality testing for field moduli

use btcrypt_params::secp256k1::SECP256K1_P_HEX;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use once_cell::sync::Lazy;

/// The secp256k1 field prime, parsed once
pub(crate) static SECP256K1_P: Lazy<BigUint> = Lazy::new(|| {
    BigUint::parse_bytes(SECP256K1_P_HEX.as_bytes(), 16).expect("secp256k1 prime constant is valid hex")
});

/// Miller-Rabin witnesses: the first twelve primes.
///
/// This set is exact for every n < 3.3 * 10^24 and a strong probable-prime
/// test above that.
const WITNESSES: [u32; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Miller-Rabin primality test
pub fn is_prime(n: &BigUint) -> bool {
    let two = BigUint::from(2u32);
    if *n < two {
        return false;
    }
    for &w in WITNESSES.iter() {
        let w = BigUint::from(w);
        if *n == w {
            return true;
        }
        if (n % &w).is_zero() {
            return false;
        }
    }

    // n - 1 = d * 2^s with d odd
    let n_minus_one = n - 1u32;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    'witness: for &w in WITNESSES.iter() {
        let mut x = BigUint::from(w).modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}
