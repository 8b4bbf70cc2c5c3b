//! Sign/verify properties for deterministic secp256k1 ECDSA

use btcrypt_algorithms::k256::curve_order;
use btcrypt_algorithms::S256Point;
use btcrypt_api::Signature as SignatureTrait;
use btcrypt_sign::{sign, verify, PrivateKey, Secp256k1Ecdsa, Signature};
use btcrypt_tests::init_logging;
use num_bigint::BigUint;
use proptest::prelude::*;

fn scalar() -> impl Strategy<Value = BigUint> {
    any::<[u8; 32]>().prop_filter_map("scalar in [1, n-1]", |bytes| {
        let k = BigUint::from_bytes_be(&bytes);
        (k > BigUint::from(0u32) && &k < curve_order()).then_some(k)
    })
}

fn digest() -> impl Strategy<Value = BigUint> {
    any::<[u8; 32]>().prop_map(|bytes| BigUint::from_bytes_be(&bytes))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn signatures_verify(e in scalar(), z in digest()) {
        init_logging();
        let key = PrivateKey::new(e).unwrap();
        let sig = key.sign(&z).unwrap();
        prop_assert!(sig.is_low_s());
        prop_assert!(verify(key.public_key(), &z, &sig).unwrap());
    }

    #[test]
    fn signing_is_deterministic(e in scalar(), z in digest()) {
        prop_assert_eq!(sign(&e, &z).unwrap(), sign(&e, &z).unwrap());
    }

    #[test]
    fn flipped_digest_bit_fails(e in scalar(), z in digest(), bit in 0u64..256) {
        let key = PrivateKey::new(e).unwrap();
        let sig = key.sign(&z).unwrap();
        let mut tampered = z.clone();
        tampered.set_bit(bit, !z.bit(bit));
        prop_assert!(!verify(key.public_key(), &tampered, &sig).unwrap());
    }

    #[test]
    fn flipped_signature_bit_fails(e in scalar(), z in digest(), bit in 0u64..64, flip_r in any::<bool>()) {
        let key = PrivateKey::new(e).unwrap();
        let sig = key.sign(&z).unwrap();
        let (mut r, mut s) = (sig.r().clone(), sig.s().clone());
        let target = if flip_r { &mut r } else { &mut s };
        let current = target.bit(bit);
        target.set_bit(bit, !current);
        if let Ok(tampered) = Signature::new(r, s) {
            prop_assert!(!verify(key.public_key(), &z, &tampered).unwrap());
        }
    }

    #[test]
    fn wrong_key_fails(e1 in scalar(), e2 in scalar(), z in digest()) {
        prop_assume!(e1 != e2);
        let sig = sign(&e1, &z).unwrap();
        let other = PrivateKey::new(e2).unwrap();
        prop_assert!(!verify(other.public_key(), &z, &sig).unwrap());
    }

    #[test]
    fn message_api_round_trip(message in prop::collection::vec(any::<u8>(), 0..128)) {
        let keypair = Secp256k1Ecdsa::keypair(&mut rand::rngs::OsRng).unwrap();
        let pk = Secp256k1Ecdsa::public_key(&keypair);
        let sk = Secp256k1Ecdsa::secret_key(&keypair);
        let sig = Secp256k1Ecdsa::sign(&message, &sk).unwrap();
        prop_assert!(Secp256k1Ecdsa::verify(&message, &sig, &pk).unwrap());
        let der = sig.to_der();
        prop_assert!(Secp256k1Ecdsa::verify(&message, &Signature::from_der(&der).unwrap(), &pk).unwrap());
    }
}

#[test]
fn identity_public_key_never_verifies() {
    let sig = sign(&BigUint::from(1u32), &BigUint::from(1u32)).unwrap();
    assert!(!verify(&S256Point::identity(), &BigUint::from(1u32), &sig).unwrap());
}
