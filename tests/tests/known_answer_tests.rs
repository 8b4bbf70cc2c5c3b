//! Known-answer tests across the algorithms and signing crates

use btcrypt_algorithms::base58::{decode_base58_checksum, encode_base58, encode_base58_checksum};
use btcrypt_algorithms::k256::{decode_address, scalar_mult_base_g};
use btcrypt_algorithms::{Error, S256Point};
use btcrypt_sign::{verify, PrivateKey, Signature};
use btcrypt_tests::vectors::{ADDRESS_VECTORS, BASE58_VECTORS, SEC_VECTORS, ZERO_BYTES_CHECKSUM};
use btcrypt_tests::{big, init_logging};

#[test]
fn test_sec_vectors() {
    init_logging();
    for vector in SEC_VECTORS {
        let point = scalar_mult_base_g(&big(vector.secret)).unwrap();
        assert_eq!(hex::encode(point.serialize_sec(false)), vector.uncompressed);
        assert_eq!(hex::encode(point.serialize_sec(true)), vector.compressed);

        let from_compressed = S256Point::parse_sec(&hex::decode(vector.compressed).unwrap()).unwrap();
        assert_eq!(from_compressed, point);
    }
}

#[test]
fn test_address_vectors() {
    for vector in ADDRESS_VECTORS {
        let key = PrivateKey::new(big(vector.secret)).unwrap();
        let address = key.public_key().address(vector.compressed, vector.network);
        assert_eq!(address, vector.address, "secret {}", vector.secret);

        let (network, hash) = decode_address(vector.address).unwrap();
        assert_eq!(network, vector.network);
        assert_eq!(hash, key.public_key().hash160(vector.compressed));
    }
}

#[test]
fn test_base58_vectors() {
    for (payload, expected) in BASE58_VECTORS {
        assert_eq!(encode_base58(&hex::decode(payload).unwrap()), *expected);
    }
    assert_eq!(encode_base58_checksum(&[0u8; 32]), ZERO_BYTES_CHECKSUM);
    assert_eq!(decode_base58_checksum(ZERO_BYTES_CHECKSUM).unwrap(), vec![0u8; 32]);
}

#[test]
fn test_tampered_address_rejected() {
    let mut address = ADDRESS_VECTORS[0].address.to_string();
    address.pop();
    address.push('M');
    assert!(matches!(
        decode_address(&address),
        Err(Error::ChecksumMismatch { .. })
    ));
}

#[test]
fn test_der_signature_from_wire() {
    // Signature and public key from a mainnet P2PKH input
    let der = hex::decode(
        "3045022100ed81ff192e75a3fd2304004dcadb746fa5e24c5031ccfcf21320b0277457c98f02207a986d955c6e0cb35d446a89d3f56100f4d7f67801c31967743a9c8e10615bed",
    )
    .unwrap();
    let sig = Signature::from_der(&der).unwrap();
    assert_eq!(
        sig.r(),
        &big("ed81ff192e75a3fd2304004dcadb746fa5e24c5031ccfcf21320b0277457c98f")
    );
    assert_eq!(
        sig.s(),
        &big("7a986d955c6e0cb35d446a89d3f56100f4d7f67801c31967743a9c8e10615bed")
    );
    assert_eq!(sig.to_der(), der);

    let sec = hex::decode("0349fc4e631e3624a545de3f89f5d8684c7b8138bd94bdd531d2e213bf016b278a").unwrap();
    let point = S256Point::parse_sec(&sec).unwrap();
    let z = big("27e0c5994dec7824e56dec6b2fcb342eb7cdb0d0957c2fce9882f715e85d81a6");
    assert!(verify(&point, &z, &sig).unwrap());
}

#[test]
fn test_programming_bitcoin_signature() {
    let key = PrivateKey::new(big("3039")).unwrap();
    let sig = key.sign_message(b"Programming Bitcoin!").unwrap();
    assert_eq!(
        hex::encode(sig.to_der()),
        "30450221008eeacac05e4c29e793b5287ed044637132ce9ead7fded533e7441d87a8dc9c23022036674f81f10c7fb347c1224bd546813ea24ada6f642c02f2248516e3aa8cb303"
    );
    let (parsed, compressed, network) =
        PrivateKey::from_wif(&key.wif(true, btcrypt_api::Network::Testnet)).unwrap();
    assert_eq!(parsed, key);
    assert!(compressed);
    assert_eq!(network, btcrypt_api::Network::Testnet);
}
