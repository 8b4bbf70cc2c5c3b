//! Known-answer vectors shared by the integration tests

use btcrypt_api::Network;

/// Expected address for a secret under one encoding/network combination
#[derive(Debug, Clone, Copy)]
pub struct AddressVector {
    /// Big-endian hex secret scalar
    pub secret: &'static str,
    pub compressed: bool,
    pub network: Network,
    pub address: &'static str,
}

pub const ADDRESS_VECTORS: &[AddressVector] = &[
    AddressVector {
        secret: "29bc9e00",
        compressed: true,
        network: Network::Mainnet,
        address: "148dY81A9BmdpMhvYEVznrM45kWN32vSCN",
    },
    AddressVector {
        secret: "141",
        compressed: false,
        network: Network::Testnet,
        address: "mfx3y63A7TfTtXKkv7Y6QzsPFY6QCBCXiP",
    },
    AddressVector {
        secret: "fcde41b2",
        compressed: false,
        network: Network::Testnet,
        address: "mgY3bVusRUL6ZB2Ss999CSrGVbdRwVpM8s",
    },
    AddressVector {
        secret: "138a",
        compressed: false,
        network: Network::Testnet,
        address: "mmTPbXQFxboEtNRkwfh6K51jvdtHLxGeMA",
    },
    AddressVector {
        secret: "777c6b16216400",
        compressed: true,
        network: Network::Testnet,
        address: "mopVkxp8UhXqRYbCYJsbeE1h1fiF64jcoH",
    },
    AddressVector {
        secret: "12345deadbeef",
        compressed: true,
        network: Network::Mainnet,
        address: "1F1Pn2y6pDb68E5nYJJeba4TLg2U7B6KF1",
    },
];

/// SEC encodings of `secret·G`
#[derive(Debug, Clone, Copy)]
pub struct SecVector {
    /// Big-endian hex secret scalar
    pub secret: &'static str,
    pub uncompressed: &'static str,
    pub compressed: &'static str,
}

pub const SEC_VECTORS: &[SecVector] = &[
    SecVector {
        secret: "1388",
        uncompressed: "04ffe558e388852f0120e46af2d1b370f85854a8eb0841811ece0e3e03d282d57c315dc72890a4f10a1481c031b03b351b0dc79901ca18a00cf009dbdb157a1d10",
        compressed: "02ffe558e388852f0120e46af2d1b370f85854a8eb0841811ece0e3e03d282d57c",
    },
    SecVector {
        secret: "76e54a40efb620",
        uncompressed: "04027f3da1918455e03c46f659266a1bb5204e959db7364d2f473bdf8f0a13cc9dff87647fd023c13b4a4994f17691895806e1b40b57f4fd22581a4f46851f3b06",
        compressed: "02027f3da1918455e03c46f659266a1bb5204e959db7364d2f473bdf8f0a13cc9d",
    },
    SecVector {
        secret: "deadbeef12345",
        uncompressed: "04d90cd625ee87dd38656dd95cf79f65f60f7273b67d3096e68bd81e4f5342691f842efa762fd59961d0e99803c61edba8b3e3f7dc3a341836f97733aebf987121",
        compressed: "03d90cd625ee87dd38656dd95cf79f65f60f7273b67d3096e68bd81e4f5342691f",
    },
];

/// Base58 and Base58Check known answers
pub const BASE58_VECTORS: &[(&str, &str)] = &[
    (
        "7c076ff316692a3d7eb3c3bb0f8b1488cf72e1afcd929e29307032997a838a3d",
        "9MA8fRQrT4u8Zj8ZRd6MAiiyaxb2Y1CMpvVkHQu5hVM6",
    ),
    (
        "eff69ef2b1bd93a66ed5219add4fb51e11a840f404876325a1e8ffe0529a2c",
        "4fE3H2E6XMp4SsxtwinF7w9a34ooUrwWe4WsW1458Pd",
    ),
    (
        "c7207fee197d27c618aea621406f6bf5ef6fca38681d82b2f06fddbdce6feab6",
        "EQJsjkd6JaGwxrjEhfeqPenqHwrBmPQZjJGNSCHBkcF7",
    ),
];

/// Base58Check of 32 zero bytes
pub const ZERO_BYTES_CHECKSUM: &str = "11111111111111111111111111111111273Yts";
