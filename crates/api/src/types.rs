//! Core types shared across the btcrypt crates

use btcrypt_params::network::{
    P2PKH_MAINNET_PREFIX, P2PKH_TESTNET_PREFIX, WIF_MAINNET_PREFIX, WIF_TESTNET_PREFIX,
};
use core::fmt;

/// Bitcoin network a Base58Check payload belongs to
///
/// The network only selects version bytes; nothing in this workspace talks
/// to a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Network {
    /// Production network
    #[default]
    Mainnet,
    /// Public test network
    Testnet,
}

impl Network {
    /// Version byte prepended to a public-key hash to form a P2PKH address
    pub const fn p2pkh_prefix(self) -> u8 {
        match self {
            Network::Mainnet => P2PKH_MAINNET_PREFIX,
            Network::Testnet => P2PKH_TESTNET_PREFIX,
        }
    }

    /// Version byte prepended to a secret in Wallet Import Format
    pub const fn wif_prefix(self) -> u8 {
        match self {
            Network::Mainnet => WIF_MAINNET_PREFIX,
            Network::Testnet => WIF_TESTNET_PREFIX,
        }
    }

    /// Network owning a P2PKH version byte, if any
    pub const fn from_p2pkh_prefix(prefix: u8) -> Option<Self> {
        match prefix {
            P2PKH_MAINNET_PREFIX => Some(Network::Mainnet),
            P2PKH_TESTNET_PREFIX => Some(Network::Testnet),
            _ => None,
        }
    }

    /// Network owning a WIF version byte, if any
    pub const fn from_wif_prefix(prefix: u8) -> Option<Self> {
        match prefix {
            WIF_MAINNET_PREFIX => Some(Network::Mainnet),
            WIF_TESTNET_PREFIX => Some(Network::Testnet),
            _ => None,
        }
    }

    /// Convenience mapping from the `testnet` flag used by address APIs
    pub const fn from_testnet(testnet: bool) -> Self {
        if testnet {
            Network::Testnet
        } else {
            Network::Mainnet
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}
