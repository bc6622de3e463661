//! Bitcoin extended public key format converter library
//!
//! This library reinterprets a base58Check-serialized extended public key
//! from one SLIP-0132 version-prefix format to another (e.g. `xpub` →
//! `zpub`), preserving the underlying key material:
//! - Registry of the 10 supported formats with their version prefixes
//! - Codec that swaps prefixes and recomputes the base58Check checksum
//! - Display helpers for colored terminal and JSON output

pub mod codec;
pub mod display;
pub mod registry;

pub use codec::{convert, fingerprint, identify, ConvertError};
pub use registry::{FormatDescriptor, FORMATS};

/// Total length of a decoded extended key: 4 version bytes,
/// 74 payload bytes, 4 checksum bytes
pub const SERIALIZED_KEY_LEN: usize = 82;

/// Network a version prefix belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Bitcoin mainnet
    Mainnet,
    /// Bitcoin testnet/regtest
    Testnet,
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}
