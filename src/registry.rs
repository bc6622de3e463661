//! SLIP-0132 format registry
//!
//! Static table mapping each supported format tag to its 4-byte version
//! prefix, network, address type and default derivation path. Pure data;
//! the codec and display layers look descriptors up here.

use crate::Network;

/// One supported extended public key format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDescriptor {
    /// Format tag, e.g. "xpub" or "Zpub"
    pub tag: &'static str,
    /// Version prefix: the first 4 bytes of the decoded key
    pub version: [u8; 4],
    /// Network this prefix belongs to
    pub network: Network,
    /// Address scheme the prefix signals
    pub address_type: &'static str,
    /// Default BIP32 derivation path ("Custom" for multisig formats)
    pub derivation_path: &'static str,
}

/// All supported formats. Version prefixes are pairwise distinct.
pub static FORMATS: [FormatDescriptor; 10] = [
    // Mainnet single-signature
    FormatDescriptor {
        tag: "xpub",
        version: [0x04, 0x88, 0xb2, 0x1e],
        network: Network::Mainnet,
        address_type: "P2PKH or P2SH",
        derivation_path: "m/44'/0'/0'",
    },
    FormatDescriptor {
        tag: "ypub",
        version: [0x04, 0x9d, 0x7c, 0xb2],
        network: Network::Mainnet,
        address_type: "P2WPKH in P2SH",
        derivation_path: "m/49'/0'/0'",
    },
    FormatDescriptor {
        tag: "zpub",
        version: [0x04, 0xb2, 0x47, 0x46],
        network: Network::Mainnet,
        address_type: "P2WPKH",
        derivation_path: "m/84'/0'/0'",
    },
    // Mainnet multi-signature
    FormatDescriptor {
        tag: "Ypub",
        version: [0x02, 0x95, 0xb4, 0x3f],
        network: Network::Mainnet,
        address_type: "Multi-signature P2WSH in P2SH",
        derivation_path: "Custom",
    },
    FormatDescriptor {
        tag: "Zpub",
        version: [0x02, 0xaa, 0x7e, 0xd3],
        network: Network::Mainnet,
        address_type: "Multi-signature P2WSH",
        derivation_path: "Custom",
    },
    // Testnet single-signature
    FormatDescriptor {
        tag: "tpub",
        version: [0x04, 0x35, 0x87, 0xcf],
        network: Network::Testnet,
        address_type: "P2PKH or P2SH",
        derivation_path: "m/44'/1'/0'",
    },
    FormatDescriptor {
        tag: "upub",
        version: [0x04, 0x4a, 0x52, 0x62],
        network: Network::Testnet,
        address_type: "P2WPKH in P2SH",
        derivation_path: "m/49'/1'/0'",
    },
    FormatDescriptor {
        tag: "vpub",
        version: [0x04, 0x5f, 0x1c, 0xf6],
        network: Network::Testnet,
        address_type: "P2WPKH",
        derivation_path: "m/84'/1'/0'",
    },
    // Testnet multi-signature
    FormatDescriptor {
        tag: "Upub",
        version: [0x02, 0x42, 0x89, 0xef],
        network: Network::Testnet,
        address_type: "Multi-signature P2WSH in P2SH",
        derivation_path: "Custom",
    },
    FormatDescriptor {
        tag: "Vpub",
        version: [0x02, 0x57, 0x54, 0x83],
        network: Network::Testnet,
        address_type: "Multi-signature P2WSH",
        derivation_path: "Custom",
    },
];

/// Look up a descriptor by its format tag (case-sensitive: "Ypub" and
/// "ypub" are different formats)
pub fn lookup(tag: &str) -> Option<&'static FormatDescriptor> {
    FORMATS.iter().find(|f| f.tag == tag)
}

/// Identify a descriptor by its 4-byte version prefix
pub fn identify(version: &[u8; 4]) -> Option<&'static FormatDescriptor> {
    FORMATS.iter().find(|f| &f.version == version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_tags() {
        for fmt in &FORMATS {
            let found = lookup(fmt.tag).unwrap();
            assert_eq!(found.version, fmt.version);
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(lookup("ypub").unwrap().address_type, "P2WPKH in P2SH");
        assert_eq!(
            lookup("Ypub").unwrap().address_type,
            "Multi-signature P2WSH in P2SH"
        );
    }

    #[test]
    fn test_lookup_unknown_tag() {
        assert!(lookup("qpub").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_identify_by_version() {
        assert_eq!(identify(&[0x04, 0x88, 0xb2, 0x1e]).unwrap().tag, "xpub");
        assert_eq!(identify(&[0x02, 0x57, 0x54, 0x83]).unwrap().tag, "Vpub");
        assert!(identify(&[0xde, 0xad, 0xbe, 0xef]).is_none());
    }

    #[test]
    fn test_version_prefixes_distinct() {
        for (i, a) in FORMATS.iter().enumerate() {
            for b in &FORMATS[i + 1..] {
                assert_ne!(a.version, b.version, "{} vs {}", a.tag, b.tag);
                assert_ne!(a.tag, b.tag);
            }
        }
    }

    #[test]
    fn test_network_split() {
        let mainnet = FORMATS
            .iter()
            .filter(|f| f.network == crate::Network::Mainnet)
            .count();
        assert_eq!(mainnet, 5);
        assert_eq!(FORMATS.len() - mainnet, 5);
    }
}
