//! Terminal and JSON presentation of key information
//!
//! Stateless formatting helpers used by the CLI: colored/emoji text
//! output, output-descriptor templating and a serializable report for
//! `--json` mode. Nothing here feeds back into the codec; a fingerprint
//! or descriptor failure degrades the display but never a conversion.

use crate::codec;
use crate::registry::FormatDescriptor;
use crate::Network;
use serde::Serialize;

const BLUE: &str = "\x1b[94m";
const GREEN: &str = "\x1b[92m";
const YELLOW: &str = "\x1b[93m";
const PURPLE: &str = "\x1b[95m";
const CYAN: &str = "\x1b[96m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Icon for a network
pub fn network_icon(network: Network) -> &'static str {
    match network {
        Network::Mainnet => "🌐",
        Network::Testnet => "🧪",
    }
}

/// External (receive) and internal (change) output descriptors
#[derive(Debug, Clone, Serialize)]
pub struct Descriptors {
    pub external: String,
    pub internal: String,
}

/// Serializable report about one key in one format, for `--json` output
#[derive(Debug, Clone, Serialize)]
pub struct KeyInfo {
    pub format: &'static str,
    pub network: Network,
    pub address_type: &'static str,
    pub derivation_path: &'static str,
    pub key: String,
    /// Uppercase hex fingerprint, absent when it cannot be computed
    pub fingerprint: Option<String>,
    pub descriptors: Descriptors,
}

/// Build the full report for a key known to be in the given format
pub fn key_info(fmt: &'static FormatDescriptor, key: &str) -> KeyInfo {
    let fingerprint = match codec::fingerprint(key) {
        Ok(fp) => Some(hex::encode(fp).to_uppercase()),
        Err(e) => {
            log::warn!("could not compute fingerprint: {}", e);
            None
        }
    };

    let descriptors = descriptors(fmt, key, fingerprint.as_deref());

    KeyInfo {
        format: fmt.tag,
        network: fmt.network,
        address_type: fmt.address_type,
        derivation_path: fmt.derivation_path,
        key: key.to_string(),
        fingerprint,
        descriptors,
    }
}

/// Render the descriptor pair for a key in the given format
///
/// Descriptors carry the key in its network's base format (`xpub` or
/// `tpub`); when that conversion fails the key is used as-is.
fn descriptors(fmt: &FormatDescriptor, key: &str, fingerprint: Option<&str>) -> Descriptors {
    let base_tag = match fmt.network {
        Network::Mainnet => "xpub",
        Network::Testnet => "tpub",
    };
    let base_key = codec::convert(key, base_tag).unwrap_or_else(|_| key.to_string());

    let fingerprint = fingerprint.unwrap_or("00000000");
    let path = fmt.derivation_path.trim_start_matches("m/");
    let origin = format!("[{}/{}]{}", fingerprint, path, base_key);

    let branch = |change: u8| match fmt.tag {
        "xpub" | "tpub" => format!("pkh({}/{}/*)", origin, change),
        "ypub" | "upub" => format!("sh(wpkh({}/{}/*))", origin, change),
        "zpub" | "vpub" => format!("wpkh({}/{}/*)", origin, change),
        "Ypub" | "Upub" => format!("sh(wsh(multi(k,{}/{}/*,...)))", origin, change),
        // "Zpub" | "Vpub"
        _ => format!("wsh(multi(k,{}/{}/*,...))", origin, change),
    };

    Descriptors {
        external: branch(0),
        internal: branch(1),
    }
}

/// Print a colored key-information block
pub fn print_key_info(info: &KeyInfo) {
    println!("\n{}{}:{}", BOLD, info.format, RESET);
    println!(
        "  {} Network: {}{}{}",
        network_icon(info.network),
        BLUE,
        info.network.to_string().to_uppercase(),
        RESET
    );
    println!("  📦 Type: {}{}{}", GREEN, info.address_type, RESET);
    println!(
        "  🔗 Derivation Path: {}{}{}",
        YELLOW, info.derivation_path, RESET
    );
    println!("  🔑 Key: {}{}{}", BOLD, info.key, RESET);
    match &info.fingerprint {
        Some(fp) => println!("  🔍 Fingerprint: {}{}{}", PURPLE, fp, RESET),
        None => println!("  🔍 Fingerprint: unavailable"),
    }
    println!("  📝 Descriptors:");
    println!(
        "    External (Receive): {}{}{}",
        CYAN, info.descriptors.external, RESET
    );
    println!(
        "    Internal (Change): {}{}{}",
        CYAN, info.descriptors.internal, RESET
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;

    const XPUB: &str = "xpub6CUGRUonZSQ4TWtTMmzXdrXDtypWKiKrhko4egpiMZbpiaQL2jkwSB1icqYh2cfDfVxdx4df189oLKnC5fSwqPfgyP3hooxujYzAu3fDVmz";

    #[test]
    fn test_key_info_fields() {
        let fmt = registry::lookup("xpub").unwrap();
        let info = key_info(fmt, XPUB);

        assert_eq!(info.format, "xpub");
        assert_eq!(info.network, Network::Mainnet);
        assert_eq!(info.derivation_path, "m/44'/0'/0'");
        assert_eq!(info.fingerprint.as_deref(), Some("4323C848"));
    }

    #[test]
    fn test_descriptor_templates() {
        let fmt = registry::lookup("xpub").unwrap();
        let info = key_info(fmt, XPUB);

        let expected = format!("pkh([4323C848/44'/0'/0']{}/0/*)", XPUB);
        assert_eq!(info.descriptors.external, expected);
        assert!(info.descriptors.internal.ends_with("/1/*)"));
    }

    #[test]
    fn test_descriptors_use_base_format_key() {
        // A zpub's descriptor should carry the key converted back to xpub
        let zpub = codec::convert(XPUB, "zpub").unwrap();
        let fmt = registry::lookup("zpub").unwrap();
        let info = key_info(fmt, &zpub);

        assert!(info.descriptors.external.starts_with("wpkh("));
        assert!(info.descriptors.external.contains(XPUB));
        assert!(!info.descriptors.external.contains(&zpub));
    }

    #[test]
    fn test_multisig_descriptor_shape() {
        let zpub_multi = codec::convert(XPUB, "Zpub").unwrap();
        let fmt = registry::lookup("Zpub").unwrap();
        let info = key_info(fmt, &zpub_multi);

        assert!(info.descriptors.external.starts_with("wsh(multi(k,"));
        assert_eq!(info.derivation_path, "Custom");
    }

    #[test]
    fn test_json_serialization() {
        let fmt = registry::lookup("xpub").unwrap();
        let info = key_info(fmt, XPUB);
        let json = serde_json::to_value(&info).unwrap();

        assert_eq!(json["format"], "xpub");
        assert_eq!(json["network"], "mainnet");
        assert_eq!(json["fingerprint"], "4323C848");
        assert!(json["descriptors"]["external"].is_string());
    }
}
