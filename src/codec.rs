//! Extended public key codec
//!
//! Decodes a base58Check extended key into its 82-byte serialized form,
//! swaps the 4-byte version prefix for a target format's prefix, recomputes
//! the double-SHA256 checksum and re-encodes. Key payload bytes (depth,
//! parent fingerprint, child number, chain code, public key) are opaque and
//! carried through unchanged.

use crate::registry::{self, FormatDescriptor};
use crate::{Network, SERIALIZED_KEY_LEN};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Length of the version prefix
const VERSION_LEN: usize = 4;
/// Length of the base58Check checksum
const CHECKSUM_LEN: usize = 4;
/// Offset of the 33-byte compressed public key within the decoded buffer
const PUBKEY_OFFSET: usize = 45;
/// Length of the compressed public key field
const PUBKEY_LEN: usize = 33;

/// Errors produced while converting or identifying an extended key
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input key was empty
    #[error("key must be a non-empty string")]
    InvalidInput,
    /// Input key is not valid base58
    #[error("key is not valid base58: {0}")]
    Decode(#[from] bs58::decode::Error),
    /// Decoded key has the wrong length
    #[error("decoded key is {0} bytes, expected 82")]
    InvalidLength(usize),
    /// Trailing 4 bytes do not match double-SHA256 of the key data
    #[error("checksum does not match key data")]
    InvalidChecksum,
    /// Requested target format tag is not in the registry
    #[error("unsupported target format: {0:?}")]
    UnsupportedTarget(String),
    /// Key is well-formed but its version prefix is not a known format
    #[error("unrecognized version prefix: {}", hex::encode(.0))]
    UnknownFormat([u8; 4]),
    /// Source and target formats belong to different networks
    #[error("cannot convert a {from} ({from_network}) key to {to} ({to_network})")]
    NetworkMismatch {
        from: &'static str,
        from_network: Network,
        to: &'static str,
        to_network: Network,
    },
}

/// Compute double SHA256 of the given data
fn double_sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(Sha256::digest(data)).into()
}

/// Compute the base58Check checksum: first 4 bytes of double SHA256
fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash = double_sha256(data);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&hash[..CHECKSUM_LEN]);
    out
}

/// Decode a base58Check key and validate length and checksum
fn decode_checked(key: &str) -> Result<Vec<u8>, ConvertError> {
    if key.is_empty() {
        return Err(ConvertError::InvalidInput);
    }

    let decoded = bs58::decode(key).into_vec()?;

    if decoded.len() != SERIALIZED_KEY_LEN {
        return Err(ConvertError::InvalidLength(decoded.len()));
    }

    let (data, expected) = decoded.split_at(SERIALIZED_KEY_LEN - CHECKSUM_LEN);
    if checksum(data) != expected {
        return Err(ConvertError::InvalidChecksum);
    }

    Ok(decoded)
}

/// Read the version prefix from a decoded key buffer
fn version_prefix(decoded: &[u8]) -> [u8; VERSION_LEN] {
    let mut version = [0u8; VERSION_LEN];
    version.copy_from_slice(&decoded[..VERSION_LEN]);
    version
}

/// Convert an extended public key to the target format
///
/// Converting a key to its own format returns the input unchanged
/// (base58Check encoding is canonical). Conversions across networks are
/// rejected: a mainnet prefix can only be swapped for another mainnet
/// prefix, and likewise for testnet.
pub fn convert(key: &str, target_tag: &str) -> Result<String, ConvertError> {
    let target = registry::lookup(target_tag)
        .ok_or_else(|| ConvertError::UnsupportedTarget(target_tag.to_string()))?;

    let decoded = decode_checked(key)?;

    let version = version_prefix(&decoded);
    let source = registry::identify(&version).ok_or(ConvertError::UnknownFormat(version))?;

    if source.network != target.network {
        return Err(ConvertError::NetworkMismatch {
            from: source.tag,
            from_network: source.network,
            to: target.tag,
            to_network: target.network,
        });
    }

    // New serialization: target prefix, untouched payload, fresh checksum
    let mut raw = Vec::with_capacity(SERIALIZED_KEY_LEN);
    raw.extend_from_slice(&target.version);
    raw.extend_from_slice(&decoded[VERSION_LEN..SERIALIZED_KEY_LEN - CHECKSUM_LEN]);
    let check = checksum(&raw);
    raw.extend_from_slice(&check);

    Ok(bs58::encode(raw).into_string())
}

/// Identify the format of an extended public key
///
/// Errors distinguish structurally invalid input (`Decode`,
/// `InvalidLength`), a checksum failure (`InvalidChecksum`) and a
/// well-formed key with an unrecognized prefix (`UnknownFormat`).
pub fn identify(key: &str) -> Result<&'static FormatDescriptor, ConvertError> {
    let decoded = decode_checked(key)?;
    let version = version_prefix(&decoded);
    registry::identify(&version).ok_or(ConvertError::UnknownFormat(version))
}

/// Compute the 4-byte fingerprint of the key's public key field
///
/// Fingerprint = RIPEMD160(SHA256(pubkey))[0..4], with the 33-byte
/// compressed public key read from offset 45 of the decoded buffer.
pub fn fingerprint(key: &str) -> Result<[u8; 4], ConvertError> {
    let decoded = decode_checked(key)?;
    let pubkey = &decoded[PUBKEY_OFFSET..PUBKEY_OFFSET + PUBKEY_LEN];

    let sha256_hash = Sha256::digest(pubkey);
    let ripemd_hash = Ripemd160::digest(sha256_hash);

    let mut out = [0u8; 4];
    out.copy_from_slice(&ripemd_hash[..4]);
    Ok(out)
}
