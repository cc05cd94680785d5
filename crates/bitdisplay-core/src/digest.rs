//! # Name Digests: The Seed of Every Composition
//!
//! Every procedural output in bitdisplay is a pure function of a
//! [`NameDigest`]: the hash of a name rendered as lowercase hex. The
//! composition engines never look at the name itself, only at windows of
//! hex digits taken from fixed offsets in the digest.
//!
//! ## Hashers
//!
//! The hash is supplied through the [`NameHasher`] trait so the identicon
//! and avatar engines can share window arithmetic while seeding from
//! different functions:
//!
//! - [`Md5Hasher`]: 16-byte MD5, 32 hex digits (identicons).
//! - [`CkbBlake2bHasher`]: 32-byte BLAKE2b personalized with
//!   `ckb-default-hash`, 64 hex digits (layered avatars). This is the CKB
//!   chain's default hash, so avatars match the on-chain tooling.
//!
//! ## Stability
//!
//! Both functions are fixed, well-specified and platform independent. The
//! hex alphabet is lowercase ASCII, which makes every window a valid
//! `&str` slice and makes character codes equal to byte values.

use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};

/// The personalization string of the CKB default hash.
pub const CKB_PERSONALIZATION: &[u8; 16] = b"ckb-default-hash";

/// Output length of the CKB default hash, in bytes.
pub const CKB_HASH_LENGTH: usize = 32;

/// The hash function that produced a [`NameDigest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashAlgorithm {
    /// MD5, 16 bytes.
    Md5,
    /// BLAKE2b-256 with the `ckb-default-hash` personalization.
    CkbBlake2b256,
}

impl HashAlgorithm {
    /// Returns the algorithm identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::CkbBlake2b256 => "ckb-blake2b-256",
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A name digest with its algorithm tag and cached hex rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NameDigest {
    /// The hash function that produced this digest.
    pub algorithm: HashAlgorithm,
    bytes: Vec<u8>,
    hex: String,
}

impl NameDigest {
    /// Wrap raw digest bytes.
    pub fn new(algorithm: HashAlgorithm, bytes: Vec<u8>) -> Self {
        let hex = bytes.iter().map(|b| format!("{b:02x}")).collect();
        Self {
            algorithm,
            bytes,
            hex,
        }
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The digest as lowercase hex.
    pub fn to_hex(&self) -> &str {
        &self.hex
    }

    /// A window of `len` hex digits starting at hex position `start`.
    /// See [`hex_window`].
    pub fn window(&self, start: usize, len: usize) -> &str {
        hex_window(&self.hex, start, len)
    }

    /// The hex digits at the given positions, concatenated in order.
    /// Positions past the end of the digest are skipped.
    pub fn pick(&self, positions: &[usize]) -> String {
        positions
            .iter()
            .filter_map(|&i| self.hex.get(i..i + 1))
            .collect()
    }
}

impl std::fmt::Display for NameDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.hex)
    }
}

/// Hashes a name into the digest that seeds a composition.
///
/// Implementations must be pure: the same input yields the same digest on
/// every call, in every process, on every platform.
pub trait NameHasher: Send + Sync {
    /// The algorithm this hasher implements.
    fn algorithm(&self) -> HashAlgorithm;

    /// Hash the UTF-8 bytes of `name`.
    fn digest(&self, name: &str) -> NameDigest;
}

/// MD5 over the UTF-8 bytes of the name.
#[derive(Debug, Clone, Copy, Default)]
pub struct Md5Hasher;

impl NameHasher for Md5Hasher {
    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::Md5
    }

    fn digest(&self, name: &str) -> NameDigest {
        let hash = Md5::digest(name.as_bytes());
        NameDigest::new(HashAlgorithm::Md5, hash.to_vec())
    }
}

/// BLAKE2b-256 personalized with `ckb-default-hash`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CkbBlake2bHasher;

impl NameHasher for CkbBlake2bHasher {
    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::CkbBlake2b256
    }

    fn digest(&self, name: &str) -> NameDigest {
        let hash = blake2b_simd::Params::new()
            .hash_length(CKB_HASH_LENGTH)
            .personal(CKB_PERSONALIZATION)
            .hash(name.as_bytes());
        NameDigest::new(HashAlgorithm::CkbBlake2b256, hash.as_bytes().to_vec())
    }
}

/// Slice `len` characters of an ASCII hex string starting at `start`.
///
/// Windows running past the end are clipped, and windows starting past the
/// end are empty, so short digests from custom hashers still produce a
/// deterministic (if degenerate) composition instead of panicking.
pub fn hex_window(hex: &str, start: usize, len: usize) -> &str {
    let end = start.saturating_add(len).min(hex.len());
    hex.get(start.min(end)..end).unwrap_or("")
}

/// Sum of the character codes in `window`.
///
/// Hex windows are ASCII, so the byte value is the character code.
pub fn char_code_sum(window: &str) -> u32 {
    window.bytes().map(u32::from).sum()
}
