//! # bitdisplay-core: Foundational Types
//!
//! The leaf of the bitdisplay crate graph. Defines the primitives every
//! engine and service crate builds on:
//!
//! - [`AccountName`] and [`Label`]: validated newtypes for `.bit` accounts
//!   and their suffix-free labels.
//! - [`NameDigest`] and the [`NameHasher`] trait: the seed every procedural
//!   composition is derived from. Two hashers ship: [`Md5Hasher`] for
//!   identicons and [`CkbBlake2bHasher`] for layered avatars.
//! - [`account_color`]: the 12-color palette keyed by account name.
//! - [`AvatarSize`]: the named output sizes accepted by the avatar surface.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `bitdisplay-*` crates.
//! - Every function is pure: no I/O, no global state, no interior mutability.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod account;
pub mod color;
pub mod digest;
pub mod error;
pub mod size;

pub use account::{AccountName, Label, BIT_SUFFIX};
pub use color::{account_color, AccountColor, ACCOUNT_COLORS};
pub use digest::{
    char_code_sum, hex_window, CkbBlake2bHasher, HashAlgorithm, Md5Hasher, NameDigest, NameHasher,
};
pub use error::DisplayError;
pub use size::AvatarSize;
