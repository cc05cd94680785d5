//! # bitdisplay-compose: Seeded Composition Engine
//!
//! Turns an account name into the structured decisions a renderer needs,
//! without touching pixels:
//!
//! - [`identicon`]: MD5-seeded palette indices, nine figure shapes and a
//!   rank-ordered 3×3 grid placement.
//! - [`avatar`]: CKB-BLAKE2b-seeded unit choices for the eleven sprite
//!   layers, reported back-to-front.
//! - [`layout`]: font size and line breaking for the NFT card name text.
//!
//! Every entry point is a pure function of its input string. Results are
//! built fresh per call and owned by the caller; caching rendered output is
//! the service layer's concern.

pub mod avatar;
pub mod identicon;
pub mod layout;

pub use avatar::{Avatar, AvatarComposition, LayerChoice, LayerDef, LayerSelection, AVATAR_LAYERS};
pub use identicon::{Figure, Identicon, IdenticonComposition};
pub use layout::{display_layout, DisplayLayout, TextFormat, ACCOUNT_FORMATS};
