//! # bitdisplay-classify: Account Classification
//!
//! Derives the descriptive data that accompanies an account NFT:
//!
//! - [`charset`]: which kind of characters a label is made of.
//! - [`category`]: the ordered marketplace trait list (3D, 4D, 5D and
//!   letter categories).
//! - [`metadata`]: the ERC-721 metadata document combining both.
//!
//! [`template`] and [`words`] are the matching primitives the category
//! rules are built from.

pub mod category;
pub mod charset;
pub mod metadata;
pub mod template;
pub mod words;

pub use category::{classify, Trait, TraitType};
pub use charset::{character_set_of, CharacterSet};
pub use metadata::{erc721_metadata, AccountDates, Attribute, AttributeValue, Erc721Metadata};
