//! # Layered Avatar Composition
//!
//! An avatar is eleven full-canvas sprite layers stacked back-to-front.
//! Each layer owns an ordered list of units (sprite variants) and one or two
//! hex positions in the CKB-BLAKE2b digest of the label. The hex digits at
//! those positions, read as a base-16 integer, are the layer's weight:
//!
//! ```text
//! unit = units[weight % units.len()]
//! ```
//!
//! Optional layers start their unit list with a `null` sentinel that draws
//! nothing. The `texture` layer has one extra rule: a weight greater than
//! its unit count replaces the texture with a flat fill in the account
//! color, which is how most avatars end up with a plain background.
//!
//! The label (account minus `.bit`) seeds the digest; the full account
//! seeds the fallback color.

use bitdisplay_core::{
    account_color, AccountColor, AccountName, CkbBlake2bHasher, DisplayError, NameDigest,
    NameHasher,
};
use serde::Serialize;

/// Static definition of one sprite layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerDef {
    /// Layer number, 1-based, front to back.
    pub number: u8,
    /// Layer name, also the sprite file prefix.
    pub name: &'static str,
    /// Number of drawable units.
    pub unit_count: usize,
    /// Whether the unit list starts with the `null` sentinel.
    pub optional: bool,
    /// Hex positions in the digest that form the weight.
    pub positions: &'static [usize],
}

impl LayerDef {
    /// Total number of selectable units, counting the sentinel.
    pub fn len(&self) -> usize {
        self.unit_count + usize::from(self.optional)
    }

    /// Whether the layer has no selectable units.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The ordered unit list: `None` for the sentinel, then zero-padded
    /// 1-based ids (`"01"`, `"02"`, …) at least two digits wide.
    pub fn units(&self) -> Vec<Option<String>> {
        let width = self.unit_count.to_string().len().max(2);
        let ids = (1..=self.unit_count).map(|i| Some(format!("{i:0width$}")));
        if self.optional {
            std::iter::once(None).chain(ids).collect()
        } else {
            ids.collect()
        }
    }

    /// Whether this is the texture layer with the flat-fill fallback.
    pub fn is_texture(&self) -> bool {
        self.name == TEXTURE_LAYER
    }
}

/// Name of the layer that falls back to a flat account-color fill.
pub const TEXTURE_LAYER: &str = "texture";

/// The avatar layers, front to back.
pub const AVATAR_LAYERS: [LayerDef; 11] = [
    LayerDef { number: 1, name: "headset", unit_count: 14, optional: false, positions: &[0, 1] },
    LayerDef { number: 2, name: "mask", unit_count: 3, optional: false, positions: &[2, 3] },
    LayerDef { number: 3, name: "coupler", unit_count: 5, optional: false, positions: &[4, 5] },
    LayerDef { number: 4, name: "armour", unit_count: 3, optional: true, positions: &[6, 7] },
    LayerDef { number: 5, name: "widget", unit_count: 12, optional: true, positions: &[8, 9] },
    LayerDef { number: 6, name: "badge", unit_count: 11, optional: true, positions: &[10, 11] },
    LayerDef { number: 7, name: "chest", unit_count: 4, optional: false, positions: &[12, 13] },
    LayerDef { number: 8, name: "head", unit_count: 3, optional: false, positions: &[14] },
    LayerDef { number: 9, name: "body", unit_count: 11, optional: false, positions: &[15, 16] },
    LayerDef { number: 10, name: "back", unit_count: 1, optional: true, positions: &[17, 18] },
    LayerDef { number: 11, name: "texture", unit_count: 2, optional: false, positions: &[19] },
];

/// What to draw for one layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayerChoice {
    /// Draw the sprite with this unit id.
    Unit {
        /// Zero-padded unit id.
        id: String,
    },
    /// The `null` sentinel: draw nothing.
    Empty,
    /// Fill the canvas with the account color instead of a texture.
    PlainBackground {
        /// The fill color.
        color: AccountColor,
    },
}

/// The decision for one layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayerSelection {
    /// Layer number, 1-based.
    pub layer: u8,
    /// Layer name.
    pub name: &'static str,
    /// Weight read from the digest.
    pub weight: u32,
    /// What to draw.
    pub choice: LayerChoice,
}

impl LayerSelection {
    /// Relative sprite path for unit choices, e.g.
    /// `layer01-headset/headset-08.png`.
    pub fn asset_path(&self) -> Option<String> {
        match &self.choice {
            LayerChoice::Unit { id } => Some(format!(
                "layer{:02}-{name}/{name}-{id}.png",
                self.layer,
                name = self.name
            )),
            LayerChoice::Empty | LayerChoice::PlainBackground { .. } => None,
        }
    }
}

/// Everything a renderer needs to stack one avatar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvatarComposition {
    /// The account the composition was derived from.
    pub account: String,
    /// Hex digest of the label.
    pub digest: String,
    /// Layer decisions in drawing order: back (texture) first, front
    /// (headset) last.
    pub layers: Vec<LayerSelection>,
}

/// Avatar composer over a swappable hasher. Defaults to the CKB hash.
#[derive(Debug, Clone, Default)]
pub struct Avatar<H: NameHasher = CkbBlake2bHasher> {
    hasher: H,
}

impl Avatar<CkbBlake2bHasher> {
    /// A CKB-BLAKE2b-seeded composer.
    pub fn new() -> Self {
        Self {
            hasher: CkbBlake2bHasher,
        }
    }
}

impl<H: NameHasher> Avatar<H> {
    /// A composer seeded by `hasher`.
    pub fn with_hasher(hasher: H) -> Self {
        Self { hasher }
    }

    /// Compose the avatar for `account`.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::InvalidInput`] if `account` is empty or is
    /// the bare `.bit` suffix.
    pub fn compose(&self, account: &str) -> Result<AvatarComposition, DisplayError> {
        let account = AccountName::new(account)?;
        let label = account.label()?;
        let digest = self.hasher.digest(label.as_str());

        let layers = AVATAR_LAYERS
            .iter()
            .rev()
            .map(|layer| select(layer, &digest, &account))
            .collect();

        tracing::trace!(account = %account, digest = %digest, "composed avatar");

        Ok(AvatarComposition {
            account: account.as_str().to_string(),
            digest: digest.to_hex().to_string(),
            layers,
        })
    }
}

/// Compose the CKB-BLAKE2b-seeded avatar for `account`.
///
/// # Errors
///
/// Returns [`DisplayError::InvalidInput`] if `account` is empty or is the
/// bare `.bit` suffix.
pub fn compose(account: &str) -> Result<AvatarComposition, DisplayError> {
    Avatar::new().compose(account)
}

/// The weight of `layer`: its digest hex digits parsed as one integer.
pub fn layer_weight(digest: &NameDigest, layer: &LayerDef) -> u32 {
    u32::from_str_radix(&digest.pick(layer.positions), 16).unwrap_or(0)
}

fn select(layer: &LayerDef, digest: &NameDigest, account: &AccountName) -> LayerSelection {
    let weight = layer_weight(digest, layer);
    let units = layer.units();

    let choice = if layer.is_texture() && weight as usize > units.len() {
        LayerChoice::PlainBackground {
            color: account_color(account.as_str()),
        }
    } else if units.is_empty() {
        LayerChoice::Empty
    } else {
        match &units[weight as usize % units.len()] {
            Some(id) => LayerChoice::Unit { id: id.clone() },
            None => LayerChoice::Empty,
        }
    };

    LayerSelection {
        layer: layer.number,
        name: layer.name,
        weight,
        choice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitdisplay_core::HashAlgorithm;

    fn unit(id: &str) -> LayerChoice {
        LayerChoice::Unit { id: id.to_string() }
    }

    fn by_name<'a>(c: &'a AvatarComposition, name: &str) -> &'a LayerSelection {
        c.layers.iter().find(|l| l.name == name).unwrap()
    }

    #[test]
    fn test_unit_ids_are_padded() {
        let headset = &AVATAR_LAYERS[0];
        let units = headset.units();
        assert_eq!(units.len(), 14);
        assert_eq!(units[0].as_deref(), Some("01"));
        assert_eq!(units[13].as_deref(), Some("14"));

        let back = &AVATAR_LAYERS[9];
        assert_eq!(back.units(), vec![None, Some("01".to_string())]);
        assert_eq!(back.len(), 2);
    }

    #[test]
    fn test_known_avatar_with_texture() {
        // ckb-blake2b("abc") = 521c604cc09b814b0a9106305395def35d0211b9...
        let c = compose("abc.bit").unwrap();
        assert_eq!(
            c.digest,
            "521c604cc09b814b0a9106305395def35d0211b9996a3e0f326ae4d671bd8fc2"
        );
        assert_eq!(by_name(&c, "headset").weight, 0x52);
        assert_eq!(by_name(&c, "headset").choice, unit("13"));
        assert_eq!(by_name(&c, "mask").choice, unit("02"));
        assert_eq!(by_name(&c, "coupler").choice, unit("02"));
        assert_eq!(by_name(&c, "armour").choice, LayerChoice::Empty);
        assert_eq!(by_name(&c, "widget").choice, unit("10"));
        assert_eq!(by_name(&c, "badge").choice, unit("11"));
        assert_eq!(by_name(&c, "chest").choice, unit("02"));
        assert_eq!(by_name(&c, "head").choice, unit("02"));
        assert_eq!(by_name(&c, "body").choice, unit("01"));
        assert_eq!(by_name(&c, "back").choice, unit("01"));
        assert_eq!(by_name(&c, "texture").weight, 1);
        assert_eq!(by_name(&c, "texture").choice, unit("02"));
    }

    #[test]
    fn test_known_avatar_with_plain_background() {
        // ckb-blake2b("alice") = 5bc4234fbb5f80f9dc8382b5e4051922815e4f38...
        let c = compose("alice.bit").unwrap();
        let texture = by_name(&c, "texture");
        assert_eq!(texture.weight, 3);
        assert_eq!(
            texture.choice,
            LayerChoice::PlainBackground {
                color: account_color("alice.bit")
            }
        );
        assert_eq!(texture.asset_path(), None);
        assert_eq!(by_name(&c, "headset").choice, unit("08"));
        assert_eq!(by_name(&c, "back").choice, LayerChoice::Empty);
    }

    /// All-zero digest except the texture nibble at hex position 19.
    struct TextureHasher(u8);

    impl NameHasher for TextureHasher {
        fn algorithm(&self) -> HashAlgorithm {
            HashAlgorithm::CkbBlake2b256
        }

        fn digest(&self, _name: &str) -> NameDigest {
            let mut bytes = vec![0u8; 32];
            bytes[9] = self.0;
            NameDigest::new(HashAlgorithm::CkbBlake2b256, bytes)
        }
    }

    #[test]
    fn test_texture_weight_equal_to_unit_count_keeps_texture() {
        let c = Avatar::with_hasher(TextureHasher(2)).compose("x.bit").unwrap();
        let texture = by_name(&c, "texture");
        assert_eq!(texture.weight, 2);
        assert_eq!(texture.choice, unit("01"));
    }

    #[test]
    fn test_texture_weight_above_unit_count_is_plain() {
        let c = Avatar::with_hasher(TextureHasher(3)).compose("x.bit").unwrap();
        let texture = by_name(&c, "texture");
        assert_eq!(texture.weight, 3);
        assert_eq!(
            texture.choice,
            LayerChoice::PlainBackground {
                color: account_color("x.bit")
            }
        );
    }

    #[test]
    fn test_layers_are_back_to_front() {
        let c = compose("abc.bit").unwrap();
        let numbers: Vec<u8> = c.layers.iter().map(|l| l.layer).collect();
        assert_eq!(numbers, (1..=11).rev().collect::<Vec<u8>>());
    }

    #[test]
    fn test_suffix_is_stripped_for_hashing() {
        let with = compose("abc.bit").unwrap();
        let without = compose("abc").unwrap();
        assert_eq!(with.digest, without.digest);
    }

    #[test]
    fn test_asset_path() {
        let c = compose("abc.bit").unwrap();
        assert_eq!(
            by_name(&c, "headset").asset_path().as_deref(),
            Some("layer01-headset/headset-13.png")
        );
        assert_eq!(by_name(&c, "armour").asset_path(), None);
    }

    #[test]
    fn test_empty_and_bare_suffix_rejected() {
        assert!(compose("").is_err());
        assert!(compose(".bit").is_err());
    }
}
