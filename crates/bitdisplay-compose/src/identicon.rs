//! # Identicon Composition
//!
//! A 60×60 identicon is a background square, nine 20×20 figures tiled on a
//! 3×3 grid, the brand logo, and a translucent ring. This module decides
//! everything the renderer needs from the MD5 digest of the name:
//!
//! | Decision | Digest windows | Reduction |
//! |---|---|---|
//! | Palette slots 0..=9 | `hex[2i..2i+2]`, i = 0..=9 | code sum mod 16 |
//! | Figure shapes 0..=8 | `hex[2i..2i+2]`, i = 0..=8 | code sum mod 17 |
//! | Grid placement 0..=8 | `hex[3i..3i+3]`, i = 0..=8 | rank after a stable sort |
//!
//! Palette slot 0 colors the ring, slot 8 the background, and figure `i`
//! uses slot `i + 1`.
//!
//! ## Placement
//!
//! Figures are not placed by slot number. The nine 3-digit windows are
//! sorted lexicographically and the k-th smallest window takes grid cell k
//! of the raster below. Equal windows keep their slot order, so the mapping
//! from figure to cell is always a bijection.
//!
//! ```text
//! (0,0)   (20,0)   (40,0)
//! (0,20)  (20,20)  (40,20)
//! (0,40)  (20,40)  (40,40)
//! ```

use bitdisplay_core::{char_code_sum, DisplayError, Md5Hasher, NameDigest, NameHasher};
use serde::Serialize;

/// Edge length of the identicon canvas.
pub const IDENTICON_SIZE: u32 = 60;

/// Number of palette slots derived from the digest.
pub const COLOR_SLOTS: usize = 10;

/// Number of figures on the grid.
pub const FIGURE_SLOTS: usize = 9;

/// The identicon palette.
pub const IDENTICON_COLORS: [&str; 16] = [
    "#338CFF", "#FFDA23", "#C123FF", "#FFC12D", "#8221FF", "#D49742", "#FB23FF", "#009CFF",
    "#FF5423", "#07BF8B", "#2336FF", "#DE2E8F", "#FF2323", "#00C8BB", "#6500FF", "#DE2E62",
];

/// SVG path data for the 20×20 figure shapes.
pub const FIGURE_PATHS: [&str; 17] = [
    // square
    "M0 0h20v20H0z",
    // triangle
    "M0 0h20L0 20z",
    "M0 0l20 20H0z",
    "M20 0v20H0z",
    "M0 0h20v20z",
    // arc
    "M20 0v20H0C0 8.954 8.954 0 20 0z",
    "M0 0c11.046 0 20 8.954 20 20H0V0z",
    "M0 0h20v20C8.954 20 0 11.046 0 0z",
    "M0 0h20c0 11.046-8.954 20-20 20V0z",
    // half-round
    "M10 0c5.523 0 10 4.477 10 10v10H0V10C0 4.477 4.477 0 10 0z",
    "M10 0h10v20H10C4.477 20 0 15.523 0 10S4.477 0 10 0z",
    "M10 0h10v20H10C4.477 20 0 15.523 0 10S4.477 0 10 0z",
    "M0 0h20v10c0 5.523-4.477 10-10 10S0 15.523 0 10V0z",
    // three-quarter round
    "M10 0h10v10c0 5.523-4.477 10-10 10S0 15.523 0 10 4.477 0 10 0z",
    "M0 0h10c5.523 0 10 4.477 10 10s-4.477 10-10 10S0 15.523 0 10V0z",
    "M10 0c5.523 0 10 4.477 10 10v10H10C4.477 20 0 15.523 0 10S4.477 0 10 0z",
    "M10 0c5.523 0 10 4.477 10 10s-4.477 10-10 10H0V10C0 4.477 4.477 0 10 0z",
];

/// Top-left corners of the 3×3 grid cells, in raster order.
pub const GRID_POSITIONS: [(u32, u32); 9] = [
    (0, 0),
    (20, 0),
    (40, 0),
    (0, 20),
    (20, 20),
    (40, 20),
    (0, 40),
    (20, 40),
    (40, 40),
];

/// One placed figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Figure {
    /// Figure slot, 0..=8.
    pub slot: usize,
    /// Index into [`FIGURE_PATHS`].
    pub path_index: usize,
    /// Index into [`IDENTICON_COLORS`].
    pub color_index: usize,
    /// Grid cell index into [`GRID_POSITIONS`].
    pub cell: usize,
    /// Top-left corner of the cell.
    pub origin: (u32, u32),
}

impl Figure {
    /// The SVG path of this figure's shape.
    pub fn path(&self) -> &'static str {
        FIGURE_PATHS[self.path_index]
    }

    /// The fill color of this figure.
    pub fn fill(&self) -> &'static str {
        IDENTICON_COLORS[self.color_index]
    }
}

/// Everything a renderer needs to draw one identicon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdenticonComposition {
    /// The name the composition was derived from.
    pub name: String,
    /// Hex digest the decisions were read from.
    pub digest: String,
    /// Palette index per color slot.
    pub colors: Vec<usize>,
    /// Palette index of the background square (slot 8).
    pub background: usize,
    /// Palette index of the ring (slot 0).
    pub ring: usize,
    /// The nine figures in slot order.
    pub figures: Vec<Figure>,
}

impl IdenticonComposition {
    /// Background fill color.
    pub fn background_fill(&self) -> &'static str {
        IDENTICON_COLORS[self.background]
    }

    /// Ring fill color.
    pub fn ring_fill(&self) -> &'static str {
        IDENTICON_COLORS[self.ring]
    }
}

/// Identicon composer over a swappable hasher. Defaults to MD5.
#[derive(Debug, Clone, Default)]
pub struct Identicon<H: NameHasher = Md5Hasher> {
    hasher: H,
}

impl Identicon<Md5Hasher> {
    /// An MD5-seeded composer.
    pub fn new() -> Self {
        Self { hasher: Md5Hasher }
    }
}

impl<H: NameHasher> Identicon<H> {
    /// A composer seeded by `hasher` instead of MD5.
    pub fn with_hasher(hasher: H) -> Self {
        Self { hasher }
    }

    /// Compose the identicon for `name`.
    ///
    /// The name is hashed as given; lowercasing is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::InvalidInput`] if `name` is empty.
    pub fn compose(&self, name: &str) -> Result<IdenticonComposition, DisplayError> {
        if name.is_empty() {
            return Err(DisplayError::empty("name"));
        }
        let digest = self.hasher.digest(name);
        let colors = color_indices(&digest);
        let paths = figure_paths(&digest);
        let cells = grid_cells(&digest);

        let figures = (0..FIGURE_SLOTS)
            .map(|slot| Figure {
                slot,
                path_index: paths[slot],
                color_index: colors[slot + 1],
                cell: cells[slot],
                origin: GRID_POSITIONS[cells[slot]],
            })
            .collect();

        tracing::trace!(name, digest = %digest, "composed identicon");

        Ok(IdenticonComposition {
            name: name.to_string(),
            digest: digest.to_hex().to_string(),
            background: colors[8],
            ring: colors[0],
            colors,
            figures,
        })
    }
}

/// Compose the MD5-seeded identicon for `name`.
///
/// # Errors
///
/// Returns [`DisplayError::InvalidInput`] if `name` is empty.
pub fn compose(name: &str) -> Result<IdenticonComposition, DisplayError> {
    Identicon::new().compose(name)
}

/// Palette index for each of the [`COLOR_SLOTS`] slots.
pub fn color_indices(digest: &NameDigest) -> Vec<usize> {
    (0..COLOR_SLOTS)
        .map(|i| char_code_sum(digest.window(i * 2, 2)) as usize % IDENTICON_COLORS.len())
        .collect()
}

/// Figure path index for each of the [`FIGURE_SLOTS`] slots.
pub fn figure_paths(digest: &NameDigest) -> Vec<usize> {
    (0..FIGURE_SLOTS)
        .map(|i| char_code_sum(digest.window(i * 2, 2)) as usize % FIGURE_PATHS.len())
        .collect()
}

/// Grid cell for each figure slot: the rank of the slot's 3-digit window.
pub fn grid_cells(digest: &NameDigest) -> Vec<usize> {
    let windows: Vec<&str> = (0..FIGURE_SLOTS).map(|i| digest.window(i * 3, 3)).collect();

    // `sort_by` is stable, so tied windows keep slot order.
    let mut order: Vec<usize> = (0..FIGURE_SLOTS).collect();
    order.sort_by(|&a, &b| windows[a].cmp(windows[b]));

    let mut cells = vec![0; FIGURE_SLOTS];
    for (rank, slot) in order.into_iter().enumerate() {
        cells[slot] = rank;
    }
    cells
}
