//! Sprite identifiers and the placements emitted by matchers.

use crate::coord::ContinuousMapCoordinate;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Composed identifier of a rendered sprite.
///
/// A sprite tag is built from a `prefix` (usually the tile set or layer),
/// a `base` (usually the graphic tag of the tile) and a `suffix` (the
/// pattern qualifier; by convention suffix tokens start with `.` or `_`).
/// The concatenation of the trimmed parts is the lookup key handed to the
/// renderer; equality and hashing use that key only.
///
/// # Examples
///
/// ```
/// use tessera_core::SpriteTag;
///
/// let tag = SpriteTag::new("terrain.", "river", "_n1e0s1w0");
/// assert_eq!(tag.id(), "terrain.river_n1e0s1w0");
/// assert_eq!(tag.with_qualifier(".frame0").id(), "terrain.river_n1e0s1w0.frame0");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SpriteTag {
    prefix: String,
    base: String,
    suffix: String,
    id: String,
}

impl SpriteTag {
    /// Compose a sprite tag from its three parts.
    pub fn new(prefix: &str, base: &str, suffix: &str) -> Self {
        let prefix = prefix.trim();
        let base = base.trim();
        let suffix = suffix.trim();
        let mut id = String::with_capacity(prefix.len() + base.len() + suffix.len());
        id.push_str(prefix);
        id.push_str(base);
        id.push_str(suffix);
        Self {
            prefix: prefix.to_owned(),
            base: base.to_owned(),
            suffix: suffix.to_owned(),
            id,
        }
    }

    /// The concatenated lookup key.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Prefix part.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Base part.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Suffix part.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Same tag with the prefix replaced.
    pub fn with_prefix(&self, prefix: &str) -> Self {
        Self::new(prefix, &self.base, &self.suffix)
    }

    /// Same tag with the base replaced.
    pub fn with_base(&self, base: &str) -> Self {
        Self::new(&self.prefix, base, &self.suffix)
    }

    /// Same tag with `qualifier` appended to the suffix.
    pub fn with_qualifier(&self, qualifier: &str) -> Self {
        let mut suffix = self.suffix.clone();
        suffix.push_str(qualifier.trim());
        Self::new(&self.prefix, &self.base, &suffix)
    }
}

impl PartialEq for SpriteTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SpriteTag {}

impl Hash for SpriteTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for SpriteTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Where inside a cell a sprite is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpritePosition {
    /// The whole tile.
    Whole,
    /// Upper quadrant.
    Up,
    /// Lower quadrant.
    Down,
    /// Left quadrant.
    Left,
    /// Right quadrant.
    Right,
    /// Full cell-map placement spanning the corner shared by four cells.
    CellMap,
}

/// One sprite to draw: what, where in the cell, and at which map position.
#[derive(Clone, Debug, PartialEq)]
pub struct SpritePlacement {
    /// The sprite to draw.
    pub sprite: SpriteTag,
    /// Sub-tile placement.
    pub position: SpritePosition,
    /// Map position the sprite is anchored to.
    pub coordinate: ContinuousMapCoordinate,
}

impl SpritePlacement {
    /// Create a placement.
    pub fn new(
        sprite: SpriteTag,
        position: SpritePosition,
        coordinate: ContinuousMapCoordinate,
    ) -> Self {
        Self {
            sprite,
            position,
            coordinate,
        }
    }
}
