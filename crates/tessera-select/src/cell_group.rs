//! Four-cell group matcher for isometric corner tiles.

use std::fmt;
use std::sync::Arc;

use tessera_core::{Direction, SpritePlacement, SpritePosition, SpriteTag};
use tessera_nav::GridNavigator;
use tessera_tags::ClassificationBits;

use crate::keys::{digits, key_space, CellGroupSelectorKey};
use crate::request::TileMatchRequest;
use crate::strategy::MatchStrategy;

/// `_{a}_{b}_{c}_{d}` class-name suffixes indexed by linear key index.
pub(crate) fn class_suffixes(names: &[String]) -> Vec<String> {
    let radix = names.len();
    (0..key_space(radix))
        .map(|index| {
            let mut suffix = String::new();
            for digit in digits(index, radix) {
                suffix.push('_');
                suffix.push_str(names.get(digit).map_or("", String::as_str));
            }
            suffix
        })
        .collect()
}

/// Which quad the tile anchors: the one above it or the one below it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellGroupDirection {
    /// Tile is the bottom cell of the quad (N, NE, self, NW).
    #[default]
    Up,
    /// Tile is the top cell of the quad (self, SE, S, SW).
    Down,
}

impl CellGroupDirection {
    /// The four cells `(a, b, c, d)` of the quad; [`Direction::None`] is the tile.
    pub fn cells(self) -> [Direction; 4] {
        match self {
            Self::Up => [
                Direction::North,
                Direction::NorthEast,
                Direction::None,
                Direction::NorthWest,
            ],
            Self::Down => [
                Direction::None,
                Direction::SouthEast,
                Direction::South,
                Direction::SouthWest,
            ],
        }
    }
}

/// Draws one sprite spanning the four cells that meet at a corner.
///
/// Every cell must resolve to a declared class; a partial quad draws
/// nothing. The tile's own cell resolves from the request tag, the
/// other three from the data set. Emits `prefix + "_{a}_{b}_{c}_{d}"`
/// with class names, at [`SpritePosition::CellMap`].
pub struct CellGroupMatcher<B: ClassificationBits, E> {
    prefix: String,
    strategy: MatchStrategy<B, E>,
    navigator: Arc<dyn GridNavigator>,
    direction: CellGroupDirection,
    suffixes: Vec<String>,
}

impl<B: ClassificationBits, E> CellGroupMatcher<B, E> {
    /// Create a matcher for the declared class names `names`.
    pub fn new(
        prefix: &str,
        strategy: MatchStrategy<B, E>,
        navigator: Arc<dyn GridNavigator>,
        direction: CellGroupDirection,
        names: &[String],
    ) -> Self {
        Self {
            prefix: prefix.to_owned(),
            strategy,
            navigator,
            direction,
            suffixes: class_suffixes(names),
        }
    }

    /// Append the sprite. `true` iff all four cells resolved.
    pub fn match_tile(&self, request: &TileMatchRequest, out: &mut Vec<SpritePlacement>) -> bool {
        let origin = request.cell();
        let mut scratch = Vec::new();
        let mut resolve = |direction: Direction| match direction {
            Direction::None => self.strategy.resolve_tag(&request.tag),
            d => self
                .navigator
                .navigate(d, origin, 1)
                .and_then(|cell| self.strategy.try_match(cell, request.z, &mut scratch)),
        };
        let [a, b, c, d] = self.direction.cells();
        let (Some(a), Some(b), Some(c), Some(d)) = (resolve(a), resolve(b), resolve(c), resolve(d))
        else {
            return false;
        };
        let index = CellGroupSelectorKey::new(a, b, c, d).linear_index();
        let Some(suffix) = self.suffixes.get(index) else {
            return false;
        };
        out.push(SpritePlacement::new(
            SpriteTag::new(&self.prefix, "", suffix),
            SpritePosition::CellMap,
            request.position,
        ));
        true
    }

    /// Render direction.
    pub fn direction(&self) -> CellGroupDirection {
        self.direction
    }

    /// Thread-safety of the data set.
    pub fn is_thread_safe(&self) -> bool {
        self.strategy.is_thread_safe()
    }
}

impl<B: ClassificationBits, E> fmt::Debug for CellGroupMatcher<B, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellGroupMatcher")
            .field("prefix", &self.prefix)
            .field("direction", &self.direction)
            .field("navigator", &self.navigator)
            .finish_non_exhaustive()
    }
}
