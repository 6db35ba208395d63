//! Quadrant corner matcher.

use std::fmt;
use std::sync::Arc;

use tessera_core::{Direction, SpritePlacement, SpritePosition, SpriteTag};
use tessera_nav::GridNavigator;
use tessera_tags::ClassificationBits;

use crate::cell_group::class_suffixes;
use crate::keys::CellGroupSelectorKey;
use crate::request::TileMatchRequest;
use crate::selection::TileTagEntrySelection;
use crate::strategy::MatchStrategy;

/// Quadrant placement, the letter in its sprite name, and the three
/// neighbours it looks at.
const QUADRANTS: [(SpritePosition, &str, [Direction; 3]); 4] = [
    (
        SpritePosition::Up,
        "n",
        [Direction::NorthWest, Direction::North, Direction::NorthEast],
    ),
    (
        SpritePosition::Right,
        "e",
        [Direction::NorthEast, Direction::East, Direction::SouthEast],
    ),
    (
        SpritePosition::Down,
        "s",
        [Direction::SouthEast, Direction::South, Direction::SouthWest],
    ),
    (
        SpritePosition::Left,
        "w",
        [Direction::SouthWest, Direction::West, Direction::NorthWest],
    ),
];

/// Splits a tile into four quadrants and picks each from the tile's own
/// class and the three neighbours touching that quadrant.
///
/// Quadrant sprites are named `prefix + "_{q}_{self}_{a}_{b}_{c}"` where
/// `q` is one of `n`, `e`, `s`, `w` and the rest are declared class
/// names. A quadrant whose three neighbours do not all resolve is
/// skipped.
pub struct CornerMatcher<B: ClassificationBits, E> {
    strategy: MatchStrategy<B, E>,
    navigator: Arc<dyn GridNavigator>,
    quadrant_prefixes: [String; 4],
    suffixes: Vec<String>,
}

impl<B: ClassificationBits, E> CornerMatcher<B, E> {
    /// Create a matcher for the declared class names `names`.
    pub fn new(
        prefix: &str,
        strategy: MatchStrategy<B, E>,
        navigator: Arc<dyn GridNavigator>,
        names: &[String],
    ) -> Self {
        Self {
            strategy,
            navigator,
            quadrant_prefixes: QUADRANTS.map(|(_, q, _)| format!("{}_{q}", prefix.trim())),
            suffixes: class_suffixes(names),
        }
    }

    /// Append quadrant sprites.
    ///
    /// `true` iff the tile's own tag resolved and at least one quadrant
    /// was drawn.
    pub fn match_tile(&self, request: &TileMatchRequest, out: &mut Vec<SpritePlacement>) -> bool {
        let Some(own) = self.strategy.resolve_tag(&request.tag) else {
            return false;
        };
        let origin = request.cell();
        let mut scratch = Vec::new();
        let mut neighbours: [Option<TileTagEntrySelection<B>>; 8] = [None; 8];
        for (slot, direction) in neighbours.iter_mut().zip(Direction::COMPASS) {
            *slot = self
                .navigator
                .navigate(direction, origin, 1)
                .and_then(|cell| self.strategy.try_match(cell, request.z, &mut scratch));
        }
        let at = |d: Direction| d.compass_index().and_then(|i| neighbours[i]);

        let mut drawn = false;
        for ((position, _, [a, b, c]), prefix) in QUADRANTS.iter().zip(&self.quadrant_prefixes) {
            let (Some(a), Some(b), Some(c)) = (at(*a), at(*b), at(*c)) else {
                continue;
            };
            let index = CellGroupSelectorKey::new(own, a, b, c).linear_index();
            if let Some(suffix) = self.suffixes.get(index) {
                out.push(SpritePlacement::new(
                    SpriteTag::new(prefix, "", suffix),
                    *position,
                    request.position,
                ));
                drawn = true;
            }
        }
        drawn
    }

    /// Thread-safety of the data set.
    pub fn is_thread_safe(&self) -> bool {
        self.strategy.is_thread_safe()
    }
}

impl<B: ClassificationBits, E> fmt::Debug for CornerMatcher<B, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CornerMatcher")
            .field("quadrant_prefixes", &self.quadrant_prefixes)
            .field("navigator", &self.navigator)
            .finish_non_exhaustive()
    }
}
