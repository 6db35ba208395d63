//! Four-neighbour bitmask matcher.

use tessera_core::{Direction, SpritePlacement, SpritePosition, SpriteTag};
use tessera_tags::ClassificationBits;

use crate::context::NeighbourContext;
use crate::keys::CardinalSelectorKey;
use crate::request::TileMatchRequest;

/// `_n{}e{}s{}w{}` suffixes indexed by the cardinal mask.
pub(crate) fn cardinal_suffixes() -> Vec<String> {
    (0..16)
        .map(|mask| {
            let k = CardinalSelectorKey::from_mask(mask);
            format!(
                "_n{}e{}s{}w{}",
                u8::from(k.n),
                u8::from(k.e),
                u8::from(k.s),
                u8::from(k.w)
            )
        })
        .collect()
}

/// Picks one of 16 sprites from which of N, E, S, W match.
///
/// Emits `prefix + tag + "_n{}e{}s{}w{}"` at the tile.
#[derive(Debug)]
pub struct CardinalMatcher<B: ClassificationBits, E> {
    prefix: String,
    context: NeighbourContext<B, E>,
    suffixes: Vec<String>,
}

impl<B: ClassificationBits, E> CardinalMatcher<B, E> {
    /// Create a matcher.
    pub fn new(prefix: &str, context: NeighbourContext<B, E>) -> Self {
        Self {
            prefix: prefix.to_owned(),
            context,
            suffixes: cardinal_suffixes(),
        }
    }

    /// Append the sprite. `false` if the tile fails the self test.
    pub fn match_tile(&self, request: &TileMatchRequest, out: &mut Vec<SpritePlacement>) -> bool {
        if !self.context.self_matches(&request.tag) {
            return false;
        }
        let origin = request.cell();
        let mut scratch = Vec::new();
        let mut probe = |d| self.context.neighbour_matches(origin, d, request.z, &mut scratch);
        let key = CardinalSelectorKey::new(
            probe(Direction::North),
            probe(Direction::East),
            probe(Direction::South),
            probe(Direction::West),
        );
        out.push(SpritePlacement::new(
            SpriteTag::new(&self.prefix, request.tag.as_str(), &self.suffixes[key.linear_index()]),
            SpritePosition::Whole,
            request.position,
        ));
        true
    }

    /// Thread-safety of the data set.
    pub fn is_thread_safe(&self) -> bool {
        self.context.is_thread_safe()
    }
}
