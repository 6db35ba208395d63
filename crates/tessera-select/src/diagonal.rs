//! Four-diagonal bitmask matcher.

use tessera_core::{Direction, SpritePlacement, SpritePosition, SpriteTag};
use tessera_tags::ClassificationBits;

use crate::context::NeighbourContext;
use crate::keys::DiagonalSelectorKey;
use crate::request::TileMatchRequest;

/// `.nw{}ne{}se{}sw{}` suffixes indexed by the diagonal mask.
pub(crate) fn diagonal_suffixes() -> Vec<String> {
    (0..16)
        .map(|mask| {
            let k = DiagonalSelectorKey::from_mask(mask);
            format!(
                ".nw{}ne{}se{}sw{}",
                u8::from(k.nw),
                u8::from(k.ne),
                u8::from(k.se),
                u8::from(k.sw)
            )
        })
        .collect()
}

/// Picks one of 16 sprites from which of NW, NE, SE, SW match.
#[derive(Debug)]
pub struct DiagonalMatcher<B: ClassificationBits, E> {
    prefix: String,
    context: NeighbourContext<B, E>,
    suffixes: Vec<String>,
}

impl<B: ClassificationBits, E> DiagonalMatcher<B, E> {
    /// Create a matcher.
    pub fn new(prefix: &str, context: NeighbourContext<B, E>) -> Self {
        Self {
            prefix: prefix.to_owned(),
            context,
            suffixes: diagonal_suffixes(),
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
        let key = DiagonalSelectorKey::new(
            probe(Direction::NorthWest),
            probe(Direction::NorthEast),
            probe(Direction::SouthEast),
            probe(Direction::SouthWest),
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
