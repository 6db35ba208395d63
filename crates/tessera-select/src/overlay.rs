//! Per-neighbour overlay matcher.

use tessera_core::{Direction, SpritePlacement, SpritePosition, SpriteTag};
use tessera_tags::ClassificationBits;

use crate::context::NeighbourContext;
use crate::request::TileMatchRequest;

/// Suffix used when no neighbour matches.
pub const ISOLATED_SUFFIX: &str = ".isolated";

/// Emits one overlay per matching neighbour, in compass order from north.
///
/// When no neighbour matches, a single `.isolated` sprite is emitted
/// instead, so a tile that passes the self test always draws something.
#[derive(Debug)]
pub struct NeighbourOverlayMatcher<B: ClassificationBits, E> {
    prefix: String,
    context: NeighbourContext<B, E>,
    suffixes: [String; 8],
}

impl<B: ClassificationBits, E> NeighbourOverlayMatcher<B, E> {
    /// Create a matcher.
    pub fn new(prefix: &str, context: NeighbourContext<B, E>) -> Self {
        Self {
            prefix: prefix.to_owned(),
            context,
            suffixes: Direction::COMPASS.map(|d| format!(".{}", d.short_name())),
        }
    }

    /// Append the overlays. `false` only if the tile fails the self test.
    pub fn match_tile(&self, request: &TileMatchRequest, out: &mut Vec<SpritePlacement>) -> bool {
        if !self.context.self_matches(&request.tag) {
            return false;
        }
        let origin = request.cell();
        let mut scratch = Vec::new();
        let mut any = false;
        for (direction, suffix) in Direction::COMPASS.iter().zip(&self.suffixes) {
            if self
                .context
                .neighbour_matches(origin, *direction, request.z, &mut scratch)
            {
                any = true;
                out.push(self.placement(request, suffix));
            }
        }
        if !any {
            out.push(self.placement(request, ISOLATED_SUFFIX));
        }
        true
    }

    fn placement(&self, request: &TileMatchRequest, suffix: &str) -> SpritePlacement {
        SpritePlacement::new(
            SpriteTag::new(&self.prefix, request.tag.as_str(), suffix),
            SpritePosition::Whole,
            request.position,
        )
    }

    /// Thread-safety of the data set.
    pub fn is_thread_safe(&self) -> bool {
        self.context.is_thread_safe()
    }
}
