//! River outlet matcher.

use tessera_core::{ContinuousMapCoordinate, Direction, SpritePlacement, SpritePosition, SpriteTag};
use tessera_tags::ClassificationBits;

use crate::context::NeighbourContext;
use crate::request::TileMatchRequest;

/// Draws an outlet on each matching cardinal neighbour, pointing back.
///
/// For a match to the north the sprite `prefix + tag + "_s"` is placed on
/// the northern cell; likewise for the other cardinals.
#[derive(Debug)]
pub struct RiverOutletMatcher<B: ClassificationBits, E> {
    prefix: String,
    context: NeighbourContext<B, E>,
    suffixes: [String; 4],
}

impl<B: ClassificationBits, E> RiverOutletMatcher<B, E> {
    /// Create a matcher.
    pub fn new(prefix: &str, context: NeighbourContext<B, E>) -> Self {
        Self {
            prefix: prefix.to_owned(),
            context,
            suffixes: Direction::CARDINALS.map(|d| format!("_{}", d.opposite().short_name())),
        }
    }

    /// Append outlet sprites. `true` iff at least one was emitted.
    pub fn match_tile(&self, request: &TileMatchRequest, out: &mut Vec<SpritePlacement>) -> bool {
        if !self.context.self_matches(&request.tag) {
            return false;
        }
        let origin = request.cell();
        let mut scratch = Vec::new();
        let mut emitted = false;
        for (direction, suffix) in Direction::CARDINALS.iter().zip(&self.suffixes) {
            if let Some(cell) = self
                .context
                .probe(origin, *direction, request.z, &mut scratch)
            {
                emitted = true;
                out.push(SpritePlacement::new(
                    SpriteTag::new(&self.prefix, request.tag.as_str(), suffix),
                    SpritePosition::Whole,
                    ContinuousMapCoordinate::from(cell),
                ));
            }
        }
        emitted
    }

    /// Thread-safety of the data set.
    pub fn is_thread_safe(&self) -> bool {
        self.context.is_thread_safe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{context, ids};
    use tessera_core::MapCoordinate;
    use tessera_test_utils::MockDataSet;

    #[test]
    fn outlets_sit_on_the_neighbour() {
        let mut data = MockDataSet::new();
        data.set(2, 1, "B").set(1, 2, "B");
        let m = RiverOutletMatcher::new("delta", context(data));
        let mut out = Vec::new();
        assert!(m.match_tile(&TileMatchRequest::new("A", MapCoordinate::new(2, 2), 0), &mut out));
        assert_eq!(ids(&out), ["deltaA_s", "deltaA_e"]);
        assert_eq!(out[0].coordinate, ContinuousMapCoordinate::new(2.0, 1.0));
        assert_eq!(out[1].coordinate, ContinuousMapCoordinate::new(1.0, 2.0));
    }

    #[test]
    fn nothing_to_drain_into() {
        let mut data = MockDataSet::new();
        data.set(3, 3, "B");
        let m = RiverOutletMatcher::new("delta", context(data));
        let mut out = Vec::new();
        assert!(!m.match_tile(&TileMatchRequest::new("A", MapCoordinate::new(2, 2), 0), &mut out));
        assert!(out.is_empty());
    }
}
