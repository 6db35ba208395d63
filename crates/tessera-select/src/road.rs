//! Road network matchers.
//!
//! [`RoadParityMatcher`] draws the cardinal and diagonal connection
//! patterns as two independent sprites. [`RoadCornerMatcher`] fills the
//! gaps a diagonal connection leaves on the two cells it cuts across.

use tessera_core::{
    ContinuousMapCoordinate, Direction, MapCoordinate, SpritePlacement, SpritePosition, SpriteTag,
};
use tessera_tags::ClassificationBits;

use crate::cardinal::cardinal_suffixes;
use crate::context::NeighbourContext;
use crate::diagonal::diagonal_suffixes;
use crate::keys::{CardinalSelectorKey, DiagonalSelectorKey};
use crate::overlay::ISOLATED_SUFFIX;
use crate::request::TileMatchRequest;

/// Cardinal and diagonal connection patterns, drawn separately.
///
/// Emits the cardinal sprite if any cardinal neighbour matches and the
/// diagonal sprite if any diagonal neighbour matches. With no matches at
/// all, a single `.isolated` sprite is emitted.
#[derive(Debug)]
pub struct RoadParityMatcher<B: ClassificationBits, E> {
    prefix: String,
    context: NeighbourContext<B, E>,
    cardinal: Vec<String>,
    diagonal: Vec<String>,
}

impl<B: ClassificationBits, E> RoadParityMatcher<B, E> {
    /// Create a matcher.
    pub fn new(prefix: &str, context: NeighbourContext<B, E>) -> Self {
        Self {
            prefix: prefix.to_owned(),
            context,
            cardinal: cardinal_suffixes(),
            diagonal: diagonal_suffixes(),
        }
    }

    /// Append the pattern sprites. `false` only if the tile fails the self test.
    pub fn match_tile(&self, request: &TileMatchRequest, out: &mut Vec<SpritePlacement>) -> bool {
        if !self.context.self_matches(&request.tag) {
            return false;
        }
        let origin = request.cell();
        let mut scratch = Vec::new();
        let mut probe = |d| self.context.neighbour_matches(origin, d, request.z, &mut scratch);
        let cardinal = CardinalSelectorKey::new(
            probe(Direction::North),
            probe(Direction::East),
            probe(Direction::South),
            probe(Direction::West),
        )
        .linear_index();
        let diagonal = DiagonalSelectorKey::new(
            probe(Direction::NorthWest),
            probe(Direction::NorthEast),
            probe(Direction::SouthEast),
            probe(Direction::SouthWest),
        )
        .linear_index();

        if cardinal != 0 {
            out.push(self.placement(request, &self.cardinal[cardinal]));
        }
        if diagonal != 0 {
            out.push(self.placement(request, &self.diagonal[diagonal]));
        }
        if cardinal == 0 && diagonal == 0 {
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

/// Corner fill-ins for diagonal road connections.
///
/// A match to the north-east draws `.se` on the north cell and `.nw` on
/// the east cell; a match to the north-west draws `.ne` on the west cell
/// and `.sw` on the north cell. Only the northern diagonals are probed,
/// so each diagonal link is filled exactly once when every tile is
/// matched.
#[derive(Debug)]
pub struct RoadCornerMatcher<B: ClassificationBits, E> {
    prefix: String,
    context: NeighbourContext<B, E>,
}

impl<B: ClassificationBits, E> RoadCornerMatcher<B, E> {
    /// Create a matcher.
    pub fn new(prefix: &str, context: NeighbourContext<B, E>) -> Self {
        Self {
            prefix: prefix.to_owned(),
            context,
        }
    }

    /// Append corner sprites. `true` iff at least one was emitted.
    pub fn match_tile(&self, request: &TileMatchRequest, out: &mut Vec<SpritePlacement>) -> bool {
        if !self.context.self_matches(&request.tag) {
            return false;
        }
        let origin = request.cell();
        let mut scratch = Vec::new();
        let before = out.len();

        if self
            .context
            .neighbour_matches(origin, Direction::NorthEast, request.z, &mut scratch)
        {
            self.emit(request, origin, Direction::North, ".se", out);
            self.emit(request, origin, Direction::East, ".nw", out);
        }
        if self
            .context
            .neighbour_matches(origin, Direction::NorthWest, request.z, &mut scratch)
        {
            self.emit(request, origin, Direction::West, ".ne", out);
            self.emit(request, origin, Direction::North, ".sw", out);
        }
        out.len() > before
    }

    fn emit(
        &self,
        request: &TileMatchRequest,
        origin: MapCoordinate,
        towards: Direction,
        suffix: &str,
        out: &mut Vec<SpritePlacement>,
    ) {
        if let Some(cell) = self.context.neighbour(origin, towards) {
            out.push(SpritePlacement::new(
                SpriteTag::new(&self.prefix, request.tag.as_str(), suffix),
                SpritePosition::Whole,
                ContinuousMapCoordinate::from(cell),
            ));
        }
    }

    /// Thread-safety of the data set.
    pub fn is_thread_safe(&self) -> bool {
        self.context.is_thread_safe()
    }
}
