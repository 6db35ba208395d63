//! The closed set of matcher kinds.

use std::fmt;

use tessera_core::SpritePlacement;
use tessera_tags::ClassificationBits;

use crate::basic::BasicMatcher;
use crate::cardinal::CardinalMatcher;
use crate::cell_group::CellGroupMatcher;
use crate::composite::{ChoiceMatcher, ListMatcher, QuantityChoiceMatcher};
use crate::corner::CornerMatcher;
use crate::diagonal::DiagonalMatcher;
use crate::overlay::NeighbourOverlayMatcher;
use crate::request::TileMatchRequest;
use crate::river::RiverOutletMatcher;
use crate::road::{RoadCornerMatcher, RoadParityMatcher};

/// Kind of a matcher or selector model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatcherType {
    /// Fixed prefix/suffix.
    Basic,
    /// N/E/S/W bitmask.
    Cardinal,
    /// NW/NE/SE/SW bitmask.
    Diagonal,
    /// One overlay per matching neighbour.
    NeighbourOverlay,
    /// Separate cardinal and diagonal road patterns.
    RoadParity,
    /// Diagonal road corner fill-ins.
    RoadCorner,
    /// Outlets drawn on matching neighbours.
    RiverOutlet,
    /// Quadrant corners over declared classes.
    Corner,
    /// Four-cell group over declared classes.
    CellGroup,
    /// Run every child.
    List,
    /// Dispatch on tag.
    Choice,
    /// Dispatch on quantity.
    QuantityChoice,
}

impl MatcherType {
    /// Every kind, leaves first.
    pub const ALL: [MatcherType; 12] = [
        MatcherType::Basic,
        MatcherType::Cardinal,
        MatcherType::Diagonal,
        MatcherType::NeighbourOverlay,
        MatcherType::RoadParity,
        MatcherType::RoadCorner,
        MatcherType::RiverOutlet,
        MatcherType::Corner,
        MatcherType::CellGroup,
        MatcherType::List,
        MatcherType::Choice,
        MatcherType::QuantityChoice,
    ];

    /// Stable name used by configuration formats.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Cardinal => "cardinal",
            Self::Diagonal => "diagonal",
            Self::NeighbourOverlay => "neighbour-overlay",
            Self::RoadParity => "road-parity",
            Self::RoadCorner => "road-corner",
            Self::RiverOutlet => "river-outlet",
            Self::Corner => "corner",
            Self::CellGroup => "cell-group",
            Self::List => "list",
            Self::Choice => "choice",
            Self::QuantityChoice => "quantity-choice",
        }
    }

    /// Inverse of [`as_str`](Self::as_str).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }

    /// Whether this kind wraps other matchers.
    pub fn is_composite(self) -> bool {
        matches!(self, Self::List | Self::Choice | Self::QuantityChoice)
    }
}

impl fmt::Display for MatcherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A runnable matcher of any kind.
///
/// Built once from a [`SelectorModel`](crate::SelectorModel) by a
/// [`MatcherFactory`](crate::MatcherFactory) and then only read. A call to
/// [`match_tile`](Self::match_tile) appends placements to the caller's
/// buffer and never clears it; `false` means the pattern does not apply
/// to the tile.
pub enum Matcher<B: ClassificationBits, E> {
    /// See [`BasicMatcher`].
    Basic(BasicMatcher),
    /// See [`CardinalMatcher`].
    Cardinal(CardinalMatcher<B, E>),
    /// See [`DiagonalMatcher`].
    Diagonal(DiagonalMatcher<B, E>),
    /// See [`NeighbourOverlayMatcher`].
    NeighbourOverlay(NeighbourOverlayMatcher<B, E>),
    /// See [`RoadParityMatcher`].
    RoadParity(RoadParityMatcher<B, E>),
    /// See [`RoadCornerMatcher`].
    RoadCorner(RoadCornerMatcher<B, E>),
    /// See [`RiverOutletMatcher`].
    RiverOutlet(RiverOutletMatcher<B, E>),
    /// See [`CornerMatcher`].
    Corner(CornerMatcher<B, E>),
    /// See [`CellGroupMatcher`].
    CellGroup(CellGroupMatcher<B, E>),
    /// See [`ListMatcher`].
    List(ListMatcher<B, E>),
    /// See [`ChoiceMatcher`].
    Choice(ChoiceMatcher<B, E>),
    /// See [`QuantityChoiceMatcher`].
    QuantityChoice(QuantityChoiceMatcher<B, E>),
}

impl<B: ClassificationBits, E> Matcher<B, E> {
    /// Match one tile, appending any sprite placements to `out`.
    pub fn match_tile(&self, request: &TileMatchRequest, out: &mut Vec<SpritePlacement>) -> bool {
        match self {
            Self::Basic(m) => m.match_tile(request, out),
            Self::Cardinal(m) => m.match_tile(request, out),
            Self::Diagonal(m) => m.match_tile(request, out),
            Self::NeighbourOverlay(m) => m.match_tile(request, out),
            Self::RoadParity(m) => m.match_tile(request, out),
            Self::RoadCorner(m) => m.match_tile(request, out),
            Self::RiverOutlet(m) => m.match_tile(request, out),
            Self::Corner(m) => m.match_tile(request, out),
            Self::CellGroup(m) => m.match_tile(request, out),
            Self::List(m) => m.match_tile(request, out),
            Self::Choice(m) => m.match_tile(request, out),
            Self::QuantityChoice(m) => m.match_tile(request, out),
        }
    }

    /// The kind of this matcher.
    pub fn matcher_type(&self) -> MatcherType {
        match self {
            Self::Basic(_) => MatcherType::Basic,
            Self::Cardinal(_) => MatcherType::Cardinal,
            Self::Diagonal(_) => MatcherType::Diagonal,
            Self::NeighbourOverlay(_) => MatcherType::NeighbourOverlay,
            Self::RoadParity(_) => MatcherType::RoadParity,
            Self::RoadCorner(_) => MatcherType::RoadCorner,
            Self::RiverOutlet(_) => MatcherType::RiverOutlet,
            Self::Corner(_) => MatcherType::Corner,
            Self::CellGroup(_) => MatcherType::CellGroup,
            Self::List(_) => MatcherType::List,
            Self::Choice(_) => MatcherType::Choice,
            Self::QuantityChoice(_) => MatcherType::QuantityChoice,
        }
    }

    /// Whether this matcher, every child, and every data set they read
    /// advertise thread-safety.
    ///
    /// Advisory: computed once at construction, not enforced when matching.
    pub fn is_thread_safe(&self) -> bool {
        match self {
            Self::Basic(_) => true,
            Self::Cardinal(m) => m.is_thread_safe(),
            Self::Diagonal(m) => m.is_thread_safe(),
            Self::NeighbourOverlay(m) => m.is_thread_safe(),
            Self::RoadParity(m) => m.is_thread_safe(),
            Self::RoadCorner(m) => m.is_thread_safe(),
            Self::RiverOutlet(m) => m.is_thread_safe(),
            Self::Corner(m) => m.is_thread_safe(),
            Self::CellGroup(m) => m.is_thread_safe(),
            Self::List(m) => m.is_thread_safe(),
            Self::Choice(m) => m.is_thread_safe(),
            Self::QuantityChoice(m) => m.is_thread_safe(),
        }
    }
}

impl<B: ClassificationBits, E> fmt::Debug for Matcher<B, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Matcher").field(&self.matcher_type()).finish()
    }
}
