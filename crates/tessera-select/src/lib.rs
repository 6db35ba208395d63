//! Autotiling selector engine for Tessera.
//!
//! A [`Matcher`] decides which sprites to draw for one map tile from the
//! tile's own tag and the classification of its neighbours. Matchers are
//! built from plain-data [`SelectorModel`]s by a [`MatcherFactory`] that
//! holds the tag registry, the grid navigator and the named context data
//! sets.
//!
//! # Matcher kinds
//!
//! Self-gated neighbour patterns (the tile must carry one of `match_self`):
//! [`CardinalMatcher`], [`DiagonalMatcher`], [`NeighbourOverlayMatcher`],
//! [`RoadParityMatcher`], [`RoadCornerMatcher`], [`RiverOutletMatcher`].
//!
//! Class-keyed patterns over a declared class list:
//! [`CornerMatcher`], [`CellGroupMatcher`].
//!
//! Plus [`BasicMatcher`] and the composites [`ListMatcher`],
//! [`ChoiceMatcher`] and [`QuantityChoiceMatcher`].
//!
//! # Determinism
//!
//! For a fixed configuration and fixed data, a match call always emits
//! the same placements in the same order. Matchers hold no mutable state;
//! scratch buffers live only for the duration of one call.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod basic;
pub mod cardinal;
pub mod cell_group;
pub mod composite;
pub mod context;
pub mod corner;
pub mod diagonal;
pub mod error;
pub mod factory;
pub mod keys;
pub mod matcher;
pub mod model;
pub mod overlay;
pub mod request;
pub mod river;
pub mod road;
pub mod selection;
pub mod strategy;

#[cfg(test)]
pub(crate) mod testing;

pub use basic::BasicMatcher;
pub use cardinal::CardinalMatcher;
pub use cell_group::{CellGroupDirection, CellGroupMatcher};
pub use composite::{ChoiceMatcher, ListMatcher, QuantityChoiceMatcher};
pub use context::{NeighbourContext, SharedDataSet};
pub use corner::CornerMatcher;
pub use diagonal::DiagonalMatcher;
pub use error::MatcherError;
pub use factory::MatcherFactory;
pub use keys::{CardinalSelectorKey, CellGroupSelectorKey, DiagonalSelectorKey, SelectorKeyPart};
pub use matcher::{Matcher, MatcherType};
pub use model::{
    BasicSelectorModel, CellGroupSelectorModel, ChoiceSelectorModel, CornerSelectorModel,
    ListSelectorModel, NeighbourSelectorModel, QuantityChoiceModel, QuantityChoiceSelectorModel,
    SelectorModel, TagChoiceModel,
};
pub use overlay::NeighbourOverlayMatcher;
pub use request::TileMatchRequest;
pub use river::RiverOutletMatcher;
pub use road::{RoadCornerMatcher, RoadParityMatcher};
pub use selection::{TileTagEntrySelection, TileTagEntrySelectionFactory};
pub use strategy::{ClassSelectorBuilder, MatchStrategy};
