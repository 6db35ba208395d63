//! Shared dependencies of the neighbour-pattern matchers.

use std::fmt;
use std::sync::Arc;

use tessera_core::{Direction, MapCoordinate};
use tessera_data::{SparseTagQueryResult, TileDataSet};
use tessera_nav::GridNavigator;
use tessera_tags::{
    ClassificationBits, EntityClassification, GraphicTag, GraphicTagMetaDataRegistry,
};

/// A context data set shared between matchers.
pub type SharedDataSet<E> = Arc<dyn TileDataSet<GraphicTag, E> + Send + Sync>;

/// Query rows reused across the neighbours of a single match call.
pub(crate) type Scratch<E> = Vec<SparseTagQueryResult<GraphicTag, E>>;

/// Everything a self-gated neighbour matcher reads.
///
/// The self test asks whether the request tag intersects `match_self`;
/// a neighbour "matches" when any tag found there intersects
/// `match_with`.
pub struct NeighbourContext<B: ClassificationBits, E> {
    tags: Arc<GraphicTagMetaDataRegistry<B>>,
    navigator: Arc<dyn GridNavigator>,
    data_set: SharedDataSet<E>,
    match_self: EntityClassification<B>,
    match_with: EntityClassification<B>,
}

impl<B: ClassificationBits, E> NeighbourContext<B, E> {
    /// Bundle the dependencies.
    pub fn new(
        tags: Arc<GraphicTagMetaDataRegistry<B>>,
        navigator: Arc<dyn GridNavigator>,
        data_set: SharedDataSet<E>,
        match_self: EntityClassification<B>,
        match_with: EntityClassification<B>,
    ) -> Self {
        Self {
            tags,
            navigator,
            data_set,
            match_self,
            match_with,
        }
    }

    /// Whether `tag` passes the self test.
    pub fn self_matches(&self, tag: &GraphicTag) -> bool {
        self.tags.query_classes(tag).matches_any(self.match_self)
    }

    /// Whether any tag at `coord` intersects `match_with`.
    pub(crate) fn cell_matches(
        &self,
        coord: MapCoordinate,
        z: i32,
        scratch: &mut Scratch<E>,
    ) -> bool {
        scratch.clear();
        self.data_set.query_point(coord, z, scratch);
        scratch
            .iter()
            .any(|row| self.tags.query_classes(&row.tag).matches_any(self.match_with))
    }

    /// The neighbour in `direction`, if it exists and matches.
    pub(crate) fn probe(
        &self,
        origin: MapCoordinate,
        direction: Direction,
        z: i32,
        scratch: &mut Scratch<E>,
    ) -> Option<MapCoordinate> {
        self.navigator
            .navigate(direction, origin, 1)
            .filter(|&c| self.cell_matches(c, z, scratch))
    }

    /// Whether the neighbour in `direction` matches.
    pub(crate) fn neighbour_matches(
        &self,
        origin: MapCoordinate,
        direction: Direction,
        z: i32,
        scratch: &mut Scratch<E>,
    ) -> bool {
        self.probe(origin, direction, z, scratch).is_some()
    }

    /// The neighbour cell in `direction`, without testing it.
    pub(crate) fn neighbour(
        &self,
        origin: MapCoordinate,
        direction: Direction,
    ) -> Option<MapCoordinate> {
        self.navigator.navigate(direction, origin, 1)
    }

    /// Thread-safety of the data set.
    pub fn is_thread_safe(&self) -> bool {
        self.data_set.meta_data().thread_safe
    }
}

impl<B: ClassificationBits, E> fmt::Debug for NeighbourContext<B, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NeighbourContext")
            .field("navigator", &self.navigator)
            .field("match_self", &self.match_self)
            .field("match_with", &self.match_with)
            .finish_non_exhaustive()
    }
}
