//! The [`TileDataSet`] trait and its query result rows.

use tessera_core::{ContinuousMapCoordinate, MapArea, MapCoordinate};

/// One row of a sparse query: a tag held by an entity at a position.
///
/// Rows are denormalized: an entity carrying two tags in one cell yields
/// two rows sharing the same `entity` and `position`.
#[derive(Clone, Debug, PartialEq)]
pub struct SparseTagQueryResult<D, E> {
    /// The tag (usually a graphic tag).
    pub tag: D,
    /// The owning entity.
    pub entity: E,
    /// Exact position of the entity.
    pub position: ContinuousMapCoordinate,
}

impl<D, E> SparseTagQueryResult<D, E> {
    /// Create a row.
    pub fn new(tag: D, entity: E, position: ContinuousMapCoordinate) -> Self {
        Self {
            tag,
            entity,
            position,
        }
    }
}

/// Static facts a data set advertises about itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileDataSetMetaData {
    /// Whether concurrent queries are safe. Matchers AND this into their
    /// own thread-safety flag.
    pub thread_safe: bool,
}

/// Read-only point and area queries over a map's tile data.
///
/// # Contract
///
/// - Queries append to `results` and never clear it.
/// - Results for the same arguments are returned in a stable order.
/// - `z` selects the layer; layers a data set does not know are empty.
pub trait TileDataSet<D, E> {
    /// Static facts about this data set.
    fn meta_data(&self) -> TileDataSetMetaData;

    /// Append every row for the single cell at `coord` on layer `z`.
    fn query_point(
        &self,
        coord: MapCoordinate,
        z: i32,
        results: &mut Vec<SparseTagQueryResult<D, E>>,
    );

    /// Append every row for the cells touched by `area` on layer `z`.
    ///
    /// The default implementation scans the inclusive integer bounding box
    /// of `area` row by row with [`query_point`](Self::query_point).
    /// Implementations backed by a spatial index should override it.
    fn query_sparse(
        &self,
        area: MapArea,
        z: i32,
        results: &mut Vec<SparseTagQueryResult<D, E>>,
    ) {
        let (min, max) = area.integer_bounds();
        for y in min.y..=max.y {
            for x in min.x..=max.x {
                self.query_point(MapCoordinate::new(x, y), z, results);
            }
        }
    }
}
