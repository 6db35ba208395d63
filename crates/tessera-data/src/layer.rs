//! In-memory sparse tile layer.

use crate::dataset::{SparseTagQueryResult, TileDataSet, TileDataSetMetaData};
use smallvec::SmallVec;
use std::collections::HashMap;
use tessera_core::{ContinuousMapCoordinate, MapCoordinate};
use tessera_tags::GraphicTag;

#[derive(Clone, Debug)]
struct Row<E> {
    tag: GraphicTag,
    entity: E,
    position: ContinuousMapCoordinate,
}

/// Sparse, hash-backed tile storage keyed by cell and layer.
///
/// Cells keep their rows in insertion order. Entities placed at a
/// fractional position are stored under the cell their position
/// normalizes to.
///
/// # Examples
///
/// ```
/// use tessera_core::MapCoordinate;
/// use tessera_data::{SparseTileLayer, TileDataSet};
/// use tessera_tags::GraphicTag;
///
/// let mut layer = SparseTileLayer::new();
/// let cell = MapCoordinate::new(3, 4);
/// layer.place_entity(cell, 0, [GraphicTag::new("road"), GraphicTag::new("bridge")], 7u32);
///
/// let mut rows = Vec::new();
/// layer.query_point(cell, 0, &mut rows);
/// assert_eq!(rows.len(), 2);
/// assert!(rows.iter().all(|r| r.entity == 7));
/// ```
#[derive(Clone, Debug)]
pub struct SparseTileLayer<E> {
    cells: HashMap<(MapCoordinate, i32), SmallVec<[Row<E>; 2]>>,
}

impl<E> Default for SparseTileLayer<E> {
    fn default() -> Self {
        Self {
            cells: HashMap::new(),
        }
    }
}

impl<E: Clone> SparseTileLayer<E> {
    /// Create an empty layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a single tagged entity at the origin of `coord`.
    pub fn place(&mut self, coord: MapCoordinate, z: i32, tag: GraphicTag, entity: E) {
        self.place_at(coord.to_continuous(), z, tag, entity);
    }

    /// Put an entity carrying several tags at the origin of `coord`.
    ///
    /// Produces one row per tag.
    pub fn place_entity(
        &mut self,
        coord: MapCoordinate,
        z: i32,
        tags: impl IntoIterator<Item = GraphicTag>,
        entity: E,
    ) {
        for tag in tags {
            self.place(coord, z, tag, entity.clone());
        }
    }

    /// Put a tagged entity at a fractional position.
    pub fn place_at(
        &mut self,
        position: ContinuousMapCoordinate,
        z: i32,
        tag: GraphicTag,
        entity: E,
    ) {
        self.cells
            .entry((position.normalize(), z))
            .or_default()
            .push(Row {
                tag,
                entity,
                position,
            });
    }

    /// Remove every row at a cell, returning how many were removed.
    pub fn clear_cell(&mut self, coord: MapCoordinate, z: i32) -> usize {
        self.cells.remove(&(coord, z)).map_or(0, |rows| rows.len())
    }

    /// Number of occupied cells across all layers.
    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }

    /// Whether the layer holds no data.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<E: Clone> TileDataSet<GraphicTag, E> for SparseTileLayer<E> {
    fn meta_data(&self) -> TileDataSetMetaData {
        TileDataSetMetaData { thread_safe: true }
    }

    fn query_point(
        &self,
        coord: MapCoordinate,
        z: i32,
        results: &mut Vec<SparseTagQueryResult<GraphicTag, E>>,
    ) {
        if let Some(rows) = self.cells.get(&(coord, z)) {
            results.extend(rows.iter().map(|row| {
                SparseTagQueryResult::new(row.tag.clone(), row.entity.clone(), row.position)
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::MapArea;

    fn c(x: i32, y: i32) -> MapCoordinate {
        MapCoordinate::new(x, y)
    }

    fn t(s: &str) -> GraphicTag {
        GraphicTag::new(s)
    }

    #[test]
    fn query_point_appends_without_clearing() {
        let mut layer = SparseTileLayer::new();
        layer.place(c(1, 1), 0, t("grass"), ());
        let mut rows = vec![SparseTagQueryResult::new(t("sentinel"), (), Default::default())];
        layer.query_point(c(1, 1), 0, &mut rows);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].tag, t("sentinel"));
        assert_eq!(rows[1].tag, t("grass"));
    }

    #[test]
    fn layers_are_independent() {
        let mut layer = SparseTileLayer::new();
        layer.place(c(0, 0), 0, t("grass"), 1);
        layer.place(c(0, 0), 1, t("tree"), 2);
        let mut rows = Vec::new();
        layer.query_point(c(0, 0), 1, &mut rows);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].tag, t("tree"));
        rows.clear();
        layer.query_point(c(0, 0), 5, &mut rows);
        assert!(rows.is_empty());
    }

    #[test]
    fn fractional_positions_land_in_their_cell() {
        let mut layer = SparseTileLayer::new();
        let pos = ContinuousMapCoordinate::new(2.4, 2.6);
        layer.place_at(pos, 0, t("unit"), 9);
        let mut rows = Vec::new();
        layer.query_point(c(2, 3), 0, &mut rows);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].position, pos);
    }

    #[test]
    fn sparse_query_scans_row_major() {
        let mut layer = SparseTileLayer::new();
        layer.place(c(1, 0), 0, t("b"), ());
        layer.place(c(0, 1), 0, t("c"), ());
        layer.place(c(0, 0), 0, t("a"), ());
        layer.place(c(5, 5), 0, t("far"), ());
        let mut rows = Vec::new();
        layer.query_sparse(MapArea::new(0.0, 0.0, 2.0, 2.0), 0, &mut rows);
        let tags: Vec<_> = rows.iter().map(|r| r.tag.as_str()).collect();
        assert_eq!(tags, vec!["a", "b", "c"]);
    }

    #[test]
    fn clear_cell_reports_removed_rows() {
        let mut layer = SparseTileLayer::new();
        layer.place_entity(c(0, 0), 0, [t("a"), t("b")], ());
        assert_eq!(layer.clear_cell(c(0, 0), 0), 2);
        assert_eq!(layer.clear_cell(c(0, 0), 0), 0);
        assert!(layer.is_empty());
    }
}
