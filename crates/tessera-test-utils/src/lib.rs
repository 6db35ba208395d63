//! Test utilities and mock types for Tessera development.
//!
//! Provides a [`MockDataSet`] implementation of [`TileDataSet`] with
//! configurable thread-safety and query counting, plus the fixture
//! builders in [`fixtures`] for registries, ASCII maps and navigators.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use tessera_core::MapCoordinate;
use tessera_data::{SparseTagQueryResult, TileDataSet, TileDataSetMetaData};
use tessera_tags::GraphicTag;

/// Mock implementation of [`TileDataSet`].
///
/// Backed by a `HashMap<(MapCoordinate, i32), Vec<GraphicTag>>`. Entities
/// are numbered by insertion order. Every [`query_point`](TileDataSet::query_point)
/// call is counted so tests can assert how many cells a matcher probed.
pub struct MockDataSet {
    cells: HashMap<(MapCoordinate, i32), Vec<(GraphicTag, u32)>>,
    thread_safe: bool,
    next_entity: u32,
    queries: AtomicUsize,
}

impl MockDataSet {
    pub fn new() -> Self {
        Self {
            cells: HashMap::new(),
            thread_safe: true,
            next_entity: 0,
            queries: AtomicUsize::new(0),
        }
    }

    /// Advertise the given thread-safety flag.
    pub fn with_thread_safe(mut self, thread_safe: bool) -> Self {
        self.thread_safe = thread_safe;
        self
    }

    /// Put `tag` on layer 0 at `(x, y)` as a new entity.
    pub fn set(&mut self, x: i32, y: i32, tag: &str) -> &mut Self {
        self.set_on_layer(x, y, 0, tag)
    }

    /// Put `tag` on layer `z` at `(x, y)` as a new entity.
    pub fn set_on_layer(&mut self, x: i32, y: i32, z: i32, tag: &str) -> &mut Self {
        let entity = self.next_entity;
        self.next_entity += 1;
        self.cells
            .entry((MapCoordinate::new(x, y), z))
            .or_default()
            .push((GraphicTag::new(tag), entity));
        self
    }

    /// Number of point queries served so far.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::Relaxed)
    }
}

impl Default for MockDataSet {
    fn default() -> Self {
        Self::new()
    }
}

impl TileDataSet<GraphicTag, u32> for MockDataSet {
    fn meta_data(&self) -> TileDataSetMetaData {
        TileDataSetMetaData {
            thread_safe: self.thread_safe,
        }
    }

    fn query_point(
        &self,
        coord: MapCoordinate,
        z: i32,
        results: &mut Vec<SparseTagQueryResult<GraphicTag, u32>>,
    ) {
        self.queries.fetch_add(1, Ordering::Relaxed);
        if let Some(rows) = self.cells.get(&(coord, z)) {
            results.extend(rows.iter().map(|(tag, entity)| {
                SparseTagQueryResult::new(tag.clone(), *entity, coord.to_continuous())
            }));
        }
    }
}
