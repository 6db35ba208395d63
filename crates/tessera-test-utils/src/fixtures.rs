//! Reusable setup fixtures.
//!
//! - [`tag_registry`] builds a tag registry from `(tag, classes)` pairs.
//! - [`ascii_layer`] turns a small ASCII map into a [`SparseTileLayer`].
//! - [`ascii_mock`] does the same for a [`MockDataSet`].
//! - [`grid_navigator`] and [`navigator`] build shared navigators.

use std::sync::Arc;

use tessera_core::MapCoordinate;
use tessera_data::SparseTileLayer;
use tessera_nav::{GridNavigator, GridType, NavigatorMetaData};
use tessera_tags::{ClassificationBits, GraphicTag, GraphicTagMetaDataRegistry};

use crate::MockDataSet;

/// Build a tag registry from `(tag, classes)` pairs, in order.
///
/// Panics if the class capacity of `B` is exceeded.
pub fn tag_registry<B: ClassificationBits>(
    tags: &[(&str, &[&str])],
) -> GraphicTagMetaDataRegistry<B> {
    let mut registry = GraphicTagMetaDataRegistry::new();
    for (tag, classes) in tags {
        let mut entry = registry.register(*tag);
        for class in *classes {
            entry = entry
                .with_classification(class)
                .expect("fixture class capacity exceeded");
        }
    }
    registry
}

/// Visit every non-space, non-`.` character of an ASCII map.
///
/// Rows run top to bottom with `y` increasing; columns left to right.
fn for_each_cell(map: &str, legend: &[(char, &str)], mut f: impl FnMut(i32, i32, &str)) {
    for (y, row) in map.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate() {
        for (x, ch) in row.chars().enumerate() {
            if ch == '.' {
                continue;
            }
            let tag = legend
                .iter()
                .find(|(c, _)| *c == ch)
                .map(|(_, t)| *t)
                .unwrap_or_else(|| panic!("no legend entry for {ch:?}"));
            f(x as i32, y as i32, tag);
        }
    }
}

/// Build a layer-0 [`SparseTileLayer`] from an ASCII map.
///
/// ```
/// use tessera_test_utils::fixtures::ascii_layer;
///
/// let layer = ascii_layer(
///     "
///     .r.
///     rrr
///     .r.
///     ",
///     &[('r', "river")],
/// );
/// assert_eq!(layer.occupied_cells(), 5);
/// ```
pub fn ascii_layer(map: &str, legend: &[(char, &str)]) -> SparseTileLayer<u32> {
    let mut layer = SparseTileLayer::new();
    let mut entity = 0;
    for_each_cell(map, legend, |x, y, tag| {
        layer.place(MapCoordinate::new(x, y), 0, GraphicTag::new(tag), entity);
        entity += 1;
    });
    layer
}

/// Build a layer-0 [`MockDataSet`] from an ASCII map.
pub fn ascii_mock(map: &str, legend: &[(char, &str)]) -> MockDataSet {
    let mut data = MockDataSet::new();
    for_each_cell(map, legend, |x, y, tag| {
        data.set(x, y, tag);
    });
    data
}

/// Unbounded orthogonal navigator.
pub fn grid_navigator() -> Arc<dyn GridNavigator> {
    navigator(NavigatorMetaData::new(GridType::Grid))
}

/// Build a navigator from metadata, panicking on unsupported topologies.
pub fn navigator(meta: NavigatorMetaData) -> Arc<dyn GridNavigator> {
    Arc::from(meta.build().expect("fixture navigator must be supported"))
}
