//! Benchmark profiles for the Tessera autotiling engine.
//!
//! - [`reference_tags`]: land / water / road tag registry
//! - [`reference_layer`]: deterministic `size x size` terrain with a river
//!   and a road crossing it
//! - [`reference_factory`]: factory over the two, on an orthogonal grid
//! - [`reference_model`]: a list of the common terrain matchers

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::Arc;

use tessera_core::MapCoordinate;
use tessera_data::SparseTileLayer;
use tessera_nav::{GridNavigator, GridType, NavigatorError, NavigatorMetaData};
use tessera_select::{
    CornerSelectorModel, MatcherFactory, NeighbourSelectorModel, SelectorModel,
};
use tessera_tags::{ClassificationError, GraphicTag, GraphicTagMetaDataRegistry};

/// Id the reference layer is registered under.
pub const TERRAIN: &str = "terrain";

/// Tags `grass`, `sand` (land), `river` (water) and `road` (road, land).
pub fn reference_tags() -> Result<GraphicTagMetaDataRegistry<u32>, ClassificationError> {
    let mut tags = GraphicTagMetaDataRegistry::new();
    tags.register("grass").with_classification("land")?;
    tags.register("sand").with_classification("land")?;
    tags.register("river").with_classification("water")?;
    tags.register("road")
        .with_classification("road")?
        .with_classification("land")?;
    Ok(tags)
}

/// Tag at `(x, y)` of the reference map.
pub fn reference_tag(x: i32, y: i32, size: i32) -> &'static str {
    let river = (x + y / 3) % size == size / 2;
    let road = y == size / 3;
    match (river, road) {
        (_, true) => "road",
        (true, false) => "river",
        _ if (x * 7 + y * 13) % 11 == 0 => "sand",
        _ => "grass",
    }
}

/// Fill a `size x size` layer with [`reference_tag`]s.
pub fn reference_layer(size: i32) -> SparseTileLayer<u32> {
    let mut layer = SparseTileLayer::new();
    let mut entity = 0;
    for y in 0..size {
        for x in 0..size {
            let tag = GraphicTag::new(reference_tag(x, y, size));
            layer.place(MapCoordinate::new(x, y), 0, tag, entity);
            entity += 1;
        }
    }
    layer
}

/// Orthogonal navigator.
pub fn reference_navigator() -> Result<Arc<dyn GridNavigator>, NavigatorError> {
    Ok(Arc::from(NavigatorMetaData::new(GridType::Grid).build()?))
}

/// Factory over [`reference_tags`] and [`reference_layer`].
///
/// # Panics
///
/// Never for the built-in profile; the registry fits comfortably in `u32`.
pub fn reference_factory(size: i32) -> MatcherFactory<u32, u32> {
    let tags = reference_tags().expect("reference classes fit in u32");
    let navigator = reference_navigator().expect("grid navigator is supported");
    MatcherFactory::<u32, u32>::new(Arc::new(tags), navigator)
        .with_data_set(TERRAIN, Arc::new(reference_layer(size)))
}

/// Cardinal river banks, road parity, and land/water corners.
pub fn reference_model() -> SelectorModel {
    SelectorModel::list(vec![
        SelectorModel::Cardinal(
            NeighbourSelectorModel::new("bank.", TERRAIN)
                .matching_self("water")
                .matching_with("water"),
        ),
        SelectorModel::RoadParity(
            NeighbourSelectorModel::new("", TERRAIN)
                .matching_self("road")
                .matching_with("road"),
        ),
        SelectorModel::Corner(CornerSelectorModel {
            prefix: Some("coast".into()),
            context_data_set: Some(TERRAIN.into()),
            matches: vec!["land".into(), "water".into()],
            default_class: Some("land".into()),
        }),
    ])
}
