//! Tessera: an autotiling selector engine for tile maps.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Tessera sub-crates. For most users, adding `tessera` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use tessera::prelude::*;
//!
//! // Classes and tags.
//! let mut tags = GraphicTagMetaDataRegistry::<u16>::new();
//! tags.register("grass").with_classification("land")?;
//! tags.register("river").with_classification("water")?;
//!
//! // A river running north to south through grass.
//! let mut layer = SparseTileLayer::new();
//! for y in 0..3 {
//!     for x in 0..3 {
//!         let tag = if x == 1 { "river" } else { "grass" };
//!         layer.place(MapCoordinate::new(x, y), 0, GraphicTag::new(tag), ());
//!     }
//! }
//!
//! // Navigators are cached per descriptor.
//! let mut navigators = NavigatorCache::new();
//! let factory = MatcherFactory::<u16, ()>::from_metadata(
//!     Arc::new(tags),
//!     &NavigatorMetaData::new(GridType::Grid),
//!     &mut navigators,
//! )?
//! .with_data_set("terrain", Arc::new(layer));
//!
//! let matcher = factory.build(&SelectorModel::Cardinal(
//!     NeighbourSelectorModel::new("water.", "terrain")
//!         .matching_self("water")
//!         .matching_with("water"),
//! ))?;
//!
//! let mut sprites = Vec::new();
//! let request = TileMatchRequest::new("river", MapCoordinate::new(1, 1), 0);
//! assert!(matcher.match_tile(&request, &mut sprites));
//! assert_eq!(sprites[0].sprite.id(), "water.river_n1e0s1w0");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessera-core` | Coordinates, ranges, directions, sprite tags |
//! | [`nav`] | `tessera-nav` | Grid navigators, decorators, navigator cache |
//! | [`tags`] | `tessera-tags` | Classifications and the graphic tag registry |
//! | [`data`] | `tessera-data` | Tile data set trait and in-memory layer |
//! | [`select`] | `tessera-select` | Matchers, selector models, matcher factory |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates, ranges, directions and sprite identifiers (`tessera-core`).
pub use tessera_core as types;

/// Grid navigation (`tessera-nav`).
///
/// Provides the [`nav::GridNavigator`] trait, the orthogonal and isometric
/// topologies, and the limit, wrap and rotation decorators.
pub use tessera_nav as nav;

/// Classification bitsets and tag metadata (`tessera-tags`).
pub use tessera_tags as tags;

/// Sparse tile data access (`tessera-data`).
///
/// Implement [`data::TileDataSet`] over your own map storage, or use
/// [`data::SparseTileLayer`].
pub use tessera_data as data;

/// The selector engine (`tessera-select`).
///
/// Build a [`select::Matcher`] from a [`select::SelectorModel`] with a
/// [`select::MatcherFactory`].
pub use tessera_select as select;

/// Common imports for typical Tessera usage.
///
/// ```rust
/// use tessera::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use tessera_core::{
        ContinuousMapCoordinate, Direction, MapArea, MapCoordinate, Range, SpritePlacement,
        SpritePosition, SpriteTag,
    };

    // Navigation
    pub use tessera_nav::{
        BorderPolicy, GridNavigator, GridType, NavigationInfo, NavigatorCache, NavigatorMetaData,
    };

    // Tags
    pub use tessera_tags::{
        EntityClassification, EntityClassificationRegistry, GraphicTag, GraphicTagMetaDataRegistry,
    };

    // Data
    pub use tessera_data::{SparseTagQueryResult, SparseTileLayer, TileDataSet, TileDataSetMetaData};

    // Selection
    pub use tessera_select::{
        CellGroupDirection, CellGroupSelectorModel, ChoiceSelectorModel, CornerSelectorModel,
        Matcher, MatcherFactory, MatcherType, NeighbourSelectorModel, QuantityChoiceModel,
        QuantityChoiceSelectorModel, SelectorModel, TagChoiceModel, TileMatchRequest,
    };

    // Errors
    pub use tessera_core::RangeError;
    pub use tessera_nav::NavigatorError;
    pub use tessera_select::MatcherError;
    pub use tessera_tags::ClassificationError;
}
