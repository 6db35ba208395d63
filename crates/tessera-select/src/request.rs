//! Per-call matcher input.

use tessera_core::{ContinuousMapCoordinate, MapCoordinate};
use tessera_tags::GraphicTag;

/// The tile a matcher is asked about.
#[derive(Clone, Debug, PartialEq)]
pub struct TileMatchRequest {
    /// The tile's own tag.
    pub tag: GraphicTag,
    /// Where the tile sits. Rounded to a cell before navigating.
    pub position: ContinuousMapCoordinate,
    /// Layer the tile lives on; neighbours are queried on the same layer.
    pub z: i32,
    /// Quantity associated with the tile, read by quantity choices.
    pub quantity: Option<i64>,
}

impl TileMatchRequest {
    /// Create a request without a quantity.
    pub fn new(
        tag: impl Into<GraphicTag>,
        position: impl Into<ContinuousMapCoordinate>,
        z: i32,
    ) -> Self {
        Self {
            tag: tag.into(),
            position: position.into(),
            z,
            quantity: None,
        }
    }

    /// Attach a quantity.
    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// The cell the request refers to.
    pub fn cell(&self) -> MapCoordinate {
        self.position.normalize()
    }
}
