//! The [`GridNavigator`] trait.

use crate::meta::NavigationInfo;
use std::fmt;
use tessera_core::{Direction, MapCoordinate};

/// Computes neighbour coordinates for a grid topology.
///
/// Implementations are immutable after construction and shared behind
/// `Arc`, so `Send + Sync` is required. Decorators own the navigator they
/// wrap and never modify it.
///
/// # Contract
///
/// - `Direction::None` does not move, but decorators still apply their
///   border policy to the origin.
/// - `steps == 0` behaves like `Direction::None`.
/// - `None` is returned only when the result does not fit in `i32`.
pub trait GridNavigator: Send + Sync + fmt::Debug {
    /// Move `steps` cells in `direction` from `origin`, reporting wraps and clamps.
    fn navigate_with_info(
        &self,
        direction: Direction,
        origin: MapCoordinate,
        steps: u32,
    ) -> Option<(MapCoordinate, NavigationInfo)>;

    /// Move `steps` cells in `direction` from `origin`.
    fn navigate(
        &self,
        direction: Direction,
        origin: MapCoordinate,
        steps: u32,
    ) -> Option<MapCoordinate> {
        self.navigate_with_info(direction, origin, steps)
            .map(|(coord, _)| coord)
    }
}

/// Apply a per-step offset `steps` times with overflow checking.
pub(crate) fn scaled_offset(
    origin: MapCoordinate,
    (dx, dy): (i32, i32),
    steps: u32,
) -> Option<MapCoordinate> {
    let steps = i32::try_from(steps).ok()?;
    origin.checked_offset(dx.checked_mul(steps)?, dy.checked_mul(steps)?)
}
