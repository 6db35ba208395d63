//! Plain orthogonal grid navigation.

use crate::meta::NavigationInfo;
use crate::navigator::{scaled_offset, GridNavigator};
use tessera_core::{Direction, MapCoordinate};

/// Navigator for a plain square grid.
///
/// Directions map to the eight standard offsets with y growing south.
///
/// # Examples
///
/// ```
/// use tessera_core::{Direction, MapCoordinate};
/// use tessera_nav::{GridNavigator, OrthogonalNavigator};
///
/// let nav = OrthogonalNavigator;
/// let origin = MapCoordinate::new(5, 5);
/// assert_eq!(nav.navigate(Direction::North, origin, 1), Some(MapCoordinate::new(5, 4)));
/// assert_eq!(nav.navigate(Direction::SouthWest, origin, 2), Some(MapCoordinate::new(3, 7)));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OrthogonalNavigator;

impl OrthogonalNavigator {
    /// Storage offset of a single step in `direction`.
    pub fn offset(direction: Direction) -> (i32, i32) {
        match direction {
            Direction::None => (0, 0),
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }
}

impl GridNavigator for OrthogonalNavigator {
    fn navigate_with_info(
        &self,
        direction: Direction,
        origin: MapCoordinate,
        steps: u32,
    ) -> Option<(MapCoordinate, NavigationInfo)> {
        let coord = scaled_offset(origin, Self::offset(direction), steps)?;
        Some((coord, NavigationInfo::default()))
    }
}
