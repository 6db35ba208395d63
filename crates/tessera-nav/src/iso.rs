//! Isometric navigators: diamond and staggered layouts.

use crate::meta::NavigationInfo;
use crate::navigator::{scaled_offset, GridNavigator};
use tessera_core::{Direction, MapCoordinate};

/// Navigator for an isometric diamond map stored as a rectangular array.
///
/// Screen diagonals move one storage axis by one cell; screen cardinals
/// move both axes. A storage step `(+1, 0)` therefore appears south-east
/// on screen and `(0, -1)` appears north-east.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IsoDiamondNavigator;

impl IsoDiamondNavigator {
    /// Storage offset of a single step in screen `direction`.
    pub fn offset(direction: Direction) -> (i32, i32) {
        match direction {
            Direction::None => (0, 0),
            Direction::North => (-1, -1),
            Direction::NorthEast => (0, -1),
            Direction::East => (1, -1),
            Direction::SouthEast => (1, 0),
            Direction::South => (1, 1),
            Direction::SouthWest => (0, 1),
            Direction::West => (-1, 1),
            Direction::NorthWest => (-1, 0),
        }
    }
}

impl GridNavigator for IsoDiamondNavigator {
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

/// Navigator for isometric staggered rows.
///
/// Rows are half a tile tall on screen and odd rows are shifted half a
/// tile to the east. Screen north/south therefore skip two rows, east/west
/// stay on the row, and diagonal moves change row by one with an x shift
/// that depends on the parity of the row being left:
///
/// | from row | NE | SE | SW | NW |
/// |----------|----|----|----|----|
/// | even     | 0  | 0  | -1 | -1 |
/// | odd      | +1 | +1 | 0  | 0  |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IsoStaggeredNavigator;

/// Number of odd integers in `[lo, hi]` (`lo <= hi`).
fn count_odd(lo: i64, hi: i64) -> i64 {
    (hi + 1).div_euclid(2) - lo.div_euclid(2)
}

impl IsoStaggeredNavigator {
    /// Storage offset of `steps` moves in `direction`, starting on row `y`.
    fn offset(direction: Direction, y: i32, steps: u32) -> (i64, i64) {
        let k = i64::from(steps);
        let y = i64::from(y);
        if k == 0 {
            return (0, 0);
        }
        // Rows the individual steps start from.
        let (up_lo, up_hi) = (y - k + 1, y);
        let (down_lo, down_hi) = (y, y + k - 1);
        match direction {
            Direction::None => (0, 0),
            Direction::North => (0, -2 * k),
            Direction::South => (0, 2 * k),
            Direction::East => (k, 0),
            Direction::West => (-k, 0),
            Direction::NorthEast => (count_odd(up_lo, up_hi), -k),
            Direction::NorthWest => (-(k - count_odd(up_lo, up_hi)), -k),
            Direction::SouthEast => (count_odd(down_lo, down_hi), k),
            Direction::SouthWest => (-(k - count_odd(down_lo, down_hi)), k),
        }
    }
}

impl GridNavigator for IsoStaggeredNavigator {
    fn navigate_with_info(
        &self,
        direction: Direction,
        origin: MapCoordinate,
        steps: u32,
    ) -> Option<(MapCoordinate, NavigationInfo)> {
        let (dx, dy) = Self::offset(direction, origin.y, steps);
        let x = i32::try_from(i64::from(origin.x) + dx).ok()?;
        let y = i32::try_from(i64::from(origin.y) + dy).ok()?;
        Some((MapCoordinate::new(x, y), NavigationInfo::default()))
    }
}
