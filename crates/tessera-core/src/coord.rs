//! Integer and continuous map coordinates, and rectangular map areas.

use std::fmt;

/// Identity of a single grid cell.
///
/// `x` grows to the east, `y` grows to the south (screen order). Navigators
/// interpret these axes according to their grid topology.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MapCoordinate {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl MapCoordinate {
    /// Create a coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this coordinate, returning `None` on `i32` overflow.
    pub fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// Convert to a continuous coordinate at the cell origin.
    pub fn to_continuous(self) -> ContinuousMapCoordinate {
        ContinuousMapCoordinate::new(self.x as f32, self.y as f32)
    }
}

impl fmt::Display for MapCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for MapCoordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A map position with a fractional sub-tile component.
///
/// Used for entity positions and for the coordinates attached to emitted
/// sprites. [`normalize`](Self::normalize) maps it onto the owning cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct ContinuousMapCoordinate {
    /// Column, fractional.
    pub x: f32,
    /// Row, fractional.
    pub y: f32,
}

impl ContinuousMapCoordinate {
    /// Create a continuous coordinate.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Round to the nearest cell (half away from zero).
    ///
    /// Values outside the `i32` range saturate.
    pub fn normalize(self) -> MapCoordinate {
        MapCoordinate {
            x: self.x.round() as i32,
            y: self.y.round() as i32,
        }
    }
}

impl fmt::Display for ContinuousMapCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<MapCoordinate> for ContinuousMapCoordinate {
    fn from(c: MapCoordinate) -> Self {
        c.to_continuous()
    }
}

/// An axis-aligned rectangle in continuous map space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapArea {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Extent along x. Negative extents are treated as zero.
    pub width: f32,
    /// Extent along y. Negative extents are treated as zero.
    pub height: f32,
}

impl MapArea {
    /// Create an area from its top-left corner and extent.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Inclusive integer bounding box `(min, max)` of the cells this area touches.
    ///
    /// A `1x1` area anchored on a cell origin covers exactly that cell.
    /// Degenerate (zero or negative) extents still cover the anchor cell.
    ///
    /// ```
    /// use tessera_core::{MapArea, MapCoordinate};
    ///
    /// let (min, max) = MapArea::new(0.5, 0.0, 1.0, 1.0).integer_bounds();
    /// assert_eq!(min, MapCoordinate::new(0, 0));
    /// assert_eq!(max, MapCoordinate::new(1, 0));
    /// ```
    pub fn integer_bounds(&self) -> (MapCoordinate, MapCoordinate) {
        let min_x = self.x.floor() as i32;
        let min_y = self.y.floor() as i32;
        let max_x = ((self.x + self.width.max(0.0)).ceil() as i32 - 1).max(min_x);
        let max_y = ((self.y + self.height.max(0.0)).ceil() as i32 - 1).max(min_y);
        (MapCoordinate::new(min_x, min_y), MapCoordinate::new(max_x, max_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_rounds_half_away_from_zero() {
        assert_eq!(
            ContinuousMapCoordinate::new(1.5, -1.5).normalize(),
            MapCoordinate::new(2, -2)
        );
        assert_eq!(
            ContinuousMapCoordinate::new(1.49, 0.2).normalize(),
            MapCoordinate::new(1, 0)
        );
    }

    #[test]
    fn checked_offset_detects_overflow() {
        assert!(MapCoordinate::new(i32::MAX, 0).checked_offset(1, 0).is_none());
        assert_eq!(
            MapCoordinate::new(3, 4).checked_offset(-1, 2),
            Some(MapCoordinate::new(2, 6))
        );
    }

    #[test]
    fn unit_area_on_origin_covers_one_cell() {
        let (min, max) = MapArea::new(2.0, 3.0, 1.0, 1.0).integer_bounds();
        assert_eq!(min, MapCoordinate::new(2, 3));
        assert_eq!(max, MapCoordinate::new(2, 3));
    }

    #[test]
    fn degenerate_area_covers_anchor() {
        let (min, max) = MapArea::new(-1.2, 4.0, 0.0, -3.0).integer_bounds();
        assert_eq!(min, MapCoordinate::new(-2, 4));
        assert_eq!(max, min);
    }

    #[test]
    fn wide_area_bounds() {
        let (min, max) = MapArea::new(0.0, 0.0, 3.0, 2.5).integer_bounds();
        assert_eq!(min, MapCoordinate::new(0, 0));
        assert_eq!(max, MapCoordinate::new(2, 2));
    }
}
