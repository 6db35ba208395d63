//! Decorators layering border policies and rotation over a base navigator.
//!
//! Each decorator owns the navigator it wraps and delegates first, then
//! post-processes the result (limit, wrap) or pre-processes the direction
//! (rotation). Axes are independent: a decorator configured for only one
//! axis leaves the other untouched.

use crate::meta::NavigationInfo;
use crate::navigator::GridNavigator;
use tessera_core::{Direction, MapCoordinate, Range};

/// Clamps one or both axes into a [`Range`].
///
/// Sets [`NavigationInfo::limited_x`] / [`NavigationInfo::limited_y`]
/// whenever clamping changed the coordinate.
#[derive(Debug)]
pub struct LimitNavigator {
    inner: Box<dyn GridNavigator>,
    x: Option<Range>,
    y: Option<Range>,
}

impl LimitNavigator {
    /// Wrap `inner`, clamping the axes that have a range.
    pub fn new(inner: Box<dyn GridNavigator>, x: Option<Range>, y: Option<Range>) -> Self {
        Self { inner, x, y }
    }
}

impl GridNavigator for LimitNavigator {
    fn navigate_with_info(
        &self,
        direction: Direction,
        origin: MapCoordinate,
        steps: u32,
    ) -> Option<(MapCoordinate, NavigationInfo)> {
        let (mut coord, mut info) = self.inner.navigate_with_info(direction, origin, steps)?;
        if let Some(range) = &self.x {
            let clamped = range.clamp(coord.x);
            info.limited_x |= clamped != coord.x;
            coord.x = clamped;
        }
        if let Some(range) = &self.y {
            let clamped = range.clamp(coord.y);
            info.limited_y |= clamped != coord.y;
            coord.y = clamped;
        }
        Some((coord, info))
    }
}

/// Wraps one or both axes around a [`Range`] (toroidal topology).
///
/// Adds the signed number of boundary crossings to
/// [`NavigationInfo::wrap_x`] / [`NavigationInfo::wrap_y`]: crossing past
/// the upper bound counts `+1`, crossing below the lower bound `-1`.
#[derive(Debug)]
pub struct WrapNavigator {
    inner: Box<dyn GridNavigator>,
    x: Option<Range>,
    y: Option<Range>,
}

impl WrapNavigator {
    /// Wrap `inner`, wrapping the axes that have a range.
    pub fn new(inner: Box<dyn GridNavigator>, x: Option<Range>, y: Option<Range>) -> Self {
        Self { inner, x, y }
    }
}

impl GridNavigator for WrapNavigator {
    fn navigate_with_info(
        &self,
        direction: Direction,
        origin: MapCoordinate,
        steps: u32,
    ) -> Option<(MapCoordinate, NavigationInfo)> {
        let (mut coord, mut info) = self.inner.navigate_with_info(direction, origin, steps)?;
        if let Some(range) = &self.x {
            info.wrap_x += range.wrap_count(coord.x);
            coord.x = range.wrap(coord.x);
        }
        if let Some(range) = &self.y {
            info.wrap_y += range.wrap_count(coord.y);
            coord.y = range.wrap(coord.y);
        }
        Some((coord, info))
    }
}

/// Rotates incoming directions clockwise by a fixed number of quarter turns.
///
/// Used when screen axes are rotated relative to storage axes.
#[derive(Debug)]
pub struct RotationNavigator {
    inner: Box<dyn GridNavigator>,
    quarter_turns: u8,
}

impl RotationNavigator {
    /// Wrap `inner`; `quarter_turns` is taken modulo 4.
    pub fn new(inner: Box<dyn GridNavigator>, quarter_turns: u8) -> Self {
        Self {
            inner,
            quarter_turns: quarter_turns % 4,
        }
    }

    /// Effective rotation in quarter turns (0..=3).
    pub fn quarter_turns(&self) -> u8 {
        self.quarter_turns
    }
}

impl GridNavigator for RotationNavigator {
    fn navigate_with_info(
        &self,
        direction: Direction,
        origin: MapCoordinate,
        steps: u32,
    ) -> Option<(MapCoordinate, NavigationInfo)> {
        let rotated = direction.rotate_quarters(i32::from(self.quarter_turns));
        self.inner.navigate_with_info(rotated, origin, steps)
    }
}
