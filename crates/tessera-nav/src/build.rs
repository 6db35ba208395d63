//! Construction of decorated navigators from [`NavigatorMetaData`].

use crate::decorator::{LimitNavigator, RotationNavigator, WrapNavigator};
use crate::error::NavigatorError;
use crate::iso::{IsoDiamondNavigator, IsoStaggeredNavigator};
use crate::meta::{BorderPolicy, GridType, NavigatorMetaData};
use crate::navigator::GridNavigator;
use crate::orthogonal::OrthogonalNavigator;

impl NavigatorMetaData {
    /// Build the navigator this descriptor describes.
    ///
    /// The base topology is wrapped by the border decorators and then by
    /// the rotation decorator. When both axes use the same border
    /// operation a single two-axis decorator is used; otherwise each axis
    /// gets its own.
    ///
    /// Returns `Err(NavigatorError::UnsupportedGridType)` for hex grids.
    ///
    /// # Examples
    ///
    /// ```
    /// use tessera_core::{Direction, MapCoordinate};
    /// use tessera_nav::{BorderPolicy, GridNavigator, GridType, NavigatorMetaData};
    ///
    /// let nav = NavigatorMetaData::new(GridType::Grid)
    ///     .with_horizontal(BorderPolicy::wrap(0, 8).unwrap())
    ///     .with_vertical(BorderPolicy::limit(0, 8).unwrap())
    ///     .build()
    ///     .unwrap();
    /// let origin = MapCoordinate::new(0, 0);
    /// assert_eq!(nav.navigate(Direction::NorthWest, origin, 1), Some(MapCoordinate::new(7, 0)));
    /// ```
    pub fn build(&self) -> Result<Box<dyn GridNavigator>, NavigatorError> {
        let base: Box<dyn GridNavigator> = match self.grid_type {
            GridType::Grid => Box::new(OrthogonalNavigator),
            GridType::IsoDiamond => Box::new(IsoDiamondNavigator),
            GridType::IsoStaggered => Box::new(IsoStaggeredNavigator),
            GridType::HexDiamond | GridType::HexStaggered => {
                return Err(NavigatorError::UnsupportedGridType {
                    grid_type: self.grid_type,
                })
            }
        };

        let bordered = if self.horizontal.same_operation(&self.vertical) {
            decorate(base, self.horizontal, self.vertical)
        } else {
            let with_x = decorate(base, self.horizontal, BorderPolicy::None);
            decorate(with_x, BorderPolicy::None, self.vertical)
        };

        let steps = self.rotation_steps % 4;
        if steps == 0 {
            Ok(bordered)
        } else {
            Ok(Box::new(RotationNavigator::new(bordered, steps)))
        }
    }
}

/// Apply one border decorator covering whichever axes carry a policy.
///
/// Callers guarantee `x` and `y` are either the same operation or one of
/// them is `BorderPolicy::None`.
fn decorate(
    inner: Box<dyn GridNavigator>,
    x: BorderPolicy,
    y: BorderPolicy,
) -> Box<dyn GridNavigator> {
    match (x, y) {
        (BorderPolicy::None, BorderPolicy::None) => inner,
        (BorderPolicy::Limit(rx), BorderPolicy::Limit(ry)) => {
            Box::new(LimitNavigator::new(inner, Some(rx), Some(ry)))
        }
        (BorderPolicy::Wrap(rx), BorderPolicy::Wrap(ry)) => {
            Box::new(WrapNavigator::new(inner, Some(rx), Some(ry)))
        }
        (BorderPolicy::Limit(rx), BorderPolicy::None) => {
            Box::new(LimitNavigator::new(inner, Some(rx), None))
        }
        (BorderPolicy::None, BorderPolicy::Limit(ry)) => {
            Box::new(LimitNavigator::new(inner, None, Some(ry)))
        }
        (BorderPolicy::Wrap(rx), BorderPolicy::None) => {
            Box::new(WrapNavigator::new(inner, Some(rx), None))
        }
        (BorderPolicy::None, BorderPolicy::Wrap(ry)) => {
            Box::new(WrapNavigator::new(inner, None, Some(ry)))
        }
        (BorderPolicy::Limit(rx), BorderPolicy::Wrap(ry)) => {
            let limited = Box::new(LimitNavigator::new(inner, Some(rx), None));
            Box::new(WrapNavigator::new(limited, None, Some(ry)))
        }
        (BorderPolicy::Wrap(rx), BorderPolicy::Limit(ry)) => {
            let wrapped = Box::new(WrapNavigator::new(inner, Some(rx), None));
            Box::new(LimitNavigator::new(wrapped, None, Some(ry)))
        }
    }
}
