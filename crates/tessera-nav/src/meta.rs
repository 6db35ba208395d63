//! Navigator descriptors and per-step navigation feedback.

use crate::error::NavigatorError;
use tessera_core::Range;

/// Grid topology of a map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GridType {
    /// Plain orthogonal grid.
    Grid,
    /// Isometric diamond rendered over a rectangular store.
    IsoDiamond,
    /// Isometric staggered rows.
    IsoStaggered,
    /// Reserved; building a navigator fails.
    HexDiamond,
    /// Reserved; building a navigator fails.
    HexStaggered,
}

/// How an axis handles coordinates that leave its range.
///
/// # Examples
///
/// ```
/// use tessera_nav::BorderPolicy;
///
/// let wrap = BorderPolicy::wrap(0, 64).unwrap();
/// assert!(wrap.same_operation(&BorderPolicy::wrap(0, 32).unwrap()));
/// assert!(!wrap.same_operation(&BorderPolicy::None));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BorderPolicy {
    /// Unbounded axis.
    #[default]
    None,
    /// Clamp into the range.
    Limit(Range),
    /// Wrap around the range (periodic).
    Wrap(Range),
}

impl BorderPolicy {
    /// A clamping policy over `[min, max)`.
    pub fn limit(min: i32, max: i32) -> Result<Self, NavigatorError> {
        Ok(Self::Limit(Range::new(min, max)?))
    }

    /// A wrapping policy over `[min, max)`.
    pub fn wrap(min: i32, max: i32) -> Result<Self, NavigatorError> {
        Ok(Self::Wrap(Range::new(min, max)?))
    }

    /// Whether both policies use the same operation, ignoring ranges.
    pub fn same_operation(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// Immutable description of a navigator.
///
/// Two descriptors are equal iff every field matches, which makes this
/// the key of [`NavigatorCache`](crate::NavigatorCache).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NavigatorMetaData {
    /// Base topology.
    pub grid_type: GridType,
    /// Policy for the x axis.
    pub horizontal: BorderPolicy,
    /// Policy for the y axis.
    pub vertical: BorderPolicy,
    /// Clockwise quarter turns applied to incoming directions (mod 4).
    pub rotation_steps: u8,
}

impl NavigatorMetaData {
    /// Unbounded, unrotated navigator of the given topology.
    pub fn new(grid_type: GridType) -> Self {
        Self {
            grid_type,
            horizontal: BorderPolicy::None,
            vertical: BorderPolicy::None,
            rotation_steps: 0,
        }
    }

    /// Replace the x axis policy.
    pub fn with_horizontal(mut self, policy: BorderPolicy) -> Self {
        self.horizontal = policy;
        self
    }

    /// Replace the y axis policy.
    pub fn with_vertical(mut self, policy: BorderPolicy) -> Self {
        self.vertical = policy;
        self
    }

    /// Replace the rotation.
    pub fn with_rotation(mut self, steps: u8) -> Self {
        self.rotation_steps = steps;
        self
    }
}

/// Feedback from a single navigation call.
///
/// Diagnostic only: wrap counters are signed boundary crossings
/// (forward +1, backward -1) and the limit flags record clamping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationInfo {
    /// Signed number of x-axis wraps.
    pub wrap_x: i32,
    /// Signed number of y-axis wraps.
    pub wrap_y: i32,
    /// The x axis was clamped.
    pub limited_x: bool,
    /// The y axis was clamped.
    pub limited_y: bool,
}

impl NavigationInfo {
    /// Whether any axis wrapped.
    pub fn wrapped(&self) -> bool {
        self.wrap_x != 0 || self.wrap_y != 0
    }

    /// Whether any axis was clamped.
    pub fn limited(&self) -> bool {
        self.limited_x || self.limited_y
    }
}
