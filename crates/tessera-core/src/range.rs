//! Half-open integer ranges used to bound or wrap a map axis.

use std::error::Error;
use std::fmt;

/// A half-open integer range `[min, max)`.
///
/// [`clamp`](Self::clamp) saturates a value into the range;
/// [`wrap`](Self::wrap) maps it onto the range with modulo arithmetic
/// relative to `min`, which is how toroidal axes are built.
///
/// # Examples
///
/// ```
/// use tessera_core::Range;
///
/// let r = Range::new(0, 10).unwrap();
/// assert_eq!(r.clamp(12), 9);
/// assert_eq!(r.wrap(12), 2);
/// assert_eq!(r.wrap(-1), 9);
/// assert_eq!(r.wrap_count(-1), -1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Range {
    min: i32,
    max: i32,
}

impl Range {
    /// Create a range. Returns `Err(RangeError::Empty)` if `max <= min`.
    pub fn new(min: i32, max: i32) -> Result<Self, RangeError> {
        if max <= min {
            return Err(RangeError::Empty { min, max });
        }
        Ok(Self { min, max })
    }

    /// Inclusive lower bound.
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Exclusive upper bound.
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Number of values in the range.
    pub fn len(&self) -> u32 {
        (i64::from(self.max) - i64::from(self.min)) as u32
    }

    /// Always `false`; construction rejects empty ranges.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `value` lies inside `[min, max)`.
    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value < self.max
    }

    /// Saturate `value` into `[min, max - 1]`.
    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max - 1)
    }

    /// Map `value` onto the range with modulo arithmetic relative to `min`.
    pub fn wrap(&self, value: i32) -> i32 {
        let len = i64::from(self.len());
        let rel = (i64::from(value) - i64::from(self.min)).rem_euclid(len);
        (i64::from(self.min) + rel) as i32
    }

    /// Signed number of times `value` crossed the range boundary.
    ///
    /// Zero for values inside the range, positive past `max`, negative
    /// below `min`. `wrap(v) + wrap_count(v) * len == v` always holds.
    pub fn wrap_count(&self, value: i32) -> i32 {
        let len = i64::from(self.len());
        (i64::from(value) - i64::from(self.min)).div_euclid(len) as i32
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.min, self.max)
    }
}

/// Errors from [`Range`] construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeError {
    /// `max` was not greater than `min`.
    Empty {
        /// Requested lower bound.
        min: i32,
        /// Requested upper bound.
        max: i32,
    },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { min, max } => write!(f, "range [{min}, {max}) is empty"),
        }
    }
}

impl Error for RangeError {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_rejects_empty() {
        assert_eq!(Range::new(3, 3), Err(RangeError::Empty { min: 3, max: 3 }));
        assert!(Range::new(5, 2).is_err());
        assert!(Range::new(-1, 0).is_ok());
    }

    #[test]
    fn clamp_saturates_both_ends() {
        let r = Range::new(-2, 3).unwrap();
        assert_eq!(r.clamp(-10), -2);
        assert_eq!(r.clamp(3), 2);
        assert_eq!(r.clamp(0), 0);
    }

    #[test]
    fn wrap_is_relative_to_min() {
        let r = Range::new(5, 8).unwrap();
        assert_eq!(r.wrap(8), 5);
        assert_eq!(r.wrap(4), 7);
        assert_eq!(r.wrap(11), 5);
        assert_eq!(r.wrap_count(11), 2);
        assert_eq!(r.wrap_count(4), -1);
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        let r = Range::new(i32::MIN, i32::MAX).unwrap();
        assert_eq!(r.wrap(i32::MAX), i32::MIN);
        assert_eq!(r.wrap_count(i32::MAX), 1);
        assert_eq!(r.len(), u32::MAX);
    }

    proptest! {
        #[test]
        fn wrap_lands_inside_and_reconstructs(
            min in -50i32..50,
            len in 1i32..40,
            v in -500i32..500,
        ) {
            let r = Range::new(min, min + len).unwrap();
            let w = r.wrap(v);
            prop_assert!(r.contains(w));
            prop_assert_eq!(w + r.wrap_count(v) * len, v);
            prop_assert!(r.contains(r.clamp(v)));
        }
    }
}
