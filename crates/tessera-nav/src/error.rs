//! Error types for navigator construction.

use crate::meta::GridType;
use std::error::Error;
use std::fmt;
use tessera_core::RangeError;

/// Errors arising from navigator construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigatorError {
    /// The requested grid topology is declared but has no navigator.
    UnsupportedGridType {
        /// The offending topology.
        grid_type: GridType,
    },
    /// A border range was empty.
    InvalidRange(RangeError),
}

impl fmt::Display for NavigatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedGridType { grid_type } => {
                write!(f, "grid type {grid_type:?} is not supported")
            }
            Self::InvalidRange(e) => write!(f, "invalid border range: {e}"),
        }
    }
}

impl Error for NavigatorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidRange(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RangeError> for NavigatorError {
    fn from(e: RangeError) -> Self {
        Self::InvalidRange(e)
    }
}
