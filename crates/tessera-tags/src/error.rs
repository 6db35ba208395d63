//! Error types for classification registration.

use std::error::Error;
use std::fmt;

/// Errors arising from class registration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClassificationError {
    /// Every bit of the underlying bitset is already assigned.
    CapacityExceeded {
        /// The class that could not be registered.
        name: String,
        /// Bit width of the classification type.
        capacity: usize,
    },
    /// Class names must contain at least one non-whitespace character.
    EmptyName,
}

impl fmt::Display for ClassificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { name, capacity } => write!(
                f,
                "cannot register class '{name}': all {capacity} classification bits are in use"
            ),
            Self::EmptyName => write!(f, "class name must not be empty"),
        }
    }
}

impl Error for ClassificationError {}
