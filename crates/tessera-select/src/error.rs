//! Error types for matcher construction.

use std::error::Error;
use std::fmt;

use tessera_nav::NavigatorError;
use tessera_tags::ClassificationError;

use crate::matcher::MatcherType;

/// Errors raised while turning a selector model into a runnable matcher.
///
/// All of these are configuration errors: they abort construction and no
/// partially-built matcher is ever returned. A matcher that simply does not
/// apply to a tile reports `false` instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatcherError {
    /// A mandatory model field was not set.
    MissingField {
        /// Kind of selector being built.
        selector: MatcherType,
        /// Name of the missing field.
        field: &'static str,
    },
    /// A model referenced a context data set that was never registered.
    UnknownDataSet {
        /// The data set id as written in the model.
        id: String,
    },
    /// A model referenced a class that is not registered.
    UnknownClass {
        /// The class name as written in the model.
        name: String,
    },
    /// The default class is not one of the selector's declared classes.
    DefaultClassNotDeclared {
        /// The default class name.
        name: String,
    },
    /// Classification registry failure.
    Classification(ClassificationError),
    /// Navigator construction failure.
    Navigator(NavigatorError),
}

impl fmt::Display for MatcherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { selector, field } => {
                write!(f, "{selector} selector is missing mandatory field '{field}'")
            }
            Self::UnknownDataSet { id } => write!(f, "unknown context data set '{id}'"),
            Self::UnknownClass { name } => write!(f, "unknown class '{name}'"),
            Self::DefaultClassNotDeclared { name } => {
                write!(f, "default class '{name}' is not in the declared match list")
            }
            Self::Classification(e) => write!(f, "classification: {e}"),
            Self::Navigator(e) => write!(f, "navigator: {e}"),
        }
    }
}

impl Error for MatcherError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Classification(e) => Some(e),
            Self::Navigator(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ClassificationError> for MatcherError {
    fn from(e: ClassificationError) -> Self {
        Self::Classification(e)
    }
}

impl From<NavigatorError> for MatcherError {
    fn from(e: NavigatorError) -> Self {
        Self::Navigator(e)
    }
}
