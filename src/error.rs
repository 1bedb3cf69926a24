use std::fmt;

/// Represents errors that can occur when inserting a new pattern.
///
/// Lookups never fail; a miss is reported through
/// [`Lookup::found`](crate::Lookup::found).
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum InsertError {
    /// Attempted to insert a pattern that is already registered as an
    /// endpoint.
    Duplicate {
        /// The pattern that was passed to `add`.
        pattern: String,
    },
    /// Attempted to place a named parameter next to a sibling that
    /// carries a different name at the same position. A parameter at a
    /// given nesting depth must keep a single name.
    SharedKey {
        /// Key of the sibling edge already in the tree.
        existing: String,
        /// The remainder of the pattern that could not be placed.
        tried: String,
    },
    /// Patterns must contain at least one byte.
    EmptyPattern,
}

impl InsertError {
    pub(crate) fn shared_key(existing: &[u8], tried: &[u8]) -> Self {
        InsertError::SharedKey {
            existing: String::from_utf8_lossy(existing).into_owned(),
            tried: String::from_utf8_lossy(tried).into_owned(),
        }
    }
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicate { pattern } => {
                write!(f, "a payload is already registered for pattern '{}'", pattern)
            }
            Self::SharedKey { existing, tried } => {
                write!(
                    f,
                    "tried to place '{}' at the same level as existing parameter '{}'",
                    tried, existing
                )
            }
            Self::EmptyPattern => write!(f, "patterns must not be empty"),
        }
    }
}

impl std::error::Error for InsertError {}
