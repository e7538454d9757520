use std::fmt;

use gridpath_core::{Point, Range};

/// Errors returned when a search cannot be started.
///
/// An unreachable finish is not an error: it is reported by the finish being
/// absent from the settled order.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// A start or finish point lies outside the search range.
    OutOfBounds { pos: Point, bounds: Range },
    /// The grid does not have the dimensions the `PathRange` was built for.
    SizeMismatch { expected: Range, found: Range },
    /// The search state still holds a previous run; call `reset` first.
    StaleState,
    /// The grid has no start marker.
    MissingStart,
    /// The grid has no finish marker.
    MissingFinish,
    /// Edge costs are not finite and positive.
    InvalidConfig(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, bounds } => {
                write!(f, "search: point {pos} is outside {bounds}")
            }
            Self::SizeMismatch { expected, found } => {
                write!(f, "search: grid range {found} does not match {expected}")
            }
            Self::StaleState => f.write_str("search: state not reset since the previous run"),
            Self::MissingStart => f.write_str("search: grid has no start cell"),
            Self::MissingFinish => f.write_str("search: grid has no finish cell"),
            Self::InvalidConfig(msg) => write!(f, "search: invalid config: {msg}"),
        }
    }
}

impl std::error::Error for SearchError {}
