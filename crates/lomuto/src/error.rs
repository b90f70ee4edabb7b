use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Invalid index range passed to a checked entry point.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RangeError {
    /// `low > high` where a non-empty range is required.
    Inverted { low: usize, high: usize },
    /// `high` does not index into the sequence.
    OutOfBounds { high: usize, len: usize },
}

impl Display for RangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inverted { low, high } => {
                write!(f, "empty range: low {low} is greater than high {high}")
            }
            Self::OutOfBounds { high, len } => {
                write!(f, "high index {high} is out of bounds for length {len}")
            }
        }
    }
}

impl Error for RangeError {}
