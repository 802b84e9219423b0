//! Error taxonomy for word filtering and puzzle generation

use std::fmt;

/// Error type for the filtering and search primitives
///
/// Every variant except [`PuzzleError::NoResult`] is an invalid argument that
/// the caller can correct; those are rejected before any work begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// Minimum word length below 1
    InvalidMinLength(usize),
    /// Letter collection was empty
    EmptyLetterSet,
    /// Attempt budget of zero
    ZeroAttempts,
    /// Source alphabet cannot supply a full letter set
    AlphabetTooSmall { distinct: usize, required: usize },
    /// No candidate was produced: empty dictionary or a source that drew nothing
    NoResult,
}

impl PuzzleError {
    /// Whether the error is a caller-correctable argument problem
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        !matches!(self, Self::NoResult)
    }
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMinLength(len) => {
                write!(f, "Minimum word length must be at least 1, got {len}")
            }
            Self::EmptyLetterSet => write!(f, "Letter set must not be empty"),
            Self::ZeroAttempts => write!(f, "Attempt budget must be at least 1"),
            Self::AlphabetTooSmall { distinct, required } => write!(
                f,
                "Alphabet must contain at least {required} distinct letters, got {distinct}"
            ),
            Self::NoResult => write!(f, "No puzzle could be generated"),
        }
    }
}

impl std::error::Error for PuzzleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_classification() {
        assert!(PuzzleError::InvalidMinLength(0).is_invalid_argument());
        assert!(PuzzleError::EmptyLetterSet.is_invalid_argument());
        assert!(PuzzleError::ZeroAttempts.is_invalid_argument());
        assert!(
            PuzzleError::AlphabetTooSmall {
                distinct: 3,
                required: 7
            }
            .is_invalid_argument()
        );
        assert!(!PuzzleError::NoResult.is_invalid_argument());
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            PuzzleError::InvalidMinLength(0).to_string(),
            "Minimum word length must be at least 1, got 0"
        );
        assert_eq!(
            PuzzleError::AlphabetTooSmall {
                distinct: 5,
                required: 7
            }
            .to_string(),
            "Alphabet must contain at least 7 distinct letters, got 5"
        );
    }
}
