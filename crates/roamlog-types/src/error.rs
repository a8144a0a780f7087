use std::fmt;

use uuid::Uuid;

/// Result type for roamlog-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Position-based mutation outside `0..=len`
    IndexOutOfRange { index: usize, len: usize },

    /// Checked reorder received ids that are not a permutation of the current blocks
    ReorderMismatch {
        missing: Vec<Uuid>,
        unknown: Vec<Uuid>,
    },

    /// Rating raw value outside `0..=5`
    InvalidRating(i64),

    /// Colour string that is not `#RGB`, `#RRGGBB` or `#RRGGBBAA`
    InvalidColor(String),

    /// Theme definition failed validation
    InvalidTheme { slug: String, reason: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexOutOfRange { index, len } => {
                write!(f, "Index {} out of range for {} blocks", index, len)
            }
            Error::ReorderMismatch { missing, unknown } => write!(
                f,
                "Reorder ids are not a permutation of current blocks ({} missing, {} unknown)",
                missing.len(),
                unknown.len()
            ),
            Error::InvalidRating(raw) => write!(f, "Invalid rating value: {} (expected 0-5)", raw),
            Error::InvalidColor(value) => write!(f, "Invalid colour: {:?}", value),
            Error::InvalidTheme { slug, reason } => {
                write!(f, "Invalid theme '{}': {}", slug, reason)
            }
        }
    }
}

impl std::error::Error for Error {}
