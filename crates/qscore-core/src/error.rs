//! Error types for parsing user-supplied category names.

use thiserror::Error;

/// A string did not name a score category or filter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCategoryError {
    /// The value is not one of the known category slugs.
    #[error("unknown score category: {0} (expected excellent, good, fair or needs-improvement)")]
    UnknownCategory(String),

    /// The value is neither `all` nor a known category slug.
    #[error("unknown filter: {0} (expected all, excellent, good, fair or needs-improvement)")]
    UnknownFilter(String),
}
