//! Error types for indicator and pager operations

use thiserror_no_std::Error;

/// Errors raised when a mutation or construction would break an indicator
/// invariant, or when a pager notification cannot be delivered.
///
/// Every variant is raised synchronously at the offending call and leaves the
/// prior state untouched.
#[derive(Debug, Error)]
pub enum DotsError {
    /// Dot count below the minimum
    #[error("Passed dot count ({count}) is lower than the minimum count ({minimum})")]
    InvalidCount {
        /// The rejected count
        count: i32,
        /// Smallest accepted count
        minimum: i32,
    },

    /// Negative dot radius
    #[error("Passed dot radius ({radius}) is negative")]
    InvalidRadius {
        /// The rejected radius
        radius: i32,
    },

    /// Negative dot separation
    #[error("Passed dot separation ({separation}) is negative")]
    InvalidSeparation {
        /// The rejected separation
        separation: i32,
    },

    /// Selected position outside `[0, count)`
    #[error(
        "You selected a position that is out of the current bounds (selected: {index}, bounds: [0, {count}))"
    )]
    IndexOutOfBounds {
        /// The rejected index
        index: i32,
        /// Dot count in effect when the index was rejected
        count: i32,
    },

    /// The indicator was already borrowed when a pager notification arrived
    #[error("Indicator is already borrowed")]
    IndicatorBusy,

    /// Listener list is full
    #[error("Listener capacity exceeded (max: {max})")]
    ListenerCapacityExceeded {
        /// Maximum listeners per notification kind
        max: usize,
    },

    /// Page list is full
    #[error("Page capacity exceeded (max: {max})")]
    PageCapacityExceeded {
        /// Maximum pages a pager can hold
        max: usize,
    },

    /// A serialized config blob could not be decoded
    #[error("Invalid config blob: {0}")]
    InvalidConfig(postcard::Error),
}

/// Result type for indicator and pager operations
pub type DotsResult<T> = Result<T, DotsError>;
