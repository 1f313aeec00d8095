use {
    chrono::{NaiveDate, NaiveDateTime},
    thiserror::Error,
};

/// Errors produced by the toll calculator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TollError {
    /// The vehicle tag was empty or does not name a known vehicle class.
    #[error("Invalid vehicle: {tag:?} is not a known vehicle class")]
    InvalidVehicle { tag: String },

    /// No passages were supplied for the day.
    #[error("Invalid timestamps: at least one passage is required")]
    InvalidTimestamps,

    /// A passage precedes the one before it.
    #[error(
        "Passages out of order: passage {index} at {found} is earlier than the \
         previous passage at {previous}"
    )]
    UnorderedPassages {
        index: usize,
        previous: NaiveDateTime,
        found: NaiveDateTime,
    },

    /// Passages fall on more than one calendar date.
    #[error("Passages span more than one day: expected {expected}, found {found}")]
    MultipleDays { expected: NaiveDate, found: NaiveDate },
}
