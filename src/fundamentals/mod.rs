//! Pure functions from the introductory exercises. No collaborators, no
//! state; they exist to be unit tested directly.

mod intervals;
mod negative_number;
mod string_duplicator;

pub use intervals::{Interval, IntervalError, IntervalsAdjacencyDetector};
pub use negative_number::NegativeNumberValidator;
pub use string_duplicator::StringDuplicator;
