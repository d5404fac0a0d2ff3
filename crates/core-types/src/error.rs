use crate::enums::Field;
use thiserror::Error;

/// A single violated rule on a review submission.
///
/// The `Display` output is the message shown to the visitor next to the form.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(Field),

    #[error("{field} must be at most {max} characters")]
    TooLong { field: Field, max: usize },

    #[error("Rating must be a valid number")]
    InvalidRating,

    #[error("Rating must be between 1 and 5")]
    RatingOutOfRange,
}
