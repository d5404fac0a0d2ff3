//! # School Reviews Core Types
//!
//! The single entity of the system (`Review`), the typed form value built from a
//! submission (`ReviewForm`) and the pure validator that decides whether a
//! submission may be written.
//!
//! Nothing in this crate performs I/O, so every rule can be tested without a
//! database.

pub mod enums;
pub mod error;
pub mod form;
pub mod review;
pub mod validation;

// Re-export the core types to provide a clean public API.
pub use enums::Field;
pub use error::ValidationError;
pub use form::{RatingInput, ReviewForm};
pub use review::{NewReview, Review};
pub use validation::validate;
