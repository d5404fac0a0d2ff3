use std::num::IntErrorKind;

/// The outcome of parsing the raw `rating` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingInput {
    /// A well-formed integer. It may still be out of range.
    Integer(i64),
    /// Digits only, but too large in magnitude to fit an `i64`.
    Overflow,
    /// Anything that is not an integer, including an empty field.
    NotInteger,
}

impl RatingInput {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(value) => RatingInput::Integer(value),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => RatingInput::Overflow,
                _ => RatingInput::NotInteger,
            },
        }
    }
}

/// One review submission, trimmed and typed.
///
/// Built once per request from the raw form fields and never mutated. The raw
/// rating text is kept so the form can be re-rendered exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewForm {
    school_name: String,
    reviewer_name: String,
    rating_text: String,
    rating: RatingInput,
    comment: String,
}

impl ReviewForm {
    pub fn new(school_name: &str, reviewer_name: &str, rating: &str, comment: &str) -> Self {
        let rating_text = rating.trim().to_string();
        Self {
            school_name: school_name.trim().to_string(),
            reviewer_name: reviewer_name.trim().to_string(),
            rating: RatingInput::parse(&rating_text),
            rating_text,
            comment: comment.trim().to_string(),
        }
    }

    pub fn school_name(&self) -> &str {
        &self.school_name
    }

    pub fn reviewer_name(&self) -> &str {
        &self.reviewer_name
    }

    /// The rating exactly as typed, minus surrounding whitespace.
    pub fn rating_text(&self) -> &str {
        &self.rating_text
    }

    pub fn rating(&self) -> RatingInput {
        self.rating
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }
}
