//! Field rules for a review submission.
//!
//! Every rule is checked independently and all violations are reported, in
//! form order, so the visitor can fix everything in one pass.

use crate::enums::Field;
use crate::error::ValidationError;
use crate::form::{RatingInput, ReviewForm};
use crate::review::NewReview;
use std::ops::RangeInclusive;

/// Accepted star ratings.
pub const RATING_RANGE: RangeInclusive<i64> = 1..=5;

/// Returns every rule the submission violates. An empty list means it is valid.
pub fn validate(form: &ReviewForm) -> Vec<ValidationError> {
    [
        check_text(Field::SchoolName, form.school_name()).err(),
        check_text(Field::ReviewerName, form.reviewer_name()).err(),
        check_rating(form.rating()).err(),
        check_text(Field::Comment, form.comment()).err(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

impl ReviewForm {
    /// Converts the submission into an insertable review, or returns the same
    /// errors `validate` would.
    pub fn to_new_review(&self) -> Result<NewReview, Vec<ValidationError>> {
        match (
            check_text(Field::SchoolName, self.school_name()),
            check_text(Field::ReviewerName, self.reviewer_name()),
            check_rating(self.rating()),
            check_text(Field::Comment, self.comment()),
        ) {
            (Ok(()), Ok(()), Ok(rating), Ok(())) => Ok(NewReview {
                school_name: self.school_name().to_string(),
                reviewer_name: self.reviewer_name().to_string(),
                rating,
                comment: self.comment().to_string(),
            }),
            _ => Err(validate(self)),
        }
    }
}

fn check_text(field: Field, value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required(field));
    }
    let max = field.max_len();
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

fn check_rating(rating: RatingInput) -> Result<i32, ValidationError> {
    match rating {
        RatingInput::Integer(value) if RATING_RANGE.contains(&value) => {
            i32::try_from(value).map_err(|_| ValidationError::RatingOutOfRange)
        }
        RatingInput::Integer(_) | RatingInput::Overflow => Err(ValidationError::RatingOutOfRange),
        RatingInput::NotInteger => Err(ValidationError::InvalidRating),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(school: &str, reviewer: &str, rating: &str, comment: &str) -> ReviewForm {
        ReviewForm::new(school, reviewer, rating, comment)
    }

    fn valid() -> ReviewForm {
        form("Lincoln High", "Ana", "5", "Great teachers")
    }

    #[test]
    fn valid_submission_has_no_errors() {
        assert!(validate(&valid()).is_empty());
        let review = valid().to_new_review().expect("valid form");
        assert_eq!(review.school_name(), "Lincoln High");
        assert_eq!(review.reviewer_name(), "Ana");
        assert_eq!(review.rating(), 5);
        assert_eq!(review.comment(), "Great teachers");
    }

    #[test]
    fn whitespace_only_fields_are_required() {
        let errors = validate(&form("   ", "\t", "3", " \n "));
        assert_eq!(
            errors,
            vec![
                ValidationError::Required(Field::SchoolName),
                ValidationError::Required(Field::ReviewerName),
                ValidationError::Required(Field::Comment),
            ]
        );
    }

    #[test]
    fn name_length_boundary() {
        let exactly = "a".repeat(100);
        let over = "a".repeat(101);
        assert!(validate(&form(&exactly, &exactly, "3", "ok")).is_empty());
        assert_eq!(
            validate(&form(&over, "Ana", "3", "ok")),
            vec![ValidationError::TooLong { field: Field::SchoolName, max: 100 }]
        );
        assert_eq!(
            validate(&form("School", &over, "3", "ok")),
            vec![ValidationError::TooLong { field: Field::ReviewerName, max: 100 }]
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let accented = "é".repeat(100);
        assert!(validate(&form(&accented, "Ana", "4", "ok")).is_empty());
    }

    #[test]
    fn comment_length_boundary() {
        assert!(validate(&form("S", "R", "2", &"c".repeat(1000))).is_empty());
        assert_eq!(
            validate(&form("S", "R", "2", &"c".repeat(1001))),
            vec![ValidationError::TooLong { field: Field::Comment, max: 1000 }]
        );
    }

    #[test]
    fn rating_boundaries() {
        for ok in ["1", "5", " 3 ", "+4"] {
            assert!(validate(&form("S", "R", ok, "c")).is_empty(), "rating {ok:?}");
        }
        for bad in ["0", "6", "-1", "99999999999999999999"] {
            assert_eq!(
                validate(&form("S", "R", bad, "c")),
                vec![ValidationError::RatingOutOfRange],
                "rating {bad:?}"
            );
        }
        for junk in ["", "five", "4.0", "3 stars"] {
            assert_eq!(
                validate(&form("S", "R", junk, "c")),
                vec![ValidationError::InvalidRating],
                "rating {junk:?}"
            );
        }
    }

    #[test]
    fn violations_are_independent() {
        let errors = validate(&form("", "Ana", "9", "Fine"));
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&ValidationError::Required(Field::SchoolName)));
        assert!(errors.contains(&ValidationError::RatingOutOfRange));
    }

    #[test]
    fn empty_school_bad_rating_empty_comment_gives_three_errors() {
        let submitted = form("", "Ana", "7", "");
        let errors = validate(&submitted);
        assert_eq!(
            errors,
            vec![
                ValidationError::Required(Field::SchoolName),
                ValidationError::RatingOutOfRange,
                ValidationError::Required(Field::Comment),
            ]
        );
        assert_eq!(submitted.to_new_review(), Err(errors));
    }

    #[test]
    fn validation_is_idempotent() {
        let submitted = form("", "x".repeat(150).as_str(), "abc", "");
        assert_eq!(validate(&submitted), validate(&submitted));
        assert_eq!(validate(&submitted).len(), 4);
    }

    #[test]
    fn messages_read_naturally() {
        let messages: Vec<String> = validate(&form("", &"r".repeat(101), "x", ""))
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            messages,
            vec![
                "School name is required",
                "Reviewer name must be at most 100 characters",
                "Rating must be a valid number",
                "Comment is required",
            ]
        );
        assert_eq!(
            ValidationError::RatingOutOfRange.to_string(),
            "Rating must be between 1 and 5"
        );
    }
}
