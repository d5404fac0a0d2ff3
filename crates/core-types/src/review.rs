use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Display format for `created_at` on the listing page.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A stored review, as read back from the `reviews` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub school_name: String,
    pub reviewer_name: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// `created_at` rendered as `YYYY-MM-DD HH:MM`.
    pub fn created_at_display(&self) -> String {
        self.created_at.format(CREATED_AT_FORMAT).to_string()
    }
}

/// A review that has passed validation and may be written.
///
/// Only `ReviewForm::to_new_review` can build one, so an invalid row never
/// reaches the insert statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub(crate) school_name: String,
    pub(crate) reviewer_name: String,
    pub(crate) rating: i32,
    pub(crate) comment: String,
}

impl NewReview {
    pub fn school_name(&self) -> &str {
        &self.school_name
    }

    pub fn reviewer_name(&self) -> &str {
        &self.reviewer_name
    }

    pub fn rating(&self) -> i32 {
        self.rating
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn created_at_is_formatted_to_the_minute() {
        let review = Review {
            id: 1,
            school_name: "Lincoln High".into(),
            reviewer_name: "Ana".into(),
            rating: 5,
            comment: "Great teachers".into(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 42).unwrap(),
        };
        assert_eq!(review.created_at_display(), "2024-03-07 09:05");
    }
}
