use crate::connection::Database;
use crate::error::DbError;
use crate::executor::{Param, Statement};
use async_trait::async_trait;
use core_types::{NewReview, Review};

pub const INSERT_REVIEW: Statement = Statement {
    name: "insert_review",
    sql: "INSERT INTO reviews (school_name, reviewer_name, rating, comment) VALUES (?, ?, ?, ?)",
};

/// Newest first.
pub const LIST_REVIEWS: Statement = Statement {
    name: "list_reviews",
    sql: "SELECT id, school_name, reviewer_name, rating, comment, created_at \
          FROM reviews ORDER BY id DESC",
};

/// Storage operations the web layer needs.
///
/// Reviews are append-only, so there is no update or delete.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Inserts one validated review and returns the number of rows written.
    async fn add_review(&self, review: &NewReview) -> Result<u64, DbError>;

    /// Returns every review, most recently created first.
    async fn list_reviews(&self) -> Result<Vec<Review>, DbError>;
}

/// The `DbRepository` is the MySQL-backed `ReviewRepository`.
#[derive(Clone)]
pub struct DbRepository {
    db: Database,
}

impl DbRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewRepository for DbRepository {
    async fn add_review(&self, review: &NewReview) -> Result<u64, DbError> {
        let params = [
            Param::Text(review.school_name()),
            Param::Text(review.reviewer_name()),
            Param::Int(i64::from(review.rating())),
            Param::Text(review.comment()),
        ];
        self.db.execute(&INSERT_REVIEW, &params).await
    }

    async fn list_reviews(&self) -> Result<Vec<Review>, DbError> {
        self.db.fetch_all::<Review>(&LIST_REVIEWS, &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statements_use_placeholders() {
        assert_eq!(INSERT_REVIEW.sql.matches('?').count(), 4);
        assert!(!LIST_REVIEWS.sql.contains('?'));
        assert!(LIST_REVIEWS.sql.ends_with("ORDER BY id DESC"));
    }
}
