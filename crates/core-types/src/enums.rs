use serde::{Deserialize, Serialize};
use std::fmt;

/// The free-text fields of a review submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    SchoolName,
    ReviewerName,
    Comment,
}

impl Field {
    /// Maximum length in characters, after trimming.
    pub fn max_len(&self) -> usize {
        match self {
            Field::SchoolName | Field::ReviewerName => 100,
            Field::Comment => 1000,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::SchoolName => "School name",
            Field::ReviewerName => "Reviewer name",
            Field::Comment => "Comment",
        };
        f.write_str(label)
    }
}
