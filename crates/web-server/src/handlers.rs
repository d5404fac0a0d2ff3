use crate::{
    AppState,
    error::AppError,
    flash::{self, Flash},
    views,
};
use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    http::{StatusCode, Uri, header},
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::SignedCookieJar;
use core_types::ReviewForm;

pub const HOME_PATH: &str = "/";
pub const ADD_REVIEW_PATH: &str = "/add-review";
pub const REVIEWS_PATH: &str = "/reviews";

pub const REVIEW_ADDED: &str = "Review added successfully!";
pub const REVIEW_ADD_FAILED: &str = "Error adding review. Please try again.";
pub const REVIEWS_LOAD_FAILED: &str = "Error loading reviews. Please try again.";

/// The urlencoded submission. Missing fields read as empty strings and the
/// first occurrence of a repeated field wins.
#[derive(Debug, Default)]
pub struct ReviewFormInput {
    pub school_name: String,
    pub reviewer_name: String,
    pub rating: String,
    pub comment: String,
}

impl ReviewFormInput {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut input = Self::default();
        let mut seen = [false; 4];
        for (key, value) in pairs {
            let (slot, target) = match key.as_str() {
                "school_name" => (0, &mut input.school_name),
                "reviewer_name" => (1, &mut input.reviewer_name),
                "rating" => (2, &mut input.rating),
                "comment" => (3, &mut input.comment),
                _ => continue,
            };
            if !seen[slot] {
                seen[slot] = true;
                *target = value;
            }
        }
        input
    }
}

impl From<ReviewFormInput> for ReviewForm {
    fn from(input: ReviewFormInput) -> Self {
        ReviewForm::new(
            &input.school_name,
            &input.reviewer_name,
            &input.rating,
            &input.comment,
        )
    }
}

/// 302 with a `Location` header.
fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// # GET /
pub async fn home() -> Response {
    found(ADD_REVIEW_PATH)
}

/// # GET /add-review
pub async fn add_review_form(jar: SignedCookieJar) -> (SignedCookieJar, Html<String>) {
    let (jar, flashes) = flash::take(jar);
    (jar, Html(views::add_review_page(None, &flashes)))
}

/// # POST /add-review
/// Validates the submission and stores it. Invalid input is sent back with
/// every error and the values as typed; a storage failure shows an empty form.
pub async fn submit_review(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    body: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Response {
    // An unreadable body is treated like an empty form.
    let pairs = match body {
        Ok(Form(pairs)) => pairs,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable review submission.");
            Vec::new()
        }
    };
    let form = ReviewForm::from(ReviewFormInput::from_pairs(pairs));

    let review = match form.to_new_review() {
        Ok(review) => review,
        Err(errors) => {
            tracing::debug!(count = errors.len(), "Review submission rejected.");
            let flashes: Vec<Flash> = errors
                .iter()
                .map(|e| Flash::error(e.to_string()))
                .collect();
            return Html(views::add_review_page(Some(&form), &flashes)).into_response();
        }
    };

    match state.reviews.add_review(&review).await {
        Ok(rows) if rows > 0 => {
            tracing::info!(school = review.school_name(), rating = review.rating(), "Review added.");
            let jar = flash::push(jar, Flash::success(REVIEW_ADDED));
            (jar, found(REVIEWS_PATH)).into_response()
        }
        Ok(_) => {
            tracing::warn!("Insert reported no affected rows.");
            Html(views::add_review_page(None, &[Flash::error(REVIEW_ADD_FAILED)])).into_response()
        }
        Err(_) => {
            Html(views::add_review_page(None, &[Flash::error(REVIEW_ADD_FAILED)])).into_response()
        }
    }
}

/// # GET /reviews
/// Lists every review, newest first. A failed read renders an empty list
/// with an error message rather than an error page.
pub async fn list_reviews(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> (SignedCookieJar, Html<String>) {
    let (jar, mut flashes) = flash::take(jar);

    let reviews = match state.reviews.list_reviews().await {
        Ok(reviews) => reviews,
        Err(_) => {
            flashes.push(Flash::error(REVIEWS_LOAD_FAILED));
            Vec::new()
        }
    };

    (jar, Html(views::reviews_page(&reviews, &flashes)))
}

/// Fallback for every unmatched route.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
