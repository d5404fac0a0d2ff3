//! Server-rendered HTML pages.
//!
//! Visitor-supplied text is written with `encode_text` in element content and
//! `encode_double_quoted_attribute` inside attribute values.

use crate::flash::Flash;
use crate::handlers::{ADD_REVIEW_PATH, REVIEWS_PATH};
use core_types::{Field, Review, ReviewForm};
use html_escape::{encode_double_quoted_attribute, encode_text};

const STYLE: &str = "
body { font-family: system-ui, sans-serif; margin: 0; background: #f6f7f9; color: #222; }
header { background: #1f3a5f; padding: 0.75rem 1.5rem; }
header a { color: #fff; margin-right: 1.25rem; text-decoration: none; font-weight: 600; }
main { max-width: 46rem; margin: 2rem auto; padding: 0 1rem; }
.flashes { list-style: none; padding: 0; }
.flashes li { padding: 0.6rem 0.9rem; border-radius: 4px; margin-bottom: 0.5rem; }
.flash-success { background: #e3f6e8; color: #1d5e2e; }
.flash-error { background: #fde8e8; color: #8a1f1f; }
form label { display: block; margin-top: 1rem; font-weight: 600; }
form input, form textarea { width: 100%; padding: 0.5rem; box-sizing: border-box; }
form button { margin-top: 1.25rem; padding: 0.6rem 1.4rem; }
.review { background: #fff; border-radius: 6px; padding: 1rem 1.25rem; margin-bottom: 1rem; }
.review h2 { margin: 0 0 0.25rem; font-size: 1.2rem; }
.stars { color: #e0a100; letter-spacing: 0.1rem; }
.meta { color: #666; font-size: 0.9rem; }
";

/// Five-star bar, e.g. `★★★☆☆` for 3.
pub fn stars(rating: i32) -> String {
    let filled = rating.clamp(0, 5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn layout(title: &str, flashes: &[Flash], body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | School Reviews</title>
<style>{style}</style>
</head>
<body>
<header><nav><a href="{add}">Add Review</a><a href="{list}">All Reviews</a></nav></header>
<main>
<h1>{title}</h1>
{flashes}
{body}
</main>
</body>
</html>
"#,
        title = encode_text(title),
        style = STYLE,
        add = ADD_REVIEW_PATH,
        list = REVIEWS_PATH,
        flashes = render_flashes(flashes),
    )
}

fn render_flashes(flashes: &[Flash]) -> String {
    if flashes.is_empty() {
        return String::new();
    }
    let items: String = flashes
        .iter()
        .map(|f| {
            format!(
                "<li class=\"{}\">{}</li>\n",
                f.level.css_class(),
                encode_text(&f.message)
            )
        })
        .collect();
    format!("<ul class=\"flashes\">\n{items}</ul>")
}

/// The submission form, pre-filled from `form` when re-rendering after errors.
pub fn add_review_page(form: Option<&ReviewForm>, flashes: &[Flash]) -> String {
    let value = |get: fn(&ReviewForm) -> &str| {
        form.map(|f| encode_double_quoted_attribute(get(f)).into_owned())
            .unwrap_or_default()
    };
    let school = value(ReviewForm::school_name);
    let reviewer = value(ReviewForm::reviewer_name);
    let rating = value(ReviewForm::rating_text);
    let comment = form
        .map(|f| encode_text(f.comment()).into_owned())
        .unwrap_or_default();

    let body = format!(
        r#"<form method="post" action="{action}">
<label for="school_name">School name</label>
<input id="school_name" name="school_name" type="text" maxlength="{school_max}" required value="{school}">
<label for="reviewer_name">Your name</label>
<input id="reviewer_name" name="reviewer_name" type="text" maxlength="{reviewer_max}" required value="{reviewer}">
<label for="rating">Rating (1-5)</label>
<input id="rating" name="rating" type="number" min="1" max="5" step="1" required value="{rating}">
<label for="comment">Comment</label>
<textarea id="comment" name="comment" rows="6" maxlength="{comment_max}" required>{comment}</textarea>
<button type="submit">Submit review</button>
</form>"#,
        action = ADD_REVIEW_PATH,
        school_max = Field::SchoolName.max_len(),
        reviewer_max = Field::ReviewerName.max_len(),
        comment_max = Field::Comment.max_len(),
    );
    layout("Add a School Review", flashes, &body)
}

/// All reviews, in the order given.
pub fn reviews_page(reviews: &[Review], flashes: &[Flash]) -> String {
    let body = if reviews.is_empty() {
        format!(
            "<p class=\"empty\">No reviews yet. <a href=\"{ADD_REVIEW_PATH}\">Be the first to add one</a>.</p>"
        )
    } else {
        reviews.iter().map(render_review).collect()
    };
    layout("School Reviews", flashes, &body)
}

fn render_review(review: &Review) -> String {
    format!(
        r#"<article class="review" data-review-id="{id}">
<h2>{school}</h2>
<div class="stars" data-rating="{rating}" title="{rating} out of 5">{stars}</div>
<p class="comment">{comment}</p>
<p class="meta">by {reviewer} on <time>{created}</time></p>
</article>
"#,
        id = review.id,
        school = encode_text(&review.school_name),
        rating = review.rating,
        stars = stars(review.rating),
        comment = encode_text(&review.comment),
        reviewer = encode_text(&review.reviewer_name),
        created = review.created_at_display(),
    )
}

pub fn not_found_page() -> String {
    let body = format!(
        "<p>The page you were looking for does not exist.</p>\n<p><a href=\"{ADD_REVIEW_PATH}\">Back to the review form</a></p>"
    );
    layout("Page Not Found", &[], &body)
}

pub fn server_error_page() -> String {
    let body = format!(
        "<p>Something went wrong on our side. Please try again later.</p>\n<p><a href=\"{REVIEWS_PATH}\">Back to all reviews</a></p>"
    );
    layout("Server Error", &[], &body)
}
