// ============================================================
// SAMPLE DATA
// ============================================================
// Built-in review set for trying the exporter without files

use once_cell::sync::Lazy;

use crate::domain::review::{Review, ReviewCollection, Reviewer};

static SAMPLE_REVIEWS: Lazy<ReviewCollection> = Lazy::new(|| {
    vec![
        sample_review(
            "Sample User 1",
            "FIVE",
            Some("Great service!"),
            "2025-02-15T07:45:54.637925Z",
        ),
        sample_review(
            "Sample User 2",
            "FOUR",
            Some("Good product but delivery was slow"),
            "2025-02-14T13:48:44.102355Z",
        ),
        // No comment: exercises the empty quoted cell
        sample_review("Sample User 3", "FIVE", None, "2025-02-13T12:45:28.141593Z"),
    ]
    .into()
});

/// The built-in three-review sample. Already a collection; no ingest needed.
pub fn sample_collection() -> ReviewCollection {
    SAMPLE_REVIEWS.clone()
}

fn sample_review(name: &str, rating: &str, comment: Option<&str>, created: &str) -> Review {
    Review {
        reviewer: Some(Reviewer::named(name)),
        star_rating: Some(rating.to_string()),
        comment: comment.map(str::to_string),
        create_time: Some(created.to_string()),
    }
}
