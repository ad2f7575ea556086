use std::sync::Arc;

use super::{RatingFilter, Review};

/// Ordered, immutable set of reviews produced by one ingest operation.
///
/// Cloning shares the underlying storage; filtering only borrows.
#[derive(Debug, Clone)]
pub struct ReviewCollection {
    reviews: Arc<[Review]>,
}

impl Default for ReviewCollection {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl ReviewCollection {
    pub fn new(reviews: Vec<Review>) -> Self {
        Self {
            reviews: reviews.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Review> {
        self.reviews.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Review> {
        self.reviews.iter()
    }

    pub fn as_slice(&self) -> &[Review] {
        &self.reviews
    }

    /// Reviews matching `filter`, in collection order
    pub fn filtered(&self, filter: RatingFilter) -> impl Iterator<Item = &Review> + '_ {
        self.reviews.iter().filter(move |review| filter.matches(review))
    }
}

impl From<Vec<Review>> for ReviewCollection {
    fn from(reviews: Vec<Review>) -> Self {
        Self::new(reviews)
    }
}

impl FromIterator<Review> for ReviewCollection {
    fn from_iter<I: IntoIterator<Item = Review>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ReviewCollection {
    type Item = &'a Review;
    type IntoIter = std::slice::Iter<'a, Review>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::review::StarRating;

    fn rated(token: &str) -> Review {
        Review {
            star_rating: Some(token.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_filter_does_not_mutate() {
        let collection: ReviewCollection =
            vec![rated("FIVE"), rated("ONE"), rated("FIVE")].into();
        let filter = RatingFilter::Only(StarRating::Five);

        assert_eq!(collection.filtered(filter).count(), 2);
        assert_eq!(collection.len(), 3);
        assert_eq!(collection.get(1).and_then(|r| r.star_rating()), Some("ONE"));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let collection: ReviewCollection =
            vec![rated("TWO"), rated("FOUR"), rated("TWO")].into();
        let filter = RatingFilter::Only(StarRating::Two);

        let once: ReviewCollection = collection.filtered(filter).cloned().collect();
        let twice: Vec<&Review> = once.filtered(filter).collect();
        assert_eq!(once.len(), twice.len());
        assert!(once.iter().zip(twice).all(|(a, b)| a == b));
    }

    #[test]
    fn test_clone_shares_storage() {
        let collection: ReviewCollection = vec![rated("ONE")].into();
        let copy = collection.clone();
        assert!(std::ptr::eq(collection.as_slice(), copy.as_slice()));
    }
}
