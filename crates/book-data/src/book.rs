//! Generated book and review records.
//!
//! These are plain value objects. They are built fresh by every generation
//! call and carry no identity beyond a single response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::isbn::Isbn13;
use crate::sampling::StarRating;

/// Closed set of catalogue genres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    /// Fiction.
    Fiction,
    /// Non-fiction.
    #[serde(rename = "Non-Fiction")]
    NonFiction,
    /// Mystery.
    Mystery,
    /// Romance.
    Romance,
    /// Science fiction.
    #[serde(rename = "Science Fiction")]
    ScienceFiction,
    /// Fantasy.
    Fantasy,
    /// Biography.
    Biography,
    /// History.
    History,
    /// Self-help.
    #[serde(rename = "Self-Help")]
    SelfHelp,
    /// Business.
    Business,
}

impl Genre {
    /// Every genre, in draw order.
    pub const ALL: [Self; 10] = [
        Self::Fiction,
        Self::NonFiction,
        Self::Mystery,
        Self::Romance,
        Self::ScienceFiction,
        Self::Fantasy,
        Self::Biography,
        Self::History,
        Self::SelfHelp,
        Self::Business,
    ];

    /// Returns the label shown to readers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fiction => "Fiction",
            Self::NonFiction => "Non-Fiction",
            Self::Mystery => "Mystery",
            Self::Romance => "Romance",
            Self::ScienceFiction => "Science Fiction",
            Self::Fantasy => "Fantasy",
            Self::Biography => "Biography",
            Self::History => "History",
            Self::SelfHelp => "Self-Help",
            Self::Business => "Business",
        }
    }
}

/// A generated reader review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Review identifier.
    pub id: Uuid,
    /// Reviewer's full name.
    pub author: String,
    /// Star rating in `1..=5`.
    pub rating: u8,
    /// Review body.
    pub text: String,
    /// When the review was written.
    pub date: DateTime<Utc>,
}

/// A generated catalogue entry.
///
/// # Example
///
/// ```
/// use book_data::{BookQuery, generate_books};
///
/// let books = generate_books(&BookQuery::default());
/// let first = books.first().expect("a full page");
///
/// assert_eq!(first.index, 1);
/// assert!(first.has_consistent_rating());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Record identifier, unique within a generated page.
    pub id: Uuid,
    /// 1-based position across all pages for the query's page size.
    pub index: u64,
    /// ISBN-13 with a valid check digit.
    pub isbn: Isbn13,
    /// Locale-specific title.
    pub title: String,
    /// Author's full name.
    pub author: String,
    /// Publisher name.
    pub publisher: String,
    /// Publication timestamp within the ten years before the reference date.
    pub publication_date: DateTime<Utc>,
    /// Page count.
    pub pages: u16,
    /// Catalogue genre.
    pub genre: Genre,
    /// Multi-paragraph blurb.
    pub description: String,
    /// Placeholder cover image URL.
    pub cover_url: String,
    /// Like count.
    pub likes: u32,
    /// Reader reviews.
    pub reviews: Vec<Review>,
    /// Mean review rating, or `0` when there are no reviews.
    pub rating: f64,
}

impl Book {
    /// Returns the star breakdown of the mean rating, if the book is rated.
    #[must_use]
    pub fn stars(&self) -> Option<StarRating> {
        StarRating::from_rating(self.rating)
    }

    /// Returns `true` when `rating` matches the mean of the review ratings.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "compares floating means within a tolerance"
    )]
    pub fn has_consistent_rating(&self) -> bool {
        let ratings: Vec<u8> = self.reviews.iter().map(|r| r.rating).collect();
        if ratings.is_empty() {
            return self.rating == 0.0;
        }
        (crate::sampling::mean_rating(&ratings) - self.rating).abs() < 1e-9
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn sample_book(reviews: Vec<Review>, rating: f64) -> Book {
        Book {
            id: Uuid::nil(),
            index: 1,
            isbn: Isbn13::from_payload(1_000),
            title: "The Silent River".to_owned(),
            author: "Ada Lovelace".to_owned(),
            publisher: "Babbage & Sons".to_owned(),
            publication_date: Utc
                .with_ymd_and_hms(2020, 5, 4, 0, 0, 0)
                .single()
                .expect("valid timestamp"),
            pages: 320,
            genre: Genre::ScienceFiction,
            description: "First.\n\nSecond.".to_owned(),
            cover_url: "https://picsum.photos/300/400?random=7".to_owned(),
            likes: 3,
            reviews,
            rating,
        }
    }

    fn review(rating: u8) -> Review {
        Review {
            id: Uuid::nil(),
            author: "Grace Hopper".to_owned(),
            rating,
            text: "Loved it.".to_owned(),
            date: Utc
                .with_ymd_and_hms(2024, 11, 2, 12, 0, 0)
                .single()
                .expect("valid timestamp"),
        }
    }

    #[test]
    fn genre_labels_match_serialized_names() {
        for genre in Genre::ALL {
            let json = serde_json::to_string(&genre).expect("serialize");
            assert_eq!(json, format!("\"{}\"", genre.label()));
        }
    }

    #[test]
    fn book_serializes_to_camel_case() {
        let json = serde_json::to_value(sample_book(vec![review(4)], 4.0)).expect("serialize");
        for key in ["publicationDate", "coverUrl", "isbn", "reviews", "rating"] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(
            json.get("publicationDate").and_then(|v| v.as_str()),
            Some("2020-05-04T00:00:00Z")
        );
        assert_eq!(
            json.get("genre").and_then(|v| v.as_str()),
            Some("Science Fiction")
        );
    }

    #[test]
    fn book_round_trips_through_json() {
        let book = sample_book(vec![review(2), review(5)], 3.5);
        let json = serde_json::to_string(&book).expect("serialize");
        let parsed: Book = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, book);
    }

    #[test]
    fn rating_consistency_detects_mismatch() {
        assert!(sample_book(vec![], 0.0).has_consistent_rating());
        assert!(sample_book(vec![review(3), review(4)], 3.5).has_consistent_rating());
        assert!(!sample_book(vec![review(3)], 4.0).has_consistent_rating());
        assert!(!sample_book(vec![], 1.0).has_consistent_rating());
    }

    #[test]
    fn unrated_book_has_no_stars() {
        assert!(sample_book(vec![], 0.0).stars().is_none());
        assert!(sample_book(vec![review(4)], 4.0).stars().is_some());
    }
}
