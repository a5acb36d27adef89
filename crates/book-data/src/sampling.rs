//! Fractional-rate sampling and rating aggregation.

use rand::Rng;

/// Converts an average rate into an integer count with matching expectation.
///
/// The result is `floor(avg)`, plus one when a single uniform draw in
/// `[0, 1)` falls below the fractional part. The draw is consumed even when
/// the fractional part is zero so the stream position only depends on the
/// call sequence. Negative or non-finite rates sample as zero.
#[expect(
    clippy::float_arithmetic,
    reason = "fractional sampling operates on real-valued rates"
)]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the floored rate is clamped to the u32 range before the cast"
)]
pub(crate) fn sample_count<R: Rng + ?Sized>(rng: &mut R, avg: f64) -> u32 {
    let rate = if avg.is_finite() { avg.max(0.0) } else { 0.0 };
    let whole = rate.floor();
    let fraction = rate - whole;
    let draw: f64 = rng.random();
    let base = whole.min(f64::from(u32::MAX)) as u32;
    if draw < fraction {
        base.saturating_add(1)
    } else {
        base
    }
}

/// Returns the arithmetic mean of review ratings, or `0` when there are none.
///
/// # Example
///
/// ```
/// use book_data::mean_rating;
///
/// assert_eq!(mean_rating(&[]), 0.0);
/// assert!((mean_rating(&[4, 5]) - 4.5).abs() < f64::EPSILON);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "a mean rating is inherently fractional"
)]
pub fn mean_rating(ratings: &[u8]) -> f64 {
    let Ok(count) = u32::try_from(ratings.len()) else {
        return 0.0;
    };
    if count == 0 {
        return 0.0;
    }
    let total: u32 = ratings.iter().copied().map(u32::from).sum();
    f64::from(total) / f64::from(count)
}

/// Star breakdown of a mean rating for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarRating {
    /// Number of fully filled stars.
    pub full_stars: u8,
    /// Whether a half star follows the full stars.
    pub has_half_star: bool,
    /// Number of empty stars padding the row to five.
    pub empty_stars: u8,
    /// Rating rendered as `"4.3/5"`.
    pub display_text: String,
}

impl StarRating {
    /// Breaks a rating into stars, or returns `None` for an unrated book.
    ///
    /// A zero or non-finite rating means "No ratings".
    ///
    /// # Example
    ///
    /// ```
    /// use book_data::StarRating;
    ///
    /// let stars = StarRating::from_rating(3.6).expect("rated");
    /// assert_eq!(stars.full_stars, 3);
    /// assert!(stars.has_half_star);
    /// assert_eq!(stars.empty_stars, 1);
    /// assert_eq!(stars.display_text, "3.6/5");
    /// assert!(StarRating::from_rating(0.0).is_none());
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "half-star detection inspects the fractional part"
    )]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "the rating is clamped to 0..=5 before the cast"
    )]
    pub fn from_rating(rating: f64) -> Option<Self> {
        if !rating.is_finite() || rating <= 0.0 {
            return None;
        }
        let clamped = rating.min(5.0);
        let full_stars = clamped.floor() as u8;
        let has_half_star = clamped.fract() >= 0.5;
        let empty_stars = 5_u8
            .saturating_sub(full_stars)
            .saturating_sub(u8::from(has_half_star));
        Some(Self {
            full_stars,
            has_half_star,
            empty_stars,
            display_text: format!("{clamped:.1}/5"),
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.0, 0)]
    #[case(3.0, 3)]
    #[case(10.0, 10)]
    #[case(-2.5, 0)]
    #[case(f64::NAN, 0)]
    fn whole_rates_sample_exactly(#[case] avg: f64, #[case] expected: u32) {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(sample_count(&mut rng, avg), expected);
        }
    }

    #[test]
    fn fractional_rates_round_up_or_down() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..500 {
            let sampled = sample_count(&mut rng, 2.5);
            assert!(sampled == 2 || sampled == 3, "unexpected sample {sampled}");
        }
    }

    #[test]
    #[expect(clippy::float_arithmetic, reason = "computes a sample mean")]
    fn sample_mean_converges_to_rate() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let draws = 10_000_u32;
        let total: u32 = (0..draws).map(|_| sample_count(&mut rng, 2.5)).sum();
        let mean = f64::from(total) / f64::from(draws);
        assert!((mean - 2.5).abs() < 0.1, "sample mean {mean}");
    }

    #[test]
    fn sampling_always_consumes_one_draw() {
        let mut sampled = ChaCha8Rng::seed_from_u64(3);
        let mut reference = ChaCha8Rng::seed_from_u64(3);
        sample_count(&mut sampled, 4.0);
        let _: f64 = reference.random();
        assert_eq!(sampled.random::<u64>(), reference.random::<u64>());
    }

    #[rstest]
    #[case(&[], 0.0)]
    #[case(&[5], 5.0)]
    #[case(&[1, 2, 3, 4], 2.5)]
    #[expect(clippy::float_arithmetic, reason = "compares floating means")]
    fn mean_rating_matches_arithmetic_mean(#[case] ratings: &[u8], #[case] expected: f64) {
        assert!((mean_rating(ratings) - expected).abs() < 1e-9);
    }

    #[rstest]
    #[case(4.0, 4, false, 1, "4.0/5")]
    #[case(4.5, 4, true, 0, "4.5/5")]
    #[case(1.2, 1, false, 4, "1.2/5")]
    #[case(5.0, 5, false, 0, "5.0/5")]
    fn breaks_ratings_into_stars(
        #[case] rating: f64,
        #[case] full: u8,
        #[case] half: bool,
        #[case] empty: u8,
        #[case] text: &str,
    ) {
        let stars = StarRating::from_rating(rating).expect("rated");
        assert_eq!(stars.full_stars, full);
        assert_eq!(stars.has_half_star, half);
        assert_eq!(stars.empty_stars, empty);
        assert_eq!(stars.display_text, text);
    }

    #[test]
    fn unrated_books_have_no_stars() {
        assert!(StarRating::from_rating(0.0).is_none());
        assert!(StarRating::from_rating(f64::NAN).is_none());
    }
}
