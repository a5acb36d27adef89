//! Locale-aware fake text: people, publishers, and prose.
//!
//! Each helper draws from the `fake` crate's locale data for the requested
//! [`Locale`]. Locales without their own lorem corpus fall back to the
//! crate's default word list.

use fake::Fake;
use fake::faker::company::raw::CompanyName;
use fake::faker::lorem::raw::{Paragraph, Paragraphs};
use fake::faker::name::raw::Name;
use fake::locales::{DE_DE, EN, FR_FR, JA_JP};
use rand_chacha::ChaCha8Rng;

use crate::locale::Locale;

/// Sentences per review paragraph.
const REVIEW_SENTENCES: std::ops::Range<usize> = 3..6;

/// Paragraphs in a book description.
const DESCRIPTION_PARAGRAPHS: std::ops::Range<usize> = 2..3;

/// Expands a faker constructor against the `fake` locale matching `$locale`.
macro_rules! fake_in {
    ($locale:expr, $rng:expr, $faker:ident $(, $arg:expr)*) => {
        match $locale {
            Locale::EnUs => $faker(EN $(, $arg)*).fake_with_rng($rng),
            Locale::DeDe => $faker(DE_DE $(, $arg)*).fake_with_rng($rng),
            Locale::FrFr => $faker(FR_FR $(, $arg)*).fake_with_rng($rng),
            Locale::JaJp => $faker(JA_JP $(, $arg)*).fake_with_rng($rng),
        }
    };
}

/// Draws a person's full name.
pub(crate) fn full_name(rng: &mut ChaCha8Rng, locale: Locale) -> String {
    fake_in!(locale, rng, Name)
}

/// Draws a publisher name.
pub(crate) fn company_name(rng: &mut ChaCha8Rng, locale: Locale) -> String {
    fake_in!(locale, rng, CompanyName)
}

/// Draws a single review paragraph.
pub(crate) fn review_text(rng: &mut ChaCha8Rng, locale: Locale) -> String {
    fake_in!(locale, rng, Paragraph, REVIEW_SENTENCES)
}

/// Draws a two-paragraph description separated by a blank line.
pub(crate) fn description(rng: &mut ChaCha8Rng, locale: Locale) -> String {
    let paragraphs: Vec<String> = fake_in!(locale, rng, Paragraphs, DESCRIPTION_PARAGRAPHS);
    paragraphs.join("\n\n")
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Locale::EnUs)]
    #[case(Locale::DeDe)]
    #[case(Locale::FrFr)]
    #[case(Locale::JaJp)]
    fn helpers_produce_non_empty_text(#[case] locale: Locale) {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        assert!(!full_name(&mut rng, locale).trim().is_empty());
        assert!(!company_name(&mut rng, locale).trim().is_empty());
        assert!(!review_text(&mut rng, locale).trim().is_empty());
    }

    #[rstest]
    #[case(Locale::EnUs)]
    #[case(Locale::JaJp)]
    fn descriptions_have_two_paragraphs(#[case] locale: Locale) {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let text = description(&mut rng, locale);
        assert_eq!(text.split("\n\n").count(), 2, "description: {text}");
    }

    #[test]
    fn names_are_reproducible_per_seed() {
        let mut first = ChaCha8Rng::seed_from_u64(13);
        let mut second = ChaCha8Rng::seed_from_u64(13);
        assert_eq!(
            full_name(&mut first, Locale::DeDe),
            full_name(&mut second, Locale::DeDe)
        );
    }
}
