//! Behavioural tests for book page generation.
//!
//! These scenarios cover reproducibility, pagination, identifier validity and
//! boundary validation of raw parameters.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use book_data::{
    Book, BookParams, BookQuery, Isbn13, Locale, QueryError, default_reference_date,
    generate_books,
};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

#[derive(Default, ScenarioState)]
struct World {
    query: Slot<BookQuery>,
    params: Slot<BookParams>,
    page: Slot<Vec<Book>>,
    second_page: Slot<Vec<Book>>,
    validation: Slot<Result<BookQuery, QueryError>>,
}

impl World {
    fn query(&self) -> BookQuery {
        self.query.get().expect("query should be set")
    }

    fn params(&self) -> BookParams {
        self.params.get().unwrap_or_default()
    }

    fn page(&self) -> Vec<Book> {
        self.page.get().expect("page should be generated")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

#[given("a query with seed {seed:i64} and locale \"{tag}\"")]
fn a_query_with_seed_and_locale(world: &World, seed: i64, tag: String) {
    let locale: Locale = tag.parse().expect("supported locale");
    world.query.set(BookQuery {
        seed,
        locale,
        ..BookQuery::default()
    });
}

#[given("the query requests page {page:u32} of {count:u32} books")]
fn the_query_requests_page_of_books(world: &World, page: u32, count: u32) {
    let query = world.query();
    world.query.set(BookQuery {
        page,
        count,
        ..query
    });
}

#[given("the query averages {likes:f64} likes and {reviews:f64} reviews")]
fn the_query_averages_likes_and_reviews(world: &World, likes: f64, reviews: f64) {
    let query = world.query();
    world.query.set(BookQuery {
        avg_likes: likes,
        avg_reviews: reviews,
        ..query
    });
}

#[given("raw parameters with locale \"{tag}\"")]
fn raw_parameters_with_locale(world: &World, tag: String) {
    world.params.set(BookParams {
        locale: tag,
        ..world.params()
    });
}

#[given("raw parameters requesting {count:i64} books")]
fn raw_parameters_requesting_books(world: &World, count: i64) {
    world.params.set(BookParams {
        count,
        ..world.params()
    });
}

#[given("raw parameters averaging {likes:f64} likes")]
fn raw_parameters_averaging_likes(world: &World, likes: f64) {
    world.params.set(BookParams {
        avg_likes: likes,
        ..world.params()
    });
}

#[when("the page is generated")]
fn the_page_is_generated(world: &World) {
    world.page.set(generate_books(&world.query()));
}

#[when("the page is generated twice")]
fn the_page_is_generated_twice(world: &World) {
    let query = world.query();
    world.page.set(generate_books(&query));
    world.second_page.set(generate_books(&query));
}

#[when("the parameters are validated")]
fn the_parameters_are_validated(world: &World) {
    let result = BookQuery::try_from_params(world.params(), default_reference_date());
    world.validation.set(result);
}

#[then("both pages are identical")]
fn both_pages_are_identical(world: &World) {
    let second = world.second_page.get().expect("second page should be set");
    assert_eq!(world.page(), second, "generation should be deterministic");
}

#[then("the page holds {count:usize} books")]
fn the_page_holds_books(world: &World, count: usize) {
    assert_eq!(world.page().len(), count);
}

#[then("the indices run from {first:u64} to {last:u64}")]
fn the_indices_run_from_to(world: &World, first: u64, last: u64) {
    let indices: Vec<u64> = world.page().iter().map(|book| book.index).collect();
    let expected: Vec<u64> = (first..=last).collect();
    assert_eq!(indices, expected);
}

#[then("every ISBN has a valid check digit")]
fn every_isbn_has_a_valid_check_digit(world: &World) {
    for book in world.page() {
        let reparsed: Isbn13 = book.isbn.to_string().parse().expect("valid ISBN-13");
        assert_eq!(reparsed, book.isbn);
    }
}

#[then("every book rating matches its reviews")]
fn every_book_rating_matches_its_reviews(world: &World) {
    for book in world.page() {
        assert!(
            book.has_consistent_rating(),
            "book {} has rating {} for {} reviews",
            book.index,
            book.rating,
            book.reviews.len()
        );
    }
}

#[then("no book has likes or reviews")]
fn no_book_has_likes_or_reviews(world: &World) {
    for book in world.page() {
        assert_eq!(book.likes, 0);
        assert!(book.reviews.is_empty());
    }
}

#[then("validation fails with \"{message}\"")]
fn validation_fails_with(world: &World, message: String) {
    let result = world.validation.get().expect("validation should run");
    let err = result.expect_err("validation should fail");
    assert_eq!(err.to_string(), message);
}

#[scenario(
    path = "tests/features/book_data.feature",
    name = "Identical queries produce identical pages"
)]
fn identical_queries_produce_identical_pages(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/book_data.feature",
    name = "Pages continue the index sequence"
)]
fn pages_continue_the_index_sequence(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/book_data.feature",
    name = "Generated books carry valid identifiers"
)]
fn generated_books_carry_valid_identifiers(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/book_data.feature",
    name = "Zero rates produce unengaged books"
)]
fn zero_rates_produce_unengaged_books(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/book_data.feature",
    name = "Unsupported locales are rejected"
)]
fn unsupported_locales_are_rejected(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/book_data.feature",
    name = "Oversized pages are rejected"
)]
fn oversized_pages_are_rejected(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/book_data.feature",
    name = "Excessive average likes are rejected"
)]
fn excessive_average_likes_are_rejected(world: World) {
    let _ = world;
}
