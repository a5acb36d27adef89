//! Unit tests for the page CLI helpers.

use cap_std::{ambient_authority, fs::Dir};
use rstest::rstest;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::book::Book;
use crate::error::QueryError;
use crate::locale::Locale;

fn args(values: &[&str]) -> impl Iterator<Item = String> {
    values
        .iter()
        .map(|value| (*value).to_owned())
        .collect::<Vec<_>>()
        .into_iter()
}

fn parsed(values: &[&str]) -> Options {
    let ParseOutcome::Options(options) = parse_args(args(values)).expect("parse args") else {
        panic!("expected options");
    };
    options
}

fn scratch_output(file_name: &str) -> Utf8PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let counter = COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = Utf8PathBuf::from("target")
        .join("book-data-tests")
        .join(format!("page-cli-{}-{counter}", std::process::id()));
    let root = Dir::open_ambient_dir(".", ambient_authority()).expect("open cwd");
    root.create_dir_all(&dir).expect("create scratch dir");
    dir.join(file_name)
}

fn read_books(path: &Utf8Path) -> Vec<Book> {
    let parent = path.parent().expect("parent dir");
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).expect("open parent");
    let json = dir
        .read_to_string(path.file_name().expect("file name"))
        .expect("read output");
    serde_json::from_str(&json).expect("valid page JSON")
}

#[rstest]
#[case("-h")]
#[case("--help")]
fn parse_args_returns_help_for_help_flag(#[case] flag: &str) {
    let outcome = parse_args(args(&["--seed", "1", flag])).expect("parse args");

    assert!(matches!(outcome, ParseOutcome::Help));
}

#[test]
fn parse_args_defaults_every_flag() {
    let options = parsed(&[]);

    assert_eq!(options.params(), &BookParams::default());
    assert!(options.output().is_none());
}

#[rstest]
#[case("--seed")]
#[case("--locale")]
#[case("--page")]
#[case("--count")]
#[case("--avg-likes")]
#[case("--avg-reviews")]
#[case("--output")]
fn parse_args_reports_missing_value(#[case] flag: &'static str) {
    let err = parse_args(args(&[flag])).expect_err("expected error");

    assert_eq!(err, CliError::MissingValue { flag });
}

#[test]
fn parse_args_reports_unknown_arguments() {
    let err = parse_args(args(&["--seed", "3", "--nope"])).expect_err("expected error");

    assert_eq!(
        err,
        CliError::UnknownArgument {
            value: "--nope".to_owned(),
        }
    );
}

#[rstest]
#[case("--seed", "forty-two")]
#[case("--page", "1.5")]
#[case("--count", "")]
#[case("--avg-likes", "lots")]
fn parse_args_reports_invalid_numbers(#[case] flag: &'static str, #[case] raw: &str) {
    let err = parse_args(args(&[flag, raw])).expect_err("expected error");

    let CliError::InvalidNumber {
        flag: reported,
        value,
        ..
    } = err
    else {
        panic!("expected invalid number error");
    };
    assert_eq!(reported, flag);
    assert_eq!(value, raw);
}

#[test]
fn parse_args_parses_full_options() {
    let options = parsed(&[
        "--seed",
        "-9",
        "--locale",
        "ja-JP",
        "--page",
        "4",
        "--count",
        "12",
        "--avg-likes",
        "2.5",
        "--avg-reviews",
        "0.75",
        "--output",
        "out/page.json",
    ]);

    assert_eq!(
        options.params(),
        &BookParams {
            seed: -9,
            locale: "ja-JP".to_owned(),
            page: 4,
            count: 12,
            avg_likes: 2.5,
            avg_reviews: 0.75,
        }
    );
    assert_eq!(options.output(), Some(Utf8Path::new("out/page.json")));
}

#[test]
fn build_query_validates_parsed_flags() {
    let query = build_query(&parsed(&["--locale", "fr-FR", "--page", "2"])).expect("valid query");

    assert_eq!(query.locale, Locale::FrFr);
    assert_eq!(query.page, 2);
    assert_eq!(query.reference_date, default_reference_date());
}

#[rstest]
#[case(&["--locale", "pt-BR"], QueryError::InvalidLocale { tag: "pt-BR".to_owned() })]
#[case(&["--count", "0"], QueryError::InvalidPageOrCount { page: 1, count: 0 })]
#[case(&["--avg-likes", "11"], QueryError::InvalidAverageLikes)]
#[case(&["--avg-reviews", "-1"], QueryError::InvalidAverageReviews)]
fn execute_rejects_invalid_queries(#[case] flags: &[&str], #[case] expected: QueryError) {
    let err = execute(&parsed(flags)).expect_err("expected error");

    assert_eq!(err, CliError::InvalidQuery { source: expected });
}

#[test]
fn execute_returns_json_for_stdout() {
    let Delivery::Stdout(json) = execute(&parsed(&["--count", "3"])).expect("execute") else {
        panic!("expected stdout delivery");
    };
    let books: Vec<Book> = serde_json::from_str(&json).expect("valid page JSON");

    assert_eq!(books.len(), 3);
    assert!(json.contains("\n  "), "expected pretty JSON");
}

#[test]
fn execute_writes_page_to_output_file() {
    let path = scratch_output("page.json");
    let options = parsed(&["--seed", "77", "--count", "5", "--output", path.as_str()]);

    let delivery = execute(&options).expect("execute");

    assert_eq!(
        delivery,
        Delivery::File {
            path: path.clone(),
            books: 5,
        }
    );
    let written = read_books(&path);
    let query = build_query(&options).expect("valid query");
    assert_eq!(written, generate_books(&query));
}

#[test]
fn execute_reports_unwritable_output() {
    let path = scratch_output("missing").join("page.json");
    let options = parsed(&["--output", path.as_str()]);

    let err = execute(&options).expect_err("expected error");

    let CliError::Output {
        source: OutputError::Write { path: reported, .. },
    } = err
    else {
        panic!("expected write error");
    };
    assert_eq!(reported, path);
}

#[test]
fn success_message_formats_expected_output() {
    assert_eq!(
        success_message(Utf8Path::new("pages/one.json"), 20),
        "Wrote 20 books to pages/one.json"
    );
}
