//! Dumps one generated page of books as JSON.
//!
//! Parsing and generation live in `book_data::page_cli`; this binary only
//! wires them to the process arguments and standard streams.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use book_data::page_cli::{CliError, Delivery, ParseOutcome, execute, parse_args, success_message};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    let ParseOutcome::Options(options) = parse_args(env::args().skip(1))? else {
        write_stdout(USAGE);
        return Ok(());
    };
    match execute(&options)? {
        Delivery::Stdout(json) => write_stdout(&json),
        Delivery::File { path, books } => write_stdout(&success_message(&path, books)),
    }
    Ok(())
}

const USAGE: &str = concat!(
    "Usage: book-page [options]\n",
    "\n",
    "Options:\n",
    "  --seed <n>           Stream seed (default 42)\n",
    "  --locale <tag>       en-US, de-DE, fr-FR or ja-JP (default en-US)\n",
    "  --page <n>           1-based page number (default 1)\n",
    "  --count <n>          Books per page, 1 to 100 (default 20)\n",
    "  --avg-likes <x>      Average likes per book, 0 to 10 (default 5)\n",
    "  --avg-reviews <x>    Average reviews per book, 0 to 10 (default 3)\n",
    "  --output <path>      Write the page to a file instead of stdout\n",
    "  -h, --help           Print this help output",
);

fn write_stdout(text: &str) {
    if let Err(err) = writeln!(io::stdout().lock(), "{text}") {
        drop(err);
    }
}
