use clap::{Arg, ArgAction, ArgMatches, Command};
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::Path;
use tracing::{debug, Level};

use scripture::catalog::BookCatalog;
use scripture::formatting::{Identity, Render};
use scripture::lookup::{Lookup, Lookups, Placeholder, Table};
use scripture::parsing::{self, Options};
use scripture::rendering::Terminal;

mod output;
mod problem;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("scripture")
        .version(VERSION)
        .propagate_version(true)
        .about("Parse and resolve scripture references.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Write diagnostic logging to standard error."),
        )
        .arg(
            Arg::new("no-borrow")
                .long("no-borrow")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Reject ranges like '20-4' instead of reading them as '20-24'."),
        )
        .arg(
            Arg::new("strict-letters")
                .long("strict-letters")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Reject letters after verse numbers, as in '10a'."),
        )
        .arg(
            Arg::new("raw-control-chars")
                .short('R')
                .long("raw-control-chars")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit ANSI escape codes for highlighting even if output is redirected to a pipe or file."),
        )
        .subcommand(
            Command::new("check")
                .about("Parse the given reference and describe what it covers")
                .arg(
                    Arg::new("full")
                        .long("full")
                        .action(ArgAction::SetTrue)
                        .help("Explain errors in full, rather than on a single line."),
                )
                .arg(
                    Arg::new("reference")
                        .required(true)
                        .num_args(1..)
                        .help("The reference to parse, for example 'Gen 1:1-10, 3:5'."),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("List every verse named by the given reference")
                .arg(
                    Arg::new("reference")
                        .required(true)
                        .num_args(1..)
                        .help("The reference to enumerate."),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Render the text of the given reference")
                .arg(
                    Arg::new("lookup")
                        .long("lookup")
                        .value_parser(["placeholder", "table"])
                        .default_value("placeholder")
                        .help("Which provider to fetch verse text from."),
                )
                .arg(
                    Arg::new("text")
                        .long("text")
                        .value_name("FILE")
                        .help("Tab separated file of verse text, for the table provider."),
                )
                .arg(
                    Arg::new("reference")
                        .required(true)
                        .num_args(1..)
                        .help("The reference to render."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("debug") {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let options = Options {
        borrow_leading_digits: !matches.get_flag("no-borrow"),
        footnote_letters: !matches.get_flag("strict-letters"),
    };
    debug!(?options);

    let renderer: &dyn Render =
        if matches.get_flag("raw-control-chars") || std::io::stdout().is_terminal() {
            &Terminal
        } else {
            &Identity
        };

    let catalog = BookCatalog::standard();

    match matches.subcommand() {
        Some(("check", submatches)) => {
            let text = reference_text(submatches);
            let reference = match parsing::parse(&text, catalog, options) {
                Ok(reference) => reference,
                Err(error) => {
                    let message = if submatches.get_flag("full") {
                        problem::full_reference_error(&error, &text, catalog, &Terminal)
                    } else {
                        problem::concise_reference_error(&error, &text, catalog, &Terminal)
                    };
                    eprintln!("{}", message);
                    std::process::exit(1);
                }
            };

            match output::summarize(&reference, renderer) {
                Ok(summary) => print!("{}", summary),
                Err(error) => {
                    eprintln!("{}: {}", "error".bright_red(), error);
                    std::process::exit(1);
                }
            }
        }
        Some(("list", submatches)) => {
            let text = reference_text(submatches);
            let reference = match parsing::parse(&text, catalog, options) {
                Ok(reference) => reference,
                Err(error) => {
                    eprintln!(
                        "{}",
                        problem::concise_reference_error(&error, &text, catalog, &Terminal)
                    );
                    std::process::exit(1);
                }
            };

            for coordinate in reference.coordinates() {
                println!(
                    "{} {}:{}",
                    coordinate
                        .book
                        .name(),
                    coordinate.chapter,
                    coordinate.verse
                );
            }
        }
        Some(("render", submatches)) => {
            let text = reference_text(submatches);
            let reference = match parsing::parse(&text, catalog, options) {
                Ok(reference) => reference,
                Err(error) => {
                    eprintln!(
                        "{}",
                        problem::concise_reference_error(&error, &text, catalog, &Terminal)
                    );
                    std::process::exit(1);
                }
            };

            let lookups = register_lookups(submatches);
            let name = submatches
                .get_one::<String>("lookup")
                .map(String::as_str)
                .unwrap_or("placeholder");
            let lookup: &dyn Lookup = match lookups.get(name) {
                Some(lookup) => lookup,
                None => {
                    eprintln!(
                        "{}: lookup '{}' is not available; choose from {}",
                        "error".bright_red(),
                        name,
                        lookups
                            .names()
                            .collect::<Vec<_>>()
                            .join(", ")
                    );
                    std::process::exit(1);
                }
            };

            match reference.render_with(lookup, renderer) {
                Ok(result) => println!("{}", result),
                Err(failure) => {
                    eprintln!("{}", problem::concise_lookup_failure(&failure));
                    std::process::exit(1);
                }
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: scripture [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

/// The reference may be given as one quoted argument or as several words.
fn reference_text(submatches: &ArgMatches) -> String {
    submatches
        .get_many::<String>("reference")
        .map(|words| {
            words
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default()
}

fn register_lookups(submatches: &ArgMatches) -> Lookups {
    let mut lookups = Lookups::new();
    lookups.register("placeholder", Box::new(Placeholder));

    if let Some(filename) = submatches.get_one::<String>("text") {
        match Table::load(Path::new(filename)) {
            Ok(table) => lookups.register("table", Box::new(table)),
            Err(error) => {
                eprintln!("{}", problem::concise_loading_error(&error));
                std::process::exit(1);
            }
        }
    }

    lookups
}
