//! Command-line interface for htmlslim
//!
//! Usage:
//!   htmlslim minify `<path>` [-o `<out>`] [--protect `<tag>`]...  - Minify a document
//!   htmlslim stats `<path>` [--protect `<tag>`]...              - Print a byte-savings report as JSON
//!
//! A path of `-` reads the document from stdin.

use clap::{Arg, ArgAction, Command};
use htmlslim::{Minifier, MinifyReport};
use std::io::Read;

fn main() {
    let matches = Command::new("htmlslim")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A whitespace-safe minifier for HTML documents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("minify")
                .about("Minify an HTML document")
                .arg(
                    Arg::new("path")
                        .help("Path to the HTML file, or '-' for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write the result to a file instead of stdout"),
                )
                .arg(
                    Arg::new("protect")
                        .long("protect")
                        .action(ArgAction::Append)
                        .help("Additional tag whose content must be preserved verbatim (repeatable)"),
                ),
        )
        .subcommand(
            Command::new("stats")
                .about("Minify and print a byte-savings report as JSON")
                .arg(
                    Arg::new("path")
                        .help("Path to the HTML file, or '-' for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("protect")
                        .long("protect")
                        .action(ArgAction::Append)
                        .help("Additional tag whose content must be preserved verbatim (repeatable)"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("minify", sub)) => {
            let path = sub.get_one::<String>("path").unwrap();
            let output = sub.get_one::<String>("output");
            let minifier = build_minifier(sub);
            handle_minify_command(path, output, &minifier);
        }
        Some(("stats", sub)) => {
            let path = sub.get_one::<String>("path").unwrap();
            let minifier = build_minifier(sub);
            handle_stats_command(path, &minifier);
        }
        _ => unreachable!(),
    }
}

fn build_minifier(sub: &clap::ArgMatches) -> Minifier {
    let mut minifier = Minifier::new();
    if let Some(tags) = sub.get_many::<String>("protect") {
        for tag in tags {
            minifier = minifier.with_protected_tag(tag);
        }
    }
    minifier
}

/// Read the document from a file, or from stdin when the path is `-`
fn read_document(path: &str) -> String {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).unwrap_or_else(|e| {
            eprintln!("Error reading stdin: {}", e);
            std::process::exit(1);
        });
        buf
    } else {
        std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading file: {}", e);
            std::process::exit(1);
        })
    }
}

fn handle_minify_command(path: &str, output: Option<&String>, minifier: &Minifier) {
    let source = read_document(path);
    let minified = minifier.minify(&source);

    match output {
        Some(out_path) => {
            std::fs::write(out_path, minified).unwrap_or_else(|e| {
                eprintln!("Error writing file: {}", e);
                std::process::exit(1);
            });
        }
        None => {
            print!("{}", minified);
        }
    }
}

fn handle_stats_command(path: &str, minifier: &Minifier) {
    let source = read_document(path);
    let minified = minifier.minify(&source);
    let report = MinifyReport::measure(&source, &minified);

    let json = serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
        eprintln!("Error serializing report: {}", e);
        std::process::exit(1);
    });
    println!("{}", json);
}
