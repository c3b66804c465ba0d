//! Command-line interface for orgtext
//! This binary converts org content files into the registered output formats.
//!
//! Usage:
//!   orgtext convert `<path>` [--format `<format>`] [--config `<file>`] [--tab-width `<n>`]
//!   orgtext list-formats
//!
//! `-` as the path reads from stdin. `-v` raises log verbosity, repeat for more.

use std::io::Read;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use orgtext::org::config::{Loader, OrgConfig};
use orgtext::org::formats::{FormatError, FormatRegistry};
use orgtext::org::parsing::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let matches = Command::new("orgtext")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing and converting org content files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Parse a file and print it in the given format")
                .arg(
                    Arg::new("path")
                        .help("Path to the org file, or - for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (see list-formats). Defaults to output.format"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("TOML file layered over the built-in defaults"),
                )
                .arg(
                    Arg::new("tab-width")
                        .long("tab-width")
                        .help("Columns a tab counts for when measuring indentation")
                        .value_parser(value_parser!(u32)),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
        .get_matches();

    init_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("convert", convert_matches)) => handle_convert_command(convert_matches),
        Some(("list-formats", _)) => handle_list_formats_command(),
        _ => unreachable!(),
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Error installing logger: {}", e);
    }
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn load_config(matches: &ArgMatches) -> OrgConfig {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(width) = matches.get_one::<u32>("tab-width") {
        loader = loader
            .set_override("parser.tab_width", i64::from(*width))
            .unwrap_or_else(|e| fail(e));
    }
    loader.build().unwrap_or_else(|e| fail(e))
}

fn read_source(path: &str) -> String {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .unwrap_or_else(|e| fail(format!("reading stdin: {}", e)));
        source
    } else {
        std::fs::read_to_string(path).unwrap_or_else(|e| fail(format!("reading {}: {}", path, e)))
    }
}

/// Handle the convert command
fn handle_convert_command(matches: &ArgMatches) {
    let mut config = load_config(matches);
    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");
    if let Some(format) = matches.get_one::<String>("format") {
        config.output.format = format.clone();
    }

    let registry = FormatRegistry::new(config.output);
    let format = registry.output().format.clone();
    if registry.get(&format).is_none() {
        fail(FormatError::UnknownFormat {
            name: format.clone(),
            available: registry.names(),
        });
    }

    let source = read_source(path);
    debug!(path = %path, format = %format, bytes = source.len(), "converting");
    let doc = Parser::new(config.parser).parse(&source);
    let output = registry.render_default(&doc).unwrap_or_else(|e| fail(e));

    print!("{}", output);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Available output formats:\n");
    for name in registry.names() {
        if let Some(formatter) = registry.get(name) {
            println!("  {}", name);
            println!("    {}", formatter.description());
        }
    }
}
