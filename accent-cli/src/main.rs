//! Command-line interface for accent
//! Classifies JavaScript/TypeScript tokens into highlight categories and prints the table.
//!
//! Usage:
//!   accent classify [TOKEN]... [--format `<format>`] [--config `<file>`]  - Classify tokens (stdin if none given)
//!   accent table [--format `<format>`]                                    - List every category and its literals

mod render;

use accent_analysis::HighlightFilter;
use accent_config::{AccentConfig, ConfigError, Loader};
use accent_core::HighlightCategory;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::fmt;
use std::io::{self, BufRead, Write};

const DEFAULT_CONFIG_FILE: &str = "accent.toml";

/// Errors surfaced by the CLI
#[derive(Debug)]
pub enum CliError {
    Config(ConfigError),
    Io(io::Error),
    Json(serde_json::Error),
    Yaml(serde_yaml::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(err) => write!(f, "Configuration error: {}", err),
            CliError::Io(err) => write!(f, "I/O error: {}", err),
            CliError::Json(err) => write!(f, "Error formatting JSON: {}", err),
            CliError::Yaml(err) => write!(f, "Error formatting YAML: {}", err),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Config(err)
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Io(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Json(err)
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(err: serde_yaml::Error) -> Self {
        CliError::Yaml(err)
    }
}

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .help("Output format (default from config: simple)")
        .value_parser(["simple", "json", "yaml"])
}

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .short('c')
        .help("Configuration file layered over the defaults (default: ./accent.toml if present)")
}

fn build_cli() -> Command {
    Command::new("accent")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Classify JavaScript/TypeScript tokens into highlight categories")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("classify")
                .about("Classify tokens given as arguments, or one per line on stdin")
                .arg(
                    Arg::new("tokens")
                        .help("Token texts to classify")
                        .num_args(0..)
                        .index(1),
                )
                .arg(format_arg())
                .arg(config_arg())
                .arg(
                    Arg::new("only-classified")
                        .long("only-classified")
                        .help("Hide tokens that receive no category")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("disable")
                        .long("disable")
                        .short('d')
                        .help("Suppress a category (repeatable, replaces the configured list)")
                        .value_parser(value_parser!(HighlightCategory))
                        .action(ArgAction::Append),
                ),
        )
        .subcommand(
            Command::new("table")
                .about("List every category with its style key and literals")
                .arg(format_arg())
                .arg(config_arg()),
        )
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = build_cli().get_matches();
    let result = match matches.subcommand() {
        Some(("classify", sub)) => handle_classify_command(sub),
        Some(("table", sub)) => handle_table_command(sub),
        _ => unreachable!("subcommand is required"),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

/// Layer the user's config and CLI overrides over the defaults
fn load_config(matches: &ArgMatches) -> Result<AccentConfig, CliError> {
    let mut loader = match matches.get_one::<String>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file(DEFAULT_CONFIG_FILE),
    };
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if matches!(matches.try_get_one::<bool>("only-classified"), Ok(Some(&true))) {
        loader = loader.set_override("output.show_unclassified", false)?;
    }
    if let Ok(Some(disabled)) = matches.try_get_many::<HighlightCategory>("disable") {
        let disabled: Vec<HighlightCategory> = disabled.copied().collect();
        loader = loader.disable_categories(&disabled)?;
    }
    Ok(loader.build()?)
}

/// Handle the classify command
fn handle_classify_command(matches: &ArgMatches) -> Result<(), CliError> {
    let config = load_config(matches)?;
    let filter = HighlightFilter::from_config(&config.highlight);

    let tokens: Vec<String> = match matches.get_many::<String>("tokens") {
        Some(values) => values.cloned().collect(),
        None => {
            log::debug!("no tokens given, reading stdin");
            io::stdin()
                .lock()
                .lines()
                .collect::<Result<Vec<_>, io::Error>>()?
        }
    };
    log::debug!("classifying {} tokens", tokens.len());

    let rows = render::classify_tokens(tokens, &filter, config.output.show_unclassified);
    let output = render::render_classified(&rows, config.output.format)?;
    write_output(&output)
}

/// Handle the table command
fn handle_table_command(matches: &ArgMatches) -> Result<(), CliError> {
    let config = load_config(matches)?;
    let output = render::render_table(&render::table_rows(), config.output.format)?;
    write_output(&output)
}

fn write_output(output: &str) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
