//! sqlfmt CLI - Format SQL from files or stdin
//!
//! Usage:
//!   sqlfmt format [FILE] [--language <name>] [--case upper] [-p key=value]
//!   sqlfmt tokenize [FILE] [--language <name>] [--json]
//!   sqlfmt dialects
//!
//! Examples:
//!   sqlfmt format query.sql --language db2
//!   echo "select * from t where id = :id" | sqlfmt format -p id=42 -c upper
//!   sqlfmt tokenize query.sql --json
//!
//! Logging goes to stderr and is controlled by `SQLFMT_LOG` (e.g. `SQLFMT_LOG=debug`).

use clap::{Parser, Subcommand, ValueEnum};
use sqlfmt::config::Settings;
use sqlfmt::{DialectProfile, FormatOptions, ReservedWordCase};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "sqlfmt")]
#[command(about = "sqlfmt - A dialect-aware SQL formatter")]
#[command(version)]
struct Cli {
    /// Settings file (defaults to SQLFMT_CONFIG, ./sqlfmt.toml, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format SQL and print it to stdout
    Format {
        /// SQL file to read (stdin if omitted)
        file: Option<PathBuf>,

        /// Dialect name (sql, db2, n1ql, pl/sql, or a custom one)
        #[arg(short, long)]
        language: Option<String>,

        /// Indentation unit
        #[arg(short, long, conflicts_with = "tabs")]
        indent: Option<String>,

        /// Indent with tabs
        #[arg(long)]
        tabs: bool,

        /// Case for reserved words
        #[arg(short = 'c', long = "case")]
        case: Option<CaseArg>,

        /// Placeholder value as key=value (repeatable)
        #[arg(short = 'p', long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,

        /// Line breaks after each `;`
        #[arg(long)]
        lines_between_queries: Option<usize>,
    },

    /// Print the token stream
    Tokenize {
        /// SQL file to read (stdin if omitted)
        file: Option<PathBuf>,

        /// Dialect name
        #[arg(short, long)]
        language: Option<String>,

        /// Output tokens as JSON
        #[arg(long)]
        json: bool,
    },

    /// List available dialects
    Dialects,
}

#[derive(Clone, ValueEnum)]
enum CaseArg {
    Upper,
    Lower,
    Unchanged,
}

impl From<CaseArg> for ReservedWordCase {
    fn from(arg: CaseArg) -> Self {
        match arg {
            CaseArg::Upper => ReservedWordCase::Upper,
            CaseArg::Lower => ReservedWordCase::Lower,
            CaseArg::Unchanged => ReservedWordCase::Unchanged,
        }
    }
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{s}'"))
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let settings = match load_settings(cli.config.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Format {
            file,
            language,
            indent,
            tabs,
            case,
            params,
            lines_between_queries,
        } => {
            let overrides = Overrides {
                indent: if tabs { Some("\t".to_string()) } else { indent },
                case: case.map(Into::into),
                params,
                lines_between_queries,
            };
            cmd_format(&settings, file.as_deref(), language.as_deref(), overrides)
        }
        Commands::Tokenize {
            file,
            language,
            json,
        } => cmd_tokenize(&settings, file.as_deref(), language.as_deref(), json),
        Commands::Dialects => cmd_dialects(&settings),
    }
}

/// Install the stderr subscriber; stdout carries only SQL.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("SQLFMT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn load_settings(path: Option<&Path>) -> Result<Settings, sqlfmt::config::SettingsError> {
    match path {
        Some(path) => Settings::from_file(path),
        None => Settings::load(),
    }
}

/// Command-line values that take precedence over the settings file.
struct Overrides {
    indent: Option<String>,
    case: Option<ReservedWordCase>,
    params: Vec<(String, String)>,
    lines_between_queries: Option<usize>,
}

impl Overrides {
    fn apply(self, mut options: FormatOptions) -> FormatOptions {
        if let Some(indent) = self.indent {
            options = options.with_indent(indent);
        }
        if let Some(case) = self.case {
            options = options.with_reserved_word_case(case);
        }
        if let Some(lines) = self.lines_between_queries {
            options = options.with_lines_between_queries(lines);
        }
        for (key, value) in self.params {
            options = options.with_param(key, value);
        }
        options
    }
}

fn read_input(file: Option<&Path>) -> Result<String, String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("failed to read '{}': {}", path.display(), e)),
        None => io::read_to_string(io::stdin()).map_err(|e| format!("failed to read stdin: {}", e)),
    }
}

fn resolve<'s>(
    settings: &'s Settings,
    language: Option<&str>,
) -> Result<&'s DialectProfile, String> {
    let name = language.unwrap_or(&settings.language);
    settings.resolve_profile(name).map_err(|e| e.to_string())
}

fn run_format(
    settings: &Settings,
    file: Option<&Path>,
    language: Option<&str>,
    overrides: Overrides,
) -> Result<String, String> {
    let profile = resolve(settings, language)?;
    let options = overrides.apply(settings.format_options().map_err(|e| e.to_string())?);
    let source = read_input(file)?;
    sqlfmt::format_with_profile(&source, profile, &options).map_err(|e| e.to_string())
}

fn run_tokenize(
    settings: &Settings,
    file: Option<&Path>,
    language: Option<&str>,
) -> Result<Vec<sqlfmt::Token>, String> {
    let profile = resolve(settings, language)?;
    let source = read_input(file)?;
    sqlfmt::tokenize_with_profile(&source, profile).map_err(|e| e.to_string())
}

fn cmd_format(
    settings: &Settings,
    file: Option<&Path>,
    language: Option<&str>,
    overrides: Overrides,
) -> ExitCode {
    match run_format(settings, file, language, overrides) {
        Ok(formatted) => {
            println!("{}", formatted);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_tokenize(
    settings: &Settings,
    file: Option<&Path>,
    language: Option<&str>,
    json: bool,
) -> ExitCode {
    let tokens = match run_tokenize(settings, file, language) {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if json {
        match serde_json::to_string_pretty(&tokens) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        for token in &tokens {
            println!("{}\t{:?}", token.kind, token.text);
        }
    }
    ExitCode::SUCCESS
}

fn cmd_dialects(settings: &Settings) -> ExitCode {
    for name in settings.dialect_names() {
        println!("{}", name);
    }
    ExitCode::SUCCESS
}
