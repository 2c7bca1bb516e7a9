//! supertable - Convert tabular data between text formats

use std::fs::File;
use std::io::{self, BufReader, IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use supertable::config::{Config, DEFAULT_FIELD_SEPARATOR};
use supertable::registry::{Direction, Registry};

/// Convert tabular data between delimited, fixed-width, CSV, JSON, YAML,
/// HTML, Markdown and BBCode
#[derive(Parser, Debug)]
#[command(name = "supertable")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file (defaults to stdin)
    file: Option<PathBuf>,

    /// Treat row 1 as column names
    #[arg(short = 'H', long)]
    headings: bool,

    /// Input format (name, abbreviation or regex)
    #[arg(short, long, required_unless_present = "list_formats")]
    input: Option<String>,

    /// Output format (name, abbreviation or regex)
    #[arg(short, long, required_unless_present = "list_formats")]
    output: Option<String>,

    /// Order of columns (comma-separated, each a name or regex)
    #[arg(long, value_delimiter = ',')]
    order: Option<Vec<String>>,

    /// Regular expression used as the input field separator
    #[arg(short, long, default_value = DEFAULT_FIELD_SEPARATOR)]
    regexp: String,

    /// Output separator
    #[arg(short, long)]
    separator: Option<String>,

    /// Reverse the order of rows
    #[arg(long)]
    reverse: bool,

    /// Column to sort rows by (a zero-based index when there are no headings)
    #[arg(long)]
    sort: Option<String>,

    /// List formats and whether they can be read or written
    #[arg(long)]
    list_formats: bool,

    /// Enable debugging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let registry = Registry::new();

    if cli.list_formats {
        for strategy in registry.strategies() {
            let read = if strategy.supports(Direction::Read) { "read" } else { "" };
            let write = if strategy.supports(Direction::Write) { "write" } else { "" };
            println!("{:<10} {:<5} {}", strategy.name, read, write);
        }
        return Ok(());
    }

    let input_format = cli.input.context("--input is required")?;
    let output_format = cli.output.context("--output is required")?;

    let config = Config {
        headings: cli.headings,
        input_format,
        output_format,
        order: cli.order,
        field_separator: cli.regexp,
        output_separator: cli.separator,
        reverse: cli.reverse,
        sort_by: cli.sort,
    };

    let mut input: Box<dyn Read> = match &cli.file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open file: {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                bail!("stdin must be redirected");
            }
            Box::new(stdin.lock())
        }
    };

    let mut stdout = io::stdout().lock();
    registry
        .convert(&mut input, &mut stdout, &config)
        .with_context(|| {
            format!(
                "Failed to convert {} to {}",
                config.input_format, config.output_format
            )
        })?;

    Ok(())
}
