//! Cartparse CLI - validate cart CSV files and print them as JSON
//!
//! ```bash
//! cartparse parse cart.csv              # Parse to {"items": [...], "total": n}
//! cartparse parse cart.csv -f csv       # Items as CSV with generated ids
//! cartparse validate cart.csv           # List validation errors as JSON
//! cartparse schema                      # Show the expected columns
//! ```

use cartparse::{
    errors_to_json, items_to_csv, result_to_json, validate, CartParser, FileReader,
    ParseError, ReaderOptions, SourceReader, SCHEMA,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cartparse")]
#[command(about = "Validate cart CSV files and convert them to JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a cart CSV file
    Parse {
        /// Input CSV file
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: Format,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Input encoding (auto-detect if not specified)
        #[arg(long)]
        encoding: Option<String>,
    },

    /// Validate a cart CSV file and print every error
    Validate {
        /// Input CSV file
        input: PathBuf,

        /// Input encoding (auto-detect if not specified)
        #[arg(long)]
        encoding: Option<String>,
    },

    /// Show the expected cart columns
    Schema,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Csv,
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input,
            format,
            output,
            encoding,
        } => cmd_parse(&input, format, output.as_deref(), encoding),

        Commands::Validate { input, encoding } => cmd_validate(&input, encoding),

        Commands::Schema => cmd_schema(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_parse(
    input: &Path,
    format: Format,
    output: Option<&Path>,
    encoding: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let parser = CartParser::with_options(ReaderOptions { encoding });

    let result = match parser.parse(input) {
        Ok(result) => result,
        Err(ParseError::Validation { errors }) => {
            eprintln!("{}", errors_to_json(&errors)?);
            return Err(ParseError::Validation { errors }.into());
        }
        Err(e) => return Err(e.into()),
    };

    let rendered = match format {
        Format::Json => result_to_json(&result)?,
        Format::Csv => items_to_csv(&result.items)?,
    };
    write_output(&rendered, output)
}

fn cmd_validate(input: &Path, encoding: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let content = FileReader::with_options(ReaderOptions { encoding }).read_source(input)?;

    let errors = validate(&content);
    println!("{}", errors_to_json(&errors)?);

    if !errors.is_empty() {
        eprintln!("{} validation error(s) in {}", errors.len(), input.display());
        std::process::exit(1);
    }

    Ok(())
}

fn cmd_schema() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(&SCHEMA)?);
    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            log::info!("Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
