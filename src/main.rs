//! Command-line interface for datum-json
//!
//! # Usage Examples
//!
//! ## Types
//! ```bash
//! # Print the generated type list for a seed
//! datum-json types --seed 42
//!
//! # Print the types listed in a file
//! datum-json types --types-file types.yaml
//! ```
//!
//! ## Convert
//! ```bash
//! # One datum per generated type, default formatting, UTC
//! datum-json convert --seed 42
//!
//! # Five non-null datums per type with PostgreSQL escape bytea output
//! datum-json convert --seed 7 --count 5 --no-nulls --bytes-encoding escape
//!
//! # Options from a file, timezone from the command line
//! datum-json convert --config conversion.yaml --timezone Europe/Berlin
//! ```
//!
//! ## Output Format
//! `convert` writes one JSON object per line: `{"json":<value>,"type":"<type name>"}`.
//! Set `RUST_LOG=debug` to see generator and conversion decisions on stderr.

use clap::{Parser, Subcommand};
use datum_json::{run_convert, run_types, ConvertOpts, TypesOpts};

#[derive(Parser)]
#[command(name = "datum-json")]
#[command(about = "Render random SQL datums as JSON")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the types a run covers, one per line
    Types {
        #[command(flatten)]
        opts: TypesOpts,
    },

    /// Generate random datums and print their JSON renderings as JSONL
    Convert {
        #[command(flatten)]
        opts: ConvertOpts,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());

    match cli.command {
        Commands::Types { opts } => run_types(&opts, &mut out)?,
        Commands::Convert { opts } => run_convert(&opts, &mut out)?,
    }

    std::io::Write::flush(&mut out)?;
    Ok(())
}
