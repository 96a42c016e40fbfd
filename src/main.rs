//! dualgraph - presents a graph file as adjacency list and adjacency matrix.
//!
//! Labels are read as strings and weights as 32-bit integers.
//!
//! # Examples
//!
//! ```bash
//! # Present a graph file
//! dualgraph data/graph.txt
//!
//! # Read the file name from stdin
//! echo data/graph.txt | dualgraph
//!
//! # Keep zero weights and self-loops when converting to the matrix
//! dualgraph --strict --infinity 1000 data/graph.txt
//! ```

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use dualgraph::{
    io::{GraphInput, GraphInputReader, GraphReader},
    prelude::*,
    presenter::GraphPresenter,
};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Presents a weighted graph in adjacency-list and adjacency-matrix form
#[derive(Parser)]
#[command(name = "dualgraph")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Graph file (read from the first line of stdin if omitted)
    input: Option<PathBuf>,

    /// Matrix cell value meaning "no edge"
    #[arg(long, default_value_t = DEFAULT_INFINITY, allow_negative_numbers = true)]
    infinity: i32,

    /// Only the infinity value means "no edge": zero weights and self-loops survive conversion
    #[arg(long)]
    strict: bool,

    /// Lines starting with this string are skipped
    #[arg(long, default_value = "#", value_parser = clap::builder::NonEmptyStringValueParser::new())]
    comment: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn setup_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();
}

fn read_path_from_stdin() -> Result<PathBuf> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read the file name from stdin")?;

    let name = line.trim();
    anyhow::ensure!(!name.is_empty(), "no input file given");
    Ok(PathBuf::from(name))
}

fn run(cli: &Cli) -> Result<()> {
    let path = match &cli.input {
        Some(path) => path.clone(),
        None => read_path_from_stdin()?,
    };

    let mut out = BufWriter::new(io::stdout().lock());

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(err) => {
            writeln!(out, "DATA FILE COULDN'T BE OPENED. PRESENTATION EXIT.")?;
            out.flush()?;
            return Err(err).with_context(|| format!("cannot open {}", path.display()));
        }
    };

    let input: GraphInput<String, i32> = GraphInputReader::new()
        .comment_identifier(cli.comment.as_str())
        .try_read_graph(BufReader::new(file))
        .with_context(|| format!("failed to read graph from {}", path.display()))?;
    debug!(path = %path.display(), directed = input.directed, "loaded graph file");

    let data = input
        .into_list_data()
        .context("graph input is inconsistent")?;

    let encoding = if cli.strict {
        CellEncoding::SentinelOnly
    } else {
        CellEncoding::ZeroOrSentinel
    };

    GraphPresenter::new(cli.infinity)
        .cell_encoding(encoding)
        .present(data, &mut out)
        .context("failed to write presentation")?;

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
