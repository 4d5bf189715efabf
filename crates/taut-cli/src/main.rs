#![forbid(unsafe_code)]
//! `taut` — dependency-graph analysis from the command line.
//!
//! Loads JSON task-graph datasets, runs the taut-core pipeline (SCC
//! condensation, topological order, shortest and critical paths), and
//! renders the results for humans or machines.

mod datagen;
mod dataset;
mod report;

use std::env;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use report::OutputMode;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "taut: SCC condensation and critical-path analysis for task graphs",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Analyze one or more JSON graph datasets",
        after_help = "EXAMPLES:\n    # Analyze a single dataset\n    taut analyze data/small-1.json\n\n    # Analyze every .json file in a directory\n    taut analyze data/\n\n    # Machine-readable output\n    taut analyze data/small-1.json --json"
    )]
    Analyze {
        /// Dataset files or directories containing `.json` datasets.
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Include per-stage operation counters in the report.
        #[arg(long)]
        counters: bool,
    },

    #[command(
        about = "Generate sample datasets",
        after_help = "EXAMPLES:\n    # Write nine sample datasets (small/medium/large) into ./data\n    taut gen\n\n    # Write them somewhere else\n    taut gen --out bench-data"
    )]
    Gen {
        /// Output directory for the generated datasets.
        #[arg(long, default_value = "data")]
        out: PathBuf,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("TAUT_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "taut=debug,info"
        } else {
            "taut=info,warn"
        })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    if cli.verbose {
        info!("Verbose mode enabled");
    }
    let output = cli.output_mode();

    match cli.command {
        Commands::Analyze { ref paths, counters } => {
            report::run_analyze(paths, counters, output)
        }
        Commands::Gen { ref out } => datagen::run_gen(out, output),
    }
}
