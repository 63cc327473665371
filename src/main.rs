mod commands;
mod datasets;
mod engine;
mod model;
mod selection;
mod util;

use crate::commands::{chamber, info, matrix, score, search};
use crate::engine::{SearchOptions, MAJORITY_THRESHOLD};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[clap(about = "Coalition explorer for the 150-seat Tweede Kamer")]
struct Opts {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate and dump info about the seat and statement datasets.
    Info {
        /// Seat dataset (JSON)
        seats_file: PathBuf,
        /// Statement dataset (JSON)
        statements_file: PathBuf,
    },
    /// Search for the most harmonious majority coalitions.
    Search {
        /// Seat dataset (JSON)
        seats_file: PathBuf,
        /// Statement dataset (JSON)
        statements_file: PathBuf,
        /// Party that must be part of every coalition
        #[clap(long)]
        require: Option<String>,
        /// Largest coalition size to enumerate
        #[clap(long, default_value_t = 5)]
        max_size: usize,
        /// Seat total a coalition must reach
        #[clap(long, default_value_t = MAJORITY_THRESHOLD)]
        threshold: u32,
        /// Smallest number of parties joining the required party
        #[clap(long, default_value_t = 0)]
        min_additional: usize,
        /// How many coalitions to report
        #[clap(long, default_value_t = 5)]
        top: usize,
        /// Write the ranking as JSON to this path
        #[clap(long)]
        output: Option<PathBuf>,
    },
    /// Score a hand-picked coalition.
    Score {
        /// Seat dataset (JSON)
        seats_file: PathBuf,
        /// Statement dataset (JSON)
        statements_file: PathBuf,
        /// Party names forming the coalition
        #[clap(required = true)]
        parties: Vec<String>,
        /// Also print every statement with its tally and badge
        #[clap(long)]
        per_statement: bool,
    },
    /// Per-statement cohesion across the full chamber.
    Chamber {
        /// Seat dataset (JSON)
        seats_file: PathBuf,
        /// Statement dataset (JSON)
        statements_file: PathBuf,
    },
    /// Pairwise agreement matrix between all parties.
    Matrix {
        /// Seat dataset (JSON)
        seats_file: PathBuf,
        /// Statement dataset (JSON)
        statements_file: PathBuf,
    },
}

fn main() {
    let opts = Opts::parse();

    let result = match opts.command {
        Command::Info {
            seats_file,
            statements_file,
        } => info(&seats_file, &statements_file),
        Command::Search {
            seats_file,
            statements_file,
            require,
            max_size,
            threshold,
            min_additional,
            top,
            output,
        } => {
            let options = SearchOptions {
                majority_threshold: threshold,
                max_coalition_size: max_size,
                min_additional_parties: min_additional,
                top_n: top,
            };
            search(
                &seats_file,
                &statements_file,
                require.as_deref(),
                &options,
                output.as_deref(),
            )
        }
        Command::Score {
            seats_file,
            statements_file,
            parties,
            per_statement,
        } => score(&seats_file, &statements_file, &parties, per_statement),
        Command::Chamber {
            seats_file,
            statements_file,
        } => chamber(&seats_file, &statements_file),
        Command::Matrix {
            seats_file,
            statements_file,
        } => matrix(&seats_file, &statements_file),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
