pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "datasets-digest",
    version,
    about = "Tabular digests of NCBI Datasets gene and taxonomy reports",
    long_about = "datasets-digest turns gene and taxonomy report documents fetched from NCBI \
                  Datasets into flat tables: taxa at a chosen rank from a taxonomy tree, \
                  per-rank node counts, and one row per transcript with derived UTR lengths."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to $DATASETS_DIGEST_CONFIG or the user config file)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the taxa of one rank in a taxonomy tree
    Taxa(commands::taxa::TaxaArgs),

    /// Count taxonomy tree nodes per rank
    Ranks(commands::ranks::RanksArgs),

    /// Flatten gene reports into one row per transcript
    Transcripts(commands::transcripts::TranscriptsArgs),
}
