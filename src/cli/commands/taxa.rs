use crate::bio::reports::load_taxonomy;
use crate::bio::TaxonomicRank;
use crate::cli::output::{with_spinner, OutputArgs};
use crate::core::config::Config;
use crate::core::{taxa_at_rank, TaxonSummary};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

#[derive(Args)]
pub struct TaxaArgs {
    /// Taxonomy tree document (JSON, `-` for stdin)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Rank to collect, e.g. species, genus, order (default from config)
    #[arg(short, long)]
    pub rank: Option<TaxonomicRank>,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(args: TaxaArgs, config: &Config) -> anyhow::Result<()> {
    let rank = match args.rank {
        Some(rank) => rank,
        None => config.default_rank()?,
    };

    let root = with_spinner(format!("Loading {}...", args.input.display()), || {
        load_taxonomy(&args.input)
    })?;

    let taxa: Vec<TaxonSummary> = taxa_at_rank(&root, rank).collect();
    info!(
        "Found {} taxa of rank {} under {} ({})",
        taxa.len(),
        rank,
        root.sci_name,
        root.tax_id
    );

    args.output.print(&config.report, &taxa)?;
    Ok(())
}
