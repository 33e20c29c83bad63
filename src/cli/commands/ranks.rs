use crate::bio::reports::load_taxonomy;
use crate::cli::output::{with_spinner, OutputArgs};
use crate::core::config::Config;
use crate::report::RankCount;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct RanksArgs {
    /// Taxonomy tree document (JSON, `-` for stdin)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(args: RanksArgs, config: &Config) -> anyhow::Result<()> {
    let root = with_spinner(format!("Loading {}...", args.input.display()), || {
        load_taxonomy(&args.input)
    })?;

    let counts = RankCount::from_tree(&root);
    args.output.print(&config.report, &counts)?;
    Ok(())
}
