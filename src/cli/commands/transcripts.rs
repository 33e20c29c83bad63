use crate::bio::reports::load_gene_reports;
use crate::bio::GeneRecord;
use crate::cli::output::{with_spinner, OutputArgs};
use crate::core::config::Config;
use crate::core::{transcript_rows, TranscriptRow};
use clap::Args;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args)]
pub struct TranscriptsArgs {
    /// Gene report document (JSON or JSON lines, `-` for stdin)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Only include genes with this symbol (repeatable, case-insensitive)
    #[arg(short, long = "gene", value_name = "SYMBOL")]
    pub genes: Vec<String>,

    /// Only include transcripts with a coding sequence
    #[arg(long)]
    pub coding_only: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Genes whose symbol is in `symbols`, or all genes when `symbols` is empty.
/// Symbols that match nothing are logged.
pub fn select_genes<'a>(genes: &'a [GeneRecord], symbols: &[String]) -> Vec<&'a GeneRecord> {
    if symbols.is_empty() {
        return genes.iter().collect();
    }

    for symbol in symbols {
        if !genes.iter().any(|g| g.symbol.eq_ignore_ascii_case(symbol)) {
            warn!("Gene symbol {} not found in input", symbol);
        }
    }

    genes
        .iter()
        .filter(|gene| symbols.iter().any(|s| gene.symbol.eq_ignore_ascii_case(s)))
        .collect()
}

pub fn run(args: TranscriptsArgs, config: &Config) -> anyhow::Result<()> {
    let genes = with_spinner(format!("Loading {}...", args.input.display()), || {
        load_gene_reports(&args.input)
    })?;

    let selected = select_genes(&genes, &args.genes);
    let rows: Vec<TranscriptRow> = transcript_rows(selected.iter().copied())
        .filter(|row| !args.coding_only || row.cds_begin.is_some())
        .collect();
    info!(
        "Flattened {} genes into {} transcript rows",
        selected.len(),
        rows.len()
    );

    args.output.print(&config.report, &rows)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_genes_case_insensitive_keeps_order() {
        let genes = vec![
            GeneRecord::new(1, "BRCA1", "Homo sapiens"),
            GeneRecord::new(2, "TP53", "Homo sapiens"),
            GeneRecord::new(3, "Brca1", "Mus musculus"),
        ];
        let symbols = vec!["brca1".to_string()];
        let ids: Vec<u64> = select_genes(&genes, &symbols).iter().map(|g| g.gene_id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_select_genes_without_filter_returns_all() {
        let genes = vec![GeneRecord::new(1, "A", "x"), GeneRecord::new(2, "B", "x")];
        assert_eq!(select_genes(&genes, &[]).len(), 2);
    }
}
