use crate::bio::TaxonNode;
use crate::core::{TaxonSummary, TranscriptRow};
use serde::Serialize;
use std::collections::HashSet;

/// A row type that can be laid out as a table
pub trait Reportable: Serialize {
    /// Plural noun for summaries and logs
    const NOUN: &'static str;

    fn headers() -> &'static [&'static str];

    /// One display string per header; absent values are empty strings
    fn cells(&self) -> Vec<String>;

    fn summarize(rows: &[Self]) -> String
    where
        Self: Sized,
    {
        format!("{} {}", rows.len(), Self::NOUN)
    }
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl Reportable for TaxonSummary<'_> {
    const NOUN: &'static str = "taxa";

    fn headers() -> &'static [&'static str] {
        &["Tax ID", "Scientific name", "Common name"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.tax_id.to_string(),
            self.sci_name.to_string(),
            opt(self.common_name),
        ]
    }
}

impl Reportable for TranscriptRow<'_> {
    const NOUN: &'static str = "transcripts";

    fn headers() -> &'static [&'static str] {
        &[
            "Gene ID",
            "Symbol",
            "Organism",
            "Transcript",
            "Name",
            "Length",
            "Exons",
            "CDS begin",
            "CDS end",
            "Protein",
            "Isoform",
            "Protein length",
            "5' UTR",
            "3' UTR",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.gene_id.to_string(),
            self.symbol.to_string(),
            self.tax_name.to_string(),
            self.accession.to_string(),
            opt(self.name),
            opt(self.length),
            self.exon_count.to_string(),
            opt(self.cds_begin),
            opt(self.cds_end),
            opt(self.protein_accession),
            opt(self.isoform_name),
            opt(self.protein_length),
            opt(self.five_prime_utr),
            opt(self.three_prime_utr),
        ]
    }

    fn summarize(rows: &[Self]) -> String {
        let genes: HashSet<u64> = rows.iter().map(|row| row.gene_id).collect();
        let coding = rows.iter().filter(|row| row.cds_begin.is_some()).count();
        format!(
            "{} transcripts from {} genes ({} coding)",
            rows.len(),
            genes.len(),
            coding
        )
    }
}

/// Number of tree nodes at one rank
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankCount {
    pub rank: String,
    pub count: usize,
}

impl RankCount {
    /// Counts ordered from the top of the hierarchy down, unranked nodes first
    pub fn from_tree(root: &TaxonNode) -> Vec<RankCount> {
        root.rank_counts()
            .into_iter()
            .map(|(rank, count)| RankCount {
                rank: rank
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| "(unranked)".to_string()),
                count,
            })
            .collect()
    }
}

impl Reportable for RankCount {
    const NOUN: &'static str = "ranks";

    fn headers() -> &'static [&'static str] {
        &["Rank", "Nodes"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.rank.clone(), self.count.to_string()]
    }

    fn summarize(rows: &[Self]) -> String {
        let nodes: usize = rows.iter().map(|row| row.count).sum();
        format!("{} nodes across {} ranks", nodes, rows.len())
    }
}
