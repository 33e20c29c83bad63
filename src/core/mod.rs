pub mod config;
pub mod flattener;
pub mod tree_filter;

pub use config::Config;
pub use flattener::{flatten_genes, transcript_rows, TranscriptRow};
pub use tree_filter::{species, taxa_at_rank, RankFilter, TaxonSummary};
