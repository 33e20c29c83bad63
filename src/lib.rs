pub mod bio;
pub mod cli;
pub mod core;
pub mod report;
pub mod utils;

pub use crate::bio::{GeneRecord, TaxonNode, TaxonomicRank, TranscriptRecord};
pub use crate::core::{
    flattener::{flatten_genes, TranscriptRow},
    tree_filter::{taxa_at_rank, RankFilter, TaxonSummary},
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DigestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error in {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Render error: {0}")]
    Render(String),
}

impl DigestError {
    pub fn parse(source_name: impl Into<String>, err: impl std::fmt::Display) -> Self {
        DigestError::Parse {
            source_name: source_name.into(),
            message: err.to_string(),
        }
    }
}

impl From<csv::Error> for DigestError {
    fn from(err: csv::Error) -> Self {
        DigestError::Render(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DigestError>;
