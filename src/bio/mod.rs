pub mod gene;
pub mod reports;
pub mod taxonomy;

pub use gene::{GeneRecord, ProteinRecord, SeqLocation, SeqRange, TranscriptRecord};
pub use taxonomy::{TaxonNode, TaxonomicRank};
