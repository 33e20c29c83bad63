//! Gene to transcript-row flattening.
//!
//! Each transcript becomes one row carrying its gene's id, symbol and
//! organism name. Genes without transcripts produce no rows. Rows keep input
//! order: genes first, then transcripts within each gene.

use crate::bio::{GeneRecord, TranscriptRecord};
use serde::Serialize;
use tracing::warn;

/// One transcript with the gene fields it belongs to.
///
/// Optional values are `None` when the source record lacks them. UTR lengths
/// are `None` whenever there is no CDS range, never zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptRow<'a> {
    pub gene_id: u64,
    pub symbol: &'a str,
    pub tax_name: &'a str,
    pub accession: &'a str,
    pub name: Option<&'a str>,
    pub length: Option<u64>,
    pub exon_count: usize,
    pub cds_begin: Option<u64>,
    pub cds_end: Option<u64>,
    pub protein_accession: Option<&'a str>,
    pub isoform_name: Option<&'a str>,
    pub protein_length: Option<u64>,
    pub five_prime_utr: Option<u64>,
    pub three_prime_utr: Option<u64>,
}

impl<'a> TranscriptRow<'a> {
    pub fn new(gene: &'a GeneRecord, transcript: &'a TranscriptRecord) -> Self {
        let cds = transcript.cds_range();
        let five_prime_utr = transcript.five_prime_utr_len();
        let three_prime_utr = transcript.three_prime_utr_len();

        if let Some(cds) = cds {
            if five_prime_utr.is_none() || three_prime_utr.is_none() {
                warn!(
                    "{} ({}): CDS {}..{} does not fit transcript length {:?}, UTR lengths left undefined",
                    transcript.accession_version,
                    gene.symbol,
                    cds.begin,
                    cds.end,
                    transcript.length
                );
            }
        }

        let protein = transcript.protein.as_ref();
        Self {
            gene_id: gene.gene_id,
            symbol: &gene.symbol,
            tax_name: &gene.tax_name,
            accession: &transcript.accession_version,
            name: transcript.name.as_deref(),
            length: transcript.length,
            exon_count: transcript.exon_count(),
            cds_begin: cds.map(|r| r.begin),
            cds_end: cds.map(|r| r.end),
            protein_accession: protein.map(|p| p.accession_version.as_str()),
            isoform_name: protein.and_then(|p| p.isoform_name.as_deref()),
            protein_length: protein.and_then(|p| p.length),
            five_prime_utr,
            three_prime_utr,
        }
    }
}

/// Lazily expand genes into transcript rows
pub fn transcript_rows<'a, I>(genes: I) -> impl Iterator<Item = TranscriptRow<'a>>
where
    I: IntoIterator<Item = &'a GeneRecord>,
{
    genes.into_iter().flat_map(|gene| {
        gene.transcripts
            .iter()
            .map(move |transcript| TranscriptRow::new(gene, transcript))
    })
}

pub fn flatten_genes(genes: &[GeneRecord]) -> Vec<TranscriptRow<'_>> {
    transcript_rows(genes).collect()
}
