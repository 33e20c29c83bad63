//! Gene and transcript records from gene reports
use crate::utils::lenient::{opt_u64_from_any, u64_from_any};
use serde::{Deserialize, Serialize};

/// Closed interval of 1-based offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeqRange {
    #[serde(deserialize_with = "u64_from_any")]
    pub begin: u64,
    #[serde(deserialize_with = "u64_from_any")]
    pub end: u64,
}

impl SeqRange {
    pub fn new(begin: u64, end: u64) -> Self {
        Self { begin, end }
    }

    pub fn len(&self) -> u64 {
        if self.end < self.begin {
            0
        } else {
            self.end - self.begin + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ranges on one sequence, e.g. the exons or the CDS of a transcript
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeqLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accession_version: Option<String>,
    #[serde(default)]
    pub range: Vec<SeqRange>,
}

impl SeqLocation {
    pub fn from_ranges(ranges: impl IntoIterator<Item = SeqRange>) -> Self {
        Self {
            accession_version: None,
            range: ranges.into_iter().collect(),
        }
    }

    /// Smallest range covering every part of this location
    pub fn envelope(&self) -> Option<SeqRange> {
        let begin = self.range.iter().map(|r| r.begin).min()?;
        let end = self.range.iter().map(|r| r.end).max()?;
        Some(SeqRange::new(begin, end))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProteinRecord {
    pub accession_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isoform_name: Option<String>,
    #[serde(default, deserialize_with = "opt_u64_from_any")]
    pub length: Option<u64>,
}

impl ProteinRecord {
    pub fn new(accession_version: impl Into<String>) -> Self {
        Self {
            accession_version: accession_version.into(),
            name: None,
            isoform_name: None,
            length: None,
        }
    }

    pub fn with_isoform(mut self, isoform_name: impl Into<String>) -> Self {
        self.isoform_name = Some(isoform_name.into());
        self
    }

    pub fn with_length(mut self, length: u64) -> Self {
        self.length = Some(length);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptRecord {
    pub accession_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "opt_u64_from_any")]
    pub length: Option<u64>,
    /// Coding sequence in transcript coordinates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cds: Option<SeqLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<ProteinRecord>,
    #[serde(default)]
    pub exons: SeqLocation,
}

impl TranscriptRecord {
    pub fn new(accession_version: impl Into<String>, length: u64) -> Self {
        Self {
            accession_version: accession_version.into(),
            name: None,
            length: Some(length),
            cds: None,
            protein: None,
            exons: SeqLocation::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_cds(mut self, begin: u64, end: u64) -> Self {
        self.cds = Some(SeqLocation::from_ranges([SeqRange::new(begin, end)]));
        self
    }

    pub fn with_protein(mut self, protein: ProteinRecord) -> Self {
        self.protein = Some(protein);
        self
    }

    pub fn with_exons(mut self, exons: impl IntoIterator<Item = SeqRange>) -> Self {
        self.exons = SeqLocation::from_ranges(exons);
        self
    }

    /// CDS envelope; a location with no ranges counts as no CDS
    pub fn cds_range(&self) -> Option<SeqRange> {
        self.cds.as_ref().and_then(SeqLocation::envelope)
    }

    pub fn exon_count(&self) -> usize {
        self.exons.range.len()
    }

    /// Bases before the CDS start: `begin - 1`
    pub fn five_prime_utr_len(&self) -> Option<u64> {
        self.cds_range()?.begin.checked_sub(1)
    }

    /// Bases after the CDS end: `length - end`
    pub fn three_prime_utr_len(&self) -> Option<u64> {
        let cds = self.cds_range()?;
        self.length?.checked_sub(cds.end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneRecord {
    #[serde(deserialize_with = "u64_from_any")]
    pub gene_id: u64,
    #[serde(default)]
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "opt_u64_from_any")]
    pub tax_id: Option<u64>,
    #[serde(default, alias = "taxname")]
    pub tax_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,
    #[serde(default)]
    pub chromosomes: Vec<String>,
    #[serde(default)]
    pub swiss_prot_accessions: Vec<String>,
    #[serde(default)]
    pub ensembl_gene_ids: Vec<String>,
    #[serde(default)]
    pub transcripts: Vec<TranscriptRecord>,
}

impl GeneRecord {
    pub fn new(gene_id: u64, symbol: impl Into<String>, tax_name: impl Into<String>) -> Self {
        Self {
            gene_id,
            symbol: symbol.into(),
            description: None,
            tax_id: None,
            tax_name: tax_name.into(),
            common_name: None,
            chromosomes: Vec::new(),
            swiss_prot_accessions: Vec::new(),
            ensembl_gene_ids: Vec::new(),
            transcripts: Vec::new(),
        }
    }

    pub fn with_transcript(mut self, transcript: TranscriptRecord) -> Self {
        self.transcripts.push(transcript);
        self
    }

    pub fn with_chromosome(mut self, chromosome: impl Into<String>) -> Self {
        self.chromosomes.push(chromosome.into());
        self
    }

    /// Swiss-Prot accessions followed by Ensembl gene ids
    pub fn cross_references(&self) -> impl Iterator<Item = &str> {
        self.swiss_prot_accessions
            .iter()
            .chain(self.ensembl_gene_ids.iter())
            .map(String::as_str)
    }
}
