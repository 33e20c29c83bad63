//! Loading of gene and taxonomy report documents
//!
//! Accepted gene report shapes:
//! - `{"genes": [{"gene": {...}}, ...]}` (v1 report responses)
//! - `{"reports": [{"gene": {...}}, ...]}` (v2 report responses)
//! - a bare JSON array of genes or of `{"gene": ...}` entries
//! - JSON lines, one gene per line (`data_report.jsonl` in download packages)
//!
//! Taxonomy documents are a bare tree node or a node wrapped under
//! `"taxonomy"` / `"node"`.
use crate::bio::{GeneRecord, TaxonNode};
use crate::{DigestError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Decode one report entry: a bare gene, a `{"gene": ...}` match, or a match
/// carrying only warnings (yields `None`)
fn decode_entry(entry: Value) -> serde_json::Result<Option<GeneRecord>> {
    match entry {
        Value::Object(mut fields) if !fields.contains_key("gene_id") => {
            match fields.remove("gene") {
                Some(Value::Null) | None => Ok(None),
                Some(gene) => serde_json::from_value(gene).map(Some),
            }
        }
        other => serde_json::from_value(other).map(Some),
    }
}

/// Report entries of a whole document, if it has one of the known shapes
fn document_entries(document: Value) -> Option<Vec<Value>> {
    match document {
        Value::Array(entries) => Some(entries),
        // A lone gene or match, e.g. a one-line JSON lines stream
        Value::Object(fields) if fields.contains_key("gene_id") || fields.contains_key("gene") => {
            Some(vec![Value::Object(fields)])
        }
        Value::Object(mut fields) => {
            let list = fields.remove("genes").or_else(|| fields.remove("reports"));
            match list {
                Some(Value::Array(entries)) => Some(entries),
                _ => None,
            }
        }
        _ => None,
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TaxonomyDocument {
    Wrapped {
        #[serde(alias = "node")]
        taxonomy: TaxonNode,
    },
    Bare(TaxonNode),
}

/// Read a whole input, `-` meaning stdin
pub fn read_input<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else if path.is_dir() {
        Err(DigestError::InvalidInput(format!(
            "{} is a directory; pass the report file inside it",
            path.display()
        )))
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

fn is_jsonl(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("jsonl") || ext.eq_ignore_ascii_case("ndjson"))
        .unwrap_or(false)
}

/// Load a taxonomy tree document.
///
/// The JSON parser nests at most 128 levels, and every tree level costs two
/// (the node object and its `children` array), so documents deeper than about
/// 60 taxa are rejected with a parse error. Trees built in memory have no such
/// limit.
pub fn load_taxonomy<P: AsRef<Path>>(path: P) -> Result<TaxonNode> {
    let path = path.as_ref();
    let text = read_input(path)?;
    let root = parse_taxonomy(&path.display().to_string(), &text)?;
    info!(
        "Loaded taxonomy tree rooted at {} ({}) with {} nodes",
        root.sci_name,
        root.tax_id,
        root.len()
    );
    Ok(root)
}

pub fn parse_taxonomy(source_name: &str, text: &str) -> Result<TaxonNode> {
    let document: TaxonomyDocument = serde_json::from_str(text)
        .map_err(|e| DigestError::parse(source_name, e))?;

    Ok(match document {
        TaxonomyDocument::Wrapped { taxonomy } => taxonomy,
        TaxonomyDocument::Bare(node) => node,
    })
}

pub fn load_gene_reports<P: AsRef<Path>>(path: P) -> Result<Vec<GeneRecord>> {
    let path = path.as_ref();
    let text = read_input(path)?;
    let source_name = path.display().to_string();

    let genes = if is_jsonl(path) {
        parse_gene_lines(&source_name, &text)?
    } else {
        parse_gene_reports(&source_name, &text)?
    };

    info!("Loaded {} genes from {}", genes.len(), source_name);
    Ok(genes)
}

/// Parse a gene report document, falling back to JSON lines when the text
/// is not a single document
pub fn parse_gene_reports(source_name: &str, text: &str) -> Result<Vec<GeneRecord>> {
    match serde_json::from_str::<Value>(text) {
        Ok(document) => {
            let entries = document_entries(document).ok_or_else(|| {
                DigestError::parse(
                    source_name,
                    "expected a gene, a list of genes or an object with a \"genes\" or \"reports\" list",
                )
            })?;
            collect_genes(source_name, entries.into_iter().enumerate())
        }
        Err(e) if text.lines().filter(|l| !l.trim().is_empty()).count() > 1 => {
            debug!("{} is not a single JSON document ({}), trying JSON lines", source_name, e);
            parse_gene_lines(source_name, text)
        }
        Err(e) => Err(DigestError::parse(source_name, e)),
    }
}

pub fn parse_gene_lines(source_name: &str, text: &str) -> Result<Vec<GeneRecord>> {
    let mut genes = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let gene = serde_json::from_str::<Value>(line)
            .and_then(decode_entry)
            .map_err(|e| DigestError::parse(source_name, format!("line {}: {}", index + 1, e)))?;
        match gene {
            Some(gene) => genes.push(gene),
            None => debug!("Skipped line {} of {}: no gene", index + 1, source_name),
        }
    }
    Ok(genes)
}

fn collect_genes(
    source_name: &str,
    entries: impl Iterator<Item = (usize, Value)>,
) -> Result<Vec<GeneRecord>> {
    let mut genes = Vec::new();
    for (index, entry) in entries {
        match decode_entry(entry)
            .map_err(|e| DigestError::parse(source_name, format!("entry {}: {}", index, e)))?
        {
            Some(gene) => genes.push(gene),
            None => debug!("Skipped entry {} of {}: no gene", index, source_name),
        }
    }
    Ok(genes)
}
