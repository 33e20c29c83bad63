//! Tabular reports over taxon and transcript rows
//!
//! Row types implement [`Reportable`]; a [`ReportGenerator`] renders a slice
//! of them as a text table, CSV/TSV, or JSON.
use crate::{DigestError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

pub mod delimited;
pub mod rows;
pub mod text;

pub use rows::{RankCount, Reportable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Text,
    Csv,
    Tsv,
    Json,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "table" => Ok(Format::Text),
            "csv" => Ok(Format::Csv),
            "tsv" => Ok(Format::Tsv),
            "json" => Ok(Format::Json),
            _ => Err(format!("Unknown output format: {} (expected text, csv, tsv or json)", s)),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Text => "text",
            Format::Csv => "csv",
            Format::Tsv => "tsv",
            Format::Json => "json",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub format: Format,
    /// 0 = unlimited
    pub max_rows: usize,
    pub show_summary: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            format: Format::Text,
            max_rows: 0,
            show_summary: true,
        }
    }
}

impl From<&crate::core::config::ReportConfig> for ReportOptions {
    fn from(config: &crate::core::config::ReportConfig) -> Self {
        Self {
            format: config.format,
            max_rows: config.max_rows,
            show_summary: config.show_summary,
        }
    }
}

pub struct ReportGenerator {
    options: ReportOptions,
}

impl ReportGenerator {
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    pub fn generate<R: Reportable>(&self, rows: &[R]) -> Result<String> {
        let shown = match self.options.max_rows {
            0 => rows,
            limit => &rows[..rows.len().min(limit)],
        };
        debug!(
            "Rendering {} of {} {} as {}",
            shown.len(),
            rows.len(),
            R::NOUN,
            self.options.format
        );

        match self.options.format {
            Format::Text => {
                let mut output = text::render_table(shown);
                if self.options.show_summary {
                    output.push_str(&text::summary_line(rows, shown.len()));
                }
                Ok(output)
            }
            Format::Csv => delimited::render(shown, b','),
            Format::Tsv => delimited::render(shown, b'\t'),
            Format::Json => render_json(shown),
        }
    }
}

/// Pretty JSON array of the rows' own serde representation
pub fn render_json<R: Reportable>(rows: &[R]) -> Result<String> {
    serde_json::to_string_pretty(rows).map_err(|e| DigestError::Render(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!("CSV".parse::<Format>(), Ok(Format::Csv));
        assert_eq!("table".parse::<Format>(), Ok(Format::Text));
        assert!("xml".parse::<Format>().is_err());
        assert_eq!(Format::Tsv.to_string(), "tsv");
    }

    #[test]
    fn test_limit_applies_to_every_format() {
        let rows: Vec<RankCount> = (0..5)
            .map(|i| RankCount {
                rank: format!("rank{}", i),
                count: i,
            })
            .collect();

        for format in [Format::Csv, Format::Tsv] {
            let generator = ReportGenerator::new(ReportOptions {
                format,
                max_rows: 2,
                show_summary: true,
            });
            let output = generator.generate(&rows).unwrap();
            // header + two rows
            assert_eq!(output.lines().count(), 3, "{}", output);
        }

        let generator = ReportGenerator::new(ReportOptions {
            format: Format::Json,
            max_rows: 2,
            show_summary: true,
        });
        let value: serde_json::Value =
            serde_json::from_str(&generator.generate(&rows).unwrap()).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }
}
