//! CSV / TSV rendering through the `csv` crate
use crate::report::Reportable;
use crate::{DigestError, Result};

pub fn render<R: Reportable>(rows: &[R], delimiter: u8) -> Result<String> {
    let mut writer = ::csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(R::headers())?;
    for row in rows {
        writer.write_record(row.cells())?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| DigestError::Render(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| DigestError::Render(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::RankCount;

    #[test]
    fn test_quotes_fields_with_delimiters() {
        let rows = vec![RankCount {
            rank: "species, sort of".to_string(),
            count: 2,
        }];
        let output = render(&rows, b',').unwrap();
        assert_eq!(output, "Rank,Nodes\n\"species, sort of\",2\n");
    }

    #[test]
    fn test_tab_delimited() {
        let rows = vec![RankCount {
            rank: "genus".to_string(),
            count: 7,
        }];
        assert_eq!(render(&rows, b'\t').unwrap(), "Rank\tNodes\ngenus\t7\n");
    }

    #[test]
    fn test_header_only_for_no_rows() {
        let rows: Vec<RankCount> = Vec::new();
        assert_eq!(render(&rows, b',').unwrap(), "Rank,Nodes\n");
    }
}
