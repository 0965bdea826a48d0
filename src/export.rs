//! CSV export of analysis results.
//!
//! The per-word summary uses the header
//! `word,total,unique_len,نار,تراب,هواء,ماء`, UTF-8, no index column.
//!
//! ```
//! use std::sync::Arc;
//!
//! use abjad::analysis::analyzer::AbjadAnalyzer;
//! use abjad::export::summary_csv_string;
//! use abjad::tables::ReferenceTables;
//!
//! let analyzer = AbjadAnalyzer::new(Arc::new(ReferenceTables::builtin()));
//! let csv = summary_csv_string(&analyzer.analyze_text("علي")).unwrap();
//! assert_eq!(csv, "word,total,unique_len,نار,تراب,هواء,ماء\nعلي,110,3,0,1,0,2\n");
//! ```

use std::io::Write;

use csv::WriterBuilder;

use crate::analysis::row::{TriadRow, WordSummary};
use crate::error::{AbjadError, Result};
use crate::tables::element::Element;
use crate::tables::loader::{MIND_MARKER, SELF_MARKER, SPIRIT_MARKER};

/// Column header of the per-word summary export.
pub fn summary_header() -> Vec<&'static str> {
    let mut header = vec!["word", "total", "unique_len"];
    header.extend(Element::ALL.map(Element::arabic));
    header
}

/// Write per-word summaries as CSV.
pub fn write_summary_csv<W: Write>(summaries: &[WordSummary], writer: W) -> Result<()> {
    let mut writer = WriterBuilder::new().from_writer(writer);
    writer.write_record(summary_header())?;
    for summary in summaries {
        let mut record = vec![
            summary.word.clone(),
            summary.total.to_string(),
            summary.unique_letters.to_string(),
        ];
        record.extend(summary.elements.as_array().map(|count| count.to_string()));
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a triad breakdown as CSV; the totals row is labelled المجموع.
pub fn write_triad_csv<W: Write>(rows: &[TriadRow], writer: W) -> Result<()> {
    let mut writer = WriterBuilder::new().from_writer(writer);
    writer.write_record(["letter", SPIRIT_MARKER, MIND_MARKER, SELF_MARKER, "sum"])?;
    for row in rows {
        writer.write_record([
            row.label.to_string(),
            row.spirit.to_string(),
            row.mind.to_string(),
            row.soul.to_string(),
            row.sum.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn into_string(buffer: Vec<u8>) -> Result<String> {
    String::from_utf8(buffer).map_err(|e| AbjadError::other(format!("export is not UTF-8: {e}")))
}

/// Per-word summaries rendered as a CSV string.
pub fn summary_csv_string(summaries: &[WordSummary]) -> Result<String> {
    let mut buffer = Vec::new();
    write_summary_csv(summaries, &mut buffer)?;
    into_string(buffer)
}

/// A triad breakdown rendered as a CSV string.
pub fn triad_csv_string(rows: &[TriadRow]) -> Result<String> {
    let mut buffer = Vec::new();
    write_triad_csv(rows, &mut buffer)?;
    into_string(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::row::ElementCounts;
    use crate::tables::triad::Triad;

    #[test]
    fn test_summary_header() {
        assert_eq!(
            summary_header(),
            vec!["word", "total", "unique_len", "نار", "تراب", "هواء", "ماء"]
        );
    }

    #[test]
    fn test_summary_csv() {
        let summaries = vec![
            WordSummary {
                word: "محمد".to_string(),
                total: 52,
                unique_letters: 3,
                elements: ElementCounts { fire: 1, earth: 0, air: 0, water: 2 },
            },
            WordSummary {
                word: "علي".to_string(),
                total: 110,
                unique_letters: 3,
                elements: ElementCounts { fire: 0, earth: 1, air: 0, water: 2 },
            },
        ];
        let csv = summary_csv_string(&summaries).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "word,total,unique_len,نار,تراب,هواء,ماء");
        assert_eq!(lines[1], "محمد,52,3,1,0,0,2");
        assert_eq!(lines[2], "علي,110,3,0,1,0,2");
    }

    #[test]
    fn test_empty_summary_has_header_only() {
        let csv = summary_csv_string(&[]).unwrap();
        assert_eq!(csv, "word,total,unique_len,نار,تراب,هواء,ماء\n");
    }

    #[test]
    fn test_triad_csv() {
        let rows = vec![
            TriadRow::letter('ا', Triad::new(1, 2, 3)),
            TriadRow::total(Triad::new(1, 2, 3)),
        ];
        let csv = triad_csv_string(&rows).unwrap();
        assert_eq!(csv, "letter,روح,عقل,نفس,sum\nا,1,2,3,6\nالمجموع,1,2,3,6\n");
    }
}
