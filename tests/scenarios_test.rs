//! End-to-end analysis scenarios against built-in and file-backed tables.

use std::fs;
use std::sync::Arc;

use abjad::prelude::*;
use abjad::tables::TableOrigin;
use tempfile::TempDir;

fn builtin_analyzer() -> AbjadAnalyzer {
    AbjadAnalyzer::new(Arc::new(ReferenceTables::builtin()))
}

fn letters(analysis: &WordAnalysis) -> Vec<char> {
    analysis.rows.iter().map(|row| row.letter).collect()
}

#[test]
fn test_hamza_alef_word() {
    let analysis = builtin_analyzer().analyze_unique_value("أحمد");

    assert_eq!(analysis.normalized, "احمد");
    assert_eq!(letters(&analysis), vec!['ا', 'ح', 'م', 'د']);
    let values: Vec<u64> = analysis.rows.iter().map(|row| row.value).collect();
    assert_eq!(values, vec![1, 8, 40, 4]);
    assert_eq!(analysis.total, 53);
}

#[test]
fn test_repeated_letter_counted_once() {
    let analysis = builtin_analyzer().analyze_unique_value("اللّٰه");

    assert_eq!(analysis.normalized, "الله");
    assert_eq!(letters(&analysis), vec!['ا', 'ل', 'ه']);
    assert_eq!(analysis.total, 36);
}

#[test]
fn test_two_word_summary() {
    let summaries = builtin_analyzer().analyze_text("محمد علي");

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].word, "محمد");
    assert_eq!(summaries[0].total, 52);
    assert_eq!(summaries[0].unique_letters, 3);
    assert_eq!(summaries[1].word, "علي");
    assert_eq!(summaries[1].total, 110);
    assert_eq!(summaries[1].unique_letters, 3);
}

#[test]
fn test_empty_input_everywhere() {
    let analyzer = builtin_analyzer();

    let word = analyzer.analyze_unique_value("");
    assert!(word.rows.is_empty());
    assert_eq!(word.total, 0);
    assert!(analyzer.analyze_text("").is_empty());
    assert!(analyzer.analyze_whole_text("").rows.is_empty());
    assert!(analyzer.analyze_triad("").rows.is_empty());
}

#[test]
fn test_unparsable_value_cell() -> Result<()> {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("abjad_values.csv"),
        "letter,value\nا,1\nو,6\nز,N/A\nح,8\n",
    )?;
    let config = AbjadConfig::default().with_data_dir(dir.path());
    let tables = ReferenceTables::load(&config);

    assert!(matches!(tables.origins().values, TableOrigin::File(_)));
    assert_eq!(tables.values().get('ز'), 0);
    assert_eq!(tables.values().get('و'), 6);
    assert_eq!(tables.values().get('ح'), 8);

    // the element table was missing and fell back independently
    assert_eq!(tables.origins().elements, TableOrigin::BuiltIn);
    Ok(())
}

#[test]
fn test_missing_triad_table() {
    let dir = TempDir::new().unwrap();
    let config = AbjadConfig::default().with_data_dir(dir.path());
    let tables = ReferenceTables::load(&config);
    let analyzer = AbjadAnalyzer::new(Arc::new(tables));

    for word in ["الله", "محمد علي", "ب"] {
        assert!(analyzer.analyze_triad(word).rows.is_empty());
    }
    assert!(analyzer.tables().raw_triads().is_none());
    assert_eq!(analyzer.tables().origins().triads, TableOrigin::Unavailable);
}

#[test]
fn test_triad_table_from_file() -> Result<()> {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("triads.csv"),
        "الحرف,الروح,العقل,النفس\nا,1,2,3\nل,4,5,6\nه,7,8,9\n",
    )?;
    let config = AbjadConfig::default().with_data_dir(dir.path());
    let analyzer = AbjadAnalyzer::new(Arc::new(ReferenceTables::load(&config)));

    let analysis = analyzer.analyze_triad("الله");
    assert_eq!(analysis.rows.len(), 4);
    let total = analysis.rows.last().unwrap();
    assert_eq!(total.label, RowLabel::Total);
    assert_eq!(total.triad(), Triad::new(12, 15, 18));
    assert_eq!(total.sum, 45);

    let raw = analyzer.tables().raw_triads().unwrap();
    assert_eq!(raw.headers.len(), 4);
    assert_eq!(raw.rows.len(), 3);
    Ok(())
}

#[test]
fn test_oversized_cells_saturate() -> Result<()> {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("abjad_values.csv"), "letter,value\nا,1e20\nب,1e20\n")?;
    fs::write(
        dir.path().join("triads.csv"),
        "حرف,روح,عقل,نفس\nا,18446744073709551615,1,0\nب,1,1,1\n",
    )?;
    let config = AbjadConfig::default().with_data_dir(dir.path());
    let analyzer = AbjadAnalyzer::new(Arc::new(ReferenceTables::load(&config)));

    assert_eq!(analyzer.tables().values().get('ا'), u64::MAX);
    assert_eq!(analyzer.analyze_unique_value("اب").total, u64::MAX);
    assert_eq!(analyzer.analyze_text("اب")[0].total, u64::MAX);

    let analysis = analyzer.analyze_triad("اب");
    assert_eq!(analysis.rows[0].sum, u64::MAX);
    let total = analysis.rows.last().unwrap();
    assert_eq!(total.triad(), Triad::new(u64::MAX, 2, 1));
    assert_eq!(total.sum, u64::MAX);
    Ok(())
}

#[test]
fn test_malformed_tables_fall_back() -> Result<()> {
    let dir = TempDir::new().unwrap();
    // header only, and a single column
    fs::write(dir.path().join("abjad_values.csv"), "letter,value\n")?;
    fs::write(dir.path().join("elements.csv"), "letter\nا\n")?;
    fs::write(dir.path().join("triads.csv"), "")?;
    let config = AbjadConfig::default().with_data_dir(dir.path());
    let tables = ReferenceTables::load(&config);

    assert_eq!(tables.origins().values, TableOrigin::BuiltIn);
    assert_eq!(tables.origins().elements, TableOrigin::BuiltIn);
    assert_eq!(tables.origins().triads, TableOrigin::Unavailable);
    assert_eq!(tables.values().get('غ'), 1000);
    Ok(())
}

#[test]
fn test_bundled_data_matches_builtin() {
    let config = AbjadConfig::default().with_data_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/data"));
    let loaded = ReferenceTables::load(&config);
    let builtin = ReferenceTables::builtin();

    assert!(matches!(loaded.origins().values, TableOrigin::File(_)));
    assert!(matches!(loaded.origins().elements, TableOrigin::File(_)));
    assert_eq!(loaded.values(), builtin.values());
    assert_eq!(loaded.elements(), builtin.elements());
}

#[test]
fn test_custom_tables_drive_analysis() {
    let values = [('ب', 5), ('ت', 7)].into_iter().collect();
    let elements = [('ب', Element::Air)].into_iter().collect();
    let analyzer = AbjadAnalyzer::new(Arc::new(ReferenceTables::new(values, elements, None)));

    let analysis = analyzer.analyze_unique_value("بتب");
    assert_eq!(analysis.total, 12);
    assert_eq!(analysis.rows[0].element, Some(Element::Air));
    assert_eq!(analysis.rows[1].element, None);

    let summaries = analyzer.analyze_text("بت ب");
    assert_eq!(summaries[0].elements.air, 1);
    assert_eq!(summaries[1].total, 5);
}
