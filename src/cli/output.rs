//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::analysis::row::{TriadAnalysis, WordAnalysis, WordSummary};
use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::export::{summary_header, write_summary_csv, write_triad_csv};
use crate::tables::element::Element;
use crate::tables::raw::RawTable;
use crate::tables::{ReferenceTables, TableOrigin};

/// Shown when a word has no Arabic letters.
pub const NO_LETTERS: &str = "No Arabic letters detected.";

/// Shown when a text has no Arabic words.
pub const NO_WORDS: &str = "No valid Arabic words detected.";

/// Shown when the triad table could not be loaded.
pub const NO_TRIAD_TABLE: &str = "Triad table not available.";

/// Output settings taken from the global CLI flags.
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub pretty: bool,
}

/// One table's provenance, for the `tables` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct TableInfo {
    pub name: String,
    pub origin: TableOrigin,
    pub entries: usize,
}

/// Triad breakdown plus the optional reference table, for the `triad` command.
#[derive(Debug, Serialize)]
pub struct TriadReport<'a> {
    pub available: bool,
    #[serde(flatten)]
    pub analysis: &'a TriadAnalysis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<&'a RawTable>,
}

fn output_json<W: Write, T: Serialize + ?Sized>(
    out: &mut W,
    value: &T,
    options: OutputOptions,
) -> Result<()> {
    if options.pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

fn output_breakdown_csv<W: Write>(out: &mut W, analysis: &WordAnalysis) -> Result<()> {
    let mut writer = csv::Writer::from_writer(&mut *out);
    writer.write_record(["letter", "value", "element"])?;
    for row in &analysis.rows {
        writer.write_record([
            row.letter.to_string(),
            row.value.to_string(),
            row.element_label().to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Output a value/element breakdown. `label` names the input ("Word", "Text").
pub fn output_breakdown<W: Write>(
    out: &mut W,
    label: &str,
    analysis: &WordAnalysis,
    options: OutputOptions,
) -> Result<()> {
    match options.format {
        OutputFormat::Json => output_json(out, analysis, options),
        OutputFormat::Csv => output_breakdown_csv(out, analysis),
        OutputFormat::Human => {
            writeln!(out, "{label} (normalized): {}", analysis.normalized)?;
            writeln!(out, "Total Abjad value: {}", analysis.total)?;
            writeln!(out)?;
            if analysis.is_empty() {
                writeln!(out, "{NO_LETTERS}")?;
                return Ok(());
            }
            writeln!(out, "{:<8}{:>8}  element", "letter", "value")?;
            writeln!(out, "{}", "─".repeat(26))?;
            for row in &analysis.rows {
                writeln!(out, "{:<8}{:>8}  {}", row.letter, row.value, row.element_label())?;
            }
            Ok(())
        }
    }
}

/// Output per-word summaries.
pub fn output_summaries<W: Write>(
    out: &mut W,
    summaries: &[WordSummary],
    options: OutputOptions,
) -> Result<()> {
    match options.format {
        OutputFormat::Json => output_json(out, summaries, options),
        OutputFormat::Csv => write_summary_csv(summaries, out),
        OutputFormat::Human => {
            if summaries.is_empty() {
                writeln!(out, "{NO_WORDS}")?;
                return Ok(());
            }
            let header = summary_header();
            writeln!(
                out,
                "{:<16}{:>8}{:>12}  {}",
                header[0],
                header[1],
                header[2],
                header[3..].join("  ")
            )?;
            writeln!(out, "{}", "─".repeat(52))?;
            for summary in summaries {
                let counts: Vec<String> = Element::ALL
                    .iter()
                    .map(|element| {
                        let width = element.arabic().chars().count();
                        format!("{:>width$}", summary.elements.get(*element))
                    })
                    .collect();
                writeln!(
                    out,
                    "{:<16}{:>8}{:>12}  {}",
                    summary.word,
                    summary.total,
                    summary.unique_letters,
                    counts.join("  ")
                )?;
            }
            Ok(())
        }
    }
}

fn output_raw_table_human<W: Write>(out: &mut W, table: &RawTable) -> Result<()> {
    writeln!(out, "{}", table.headers.join("\t"))?;
    for row in &table.rows {
        writeln!(out, "{}", row.join("\t"))?;
    }
    Ok(())
}

/// Output a triad breakdown and, when requested, the triad reference table.
pub fn output_triad<W: Write>(
    out: &mut W,
    analysis: &TriadAnalysis,
    tables: &ReferenceTables,
    show_table: bool,
    options: OutputOptions,
) -> Result<()> {
    let available = tables.triads().is_some();
    match options.format {
        OutputFormat::Json => {
            let report = TriadReport {
                available,
                analysis,
                table: if show_table { tables.raw_triads() } else { None },
            };
            output_json(out, &report, options)
        }
        OutputFormat::Csv => write_triad_csv(&analysis.rows, out),
        OutputFormat::Human => {
            writeln!(out, "Text (normalized): {}", analysis.normalized)?;
            writeln!(out)?;
            if !available {
                writeln!(out, "{NO_TRIAD_TABLE}")?;
            } else if analysis.is_empty() {
                writeln!(out, "{NO_LETTERS}")?;
            } else {
                writeln!(
                    out,
                    "{:<10}{:>8}{:>8}{:>8}{:>8}",
                    "letter", "روح", "عقل", "نفس", "sum"
                )?;
                writeln!(out, "{}", "─".repeat(42))?;
                for row in &analysis.rows {
                    writeln!(
                        out,
                        "{:<10}{:>8}{:>8}{:>8}{:>8}",
                        row.label.to_string(),
                        row.spirit,
                        row.mind,
                        row.soul,
                        row.sum
                    )?;
                }
            }
            if show_table {
                writeln!(out)?;
                match tables.raw_triads() {
                    Some(raw) => output_raw_table_human(out, raw)?,
                    None => writeln!(out, "{NO_TRIAD_TABLE}")?,
                }
            }
            Ok(())
        }
    }
}

/// Provenance of the three loaded tables.
pub fn table_infos(tables: &ReferenceTables) -> Vec<TableInfo> {
    let origins = tables.origins();
    vec![
        TableInfo {
            name: "values".to_string(),
            origin: origins.values.clone(),
            entries: tables.values().len(),
        },
        TableInfo {
            name: "elements".to_string(),
            origin: origins.elements.clone(),
            entries: tables.elements().len(),
        },
        TableInfo {
            name: "triads".to_string(),
            origin: origins.triads.clone(),
            entries: tables.triads().map_or(0, |t| t.len()),
        },
    ]
}

/// Output table provenance.
pub fn output_tables<W: Write>(
    out: &mut W,
    tables: &ReferenceTables,
    options: OutputOptions,
) -> Result<()> {
    let infos = table_infos(tables);
    match options.format {
        OutputFormat::Json => output_json(out, &infos, options),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            writer.write_record(["table", "origin", "entries"])?;
            for info in &infos {
                writer.write_record([
                    info.name.clone(),
                    info.origin.to_string(),
                    info.entries.to_string(),
                ])?;
            }
            writer.flush()?;
            Ok(())
        }
        OutputFormat::Human => {
            writeln!(out, "Reference Tables:")?;
            writeln!(out, "═════════════════")?;
            for info in &infos {
                writeln!(out, "{:<10}{:>6} entries  ({})", info.name, info.entries, info.origin)?;
            }
            Ok(())
        }
    }
}
