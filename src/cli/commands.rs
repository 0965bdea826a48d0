//! Command implementations for the abjad CLI.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::sync::Arc;

use log::{debug, info};

use crate::analysis::analyzer::AbjadAnalyzer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::AbjadConfig;
use crate::error::Result;
use crate::export::write_summary_csv;
use crate::tables::ReferenceTables;

/// Execute a CLI command, writing results to stdout.
pub fn execute_command(args: AbjadArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let tables = ReferenceTables::load(&config);
    let analyzer = AbjadAnalyzer::new(Arc::new(tables));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_command(&args, &analyzer, &mut out)
}

/// Build the configuration from `--config` and `--data-dir`.
pub fn resolve_config(args: &AbjadArgs) -> Result<AbjadConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            AbjadConfig::from_file(path)?
        }
        None => AbjadConfig::default(),
    };
    if let Some(data_dir) = &args.data_dir {
        config = config.with_data_dir(data_dir);
    }
    config.validate()?;
    debug!("Configuration: {config:?}");
    Ok(config)
}

/// Run a parsed command against `analyzer`, writing to `out`.
pub fn run_command<W: Write>(
    args: &AbjadArgs,
    analyzer: &AbjadAnalyzer,
    out: &mut W,
) -> Result<()> {
    let options = OutputOptions {
        format: args.output_format,
        pretty: args.pretty,
    };
    match &args.command {
        Command::Word(word_args) => {
            let word = read_input(&word_args.word)?;
            output_breakdown(out, "Word", &analyzer.analyze_unique_value(&word), options)
        }
        Command::Text(text_args) => {
            let text = read_input(&text_args.text)?;
            if text_args.whole {
                output_breakdown(out, "Text", &analyzer.analyze_whole_text(&text), options)
            } else {
                output_summaries(out, &analyzer.analyze_text(&text), options)
            }
        }
        Command::Triad(triad_args) => {
            let text = read_input(&triad_args.text)?;
            let analysis = analyzer.analyze_triad(&text);
            output_triad(out, &analysis, analyzer.tables(), triad_args.show_table, options)
        }
        Command::Export(export_args) => {
            let text = read_input(&export_args.text)?;
            export(export_args, analyzer, &text, args.verbosity(), out)
        }
        Command::Tables => output_tables(out, analyzer.tables(), options),
    }
}

fn export<W: Write>(
    export_args: &ExportArgs,
    analyzer: &AbjadAnalyzer,
    text: &str,
    verbosity: u8,
    out: &mut W,
) -> Result<()> {
    let summaries = analyzer.analyze_text(text);
    match &export_args.output {
        Some(path) => {
            let writer = BufWriter::new(File::create(path)?);
            write_summary_csv(&summaries, writer)?;
            info!("Exported {} words to {}", summaries.len(), path.display());
            if verbosity > 0 {
                writeln!(out, "Exported {} words to {}", summaries.len(), path.display())?;
            }
            Ok(())
        }
        None => write_summary_csv(&summaries, out),
    }
}

/// The argument itself, or all of stdin when it is "-".
fn read_input(arg: &str) -> Result<String> {
    if arg == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(arg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn run(argv: &[&str]) -> String {
        let args = AbjadArgs::try_parse_from(argv).unwrap();
        let analyzer = AbjadAnalyzer::new(Arc::new(ReferenceTables::builtin()));
        let mut buffer = Vec::new();
        run_command(&args, &analyzer, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_word_command() {
        let text = run(&["abjad", "word", "اللّٰه"]);
        assert!(text.contains("Word (normalized): الله"));
        assert!(text.contains("Total Abjad value: 36"));
    }

    #[test]
    fn test_text_command_csv() {
        let text = run(&["abjad", "-f", "csv", "text", "محمد علي"]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "word,total,unique_len,نار,تراب,هواء,ماء");
        assert_eq!(lines[1], "محمد,52,3,1,0,0,2");
        assert_eq!(lines[2], "علي,110,3,0,1,0,2");
    }

    #[test]
    fn test_text_command_whole() {
        let text = run(&["abjad", "text", "--whole", "محمد علي"]);
        assert!(text.contains("Total Abjad value: 162"));
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("abjad_analysis.csv");
        let path_str = path.to_str().unwrap();
        run(&["abjad", "-q", "export", "علي", "-o", path_str]);
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "word,total,unique_len,نار,تراب,هواء,ماء\nعلي,110,3,0,1,0,2\n"
        );
    }

    #[test]
    fn test_resolve_config_data_dir_override() {
        let argv = ["abjad", "--data-dir", "/tmp/abjad", "tables"];
        let args = AbjadArgs::try_parse_from(argv).unwrap();
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.data_dir, std::path::PathBuf::from("/tmp/abjad"));
    }
}
