//! Report rendering and output path generation
//!
//! Renders a [`CorpusProfile`](crate::profile::CorpusProfile) into any
//! writable sink, as plain text or JSON. Callers own the sink — stdout, a
//! file, or an in-memory buffer all work — and anything beyond writing the
//! report (moving it to remote storage, say) stays outside this crate.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::profile::{ClassProfile, CorpusProfile};
use crate::ranker::RankedEntry;

const RULE: &str = "---------------------------------------------------------------------------------------------";

/// Render the full text report for a corpus.
///
/// `source` labels the report header, usually the input file name.
pub fn write_text_report<W: Write>(out: &mut W, profile: &CorpusProfile, source: &str) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "Output for: {source}")?;
    write_class_report(out, &profile.words)?;
    write_class_report(out, &profile.letters)?;
    writeln!(out, "{RULE}")?;
    Ok(())
}

/// Render the profile as pretty-printed JSON.
pub fn write_json_report<W: Write>(out: &mut W, profile: &CorpusProfile) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, profile)?;
    writeln!(out)
}

fn write_class_report<W: Write>(out: &mut W, class: &ClassProfile) -> io::Result<()> {
    let label = class.class.plural();
    writeln!(out, "{RULE}")?;
    writeln!(out, "Total number of {label}: {}", class.total)?;
    writeln!(out, "Total number of distinct {label}: {}", class.distinct)?;
    writeln!(out, "Popular {label} threshold: {}", class.thresholds.popular)?;
    writeln!(out, "Common {label} left threshold: {}", class.thresholds.common_left)?;
    writeln!(out, "Common {label} right threshold: {}", class.thresholds.common_right)?;
    writeln!(out, "Rare {label} threshold: {}", class.thresholds.rare)?;

    let column = class.class.singular();
    write_band_table(out, &title_case(&format!("popular {label}")), &class.bands.popular, column)?;
    write_band_table(out, &title_case(&format!("common {label}")), &class.bands.common, column)?;
    write_band_table(out, &title_case(&format!("rare {label}")), &class.bands.rare, column)?;
    Ok(())
}

/// Render one band as an aligned table with Rank/token/Frequency columns.
fn write_band_table<W: Write>(
    out: &mut W,
    title: &str,
    entries: &[RankedEntry],
    column: &str,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{title}")?;

    let rank_width = column_width("Rank", entries.iter().map(|e| digits(e.rank as u64)));
    let token_width = column_width(column, entries.iter().map(|e| e.token.len()));
    let freq_width = column_width("Frequency", entries.iter().map(|e| digits(e.frequency)));

    let divider = format!(
        "+-{}-+-{}-+-{}-+",
        "-".repeat(rank_width),
        "-".repeat(token_width),
        "-".repeat(freq_width)
    );

    writeln!(out, "{divider}")?;
    writeln!(
        out,
        "| {:>rank_width$} | {:<token_width$} | {:>freq_width$} |",
        "Rank", column, "Frequency"
    )?;
    writeln!(out, "{divider}")?;
    for entry in entries {
        writeln!(
            out,
            "| {:>rank_width$} | {:<token_width$} | {:>freq_width$} |",
            entry.rank, entry.token, entry.frequency
        )?;
    }
    writeln!(out, "{divider}")?;
    Ok(())
}

fn column_width(header: &str, contents: impl Iterator<Item = usize>) -> usize {
    contents.chain([header.len()]).max().unwrap_or(0)
}

fn digits(value: u64) -> usize {
    value.to_string().len()
}

fn title_case(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Conventional file name for a written report: `output-<input stem>.txt`.
pub fn report_file_name(input: &Path) -> String {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("corpus");
    format!("output-{stem}.txt")
}

/// Decide where a written report should land.
///
/// Explicit file paths win. Directory targets (trailing slash or an
/// existing directory) get the conventional report name inside the
/// directory.
pub fn resolve_output_path(input: &Path, output_arg: &Path) -> PathBuf {
    let is_dir = output_arg.as_os_str().to_string_lossy().ends_with('/') || output_arg.is_dir();
    if is_dir {
        output_arg.join(report_file_name(input))
    } else {
        output_arg.to_path_buf()
    }
}

/// Open a report file for writing, creating parent directories as needed.
pub fn create_report_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    File::create(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{profile_corpus, TokenRules};
    use crate::thresholds::BandFractions;

    fn sample_profile() -> CorpusProfile {
        profile_corpus(
            ["The cat sat. The CAT sat!!", "A dog ran."],
            &TokenRules::default(),
            &BandFractions::default(),
        )
    }

    #[test]
    fn test_text_report_structure() {
        let mut out = Vec::new();
        write_text_report(&mut out, &sample_profile(), "sample.txt").unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Output for: sample.txt"));
        assert!(text.contains("Total number of words: 8"));
        assert!(text.contains("Total number of distinct words: 5"));
        assert!(text.contains("Popular Words"));
        assert!(text.contains("Common Letters"));
        assert!(text.contains("Rare Letters"));
    }

    #[test]
    fn test_text_report_table_rows() {
        let mut out = Vec::new();
        write_text_report(&mut out, &sample_profile(), "sample.txt").unwrap();
        let text = String::from_utf8(out).unwrap();

        // Each table carries the column headers, rows align within pipes
        assert!(text.contains("| Rank |"));
        assert!(text.contains("| Frequency |"));
        assert!(text.lines().any(|l| l.starts_with("| ") && l.contains(" cat")));
    }

    #[test]
    fn test_text_report_empty_corpus() {
        let profile = profile_corpus(
            Vec::<String>::new(),
            &TokenRules::default(),
            &BandFractions::default(),
        );
        let mut out = Vec::new();
        write_text_report(&mut out, &profile, "empty.txt").unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Total number of words: 0"));
        assert!(text.contains("Total number of distinct letters: 0"));
    }

    #[test]
    fn test_json_report_is_valid_json() {
        let mut out = Vec::new();
        write_json_report(&mut out, &sample_profile()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["words"]["total"], 8);
        assert_eq!(value["words"]["class"], "words");
        assert!(value["letters"]["bands"]["popular"].is_array());
    }

    #[test]
    fn test_report_file_name() {
        assert_eq!(report_file_name(Path::new("war-and-peace.txt")), "output-war-and-peace.txt");
        assert_eq!(report_file_name(Path::new("data/sample.txt")), "output-sample.txt");
    }

    #[test]
    fn test_resolve_output_path_explicit_file() {
        let resolved = resolve_output_path(Path::new("in.txt"), Path::new("report.txt"));
        assert_eq!(resolved, PathBuf::from("report.txt"));
    }

    #[test]
    fn test_resolve_output_path_directory() {
        let resolved = resolve_output_path(Path::new("in.txt"), Path::new("reports/"));
        assert_eq!(resolved, PathBuf::from("reports/output-in.txt"));
    }

    #[test]
    fn test_create_report_file_makes_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deep/report.txt");
        let mut file = create_report_file(&path).unwrap();
        file.write_all(b"ok").unwrap();
        assert!(path.exists());
    }
}
