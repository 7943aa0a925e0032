//! Printing recommendations in one-shot mode.

use crate::interactive::constants::NO_RESULTS_MESSAGE;
use crate::schemas::FacultyRecord;
use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use std::io::Write;
use std::time::Duration;

/// Bio characters shown per record unless full text is requested.
const BIO_PREVIEW_CHARS: usize = 150;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    #[value(name = "jsonl")]
    JsonL,
}

pub fn format_faculty_record(
    rank: usize,
    record: &FacultyRecord,
    use_color: bool,
    full_text: bool,
) -> String {
    let bio = if full_text {
        record.bio.trim().to_string()
    } else {
        preview(&record.bio, BIO_PREVIEW_CHARS)
    };
    let link = format!("View Profile → {}", record.profile_url);
    let score = record
        .score
        .map(|score| format!(" (score {score:.3})"))
        .unwrap_or_default();

    let mut out = if use_color {
        format!(
            "{:>2}. {} [{}]{}",
            rank,
            record.name.bright_green().bold(),
            record.specialization.bright_yellow(),
            score.dimmed()
        )
    } else {
        format!(
            "{:>2}. {} [{}]{}",
            rank, record.name, record.specialization, score
        )
    };

    if !bio.is_empty() {
        out.push_str("\n    ");
        out.push_str(&bio);
    }
    out.push_str("\n    ");
    if use_color {
        out.push_str(&link.bright_blue().to_string());
    } else {
        out.push_str(&link);
    }
    out
}

fn preview(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        flat
    } else {
        let cut: String = flat.chars().take(max_chars).collect();
        format!("{}...", cut.trim_end())
    }
}

pub struct OutputOptions {
    pub format: OutputFormat,
    pub use_color: bool,
    pub full_text: bool,
}

/// Write the ranked records for `query` to `out` in the requested format.
pub fn write_results<W: Write>(
    out: &mut W,
    query: &str,
    records: &[FacultyRecord],
    elapsed: Duration,
    options: &OutputOptions,
) -> Result<()> {
    match options.format {
        OutputFormat::Text => {
            if records.is_empty() {
                writeln!(out, "{NO_RESULTS_MESSAGE}")?;
            } else {
                writeln!(out, "Recommended Faculty for \"{query}\":\n")?;
                for (index, record) in records.iter().enumerate() {
                    writeln!(
                        out,
                        "{}\n",
                        format_faculty_record(index + 1, record, options.use_color, options.full_text)
                    )?;
                }
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "query": query,
                "results": records,
                "duration_ms": elapsed.as_millis(),
                "returned_count": records.len(),
            });
            serde_json::to_writer_pretty(&mut *out, &output)?;
            writeln!(out)?;
        }
        OutputFormat::JsonL => {
            for record in records {
                serde_json::to_writer(&mut *out, record)?;
                writeln!(out)?;
            }
            // Write metadata as last line
            let metadata = serde_json::json!({
                "_metadata": {
                    "query": query,
                    "duration_ms": elapsed.as_millis(),
                    "returned_count": records.len(),
                }
            });
            serde_json::to_writer(&mut *out, &metadata)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
