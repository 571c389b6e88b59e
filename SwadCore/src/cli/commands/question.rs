//! CLI commands for test questions

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::progress::{CHECK, CROSS, DISK, DOCUMENT, LOOKING_GLASS, print_done, print_step, simple_bar};
use crate::config::Config;
use crate::question::{
    Credits, ImportOutcome, QuestionBank, StoredQuestion, find_question_files, import_document,
    validate_files, write_questions,
};
use crate::xml;

/// The bank file to use: the one given on the command line, else the
/// configured one.
pub(crate) fn bank_path(config: &Config, bank: Option<&Path>) -> anyhow::Result<PathBuf> {
    match bank {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(config.bank.resolved_path()?),
    }
}

/// Shorten a stem for one-line listings.
fn summary_line(text: &str, width: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= width {
        flat
    } else {
        let cut: String = flat.chars().take(width.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}

pub fn import(
    config: &Config,
    source: &Path,
    bank: Option<&Path>,
    dry_run: bool,
    format: &str,
) -> anyhow::Result<()> {
    let bank_path = bank_path(config, bank)?;
    let mut bank = QuestionBank::load(&bank_path)?;

    let root = xml::parse_file(source)?;
    let report = import_document(&root, &mut bank, config.import.limits())?;

    if !dry_run && report.imported() > 0 {
        bank.save(&bank_path)?;
        tracing::info!("saved {} questions to {}", bank.len(), bank_path.display());
    }

    if format == "json" {
        let output = serde_json::json!({
            "source": source,
            "bank": bank_path,
            "dry_run": dry_run,
            "imported": report.imported(),
            "existing": report.existing(),
            "invalid": report.invalid(),
            "rows": report.rows,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for row in &report.rows {
        let status = match &row.outcome {
            ImportOutcome::Imported { code } => format!("imported as {code}"),
            ImportOutcome::AlreadyExists { code } => format!("already exists as {code}"),
            ImportOutcome::Invalid { reason } => format!("not valid: {reason}"),
        };
        println!(
            "{:>3}  {:<14} {:<40} {status}",
            row.draft.index,
            row.draft.answer_type.xml_name(),
            summary_line(&row.draft.stem, 40)
        );
    }
    println!(
        "\n{} questions imported, {} already existed, {} not valid.",
        report.imported(),
        report.existing(),
        report.invalid()
    );
    if dry_run {
        println!("(dry run, bank not saved)");
    }
    Ok(())
}

pub fn validate(config: &Config, sources: &[PathBuf], format: &str, no_progress: bool) -> anyhow::Result<()> {
    let start = Instant::now();
    let text = format != "json";

    if text && !no_progress {
        print_step(1, 2, LOOKING_GLASS, "Finding question files...");
    }
    let mut files = Vec::new();
    for source in sources {
        if source.is_dir() {
            files.extend(find_question_files(source));
        } else {
            files.push(source.clone());
        }
    }
    if files.is_empty() {
        anyhow::bail!("no question files found");
    }

    if text && !no_progress {
        print_step(2, 2, DOCUMENT, &format!("Validating {} files...", files.len()));
    }
    let pb = (text && !no_progress).then(|| simple_bar(files.len() as u64, "Validating"));
    let reports = validate_files(&files, config.import.limits(), |done, _| {
        if let Some(pb) = &pb {
            pb.set_position(done as u64);
        }
    });
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let failed = reports.iter().filter(|r| !r.is_clean()).count();

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            match &report.result {
                Ok(summary) if summary.invalid.is_empty() => {
                    println!("{CHECK}{} ({} questions)", report.path.display(), summary.questions);
                }
                Ok(summary) => {
                    println!(
                        "{CROSS}{} ({} of {} questions not valid)",
                        report.path.display(),
                        summary.invalid.len(),
                        summary.questions
                    );
                    for (index, reason) in &summary.invalid {
                        println!("      question {index}: {reason}");
                    }
                }
                Err(err) => println!("{CROSS}{}: {err}", report.path.display()),
            }
        }
        if !no_progress {
            print_done(start.elapsed());
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} files have problems", reports.len());
    }
    Ok(())
}

pub fn export(
    config: &Config,
    destination: &Path,
    bank: Option<&Path>,
    tag: Option<&str>,
    author: Option<&str>,
) -> anyhow::Result<()> {
    let bank_path = bank_path(config, bank)?;
    let bank = QuestionBank::load(&bank_path)?;

    let selected: Vec<&StoredQuestion> = match tag {
        Some(tag) => bank.with_tag(tag).collect(),
        None => bank.iter().collect(),
    };
    if selected.is_empty() {
        anyhow::bail!("There are no test questions.");
    }

    let author = author.map(str::to_string).or_else(|| config.export.author.clone());
    let credits = Credits::now(author);
    write_questions(
        destination,
        selected.iter().map(|stored| &stored.question),
        Some(&credits),
    )?;

    println!("{DISK}Exported {} questions to {}", selected.len(), destination.display());
    Ok(())
}

pub fn list(config: &Config, bank: Option<&Path>, tag: Option<&str>, format: &str) -> anyhow::Result<()> {
    let bank_path = bank_path(config, bank)?;
    let bank = QuestionBank::load(&bank_path)?;

    let selected: Vec<&StoredQuestion> = match tag {
        Some(tag) => bank.with_tag(tag).collect(),
        None => bank.iter().collect(),
    };

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    if selected.is_empty() {
        println!("There are no test questions.");
        return Ok(());
    }
    for stored in &selected {
        println!(
            "{:>5}  {:<14} {:<50} [{}]",
            stored.code,
            stored.question.answer_type().xml_name(),
            summary_line(&stored.question.stem, 50),
            stored.question.tags.join(", ")
        );
    }
    println!("\n{} questions in {}", selected.len(), bank_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_line() {
        assert_eq!(summary_line("short", 10), "short");
        assert_eq!(summary_line("a  b\n c", 10), "a b c");
        assert_eq!(summary_line("abcdefghijkl", 8), "abcde...");
    }
}
