//! Batch validation of question files
//!
//! Checks every question file below a directory without touching any bank,
//! so a course's files can be vetted before they are uploaded.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use serde::Serialize;
use walkdir::WalkDir;

use super::import::{ImportLimits, read_document};
use super::validate::validate;
use crate::xml;

/// Per-file outcome of a batch run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    /// `Err` holds the fatal error that made the file unusable.
    pub result: Result<FileSummary, String>,
}

impl FileReport {
    /// Readable and every question valid.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.result
            .as_ref()
            .is_ok_and(|summary| summary.invalid.is_empty())
    }
}

/// Question counts for a readable file.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FileSummary {
    pub questions: usize,
    pub valid: usize,
    /// Question index and reason for each invalid question.
    pub invalid: Vec<(usize, String)>,
}

/// Find all .xml files in a directory recursively, sorted.
pub fn find_question_files<P: AsRef<Path>>(dir: P) -> Vec<PathBuf> {
    let mut files: Vec<_> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| {
            e.path().is_file()
                && e.path()
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
        })
        .map(|e| e.path().to_path_buf())
        .collect();

    files.sort();
    files
}

/// Validate `paths` in parallel.
///
/// `progress` is called once per finished file with the number of files done
/// so far and the file's path. Reports come back in the order of `paths`.
pub fn validate_files<F>(paths: &[PathBuf], limits: ImportLimits, progress: F) -> Vec<FileReport>
where
    F: Fn(usize, &Path) + Sync,
{
    let done = AtomicUsize::new(0);

    paths
        .par_iter()
        .map(|path| {
            let result = validate_file(path, limits);
            if let Err(err) = &result {
                tracing::warn!("{}: {err}", path.display());
            }
            let finished = done.fetch_add(1, Ordering::SeqCst) + 1;
            progress(finished, path);
            FileReport {
                path: path.clone(),
                result,
            }
        })
        .collect()
}

fn validate_file(path: &Path, limits: ImportLimits) -> Result<FileSummary, String> {
    let root = xml::parse_file(path).map_err(|e| e.to_string())?;
    let drafts = read_document(&root, limits).map_err(|e| e.to_string())?;

    let mut summary = FileSummary {
        questions: drafts.len(),
        ..FileSummary::default()
    };
    for draft in &drafts {
        match validate(draft) {
            Ok(_) => summary.valid += 1,
            Err(reason) => summary.invalid.push((draft.index, reason.to_string())),
        }
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_find_and_validate() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "good.xml",
            "<test><question type=\"TF\"><tags><tag>t</tag></tags><stem>S</stem><answer>true</answer></question></test>",
        );
        write(
            dir.path(),
            "sub/mixed.XML",
            "<test><question type=\"TF\"><tags><tag>t</tag></tags><stem>S</stem><answer>?</answer></question>\
             <question type=\"int\"><tags><tag>t</tag></tags><stem>S</stem><answer>3</answer></question></test>",
        );
        write(dir.path(), "broken.xml", "<test><question></test>");
        write(dir.path(), "notes.txt", "ignored");

        let files = find_question_files(dir.path());
        assert_eq!(files.len(), 3);

        let calls = AtomicUsize::new(0);
        let reports = validate_files(&files, ImportLimits::default(), |_, _| {
            calls.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(calls.load(Ordering::SeqCst), 3);

        let by_name = |name: &str| {
            reports
                .iter()
                .find(|r| r.path.file_name().is_some_and(|f| f == name))
                .unwrap()
        };
        assert!(by_name("good.xml").is_clean());
        assert!(by_name("broken.xml").result.is_err());

        let mixed = by_name("mixed.XML").result.as_ref().unwrap();
        assert_eq!(mixed.questions, 2);
        assert_eq!(mixed.valid, 1);
        assert_eq!(mixed.invalid, vec![(1, "You must select a T/F answer.".to_string())]);
    }
}
