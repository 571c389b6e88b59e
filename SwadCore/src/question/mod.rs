//! Test questions
//!
//! Questions travel between courses as XML files: [`import`] reads a parsed
//! file into drafts, [`validate`] checks them, [`bank`] stores the valid
//! ones and [`export`] writes them back out. [`import_document`] ties the
//! steps together the way an upload is processed.

pub mod bank;
pub mod batch;
pub mod export;
pub mod handlers;
pub mod import;
pub mod types;
pub mod validate;

use serde::Serialize;

pub use bank::{QuestionBank, StoredQuestion};
pub use batch::{FileReport, FileSummary, find_question_files, validate_files};
pub use export::{Credits, export_questions, write_questions};
pub use handlers::{ACCEPTED_MIME_TYPES, QuestionHandlers};
pub use import::{
    DraftAnswer, DraftOption, ImportError, ImportLimits, MAX_OPTIONS_PER_QUESTION, MAX_TAGS_PER_QUESTION,
    QuestionDraft, read_document,
};
pub use types::{Answer, AnswerOption, AnswerType, Question};
pub use validate::{InvalidQuestion, validate};

use crate::xml::XmlElement;

/// What happened to one question of an imported file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ImportOutcome {
    Imported { code: u64 },
    /// An equal question was already stored under `code`.
    AlreadyExists { code: u64 },
    Invalid { reason: InvalidQuestion },
}

/// One row of the import report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportRow {
    pub draft: QuestionDraft,
    pub outcome: ImportOutcome,
}

/// Result of importing a whole file.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportReport {
    pub rows: Vec<ImportRow>,
}

impl ImportReport {
    #[must_use]
    pub fn imported(&self) -> usize {
        self.count(|outcome| matches!(outcome, ImportOutcome::Imported { .. }))
    }

    #[must_use]
    pub fn existing(&self) -> usize {
        self.count(|outcome| matches!(outcome, ImportOutcome::AlreadyExists { .. }))
    }

    #[must_use]
    pub fn invalid(&self) -> usize {
        self.count(|outcome| matches!(outcome, ImportOutcome::Invalid { .. }))
    }

    fn count(&self, pred: impl Fn(&ImportOutcome) -> bool) -> usize {
        self.rows.iter().filter(|row| pred(&row.outcome)).count()
    }
}

/// Import every question of a parsed file into `bank`.
///
/// The file is read completely before anything is stored, so a fatal error
/// leaves the bank untouched. Invalid questions and duplicates are reported
/// and skipped. Two equal questions in the same file are stored once.
pub fn import_document(
    root: &XmlElement,
    bank: &mut QuestionBank,
    limits: ImportLimits,
) -> Result<ImportReport, ImportError> {
    let drafts = read_document(root, limits)?;

    let rows: Vec<ImportRow> = drafts
        .into_iter()
        .map(|draft| {
            let outcome = match validate(&draft) {
                Err(reason) => ImportOutcome::Invalid { reason },
                Ok(question) => match bank.find_duplicate(&question) {
                    Some(code) => ImportOutcome::AlreadyExists { code },
                    None => ImportOutcome::Imported {
                        code: bank.insert(question),
                    },
                },
            };
            ImportRow { draft, outcome }
        })
        .collect();

    let report = ImportReport { rows };
    tracing::info!(
        "imported {} questions ({} already present, {} invalid)",
        report.imported(),
        report.existing(),
        report.invalid()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse_str;
    use pretty_assertions::assert_eq;

    const FILE: &str = "<test>\
        <question type=\"int\"><tags><tag>math</tag></tags><stem>6*7</stem><answer>42</answer></question>\
        <question type=\"TF\"><tags><tag>math</tag></tags><stem></stem><answer>T</answer></question>\
        <question type=\"int\"><tags><tag>other</tag></tags><stem>6*7</stem><answer>42</answer></question>\
        </test>";

    #[test]
    fn test_import_document() {
        let mut bank = QuestionBank::new();
        let report = import_document(&parse_str(FILE).unwrap(), &mut bank, ImportLimits::default()).unwrap();

        let outcomes: Vec<_> = report.rows.iter().map(|row| row.outcome.clone()).collect();
        assert_eq!(
            outcomes,
            vec![
                ImportOutcome::Imported { code: 0 },
                ImportOutcome::Invalid {
                    reason: InvalidQuestion::EmptyStem,
                },
                ImportOutcome::AlreadyExists { code: 0 },
            ]
        );
        assert_eq!((report.imported(), report.existing(), report.invalid()), (1, 1, 1));
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn test_second_import_finds_everything() {
        let root = parse_str(FILE).unwrap();
        let mut bank = QuestionBank::new();
        import_document(&root, &mut bank, ImportLimits::default()).unwrap();
        let report = import_document(&root, &mut bank, ImportLimits::default()).unwrap();
        assert_eq!(report.imported(), 0);
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn test_fatal_error_leaves_bank_untouched() {
        let source = "<test>\
            <question type=\"int\"><tags><tag>math</tag></tags><stem>1+1</stem><answer>2</answer></question>\
            <question type=\"essay\"/></test>";
        let mut bank = QuestionBank::new();
        let err = import_document(&parse_str(source).unwrap(), &mut bank, ImportLimits::default()).unwrap_err();
        assert!(matches!(err, ImportError::UnknownType { index: 2, .. }));
        assert!(bank.is_empty());
    }
}
