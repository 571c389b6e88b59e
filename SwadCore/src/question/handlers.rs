//! Request handlers for importing and listing questions
//!
//! [`QuestionHandlers::register`] attaches the post phases of
//! `ReqImpTstQst` (upload form), `ImpTstQst` (import an uploaded file) and
//! `LstTstQst` (list, optionally exporting) to a dispatcher. The bank is
//! shared between request threads behind a mutex.

use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;

use super::bank::QuestionBank;
use super::export::{Credits, write_questions};
use super::import::{DraftAnswer, ImportError, ImportLimits};
use super::{ImportOutcome, ImportReport, import_document};
use crate::action::{
    ActionId, AlertKind, DispatcherBuilder, Flow, HandlerError, HandlerResult, RequestContext,
};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::html::escape;
use crate::xml::{self, Escape, print_tree};

/// MIME types browsers report for XML uploads.
pub const ACCEPTED_MIME_TYPES: [&str; 5] = [
    "text/xml",
    "application/xml",
    "application/octet-stream",
    "application/octetstream",
    "application/octet",
];

/// Form field carrying the uploaded file.
pub const FILE_PARAM: &str = "XMLFile";

/// Parameter asking `LstTstQst` to also write an export file.
pub const CREATE_XML_PARAM: &str = "CreateXML";

/// State shared by the question handlers.
pub struct QuestionHandlers {
    bank: Arc<Mutex<QuestionBank>>,
    limits: ImportLimits,
    accepted_mime_types: Vec<String>,
    max_upload_bytes: usize,
    /// Saved after each import when set.
    bank_path: Option<PathBuf>,
    export_dir: PathBuf,
    author: Option<String>,
}

impl QuestionHandlers {
    /// Handlers over `bank`, configured from `config`. The bank is not saved
    /// unless [`with_bank_path`](Self::with_bank_path) is used.
    pub fn new(bank: Arc<Mutex<QuestionBank>>, config: &Config) -> Result<Self> {
        Ok(Self {
            bank,
            limits: config.import.limits(),
            accepted_mime_types: config.import.accepted_mime_types.clone(),
            max_upload_bytes: config.import.max_upload_bytes,
            bank_path: None,
            export_dir: config.export.resolved_dir()?,
            author: config.export.author.clone(),
        })
    }

    #[must_use]
    pub fn with_bank_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.bank_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = dir.into();
        self
    }

    #[must_use]
    pub fn bank(&self) -> &Arc<Mutex<QuestionBank>> {
        &self.bank
    }

    /// Attach the handlers to `builder`.
    pub fn register(self: Arc<Self>, builder: DispatcherBuilder) -> Result<DispatcherBuilder> {
        let form = Arc::clone(&self);
        let import = Arc::clone(&self);
        let list = self;
        builder
            .post(ActionId::ReqImpTstQst, move |ctx: &mut RequestContext| -> HandlerResult {
                form.show_import_form(ctx)
            })?
            .post(ActionId::ImpTstQst, move |ctx: &mut RequestContext| -> HandlerResult {
                import.import_upload(ctx)
            })?
            .post(ActionId::LstTstQst, move |ctx: &mut RequestContext| -> HandlerResult {
                list.list_questions(ctx)
            })
    }

    fn lock_bank(&self) -> std::result::Result<MutexGuard<'_, QuestionBank>, HandlerError> {
        self.bank
            .lock()
            .map_err(|_| HandlerError::Rejected("The question bank is unavailable.".to_string()))
    }

    fn show_import_form(&self, ctx: &mut RequestContext) -> HandlerResult {
        ctx.alert(
            AlertKind::Info,
            "You need an XML file containing a list of questions to import.",
        );
        let out = ctx.output_mut();
        let _ = write!(
            out,
            "<form method=\"post\" action=\"?act={}\" enctype=\"multipart/form-data\">\
             <label>XML file: <input type=\"file\" name=\"{FILE_PARAM}\" accept=\".xml\" /></label>\
             <button type=\"submit\">Import questions</button></form>",
            ActionId::ImpTstQst.descriptor().code
        );
        Ok(Flow::Continue)
    }

    fn import_upload(&self, ctx: &mut RequestContext) -> HandlerResult {
        let upload = ctx
            .take_upload()
            .ok_or_else(|| HandlerError::MissingParameter(FILE_PARAM.to_string()))?;

        let mime_type = upload.mime_type.trim().to_ascii_lowercase();
        if !self.accepted_mime_types.iter().any(|accepted| accepted.eq_ignore_ascii_case(&mime_type)) {
            return Err(import_failed(ImportError::WrongMimeType(upload.mime_type)));
        }
        if upload.bytes.len() > self.max_upload_bytes {
            return Err(import_failed(ImportError::FileTooLarge {
                size: upload.bytes.len(),
                limit: self.max_upload_bytes,
            }));
        }

        let root = xml::parse(&upload.bytes).map_err(|e| import_failed(e.into()))?;
        tracing::debug!("{}: {} elements", upload.file_name, root.descendant_count());

        // Import into a copy so a failed save leaves the shared bank as it was
        let report = {
            let mut bank = self.lock_bank()?;
            let mut staged = bank.clone();
            let report = import_document(&root, &mut staged, self.limits).map_err(import_failed)?;
            if let Some(path) = &self.bank_path {
                staged.save(path)?;
            }
            *bank = staged;
            report
        };

        let out = ctx.output_mut();
        out.push_str("<h2>XML file content</h2><div class=\"CENTER_MIDDLE\"><textarea cols=\"60\" rows=\"4\">");
        out.push_str(&print_tree(&root, Escape::Html));
        out.push_str("</textarea></div>");
        out.push_str("<h2>Imported questions</h2>");
        render_report(out, &report);

        let summary = format!(
            "{} questions imported, {} already existed, {} not valid.",
            report.imported(),
            report.existing(),
            report.invalid()
        );
        let kind = if report.invalid() > 0 {
            AlertKind::Warning
        } else {
            AlertKind::Success
        };
        ctx.alert(kind, summary);
        Ok(Flow::Continue)
    }

    fn list_questions(&self, ctx: &mut RequestContext) -> HandlerResult {
        let create_xml = ctx.param_flag(CREATE_XML_PARAM);
        let bank = self.lock_bank()?;

        if bank.is_empty() {
            ctx.alert(AlertKind::Info, "There are no test questions.");
            return Ok(Flow::Continue);
        }

        let mut html = String::from(
            "<table class=\"TST_QST\"><tr><th>Code</th><th>Tags</th><th>Type</th><th>Shuffle</th><th>Question</th></tr>",
        );
        for stored in bank.iter() {
            let question = &stored.question;
            let _ = write!(
                html,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                stored.code,
                question.tags.join("<br />"),
                question.answer_type(),
                if question.answer.shuffle() { "&check;" } else { "" },
                question.stem
            );
        }
        html.push_str("</table>");

        if create_xml {
            let file_name = format!("test_{}.xml", Utc::now().format("%Y%m%d%H%M%S%3f"));
            let path = self.export_dir.join(&file_name);
            std::fs::create_dir_all(&self.export_dir).map_err(Error::from)?;
            let credits = Credits::now(self.author.clone());
            write_questions(&path, bank.iter().map(|stored| &stored.question), Some(&credits))?;
            tracing::info!("exported {} questions to {}", bank.len(), path.display());

            let _ = write!(
                html,
                "<p><a href=\"{0}\" class=\"EXPORT_LINK\" download>{0}</a></p>",
                escape(&file_name)
            );
            ctx.alert(AlertKind::Success, "Questions exported to XML file.");
        }
        drop(bank);

        ctx.write(&html);
        Ok(Flow::Continue)
    }
}

fn import_failed(err: ImportError) -> HandlerError {
    HandlerError::Core(Error::Import(err))
}

fn render_report(out: &mut String, report: &ImportReport) {
    out.push_str(
        "<table class=\"TST_IMPORT\"><tr><th>No.</th><th>Tags</th><th>Type</th><th>Shuffle</th><th>Question</th><th>Result</th></tr>",
    );
    for row in &report.rows {
        let draft = &row.draft;
        let (class, result) = match &row.outcome {
            ImportOutcome::Imported { code } => ("DAT", format!("Imported as question {code}")),
            ImportOutcome::AlreadyExists { code } => ("DAT_LIGHT", format!("Already exists as question {code}")),
            ImportOutcome::Invalid { reason } => ("DAT_RED", escape(&reason.to_string())),
        };
        let _ = write!(
            out,
            "<tr class=\"{class}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}{}</td><td>{result}</td></tr>",
            draft.index,
            draft.tags.join("<br />"),
            draft.answer_type,
            if draft.shuffle { "&check;" } else { "" },
            draft.stem,
            answer_preview(&draft.answer)
        );
    }
    out.push_str("</table>");
}

fn answer_preview(answer: &DraftAnswer) -> String {
    let text = |value: &Option<String>| value.as_deref().map(escape).unwrap_or_default();
    match answer {
        DraftAnswer::Int { value } => format!("<div class=\"ANS\">{}</div>", text(value)),
        DraftAnswer::Float { lower, upper } => {
            format!("<div class=\"ANS\">[{}; {}]</div>", text(lower), text(upper))
        }
        DraftAnswer::TrueFalse { value } => {
            let value = match value {
                Some(true) => "T",
                Some(false) => "F",
                None => "",
            };
            format!("<div class=\"ANS\">{value}</div>")
        }
        DraftAnswer::Options { options } => {
            let mut html = String::from("<ol class=\"ANS\">");
            for option in options {
                let _ = write!(
                    html,
                    "<li class=\"{}\">{}</li>",
                    if option.correct { "ANS_OK" } else { "ANS_BAD" },
                    option.text
                );
            }
            html.push_str("</ol>");
            html
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Dispatcher, HierarchyLevel, ResponseKind, Role, Upload};
    use tempfile::TempDir;

    const FILE: &str = "<?xml version=\"1.0\"?>\n<test>\
        <question type=\"TF\"><tags><tag>logic</tag></tags><stem>1 &lt; 2</stem><answer>true</answer></question>\
        <question type=\"int\"><tags><tag>math</tag></tags><stem>6*7</stem><answer>seven</answer></question>\
        </test>";

    fn setup(dir: &TempDir) -> (Arc<Mutex<QuestionBank>>, Dispatcher) {
        let bank = Arc::new(Mutex::new(QuestionBank::new()));
        let handlers = QuestionHandlers::new(Arc::clone(&bank), &Config::default())
            .unwrap()
            .with_export_dir(dir.path());
        let dispatcher = Arc::new(handlers)
            .register(Dispatcher::builder())
            .unwrap()
            .build();
        (bank, dispatcher)
    }

    fn teacher() -> RequestContext {
        RequestContext::new(Role::Teacher, HierarchyLevel::Course)
    }

    #[test]
    fn test_import_upload() {
        let dir = TempDir::new().unwrap();
        let (bank, dispatcher) = setup(&dir);

        let ctx = teacher().with_upload(Upload::new("q.xml", "text/xml", FILE.as_bytes().to_vec()));
        let response = dispatcher.dispatch(ActionId::ImpTstQst, ctx);
        assert_eq!(response.status, 200);
        assert_eq!(response.kind, ResponseKind::Page);

        let text = response.text();
        assert!(text.contains("&lt;question type=&quot;TF&quot;&gt;"));
        assert!(text.contains("Imported as question 0"));
        assert!(text.contains("is not an integer value"));
        assert!(text.contains("1 questions imported, 0 already existed, 1 not valid."));
        assert_eq!(bank.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_wrong_mime_type_rejected() {
        let dir = TempDir::new().unwrap();
        let (bank, dispatcher) = setup(&dir);

        let ctx = teacher().with_upload(Upload::new("q.png", "image/png", FILE.as_bytes().to_vec()));
        let response = dispatcher.dispatch(ActionId::ImpTstQst, ctx);
        assert_eq!(response.status, 400);
        assert_eq!(response.kind, ResponseKind::Error);
        assert!(response.text().contains("not an XML file"));
        assert!(bank.lock().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_file_shows_error() {
        let dir = TempDir::new().unwrap();
        let (bank, dispatcher) = setup(&dir);

        let ctx = teacher().with_upload(Upload::new("q.xml", "text/xml", b"<test><a></b></test>".to_vec()));
        let response = dispatcher.dispatch(ActionId::ImpTstQst, ctx);
        assert_eq!(response.kind, ResponseKind::Error);
        assert!(response.text().contains("ALERT_ERROR"));
        assert!(bank.lock().unwrap().is_empty());
    }

    #[test]
    fn test_failed_save_keeps_bank_unchanged() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "file").unwrap();

        let bank = Arc::new(Mutex::new(QuestionBank::new()));
        let handlers = QuestionHandlers::new(Arc::clone(&bank), &Config::default())
            .unwrap()
            .with_bank_path(blocker.join("questions.json"))
            .with_export_dir(dir.path());
        let dispatcher = Arc::new(handlers)
            .register(Dispatcher::builder())
            .unwrap()
            .build();

        let file = "<test><question type=\"int\"><tags><tag>math</tag></tags>\
                    <stem>6*7</stem><answer>42</answer></question></test>";
        let ctx = teacher().with_upload(Upload::new("q.xml", "text/xml", file.as_bytes().to_vec()));
        let response = dispatcher.dispatch(ActionId::ImpTstQst, ctx);
        assert_eq!(response.status, 500);
        assert_eq!(response.kind, ResponseKind::Error);
        assert!(bank.lock().unwrap().is_empty());
    }

    #[test]
    fn test_missing_upload() {
        let dir = TempDir::new().unwrap();
        let (_, dispatcher) = setup(&dir);
        let response = dispatcher.dispatch(ActionId::ImpTstQst, teacher());
        assert_eq!(response.status, 400);
        assert!(response.text().contains("XMLFile"));
    }

    #[test]
    fn test_students_cannot_import() {
        let dir = TempDir::new().unwrap();
        let (_, dispatcher) = setup(&dir);
        let ctx = RequestContext::new(Role::Student, HierarchyLevel::Course)
            .with_upload(Upload::new("q.xml", "text/xml", FILE.as_bytes().to_vec()));
        let response = dispatcher.dispatch(ActionId::ImpTstQst, ctx);
        assert_eq!(response.kind, ResponseKind::NotAuthorized);
    }

    #[test]
    fn test_form() {
        let dir = TempDir::new().unwrap();
        let (_, dispatcher) = setup(&dir);
        let response = dispatcher.dispatch(ActionId::ReqImpTstQst, teacher());
        assert!(response.text().contains("action=\"?act=1008\""));
        assert!(response.text().contains("name=\"XMLFile\""));
    }

    #[test]
    fn test_list_and_export() {
        let dir = TempDir::new().unwrap();
        let (_, dispatcher) = setup(&dir);

        let empty = dispatcher.dispatch(ActionId::LstTstQst, teacher());
        assert!(empty.text().contains("There are no test questions."));

        let ctx = teacher().with_upload(Upload::new("q.xml", "application/xml", FILE.as_bytes().to_vec()));
        dispatcher.dispatch(ActionId::ImpTstQst, ctx);

        let response = dispatcher.dispatch(ActionId::LstTstQst, teacher().with_param(CREATE_XML_PARAM, "Y"));
        let text = response.text();
        assert!(text.contains("1 &lt; 2"));
        assert!(text.contains("EXPORT_LINK"));

        let exported: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(exported.len(), 1);
        let path = exported[0].as_ref().unwrap().path();
        let reparsed = xml::parse_file(&path).unwrap();
        let mut bank = QuestionBank::new();
        let report = import_document(&reparsed, &mut bank, ImportLimits::default()).unwrap();
        assert_eq!(report.imported(), 1);
    }
}
