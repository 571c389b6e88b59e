use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use swadcore::action::{LegacyCode, legacy_code_status, permitted_in_tab};
use swadcore::config::Config;
use swadcore::prelude::*;
use swadcore::question::{Credits, ImportOutcome, export_questions};
use tempfile::tempdir;

const QUESTIONS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<test>
  <question type="int">
    <tags><tag>arithmetic</tag></tags>
    <stem>How much is 6 times 7?</stem>
    <answer>42</answer>
  </question>
  <question type="uniqueChoice">
    <tags><tag>geography</tag><tag>europe</tag></tags>
    <stem>Capital of Spain?</stem>
    <answer shuffle="yes">
      <option><text>Lisbon</text></option>
      <option correct="yes"><text>Madrid</text><feedback>Since 1561.</feedback></option>
    </answer>
  </question>
  <question type="TF">
    <tags><tag>logic</tag></tags>
    <stem></stem>
    <answer>T</answer>
  </question>
</test>
"#;

fn course_teacher() -> RequestContext {
    RequestContext::new(Role::Teacher, HierarchyLevel::Course)
}

fn question_dispatcher(bank: &Arc<Mutex<QuestionBank>>, config: &Config) -> Dispatcher {
    let handlers = Arc::new(QuestionHandlers::new(Arc::clone(bank), config).unwrap());
    handlers.register(Dispatcher::builder()).unwrap().build()
}

#[test]
fn test_persisted_codes() {
    let descriptor = lookup_descriptor(ActionId::SeeCty);
    assert_eq!(descriptor.code, 862);
    assert_eq!(descriptor.tab, Tab::System);
    assert_eq!(resolve_legacy_code(862), ActionId::SeeCty);
    assert_eq!(legacy_code_status(862), LegacyCode::Live(ActionId::SeeCty));

    // Retired and unassigned codes both fall back to the unknown action
    assert_eq!(legacy_code_status(1), LegacyCode::Retired);
    assert_eq!(resolve_legacy_code(1), ActionId::UNKNOWN);
    assert_eq!(legacy_code_status(-3), LegacyCode::OutOfRange);
    assert_eq!(legacy_code_status(1403), LegacyCode::OutOfRange);
    assert_eq!(resolve_legacy_code(i64::MAX), ActionId::UNKNOWN);

    assert_eq!("ActSeeCty".parse::<ActionId>().unwrap(), ActionId::SeeCty);
    assert!("NoSuchAction".parse::<ActionId>().is_err());
}

#[test]
fn test_permissions() {
    assert!(check_permission(ActionId::SeeCty, HierarchyLevel::System, Role::Guest));
    assert!(!check_permission(ActionId::EdiCty, HierarchyLevel::System, Role::Teacher));
    assert!(check_permission(ActionId::EdiCty, HierarchyLevel::System, Role::SystemAdmin));

    assert!(check_permission(ActionId::ImpTstQst, HierarchyLevel::Course, Role::Teacher));
    assert!(!check_permission(ActionId::ImpTstQst, HierarchyLevel::Course, Role::Student));
    // Outside a course nobody can import
    assert!(!check_permission(ActionId::ImpTstQst, HierarchyLevel::Degree, Role::Teacher));
    // A teacher of another course is not a teacher here
    assert!(!check_permission_in(
        ActionId::ImpTstQst,
        HierarchyLevel::Course,
        Membership::DontBelong,
        Role::Teacher
    ));

    assert!(
        permitted_in_tab(Tab::Assessment, HierarchyLevel::Course, Membership::Belong, Role::Teacher)
            .any(|action| action == ActionId::ImpTstQst)
    );
    assert!(
        !permitted_in_tab(Tab::Assessment, HierarchyLevel::Course, Membership::Belong, Role::Student)
            .any(|action| action == ActionId::ImpTstQst)
    );
}

#[test]
fn test_dispatch_outcomes() {
    let dispatcher = Dispatcher::builder()
        .post(ActionId::SeeCty, |ctx: &mut RequestContext| -> HandlerResult {
            ctx.write("<ul><li>Spain</li></ul>");
            Ok(Flow::Continue)
        })
        .unwrap()
        .post(ActionId::EdiCty, |_ctx: &mut RequestContext| -> HandlerResult {
            Err(HandlerError::Rejected("The country is in use.".to_string()))
        })
        .unwrap()
        .build();

    let ok = dispatcher.dispatch(
        resolve_legacy_code(862),
        RequestContext::new(Role::Guest, HierarchyLevel::System),
    );
    assert_eq!(ok.status, 200);
    assert_eq!(ok.kind, ResponseKind::Page);
    assert!(ok.text().contains("<ul><li>Spain</li></ul>"));

    let unknown = dispatcher.dispatch(resolve_legacy_code(1), course_teacher());
    assert_eq!(unknown.status, 404);

    let denied = dispatcher.dispatch(
        ActionId::EdiCty,
        RequestContext::new(Role::Teacher, HierarchyLevel::System),
    );
    assert_eq!(denied.status, 403);
    assert_eq!(denied.kind, ResponseKind::NotAuthorized);

    let failed = dispatcher.dispatch(
        ActionId::EdiCty,
        RequestContext::new(Role::SystemAdmin, HierarchyLevel::System),
    );
    assert_eq!(failed.status, 400);
    assert_eq!(failed.kind, ResponseKind::Error);
    assert!(failed.text().contains("The country is in use."));

    // An action with no handlers still renders its page
    let bare = dispatcher.dispatch(ActionId::ReqTst, course_teacher());
    assert_eq!(bare.status, 200);
}

#[test]
fn test_parse_and_print() {
    let root = xml::parse_str("<a x=\"1\">\n  hello  \n<b/><c>text</c></a>").unwrap();
    let a = &root.children()[0];
    assert_eq!(a.tag(), Some("a"));
    assert_eq!(a.content(), Some("hello"));
    assert_eq!(a.attribute("x").map(XmlAttribute::value), Some("1"));
    assert_eq!(a.children().len(), 2);

    assert_eq!(
        print_tree(&root, Escape::Plain),
        "<a x=\"1\">\nhello\n   <b>\n   </b>\n   <c>\n   text\n   </c>\n</a>\n"
    );
    assert!(print_tree(&root, Escape::Html).starts_with("&lt;a x=&quot;1&quot;&gt;"));

    assert!(xml::parse_str("<a><b></a>").is_err());
}

#[test]
fn test_import_export_round_trip() {
    let mut bank = QuestionBank::new();
    let root = xml::parse_str(QUESTIONS).unwrap();
    let report = import_document(&root, &mut bank, ImportLimits::default()).unwrap();

    assert_eq!(report.imported(), 2);
    assert_eq!(report.invalid(), 1);
    assert_eq!(bank.len(), 2);

    let credits = Credits::now(Some("Ana".to_string()));
    let exported = export_questions(bank.iter().map(|stored| &stored.question), Some(&credits)).unwrap();

    // Importing our own export into a fresh bank gives the same questions
    let mut copy = QuestionBank::new();
    let report = import_document(&xml::parse_str(&exported).unwrap(), &mut copy, ImportLimits::default()).unwrap();
    assert_eq!(report.imported(), 2);
    let original: Vec<_> = bank.iter().map(|stored| &stored.question).collect();
    let copied: Vec<_> = copy.iter().map(|stored| &stored.question).collect();
    assert_eq!(original, copied);

    // And importing it into the original bank finds only duplicates
    let report = import_document(&xml::parse_str(&exported).unwrap(), &mut bank, ImportLimits::default()).unwrap();
    assert_eq!(report.existing(), 2);
    assert_eq!(bank.len(), 2);
}

#[test]
fn test_import_through_dispatcher() {
    let dir = tempdir().unwrap();
    let mut config = Config::default();
    config.export.dir = Some(dir.path().to_string_lossy().into_owned());

    let bank = Arc::new(Mutex::new(QuestionBank::new()));
    let dispatcher = question_dispatcher(&bank, &config);

    let upload = Upload::new("questions.xml", "text/xml", QUESTIONS.as_bytes().to_vec());
    let response = dispatcher.dispatch(ActionId::ImpTstQst, course_teacher().with_upload(upload));
    assert_eq!(response.status, 200);
    let page = response.text();
    assert!(page.contains("2 questions imported, 0 already existed, 1 not valid."));
    assert!(page.contains("&lt;stem&gt;"));
    assert_eq!(bank.lock().unwrap().len(), 2);

    // Students may not import
    let upload = Upload::new("questions.xml", "text/xml", QUESTIONS.as_bytes().to_vec());
    let response = dispatcher.dispatch(
        ActionId::ImpTstQst,
        RequestContext::new(Role::Student, HierarchyLevel::Course).with_upload(upload),
    );
    assert_eq!(response.status, 403);
    assert_eq!(bank.lock().unwrap().len(), 2);

    // Listing with export writes a file that imports cleanly
    let response = dispatcher.dispatch(
        ActionId::LstTstQst,
        course_teacher().with_param("CreateXML", "Y"),
    );
    assert_eq!(response.status, 200);
    let exported: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(exported.len(), 1);

    let mut fresh = QuestionBank::new();
    let root = xml::parse_file(&exported[0]).unwrap();
    let report = import_document(&root, &mut fresh, ImportLimits::default()).unwrap();
    assert_eq!(report.imported(), 2);
    assert!(report.rows.iter().all(|row| matches!(row.outcome, ImportOutcome::Imported { .. })));
}

#[test]
fn test_rejected_upload_keeps_bank() {
    let config = Config::default();
    let bank = Arc::new(Mutex::new(QuestionBank::new()));
    let dispatcher = question_dispatcher(&bank, &config);

    let upload = Upload::new("questions.xml", "image/png", QUESTIONS.as_bytes().to_vec());
    let response = dispatcher.dispatch(ActionId::ImpTstQst, course_teacher().with_upload(upload));
    assert_eq!(response.status, 400);

    // A broken question aborts the whole file
    let broken = "<test><question type=\"int\"><tags><tag>a</tag></tags><stem>S</stem><answer>1</answer></question>\
                  <question type=\"essay\"><stem>S</stem></question></test>";
    let upload = Upload::new("questions.xml", "text/xml", broken.as_bytes().to_vec());
    let response = dispatcher.dispatch(ActionId::ImpTstQst, course_teacher().with_upload(upload));
    assert_eq!(response.status, 400);

    assert!(bank.lock().unwrap().is_empty());
}
