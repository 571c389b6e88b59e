//! Question file writing
//!
//! Produces the same layout the importer reads, so an exported file can be
//! imported into another course unchanged.

use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::types::{Answer, AnswerOption, Question};
use crate::error::Result;

/// Optional `credits` block at the top of an exported file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credits {
    pub generator: String,
    pub author: Option<String>,
    pub date: DateTime<Utc>,
}

impl Credits {
    /// Credits naming this library as generator, dated now.
    #[must_use]
    pub fn now(author: Option<String>) -> Self {
        Self {
            generator: format!("swadcore {}", crate::VERSION),
            author,
            date: Utc::now(),
        }
    }
}

/// Write `questions` to `path`.
pub fn write_questions<'a, P, I>(path: P, questions: I, credits: Option<&Credits>) -> Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a Question>,
{
    let xml = export_questions(questions, credits)?;
    fs::write(path, xml)?;
    Ok(())
}

/// Serialize `questions` as a question file.
pub fn export_questions<'a, I>(questions: I, credits: Option<&Credits>) -> Result<String>
where
    I: IntoIterator<Item = &'a Question>,
{
    let mut output = Vec::new();
    let mut writer = Writer::new_with_indent(&mut output, b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("test")))?;

    if let Some(credits) = credits {
        writer.write_event(Event::Start(BytesStart::new("credits")))?;
        write_plain(&mut writer, "generator", &credits.generator)?;
        if let Some(author) = &credits.author {
            write_plain(&mut writer, "author", author)?;
        }
        write_plain(&mut writer, "date", &credits.date.timestamp().to_string())?;
        writer.write_event(Event::End(BytesEnd::new("credits")))?;
    }

    let mut count = 0usize;
    for question in questions {
        write_question(&mut writer, question)?;
        count += 1;
    }

    writer.write_event(Event::End(BytesEnd::new("test")))?;
    output.push(b'\n');
    tracing::debug!("exported {count} questions");

    Ok(String::from_utf8(output)?)
}

fn write_question<W: Write>(writer: &mut Writer<W>, question: &Question) -> Result<()> {
    let mut start = BytesStart::new("question");
    start.push_attribute(("type", question.answer_type().xml_name()));
    writer.write_event(Event::Start(start))?;

    writer.write_event(Event::Start(BytesStart::new("tags")))?;
    for tag in &question.tags {
        write_html(writer, "tag", tag)?;
    }
    writer.write_event(Event::End(BytesEnd::new("tags")))?;

    write_html(writer, "stem", &question.stem)?;
    if let Some(feedback) = &question.feedback {
        write_html(writer, "feedback", feedback)?;
    }

    match &question.answer {
        Answer::Int { value } => write_plain(writer, "answer", &value.to_string())?,
        Answer::Float { lower, upper } => {
            writer.write_event(Event::Start(BytesStart::new("answer")))?;
            write_plain(writer, "lower", &lower.to_string())?;
            write_plain(writer, "upper", &upper.to_string())?;
            writer.write_event(Event::End(BytesEnd::new("answer")))?;
        }
        Answer::TrueFalse { value } => {
            write_plain(writer, "answer", if *value { "true" } else { "false" })?;
        }
        Answer::UniqueChoice { shuffle, options } | Answer::MultipleChoice { shuffle, options } => {
            let mut start = BytesStart::new("answer");
            start.push_attribute(("shuffle", yes_no(*shuffle)));
            writer.write_event(Event::Start(start))?;
            for option in options {
                write_option(writer, option, true)?;
            }
            writer.write_event(Event::End(BytesEnd::new("answer")))?;
        }
        Answer::Text { options } => {
            writer.write_event(Event::Start(BytesStart::new("answer")))?;
            for option in options {
                write_option(writer, option, false)?;
            }
            writer.write_event(Event::End(BytesEnd::new("answer")))?;
        }
    }

    writer.write_event(Event::End(BytesEnd::new("question")))?;
    Ok(())
}

fn write_option<W: Write>(writer: &mut Writer<W>, option: &AnswerOption, with_correct: bool) -> Result<()> {
    let mut start = BytesStart::new("option");
    if with_correct {
        start.push_attribute(("correct", yes_no(option.correct)));
    }
    writer.write_event(Event::Start(start))?;
    write_html(writer, "text", &option.text)?;
    if let Some(feedback) = &option.feedback {
        write_html(writer, "feedback", feedback)?;
    }
    writer.write_event(Event::End(BytesEnd::new("option")))?;
    Ok(())
}

/// Element whose content is stored HTML, written as is.
fn write_html<W: Write>(writer: &mut Writer<W>, tag: &str, html: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::from_escaped(html)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

fn write_plain<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::import::{ImportLimits, read_document};
    use crate::question::validate::validate;
    use crate::xml::parse_str;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn questions() -> Vec<Question> {
        vec![
            Question {
                tags: vec!["math".to_string(), "a &amp; b".to_string()],
                stem: "Is 1 &lt; 2?".to_string(),
                feedback: Some("Obviously.".to_string()),
                answer: Answer::TrueFalse { value: true },
            },
            Question {
                tags: vec!["math".to_string()],
                stem: "Ratio?".to_string(),
                feedback: None,
                answer: Answer::Float { lower: 0.1, upper: 1e-7 + 0.1 },
            },
            Question {
                tags: vec!["geo".to_string()],
                stem: "Capitals".to_string(),
                feedback: None,
                answer: Answer::MultipleChoice {
                    shuffle: true,
                    options: vec![
                        AnswerOption::new("Paris", true).with_feedback("France"),
                        AnswerOption::new("Porto", false),
                        AnswerOption::new("Rome", true),
                    ],
                },
            },
            Question {
                tags: vec!["geo".to_string()],
                stem: "Capital of Spain".to_string(),
                feedback: None,
                answer: Answer::Text {
                    options: vec![AnswerOption::new("Madrid", true)],
                },
            },
            Question {
                tags: vec!["math".to_string()],
                stem: "6 * 7".to_string(),
                feedback: None,
                answer: Answer::Int { value: -42 },
            },
        ]
    }

    #[test]
    fn test_layout() {
        let question = &questions()[0];
        let credits = Credits {
            generator: "swadcore test".to_string(),
            author: Some("Ana".to_string()),
            date: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        };
        let xml = export_questions([question], Some(&credits)).unwrap();
        let expected = "\
<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<test>
  <credits>
    <generator>swadcore test</generator>
    <author>Ana</author>
    <date>1700000000</date>
  </credits>
  <question type=\"TF\">
    <tags>
      <tag>math</tag>
      <tag>a &amp; b</tag>
    </tags>
    <stem>Is 1 &lt; 2?</stem>
    <feedback>Obviously.</feedback>
    <answer>true</answer>
  </question>
</test>
";
        assert_eq!(xml, expected);
    }

    #[test]
    fn test_export_then_import_round_trip() {
        let original = questions();
        let xml = export_questions(&original, Some(&Credits::now(None))).unwrap();
        let root = parse_str(&xml).unwrap();
        let drafts = read_document(&root, ImportLimits::default()).unwrap();
        let reimported: Vec<Question> = drafts.iter().map(|d| validate(d).unwrap()).collect();
        assert_eq!(reimported, original);
    }
}
