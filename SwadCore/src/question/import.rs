//! Reading questions out of a parsed question file
//!
//! A question file looks like
//!
//! ```xml
//! <test>
//!   <question type="uniqueChoice">
//!     <tags><tag>geography</tag></tags>
//!     <stem>Capital of France?</stem>
//!     <feedback>Optional.</feedback>
//!     <answer shuffle="yes">
//!       <option correct="yes"><text>Paris</text><feedback>Right</feedback></option>
//!       <option correct="no"><text>Lyon</text></option>
//!     </answer>
//!   </question>
//! </test>
//! ```
//!
//! Conversion does not validate: it produces a [`QuestionDraft`] per
//! `question` element and leaves the checks to [`super::validate`]. Only
//! problems that make the whole file unusable are errors here.

use serde::Serialize;
use thiserror::Error;

use super::types::AnswerType;
use crate::html::text_to_html;
use crate::xml::{XmlElement, XmlError};

/// Most tags kept per question; later ones are ignored.
pub const MAX_TAGS_PER_QUESTION: usize = 5;

/// Most options kept per question; later ones are ignored.
pub const MAX_OPTIONS_PER_QUESTION: usize = 10;

/// Failure that abandons a whole import.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error(transparent)]
    Xml(#[from] XmlError),

    #[error("root element <test> not found")]
    MissingTestRoot,

    #[error("question {index} has no type attribute")]
    MissingType { index: usize },

    #[error("question {index}: wrong type of answer \"{value}\"")]
    UnknownType { index: usize, value: String },

    #[error("the file is not an XML file (MIME type {0})")]
    WrongMimeType(String),

    #[error("the file is {size} bytes, the limit is {limit}")]
    FileTooLarge { size: usize, limit: usize },
}

/// Caps applied while reading a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportLimits {
    pub max_tags: usize,
    pub max_options: usize,
}

impl Default for ImportLimits {
    fn default() -> Self {
        Self {
            max_tags: MAX_TAGS_PER_QUESTION,
            max_options: MAX_OPTIONS_PER_QUESTION,
        }
    }
}

/// One option as read from the file. Empty text is kept so validation can
/// spot gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftOption {
    pub text: String,
    pub feedback: Option<String>,
    pub correct: bool,
}

/// Answer fields as read, before any parsing of numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DraftAnswer {
    Int { value: Option<String> },
    Float { lower: Option<String>, upper: Option<String> },
    TrueFalse { value: Option<bool> },
    Options { options: Vec<DraftOption> },
}

/// A question as found in the file, possibly incomplete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionDraft {
    /// Position among the file's `question` elements, from 1.
    pub index: usize,
    pub answer_type: AnswerType,
    pub tags: Vec<String>,
    pub stem: String,
    pub feedback: Option<String>,
    pub shuffle: bool,
    pub answer: DraftAnswer,
}

/// The `test` element of a parsed file: the root's first child.
pub fn test_element(root: &XmlElement) -> Result<&XmlElement, ImportError> {
    root.children()
        .first()
        .filter(|elem| elem.tag() == Some("test"))
        .ok_or(ImportError::MissingTestRoot)
}

/// Convert every `question` element of a parsed file.
///
/// Fails on the first unusable question; nothing is returned in that case.
pub fn read_document(root: &XmlElement, limits: ImportLimits) -> Result<Vec<QuestionDraft>, ImportError> {
    let test = test_element(root)?;
    let drafts = test
        .children_named("question")
        .enumerate()
        .map(|(i, question)| read_question(question, i + 1, limits))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!("read {} questions", drafts.len());
    Ok(drafts)
}

/// Convert one `question` element.
pub fn read_question(
    question: &XmlElement,
    index: usize,
    limits: ImportLimits,
) -> Result<QuestionDraft, ImportError> {
    let type_attr = question
        .attribute("type")
        .ok_or(ImportError::MissingType { index })?;
    let answer_type =
        AnswerType::from_xml_name(type_attr.value()).ok_or_else(|| ImportError::UnknownType {
            index,
            value: type_attr.value().to_string(),
        })?;

    let tags = question
        .first_child("tags")
        .map(|tags| {
            tags.children_named("tag")
                .filter_map(XmlElement::content)
                .map(text_to_html)
                .filter(|tag| !tag.is_empty())
                .take(limits.max_tags)
                .collect()
        })
        .unwrap_or_default();

    let stem = html_content(question.first_child("stem")).unwrap_or_default();
    let feedback = html_content(question.first_child("feedback"));

    let answer_elem = question.first_child("answer");
    let shuffle = match answer_elem.and_then(|answer| answer.attribute("shuffle")) {
        Some(attribute) if answer_type.is_choice() => attribute.as_yes_no()?,
        _ => false,
    };
    let answer = read_answer(answer_type, answer_elem, limits)?;

    Ok(QuestionDraft {
        index,
        answer_type,
        tags,
        stem,
        feedback,
        shuffle,
        answer,
    })
}

fn read_answer(
    answer_type: AnswerType,
    answer: Option<&XmlElement>,
    limits: ImportLimits,
) -> Result<DraftAnswer, ImportError> {
    let raw = |elem: Option<&XmlElement>| elem.and_then(XmlElement::content).map(str::to_string);

    Ok(match answer_type {
        AnswerType::Int => DraftAnswer::Int { value: raw(answer) },
        AnswerType::Float => DraftAnswer::Float {
            lower: raw(answer.and_then(|a| a.first_child("lower"))),
            upper: raw(answer.and_then(|a| a.first_child("upper"))),
        },
        AnswerType::TrueFalse => DraftAnswer::TrueFalse {
            value: answer.and_then(XmlElement::content).and_then(parse_true_false),
        },
        AnswerType::UniqueChoice | AnswerType::MultipleChoice | AnswerType::Text => {
            let mut options = Vec::new();
            if let Some(answer) = answer {
                for option in answer.children_named("option").take(limits.max_options) {
                    options.push(read_option(answer_type, option)?);
                }
            }
            DraftAnswer::Options { options }
        }
    })
}

fn read_option(answer_type: AnswerType, option: &XmlElement) -> Result<DraftOption, ImportError> {
    let correct = if answer_type == AnswerType::Text {
        true
    } else {
        match option.attribute("correct") {
            Some(attribute) => attribute.as_yes_no()?,
            None => false,
        }
    };
    Ok(DraftOption {
        text: html_content(option.first_child("text")).unwrap_or_default(),
        feedback: html_content(option.first_child("feedback")),
        correct,
    })
}

fn html_content(elem: Option<&XmlElement>) -> Option<String> {
    elem.and_then(XmlElement::content)
        .map(text_to_html)
        .filter(|html| !html.is_empty())
}

/// `true`/`T`/`yes`/`Y` and `false`/`F`/`no`/`N`, in any case.
#[must_use]
pub fn parse_true_false(value: &str) -> Option<bool> {
    const TRUE: [&str; 4] = ["true", "t", "yes", "y"];
    const FALSE: [&str; 4] = ["false", "f", "no", "n"];
    if TRUE.iter().any(|t| value.eq_ignore_ascii_case(t)) {
        Some(true)
    } else if FALSE.iter().any(|f| value.eq_ignore_ascii_case(f)) {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::{XmlErrorKind, parse_str};
    use pretty_assertions::assert_eq;

    fn read(source: &str) -> Result<Vec<QuestionDraft>, ImportError> {
        read_document(&parse_str(source).unwrap(), ImportLimits::default())
    }

    #[test]
    fn test_unique_choice() {
        let drafts = read(
            "<test><question type=\"uniqueChoice\">\
             <tags><tag>geo</tag><tag></tag><tag>europe</tag></tags>\
             <stem>Capital of  France?</stem>\
             <answer shuffle=\"yes\">\
             <option correct=\"yes\"><text>Paris</text><feedback>Right</feedback></option>\
             <option correct=\"no\"><text>Lyon</text></option>\
             <option><text>Nice</text></option>\
             </answer></question></test>",
        )
        .unwrap();

        assert_eq!(drafts.len(), 1);
        let draft = &drafts[0];
        assert_eq!(draft.index, 1);
        assert_eq!(draft.answer_type, AnswerType::UniqueChoice);
        assert_eq!(draft.tags, vec!["geo", "europe"]);
        assert_eq!(draft.stem, "Capital of France?");
        assert!(draft.shuffle);
        assert_eq!(
            draft.answer,
            DraftAnswer::Options {
                options: vec![
                    DraftOption {
                        text: "Paris".to_string(),
                        feedback: Some("Right".to_string()),
                        correct: true,
                    },
                    DraftOption {
                        text: "Lyon".to_string(),
                        feedback: None,
                        correct: false,
                    },
                    DraftOption {
                        text: "Nice".to_string(),
                        feedback: None,
                        correct: false,
                    },
                ],
            }
        );
    }

    #[test]
    fn test_missing_test_root() {
        assert_eq!(read("<quiz></quiz>"), Err(ImportError::MissingTestRoot));
        assert_eq!(read(""), Err(ImportError::MissingTestRoot));
    }

    #[test]
    fn test_type_errors() {
        assert_eq!(
            read("<test><question><stem>x</stem></question></test>"),
            Err(ImportError::MissingType { index: 1 })
        );
        assert_eq!(
            read("<test><question type=\"TF\"/><question type=\"essay\"/></test>"),
            Err(ImportError::UnknownType {
                index: 2,
                value: "essay".to_string(),
            })
        );
    }

    #[test]
    fn test_type_is_case_insensitive() {
        let drafts = read("<test><question type=\"MULTIPLECHOICE\"/></test>").unwrap();
        assert_eq!(drafts[0].answer_type, AnswerType::MultipleChoice);
    }

    #[test]
    fn test_true_false_spellings() {
        for (text, expected) in [("true", Some(true)), ("Y", Some(true)), ("no", Some(false)), ("F", Some(false)), ("maybe", None)] {
            let source = format!("<test><question type=\"TF\"><answer>{text}</answer></question></test>");
            let drafts = read(&source).unwrap();
            assert_eq!(drafts[0].answer, DraftAnswer::TrueFalse { value: expected }, "{text}");
        }
    }

    #[test]
    fn test_float_bounds() {
        let drafts = read(
            "<test><question type=\"float\"><answer><upper>2.75</upper><lower>2.5</lower></answer></question></test>",
        )
        .unwrap();
        assert_eq!(
            drafts[0].answer,
            DraftAnswer::Float {
                lower: Some("2.5".to_string()),
                upper: Some("2.75".to_string()),
            }
        );
    }

    #[test]
    fn test_text_options_are_correct_and_shuffle_ignored() {
        let drafts = read(
            "<test><question type=\"text\"><answer shuffle=\"yes\">\
             <option correct=\"no\"><text>Madrid</text></option></answer></question></test>",
        )
        .unwrap();
        assert!(!drafts[0].shuffle);
        assert_eq!(
            drafts[0].answer,
            DraftAnswer::Options {
                options: vec![DraftOption {
                    text: "Madrid".to_string(),
                    feedback: None,
                    correct: true,
                }],
            }
        );
    }

    #[test]
    fn test_limits() {
        let options: String = (0..12).map(|i| format!("<option correct=\"yes\"><text>{i}</text></option>")).collect();
        let tags: String = (0..7).map(|i| format!("<tag>t{i}</tag>")).collect();
        let source = format!(
            "<test><question type=\"multipleChoice\"><tags>{tags}</tags><answer>{options}</answer></question></test>"
        );
        let drafts = read(&source).unwrap();
        assert_eq!(drafts[0].tags.len(), MAX_TAGS_PER_QUESTION);
        let DraftAnswer::Options { options } = &drafts[0].answer else {
            panic!("expected options");
        };
        assert_eq!(options.len(), MAX_OPTIONS_PER_QUESTION);
    }

    #[test]
    fn test_bad_yes_no_is_fatal() {
        let err = read(
            "<test><question type=\"uniqueChoice\"><answer>\
             <option correct=\"maybe\"><text>A</text></option></answer></question></test>",
        )
        .unwrap_err();
        let ImportError::Xml(err) = err else {
            panic!("expected XML error, got {err:?}");
        };
        assert_eq!(err.kind(), XmlErrorKind::InvalidBooleanAttribute);
    }

    #[test]
    fn test_text_becomes_html() {
        let drafts = read("<test><question type=\"int\"><stem>Is 2 &lt; 3 &amp;&amp; x</stem><answer> 7 </answer></question></test>").unwrap();
        // The parser keeps entity references as written
        assert_eq!(drafts[0].stem, "Is 2 &lt; 3 &amp;&amp; x");
        assert_eq!(drafts[0].answer, DraftAnswer::Int { value: Some("7".to_string()) });
    }

    #[test]
    fn test_non_question_children_skipped() {
        let drafts = read("<test><credits><author>me</author></credits><question type=\"TF\"/></test>").unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].index, 1);
    }
}
