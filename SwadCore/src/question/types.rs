//! Question model
//!
//! Text fields (tags, stem, feedback, option text) hold HTML as produced by
//! [`crate::html::text_to_html`] and are written back verbatim on export.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Kind of answer a question expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnswerType {
    Int,
    Float,
    TrueFalse,
    UniqueChoice,
    MultipleChoice,
    Text,
}

impl AnswerType {
    pub const ALL: [AnswerType; 6] = [
        AnswerType::Int,
        AnswerType::Float,
        AnswerType::TrueFalse,
        AnswerType::UniqueChoice,
        AnswerType::MultipleChoice,
        AnswerType::Text,
    ];

    /// Value of the `type` attribute in question files.
    #[must_use]
    pub const fn xml_name(self) -> &'static str {
        match self {
            AnswerType::Int => "int",
            AnswerType::Float => "float",
            AnswerType::TrueFalse => "TF",
            AnswerType::UniqueChoice => "uniqueChoice",
            AnswerType::MultipleChoice => "multipleChoice",
            AnswerType::Text => "text",
        }
    }

    /// Case-insensitive inverse of [`xml_name`](Self::xml_name).
    #[must_use]
    pub fn from_xml_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.xml_name().eq_ignore_ascii_case(name))
    }

    /// Unique and multiple choice.
    #[must_use]
    pub const fn is_choice(self) -> bool {
        matches!(self, AnswerType::UniqueChoice | AnswerType::MultipleChoice)
    }

    /// Answers given as a list of options.
    #[must_use]
    pub const fn has_options(self) -> bool {
        matches!(
            self,
            AnswerType::UniqueChoice | AnswerType::MultipleChoice | AnswerType::Text
        )
    }
}

impl fmt::Display for AnswerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.xml_name())
    }
}

impl FromStr for AnswerType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_xml_name(s).ok_or_else(|| Error::InvalidName {
            kind: "answer type",
            value: s.to_string(),
        })
    }
}

/// One option of a choice or text question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    pub correct: bool,
}

impl AnswerOption {
    #[must_use]
    pub fn new(text: impl Into<String>, correct: bool) -> Self {
        Self {
            text: text.into(),
            feedback: None,
            correct,
        }
    }

    #[must_use]
    pub fn with_feedback(mut self, feedback: impl Into<String>) -> Self {
        self.feedback = Some(feedback.into());
        self
    }
}

/// The expected answer, by type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Answer {
    Int { value: i64 },
    Float { lower: f64, upper: f64 },
    TrueFalse { value: bool },
    UniqueChoice { shuffle: bool, options: Vec<AnswerOption> },
    MultipleChoice { shuffle: bool, options: Vec<AnswerOption> },
    Text { options: Vec<AnswerOption> },
}

impl Answer {
    #[must_use]
    pub fn answer_type(&self) -> AnswerType {
        match self {
            Answer::Int { .. } => AnswerType::Int,
            Answer::Float { .. } => AnswerType::Float,
            Answer::TrueFalse { .. } => AnswerType::TrueFalse,
            Answer::UniqueChoice { .. } => AnswerType::UniqueChoice,
            Answer::MultipleChoice { .. } => AnswerType::MultipleChoice,
            Answer::Text { .. } => AnswerType::Text,
        }
    }

    /// Options of choice and text answers; empty for the others.
    #[must_use]
    pub fn options(&self) -> &[AnswerOption] {
        match self {
            Answer::UniqueChoice { options, .. }
            | Answer::MultipleChoice { options, .. }
            | Answer::Text { options } => options,
            _ => &[],
        }
    }

    #[must_use]
    pub fn shuffle(&self) -> bool {
        match self {
            Answer::UniqueChoice { shuffle, .. } | Answer::MultipleChoice { shuffle, .. } => *shuffle,
            _ => false,
        }
    }

    /// Same accepted answers. Feedback and shuffling are ignored; option
    /// texts are compared in order.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn same_answers(&self, other: &Answer) -> bool {
        match (self, other) {
            (Answer::Int { value: a }, Answer::Int { value: b }) => a == b,
            (Answer::Float { lower: la, upper: ua }, Answer::Float { lower: lb, upper: ub }) => {
                la == lb && ua == ub
            }
            (Answer::TrueFalse { value: a }, Answer::TrueFalse { value: b }) => a == b,
            _ if self.answer_type() == other.answer_type() => {
                let (a, b) = (self.options(), other.options());
                a.len() == b.len()
                    && a.iter()
                        .zip(b)
                        .all(|(a, b)| a.text == b.text && a.correct == b.correct)
            }
            _ => false,
        }
    }
}

/// A complete, valid test question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub tags: Vec<String>,
    pub stem: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    pub answer: Answer,
}

impl Question {
    #[must_use]
    pub fn answer_type(&self) -> AnswerType {
        self.answer.answer_type()
    }

    /// Two questions ask the same thing: same type, stem and answers.
    #[must_use]
    pub fn is_duplicate_of(&self, other: &Question) -> bool {
        self.answer_type() == other.answer_type()
            && self.stem == other.stem
            && self.answer.same_answers(&other.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capital(feedback: Option<&str>, tags: &[&str]) -> Question {
        let mut paris = AnswerOption::new("Paris", true);
        if let Some(feedback) = feedback {
            paris = paris.with_feedback(feedback);
        }
        Question {
            tags: tags.iter().map(ToString::to_string).collect(),
            stem: "Capital of France?".to_string(),
            feedback: None,
            answer: Answer::UniqueChoice {
                shuffle: false,
                options: vec![paris, AnswerOption::new("Lyon", false)],
            },
        }
    }

    #[test]
    fn test_xml_names() {
        for kind in AnswerType::ALL {
            assert_eq!(AnswerType::from_xml_name(kind.xml_name()), Some(kind));
        }
        assert_eq!(AnswerType::from_xml_name("tf"), Some(AnswerType::TrueFalse));
        assert_eq!(AnswerType::from_xml_name("UNIQUECHOICE"), Some(AnswerType::UniqueChoice));
        assert_eq!(AnswerType::from_xml_name("essay"), None);
        assert!("essay".parse::<AnswerType>().is_err());
    }

    #[test]
    fn test_duplicate_ignores_tags_and_feedback() {
        let a = capital(None, &["geo"]);
        let b = capital(Some("Correct!"), &["europe", "capitals"]);
        assert!(a.is_duplicate_of(&b));
    }

    #[test]
    fn test_duplicate_compares_answers() {
        let a = capital(None, &["geo"]);
        let mut b = a.clone();
        if let Answer::UniqueChoice { options, .. } = &mut b.answer {
            options[1].text = "Marseille".to_string();
        }
        assert!(!a.is_duplicate_of(&b));

        let mut c = a.clone();
        c.answer = Answer::MultipleChoice {
            shuffle: false,
            options: a.answer.options().to_vec(),
        };
        assert!(!a.is_duplicate_of(&c));
    }

    #[test]
    fn test_float_duplicates() {
        let range = |lower, upper| Question {
            tags: vec!["math".to_string()],
            stem: "Ratio?".to_string(),
            feedback: None,
            answer: Answer::Float { lower, upper },
        };
        assert!(range(2.5, 2.75).is_duplicate_of(&range(2.5, 2.75)));
        assert!(!range(2.5, 2.75).is_duplicate_of(&range(2.5, 3.0)));
    }

    #[test]
    fn test_serde_shape() {
        let question = Question {
            tags: vec!["math".to_string()],
            stem: "2+2?".to_string(),
            feedback: None,
            answer: Answer::Int { value: 4 },
        };
        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["answer"]["type"], "int");
        assert_eq!(json["answer"]["value"], 4);
        let back: Question = serde_json::from_value(json).unwrap();
        assert_eq!(back, question);
    }
}
