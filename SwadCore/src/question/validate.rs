//! Turning drafts into questions

use serde::Serialize;
use thiserror::Error;

use super::import::{DraftAnswer, DraftOption, QuestionDraft};
use super::types::{Answer, AnswerOption, AnswerType, Question};

/// Why a draft cannot be stored. Shown to the user; the import goes on with
/// the next question.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InvalidQuestion {
    #[error("You must type at least one tag for the question.")]
    NoTags,

    #[error("You must type the stem of the question.")]
    EmptyStem,

    #[error("You must enter an integer value as the correct answer.")]
    MissingInteger,

    #[error("\"{0}\" is not an integer value.")]
    InvalidInteger(String),

    #[error("You must enter the range of floating point values allowed as answer.")]
    MissingRange,

    #[error("\"{0}\" is not a floating point value.")]
    InvalidFloat(String),

    #[error("The lower limit of correct answers must be less than or equal to the upper limit.")]
    InvertedRange,

    #[error("You must select a T/F answer.")]
    MissingTrueFalse,

    #[error("You must type at least the first two answers.")]
    TooFewOptions,

    #[error("You must type at least the first answer.")]
    MissingFirstOption,

    #[error("You can not leave empty intermediate answers.")]
    EmptyIntermediateOption,

    #[error("You must mark an answer as correct.")]
    NoCorrectOption,
}

/// Check a draft and build the stored form of the question.
pub fn validate(draft: &QuestionDraft) -> Result<Question, InvalidQuestion> {
    if draft.tags.is_empty() {
        return Err(InvalidQuestion::NoTags);
    }
    if draft.stem.is_empty() {
        return Err(InvalidQuestion::EmptyStem);
    }

    let answer = match (&draft.answer, draft.answer_type) {
        (DraftAnswer::Int { value }, _) => Answer::Int {
            value: parse_int(value.as_deref())?,
        },
        (DraftAnswer::Float { lower, upper }, _) => {
            let (Some(lower), Some(upper)) = (lower, upper) else {
                return Err(InvalidQuestion::MissingRange);
            };
            let (lower, upper) = (parse_float(lower)?, parse_float(upper)?);
            if lower > upper {
                return Err(InvalidQuestion::InvertedRange);
            }
            Answer::Float { lower, upper }
        }
        (DraftAnswer::TrueFalse { value }, _) => Answer::TrueFalse {
            value: value.ok_or(InvalidQuestion::MissingTrueFalse)?,
        },
        (DraftAnswer::Options { options }, AnswerType::Text) => Answer::Text {
            options: text_options(options)?,
        },
        (DraftAnswer::Options { options }, AnswerType::MultipleChoice) => Answer::MultipleChoice {
            shuffle: draft.shuffle,
            options: choice_options(options)?,
        },
        (DraftAnswer::Options { options }, _) => Answer::UniqueChoice {
            shuffle: draft.shuffle,
            options: choice_options(options)?,
        },
    };

    Ok(Question {
        tags: draft.tags.clone(),
        stem: draft.stem.clone(),
        feedback: draft.feedback.clone(),
        answer,
    })
}

fn parse_int(value: Option<&str>) -> Result<i64, InvalidQuestion> {
    let value = value.ok_or(InvalidQuestion::MissingInteger)?;
    value
        .trim()
        .parse()
        .map_err(|_| InvalidQuestion::InvalidInteger(value.to_string()))
}

/// A decimal comma is accepted.
fn parse_float(value: &str) -> Result<f64, InvalidQuestion> {
    value
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .ok_or_else(|| InvalidQuestion::InvalidFloat(value.to_string()))
}

/// Non-empty options, which must form a prefix of the list.
fn filled_prefix(options: &[DraftOption]) -> Result<&[DraftOption], InvalidQuestion> {
    let filled = options.iter().take_while(|option| !option.text.is_empty()).count();
    if options[filled..].iter().any(|option| !option.text.is_empty()) {
        return Err(InvalidQuestion::EmptyIntermediateOption);
    }
    Ok(&options[..filled])
}

fn choice_options(options: &[DraftOption]) -> Result<Vec<AnswerOption>, InvalidQuestion> {
    if options.first().is_none_or(|option| option.text.is_empty()) {
        return Err(InvalidQuestion::TooFewOptions);
    }
    let filled = filled_prefix(options)?;
    if filled.len() < 2 {
        return Err(InvalidQuestion::TooFewOptions);
    }
    if !filled.iter().any(|option| option.correct) {
        return Err(InvalidQuestion::NoCorrectOption);
    }
    Ok(filled.iter().map(to_option).collect())
}

fn text_options(options: &[DraftOption]) -> Result<Vec<AnswerOption>, InvalidQuestion> {
    if options.first().is_none_or(|option| option.text.is_empty()) {
        return Err(InvalidQuestion::MissingFirstOption);
    }
    Ok(filled_prefix(options)?.iter().map(to_option).collect())
}

fn to_option(option: &DraftOption) -> AnswerOption {
    AnswerOption {
        text: option.text.clone(),
        feedback: option.feedback.clone(),
        correct: option.correct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn draft(answer_type: AnswerType, answer: DraftAnswer) -> QuestionDraft {
        QuestionDraft {
            index: 1,
            answer_type,
            tags: vec!["t".to_string()],
            stem: "Stem".to_string(),
            feedback: None,
            shuffle: true,
            answer,
        }
    }

    fn options(items: &[(&str, bool)]) -> DraftAnswer {
        DraftAnswer::Options {
            options: items
                .iter()
                .map(|(text, correct)| DraftOption {
                    text: (*text).to_string(),
                    feedback: None,
                    correct: *correct,
                })
                .collect(),
        }
    }

    #[test]
    fn test_tags_and_stem_required() {
        let mut d = draft(AnswerType::TrueFalse, DraftAnswer::TrueFalse { value: Some(true) });
        d.tags.clear();
        assert_eq!(validate(&d), Err(InvalidQuestion::NoTags));
        d.tags.push("t".to_string());
        d.stem.clear();
        assert_eq!(validate(&d), Err(InvalidQuestion::EmptyStem));
    }

    #[test]
    fn test_int() {
        let int = |value: Option<&str>| {
            validate(&draft(AnswerType::Int, DraftAnswer::Int { value: value.map(str::to_string) }))
        };
        assert_eq!(int(Some("-42")).unwrap().answer, Answer::Int { value: -42 });
        assert_eq!(int(None), Err(InvalidQuestion::MissingInteger));
        assert_eq!(int(Some("4x")), Err(InvalidQuestion::InvalidInteger("4x".to_string())));
    }

    #[test]
    fn test_float() {
        let float = |lower: Option<&str>, upper: Option<&str>| {
            validate(&draft(
                AnswerType::Float,
                DraftAnswer::Float {
                    lower: lower.map(str::to_string),
                    upper: upper.map(str::to_string),
                },
            ))
        };
        assert_eq!(
            float(Some("2,5"), Some("2.75")).unwrap().answer,
            Answer::Float { lower: 2.5, upper: 2.75 }
        );
        assert_eq!(float(Some("1"), Some("1")).unwrap().answer, Answer::Float { lower: 1.0, upper: 1.0 });
        assert_eq!(float(Some("1"), None), Err(InvalidQuestion::MissingRange));
        assert_eq!(float(Some("2"), Some("1")), Err(InvalidQuestion::InvertedRange));
        assert_eq!(float(Some("inf"), Some("1")), Err(InvalidQuestion::InvalidFloat("inf".to_string())));
    }

    #[test]
    fn test_true_false() {
        let d = draft(AnswerType::TrueFalse, DraftAnswer::TrueFalse { value: None });
        assert_eq!(validate(&d), Err(InvalidQuestion::MissingTrueFalse));
    }

    #[test]
    fn test_choice_rules() {
        let choice = |items: &[(&str, bool)]| validate(&draft(AnswerType::UniqueChoice, options(items)));

        assert_eq!(choice(&[]), Err(InvalidQuestion::TooFewOptions));
        assert_eq!(choice(&[("", true), ("B", false)]), Err(InvalidQuestion::TooFewOptions));
        assert_eq!(choice(&[("A", true)]), Err(InvalidQuestion::TooFewOptions));
        assert_eq!(
            choice(&[("A", true), ("", false), ("C", false)]),
            Err(InvalidQuestion::EmptyIntermediateOption)
        );
        assert_eq!(choice(&[("A", false), ("B", false)]), Err(InvalidQuestion::NoCorrectOption));
        // A correct mark on a trailing empty option does not count
        assert_eq!(
            choice(&[("A", false), ("B", false), ("", true)]),
            Err(InvalidQuestion::NoCorrectOption)
        );

        let question = choice(&[("A", false), ("B", true), ("", false)]).unwrap();
        assert_eq!(question.answer.options().len(), 2);
        assert!(question.answer.shuffle());
    }

    #[test]
    fn test_text_rules() {
        let text = |items: &[(&str, bool)]| validate(&draft(AnswerType::Text, options(items)));
        assert_eq!(text(&[]), Err(InvalidQuestion::MissingFirstOption));
        assert_eq!(text(&[("A", true), ("", true), ("C", true)]), Err(InvalidQuestion::EmptyIntermediateOption));
        let question = text(&[("Madrid", true)]).unwrap();
        assert_eq!(question.answer, Answer::Text { options: vec![AnswerOption::new("Madrid", true)] });
    }

    #[test]
    fn test_multiple_choice_keeps_type() {
        let question = validate(&draft(AnswerType::MultipleChoice, options(&[("A", true), ("B", true)]))).unwrap();
        assert_eq!(question.answer_type(), AnswerType::MultipleChoice);
    }
}
