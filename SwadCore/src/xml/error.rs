//! XML parse errors

use thiserror::Error;

/// Coarse classification of an [`XmlError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XmlErrorKind {
    MismatchedTag,
    MalformedUnaryTag,
    MalformedAttribute,
    EmptyTagName,
    UnexpectedEof,
    NestingTooDeep,
    InvalidBooleanAttribute,
}

/// Failure while building or reading an XML tree. Positions are byte offsets
/// into the (decoded) input.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum XmlError {
    /// An end tag does not close the element currently open.
    #[error("XML syntax error at byte {position}: {}", mismatch_message(.expected.as_deref(), .found))]
    MismatchedTag {
        position: usize,
        /// `None` when the end tag appears outside any element.
        expected: Option<String>,
        found: String,
    },

    #[error("XML syntax error at byte {position}: expect > ending unary tag <{tag}/>")]
    MalformedUnaryTag { position: usize, tag: String },

    #[error("XML syntax error at byte {position} after attribute \"{attribute}\" inside element \"{element}\"")]
    MalformedAttribute {
        position: usize,
        attribute: String,
        element: String,
    },

    #[error("XML syntax error at byte {position}: missing tag name after <")]
    EmptyTagName { position: usize },

    #[error("XML syntax error: unexpected end of file{}", open_message(.open.as_deref()))]
    UnexpectedEof {
        position: usize,
        /// Innermost element still open.
        open: Option<String>,
    },

    #[error("XML nesting deeper than {limit} elements at byte {position}")]
    NestingTooDeep { position: usize, limit: usize },

    #[error("attribute \"{attribute}\" must be yes or no, found \"{value}\"")]
    InvalidBooleanAttribute { attribute: String, value: String },
}

impl XmlError {
    #[must_use]
    pub fn kind(&self) -> XmlErrorKind {
        match self {
            XmlError::MismatchedTag { .. } => XmlErrorKind::MismatchedTag,
            XmlError::MalformedUnaryTag { .. } => XmlErrorKind::MalformedUnaryTag,
            XmlError::MalformedAttribute { .. } => XmlErrorKind::MalformedAttribute,
            XmlError::EmptyTagName { .. } => XmlErrorKind::EmptyTagName,
            XmlError::UnexpectedEof { .. } => XmlErrorKind::UnexpectedEof,
            XmlError::NestingTooDeep { .. } => XmlErrorKind::NestingTooDeep,
            XmlError::InvalidBooleanAttribute { .. } => XmlErrorKind::InvalidBooleanAttribute,
        }
    }

    /// Byte offset of the error, if it came from the parser.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            XmlError::MismatchedTag { position, .. }
            | XmlError::MalformedUnaryTag { position, .. }
            | XmlError::MalformedAttribute { position, .. }
            | XmlError::EmptyTagName { position }
            | XmlError::UnexpectedEof { position, .. }
            | XmlError::NestingTooDeep { position, .. } => Some(*position),
            XmlError::InvalidBooleanAttribute { .. } => None,
        }
    }
}

fn mismatch_message(expected: Option<&str>, found: &str) -> String {
    match expected {
        Some(expected) => format!("expect end tag </{expected}>, found </{found}>"),
        None => format!("end tag </{found}> outside any element"),
    }
}

fn open_message(open: Option<&str>) -> String {
    open.map(|tag| format!(" inside <{tag}>")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = XmlError::MismatchedTag {
            position: 7,
            expected: Some("b".to_string()),
            found: "c".to_string(),
        };
        assert_eq!(err.to_string(), "XML syntax error at byte 7: expect end tag </b>, found </c>");
        assert_eq!(err.kind(), XmlErrorKind::MismatchedTag);

        let err = XmlError::UnexpectedEof {
            position: 3,
            open: Some("test".to_string()),
        };
        assert_eq!(err.to_string(), "XML syntax error: unexpected end of file inside <test>");
        assert_eq!(err.position(), Some(3));
    }
}
