//! Recursive-descent XML parser
//!
//! A deliberately small subset of XML: elements, attributes quoted with `"`
//! or `'`, and text. `<!...>` and `<?...>` constructs are skipped whole.
//! Entities are not expanded and there is no DTD or namespace handling.
//!
//! Only the first text run of an element is kept as its content; text that
//! follows a child element is skipped.

use std::borrow::Cow;

use super::error::XmlError;
use super::tree::{XmlAttribute, XmlElement};

/// Deepest element nesting accepted.
pub const MAX_DEPTH: usize = 256;

/// Parse a document into a tree rooted at a tagless element.
///
/// Input that is not valid UTF-8 is read as Latin-1. A NUL byte ends the
/// input.
pub fn parse(input: &[u8]) -> Result<XmlElement, XmlError> {
    let end = input.iter().position(|&b| b == 0).unwrap_or(input.len());
    let text = decode(&input[..end]);
    parse_str(&text)
}

/// Parse a document held in a string.
pub fn parse_str(input: &str) -> Result<XmlElement, XmlError> {
    let mut root = XmlElement::root();
    let mut parser = Parser::new(input);
    parser.parse_element_body(&mut root)?;
    tracing::debug!(
        "parsed XML: {} bytes, {} elements",
        input.len(),
        root.descendant_count()
    );
    Ok(root)
}

fn decode(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect()),
    }
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0, depth: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// Advance to the first byte matching `stop` (or the end) and return what
    /// was skipped. Stops only on ASCII bytes, so slices stay on char
    /// boundaries.
    fn take_until(&mut self, stop: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(|b| !stop(b)) {
            self.pos += 1;
        }
        &self.src[start..self.pos]
    }

    fn eof(&self, open: &XmlElement) -> XmlError {
        XmlError::UnexpectedEof {
            position: self.pos,
            open: open.tag().map(str::to_string),
        }
    }

    /// Read everything after the start tag of `parent` up to and including
    /// its end tag. For the root, read to the end of input.
    fn parse_element_body(&mut self, parent: &mut XmlElement) -> Result<(), XmlError> {
        self.skip_whitespace();
        let content = self.take_until(|b| b == b'<');

        loop {
            match self.peek() {
                None if parent.is_root() => return Ok(()),
                None => return Err(self.eof(parent)),
                Some(b'<') => self.pos += 1,
                Some(_) => {
                    // Text after a child element
                    self.take_until(|b| b == b'<');
                    continue;
                }
            }

            match self.peek() {
                Some(b'/') => {
                    self.pos += 1;
                    self.parse_end_tag(parent)?;
                    let content = content.trim_end();
                    if !content.is_empty() && !parent.is_root() {
                        parent.set_content(content);
                    }
                    return Ok(());
                }
                Some(b'!' | b'?') => {
                    self.take_until(|b| b == b'>');
                    if self.peek().is_some() {
                        self.pos += 1;
                    }
                }
                Some(_) => {
                    let child = self.parse_child()?;
                    parent.push_child(child);
                }
                None => return Err(self.eof(parent)),
            }

            self.skip_whitespace();
        }
    }

    /// Position is just after `</`.
    fn parse_end_tag(&mut self, parent: &XmlElement) -> Result<(), XmlError> {
        let start = self.pos;
        let name = self.take_until(|b| b == b'>').trim_end();
        if self.peek().is_none() {
            return Err(self.eof(parent));
        }
        if parent.tag() != Some(name) {
            return Err(XmlError::MismatchedTag {
                position: start,
                expected: parent.tag().map(str::to_string),
                found: name.to_string(),
            });
        }
        self.pos += 1;
        Ok(())
    }

    /// Position is just after `<` of a start tag.
    fn parse_child(&mut self) -> Result<XmlElement, XmlError> {
        let start = self.pos;
        let name = self.take_until(|b| b == b'>' || b == b'/' || b.is_ascii_whitespace());
        if name.is_empty() {
            return Err(XmlError::EmptyTagName { position: start });
        }
        let mut child = XmlElement::new(name);

        let unary = match self.peek() {
            Some(b'>') => {
                self.pos += 1;
                false
            }
            Some(b'/') => {
                self.pos += 1;
                self.expect_unary_close(&child)?;
                true
            }
            Some(_) => self.parse_attributes(&mut child)?,
            None => return Err(self.eof(&child)),
        };

        if !unary {
            if self.depth >= MAX_DEPTH {
                return Err(XmlError::NestingTooDeep {
                    position: start,
                    limit: MAX_DEPTH,
                });
            }
            self.depth += 1;
            self.parse_element_body(&mut child)?;
            self.depth -= 1;
        }
        Ok(child)
    }

    /// Position is just after the `/` of `/>`.
    fn expect_unary_close(&mut self, elem: &XmlElement) -> Result<(), XmlError> {
        if self.peek() == Some(b'>') {
            self.pos += 1;
            Ok(())
        } else {
            Err(XmlError::MalformedUnaryTag {
                position: self.pos,
                tag: elem.tag().unwrap_or_default().to_string(),
            })
        }
    }

    /// Read attributes up to the end of the start tag. Returns `true` when the
    /// tag closed with `/>`.
    fn parse_attributes(&mut self, elem: &mut XmlElement) -> Result<bool, XmlError> {
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Err(self.eof(elem)),
                Some(b'/') => {
                    self.pos += 1;
                    self.expect_unary_close(elem)?;
                    return Ok(true);
                }
                Some(b'>') => {
                    self.pos += 1;
                    return Ok(false);
                }
                Some(_) => {
                    let attribute = self.parse_attribute(elem)?;
                    elem.push_attribute(attribute);
                }
            }
        }
    }

    fn parse_attribute(&mut self, elem: &XmlElement) -> Result<XmlAttribute, XmlError> {
        let name = self.take_until(|b| matches!(b, b'=' | b'>' | b'/' | b'<') || b.is_ascii_whitespace());
        self.skip_whitespace();
        let malformed = |position: usize| XmlError::MalformedAttribute {
            position,
            attribute: name.to_string(),
            element: elem.tag().unwrap_or_default().to_string(),
        };

        match self.peek() {
            None => return Err(self.eof(elem)),
            Some(b'=') if !name.is_empty() => self.pos += 1,
            Some(_) => return Err(malformed(self.pos)),
        }

        self.skip_whitespace();
        let quote = match self.peek() {
            None => return Err(self.eof(elem)),
            Some(quote @ (b'"' | b'\'')) => quote,
            Some(_) => return Err(malformed(self.pos)),
        };
        self.pos += 1;
        let value = self.take_until(|b| b == quote);
        if self.peek().is_none() {
            return Err(self.eof(elem));
        }
        self.pos += 1;
        Ok(XmlAttribute::new(name, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::XmlErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_test_element() {
        let root = parse_str("<test></test>").unwrap();
        assert!(root.is_root());
        assert_eq!(root.children().len(), 1);
        let test = &root.children()[0];
        assert_eq!(test.tag(), Some("test"));
        assert_eq!(test.content(), None);
        assert!(test.children().is_empty());
    }

    #[test]
    fn test_unary_equals_empty_pair() {
        let unary = parse_str("<tag/>").unwrap();
        let pair = parse_str("<tag></tag>").unwrap();
        assert_eq!(unary, pair);
        assert_eq!(unary.children()[0].content(), None);
    }

    #[test]
    fn test_question_document() {
        let root = parse_str(
            "<test><question type=\"int\"><tags><tag>algebra</tag></tags>\
             <stem>2+2=?</stem><answer>4</answer></question></test>",
        )
        .unwrap();
        let question = root.first_child("test").and_then(|t| t.first_child("question")).unwrap();
        assert_eq!(question.attribute("type").map(XmlAttribute::value), Some("int"));
        let tag = question.first_child("tags").and_then(|t| t.first_child("tag")).unwrap();
        assert_eq!(tag.content(), Some("algebra"));
        assert_eq!(question.first_child("stem").and_then(XmlElement::content), Some("2+2=?"));
        assert_eq!(question.first_child("answer").and_then(XmlElement::content), Some("4"));
    }

    #[test]
    fn test_whitespace_around_content() {
        let root = parse_str("<stem>\n   What is   it?  \n</stem>").unwrap();
        assert_eq!(root.children()[0].content(), Some("What is   it?"));
    }

    #[test]
    fn test_attributes_both_quotes() {
        let root = parse_str("<option correct='yes' lang=\"en\" note = \"a 'b'\">x</option>").unwrap();
        let option = &root.children()[0];
        let pairs: Vec<_> = option.attributes().iter().map(|a| (a.name(), a.value())).collect();
        assert_eq!(pairs, vec![("correct", "yes"), ("lang", "en"), ("note", "a 'b'")]);
        assert_eq!(option.content(), Some("x"));
    }

    #[test]
    fn test_unary_with_attributes_keeps_siblings() {
        let root = parse_str("<a><b x=\"1\"/><c/></a>").unwrap();
        let a = &root.children()[0];
        let tags: Vec<_> = a.children().iter().filter_map(XmlElement::tag).collect();
        assert_eq!(tags, vec!["b", "c"]);
    }

    #[test]
    fn test_skips_declaration_and_comments() {
        let root = parse_str(
            "<?xml version=\"1.0\" encoding=\"windows-1252\"?>\n<!-- exported -->\n<test>\n<!DOCTYPE x>\n</test>\n",
        )
        .unwrap();
        assert_eq!(root.children().len(), 1);
        assert_eq!(root.children()[0].tag(), Some("test"));
    }

    #[test]
    fn test_mismatched_tag() {
        let err = parse_str("<a><b></c></a>").unwrap_err();
        assert_eq!(err.kind(), XmlErrorKind::MismatchedTag);
        assert_eq!(
            err,
            XmlError::MismatchedTag {
                position: 8,
                expected: Some("b".to_string()),
                found: "c".to_string(),
            }
        );
    }

    #[test]
    fn test_end_tags_are_case_sensitive() {
        let err = parse_str("<Stem>x</stem>").unwrap_err();
        assert_eq!(err.kind(), XmlErrorKind::MismatchedTag);
    }

    #[test]
    fn test_stray_end_tag() {
        let err = parse_str("</a>").unwrap_err();
        assert_eq!(
            err,
            XmlError::MismatchedTag {
                position: 2,
                expected: None,
                found: "a".to_string(),
            }
        );
    }

    #[test]
    fn test_malformed_unary() {
        assert_eq!(parse_str("<a/ >").unwrap_err().kind(), XmlErrorKind::MalformedUnaryTag);
        assert_eq!(parse_str("<a x=\"1\"/x>").unwrap_err().kind(), XmlErrorKind::MalformedUnaryTag);
    }

    #[test]
    fn test_unquoted_attribute() {
        let err = parse_str("<question type=int></question>").unwrap_err();
        assert_eq!(
            err,
            XmlError::MalformedAttribute {
                position: 15,
                attribute: "type".to_string(),
                element: "question".to_string(),
            }
        );
    }

    #[test]
    fn test_unexpected_eof() {
        for input in ["<a", "<a x=\"1", "<a><b>text", "<a x=", "<a></a"] {
            assert_eq!(parse_str(input).unwrap_err().kind(), XmlErrorKind::UnexpectedEof, "{input}");
        }
    }

    #[test]
    fn test_empty_tag_name() {
        assert_eq!(parse_str("< a></a>").unwrap_err().kind(), XmlErrorKind::EmptyTagName);
    }

    #[test]
    fn test_only_first_text_run_is_content() {
        let root = parse_str("<p>first<b>bold</b>second</p>").unwrap();
        let p = &root.children()[0];
        assert_eq!(p.content(), Some("first"));
        assert_eq!(p.children()[0].content(), Some("bold"));
    }

    #[test]
    fn test_nul_ends_input() {
        let root = parse(b"<a>x</a>\0<b>").unwrap();
        assert_eq!(root.children().len(), 1);
    }

    #[test]
    fn test_latin1_fallback() {
        let root = parse(b"<stem>caf\xe9</stem>").unwrap();
        assert_eq!(root.children()[0].content(), Some("caf\u{e9}"));
    }

    #[test]
    fn test_nesting_limit() {
        let deep = "<a>".repeat(MAX_DEPTH + 2);
        assert_eq!(parse_str(&deep).unwrap_err().kind(), XmlErrorKind::NestingTooDeep);
    }

    #[test]
    fn test_root_text_is_not_stored() {
        let root = parse_str("stray text <a/>").unwrap();
        assert_eq!(root.content(), None);
        assert_eq!(root.children().len(), 1);
    }
}
