//! In-memory XML element tree

use serde::Serialize;

use super::error::XmlError;

/// A `name="value"` pair of a start tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct XmlAttribute {
    name: String,
    value: String,
}

impl XmlAttribute {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Read the value as a yes/no flag.
    ///
    /// `yes`/`y` and `no`/`n` are accepted in any case; anything else is an
    /// error.
    pub fn as_yes_no(&self) -> Result<bool, XmlError> {
        let value = self.value.as_str();
        if value.eq_ignore_ascii_case("yes") || value.eq_ignore_ascii_case("y") {
            Ok(true)
        } else if value.eq_ignore_ascii_case("no") || value.eq_ignore_ascii_case("n") {
            Ok(false)
        } else {
            Err(XmlError::InvalidBooleanAttribute {
                attribute: self.name.clone(),
                value: self.value.clone(),
            })
        }
    }
}

/// One element of a parsed document.
///
/// The parser returns a tagless root whose children are the top-level
/// elements of the document. Content is the element's first text run with
/// surrounding whitespace removed, `None` when that run is empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct XmlElement {
    tag: Option<String>,
    content: Option<String>,
    attributes: Vec<XmlAttribute>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    /// The tagless root of a document.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.set_content(content);
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(XmlAttribute::new(name, value));
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    /// Empty content is stored as `None`.
    pub fn set_content(&mut self, content: impl Into<String>) {
        let content = content.into();
        self.content = (!content.is_empty()).then_some(content);
    }

    pub fn push_attribute(&mut self, attribute: XmlAttribute) {
        self.attributes.push(attribute);
    }

    pub fn push_child(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    /// `None` for the root.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.tag.is_none()
    }

    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    #[must_use]
    pub fn attributes(&self) -> &[XmlAttribute] {
        &self.attributes
    }

    #[must_use]
    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    /// First attribute called `name`.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&XmlAttribute> {
        self.attributes.iter().find(|attribute| attribute.name == name)
    }

    /// First child element with tag `tag`.
    #[must_use]
    pub fn first_child(&self, tag: &str) -> Option<&XmlElement> {
        self.children
            .iter()
            .find(|child| child.tag.as_deref() == Some(tag))
    }

    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a XmlElement> + 'a {
        self.children
            .iter()
            .filter(move |child| child.tag.as_deref() == Some(tag))
    }

    /// Number of elements below this one.
    #[must_use]
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }

    /// No content, attributes or children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.attributes.is_empty() && self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_no() {
        for (value, expected) in [("yes", true), ("Y", true), ("YES", true), ("no", false), ("n", false), ("No", false)] {
            assert_eq!(XmlAttribute::new("correct", value).as_yes_no(), Ok(expected), "{value}");
        }
        let err = XmlAttribute::new("correct", "true").as_yes_no().unwrap_err();
        assert_eq!(err.kind(), super::super::XmlErrorKind::InvalidBooleanAttribute);
    }

    #[test]
    fn test_lookup_helpers() {
        let option = XmlElement::new("option")
            .with_attribute("correct", "yes")
            .with_attribute("correct", "no")
            .with_child(XmlElement::new("text").with_content("Paris"))
            .with_child(XmlElement::new("feedback"))
            .with_child(XmlElement::new("text").with_content("ignored"));

        assert_eq!(option.attribute("correct").map(XmlAttribute::value), Some("yes"));
        assert_eq!(option.first_child("text").and_then(XmlElement::content), Some("Paris"));
        assert_eq!(option.children_named("text").count(), 2);
        assert!(option.first_child("feedback").is_some_and(XmlElement::is_empty));
        assert_eq!(option.descendant_count(), 3);
    }

    #[test]
    fn test_first_child_outlives_tag() {
        let answer = XmlElement::new("answer").with_child(XmlElement::new("option").with_content("A"));
        let found = {
            let tag = String::from("option");
            answer.first_child(&tag)
        };
        assert_eq!(found.and_then(XmlElement::content), Some("A"));
    }

    #[test]
    fn test_empty_content_is_none() {
        let elem = XmlElement::new("stem").with_content("");
        assert_eq!(elem.content(), None);
    }
}
