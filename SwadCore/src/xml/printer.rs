//! Indented tree printer
//!
//! Used to echo an uploaded file back to the user next to the import
//! results. Each element starts on its own line, indented three spaces per
//! level below the document's top-level elements; content goes on its own
//! line at the element's indentation.

use super::tree::XmlElement;
use crate::html;

const INDENT: &str = "   ";

/// Output flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Escape {
    /// Markup escaped for embedding in an HTML page.
    #[default]
    Html,
    /// Raw XML for terminals and files.
    Plain,
}

/// Print `elem` and its descendants. A tagless root is not printed itself;
/// its children start at indentation zero.
#[must_use]
pub fn print_tree(elem: &XmlElement, escape: Escape) -> String {
    let mut out = String::new();
    if elem.is_root() {
        for child in elem.children() {
            print_element(&mut out, child, 0, escape);
        }
    } else {
        print_element(&mut out, elem, 0, escape);
    }
    out
}

fn print_element(out: &mut String, elem: &XmlElement, depth: usize, escape: Escape) {
    let indent = INDENT.repeat(depth);
    let (lt, gt) = match escape {
        Escape::Html => ("&lt;", "&gt;"),
        Escape::Plain => ("<", ">"),
    };
    let tag = elem.tag().unwrap_or_default();

    out.push_str(&indent);
    out.push_str(lt);
    out.push_str(tag);
    for attribute in elem.attributes() {
        out.push(' ');
        out.push_str(attribute.name());
        out.push('=');
        match escape {
            Escape::Html => {
                out.push_str("&quot;");
                out.push_str(&html::escape(attribute.value()));
                out.push_str("&quot;");
            }
            Escape::Plain => {
                let quote = if attribute.value().contains('"') { '\'' } else { '"' };
                out.push(quote);
                out.push_str(attribute.value());
                out.push(quote);
            }
        }
    }
    out.push_str(gt);
    out.push('\n');

    if let Some(content) = elem.content() {
        out.push_str(&indent);
        match escape {
            Escape::Html => out.push_str(&html::escape(content)),
            Escape::Plain => out.push_str(content),
        }
        out.push('\n');
    }

    for child in elem.children() {
        print_element(out, child, depth + 1, escape);
    }

    out.push_str(&indent);
    out.push_str(lt);
    out.push('/');
    out.push_str(tag);
    out.push_str(gt);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse_str;
    use pretty_assertions::assert_eq;

    const QUESTION: &str = "<test><question type=\"TF\"><stem>Is 1 &lt; 2?</stem>\
                            <answer>true</answer></question></test>";

    #[test]
    fn test_html_output() {
        let root = parse_str(QUESTION).unwrap();
        let expected = "\
&lt;test&gt;
   &lt;question type=&quot;TF&quot;&gt;
      &lt;stem&gt;
      Is 1 &amp;lt; 2?
      &lt;/stem&gt;
      &lt;answer&gt;
      true
      &lt;/answer&gt;
   &lt;/question&gt;
&lt;/test&gt;
";
        assert_eq!(print_tree(&root, Escape::Html), expected);
    }

    #[test]
    fn test_plain_output_reparses_to_same_tree() {
        let source = "<test>\n<question type=\"uniqueChoice\">\n<answer shuffle='yes'>\
                      <option correct=\"no\"><text>Say \"hi\"</text></option>\
                      <option note='5\" floppy' correct=\"yes\"><text>B</text></option>\
                      </answer></question><empty/></test>";
        let root = parse_str(source).unwrap();
        let printed = print_tree(&root, Escape::Plain);
        assert_eq!(parse_str(&printed).unwrap(), root);
    }

    #[test]
    fn test_single_element() {
        let elem = crate::xml::XmlElement::new("tag").with_content("algebra");
        assert_eq!(print_tree(&elem, Escape::Plain), "<tag>\nalgebra\n</tag>\n");
    }
}
