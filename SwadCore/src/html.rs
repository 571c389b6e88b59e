//! HTML text helpers shared by the page wrapper, the XML printer and the
//! question importer.

/// Escape `&`, `<`, `>`, `"` and `'` for use in HTML text or attributes.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Convert plain text to HTML.
///
/// Markup characters are escaped, but an `&` that already starts a character
/// reference (`&amp;`, `&#233;`, `&#x2014;`) is kept so stored HTML survives
/// a second pass. Runs of whitespace collapse to one space and the ends are
/// trimmed.
#[must_use]
pub fn text_to_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for (index, c) in text.char_indices() {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        match c {
            '&' if starts_reference(&text[index..]) => out.push('&'),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// `s` starts with `&name;`, `&#digits;` or `&#xhex;`.
fn starts_reference(s: &str) -> bool {
    let Some(body) = s.strip_prefix('&') else {
        return false;
    };
    let Some(end) = body.find(';') else {
        return false;
    };
    let name = &body[..end];
    if let Some(num) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        !num.is_empty() && num.chars().all(|c| c.is_ascii_hexdigit())
    } else if let Some(num) = name.strip_prefix('#') {
        !num.is_empty() && num.chars().all(|c| c.is_ascii_digit())
    } else {
        !name.is_empty()
            && name.len() <= 32
            && name.chars().all(|c| c.is_ascii_alphanumeric())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a href="x">&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;");
    }

    #[test]
    fn test_text_to_html_collapses_whitespace() {
        assert_eq!(text_to_html("  2 +\n\t 2 = ?  "), "2 + 2 = ?");
    }

    #[test]
    fn test_text_to_html_keeps_references() {
        assert_eq!(text_to_html("a &lt; b & c"), "a &lt; b &amp; c");
        assert_eq!(text_to_html("caf&#233; &#xE9;"), "caf&#233; &#xE9;");
        assert_eq!(text_to_html("x < y"), "x &lt; y");
    }

    #[test]
    fn test_text_to_html_is_stable() {
        let once = text_to_html("if a < b && c > \"d\"");
        assert_eq!(text_to_html(&once), once);
    }
}
