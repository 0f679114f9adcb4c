//! Inline markdown formatting.
//!
//! Converts one line of raw text into safe HTML: escape first, then apply
//! link, bold, italic and code substitutions in that order. Running the link
//! rule on already-escaped text keeps `&` and `<` inside labels and urls
//! safe; bold runs before italic so `**x**` is not half-consumed by the
//! single-asterisk rule.

use regex::{Captures, Regex};

/// Escape HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Invert [`escape_html`].
///
/// Handles every entity our own escaper can emit, plus `&#39;` as an
/// alternate single-quote spelling. `&amp;` is resolved last so escaped
/// entities are not double-expanded.
pub fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Formatter for inline markdown syntax within a single line.
pub struct InlineFormatter {
    link: Regex,
    bold: Regex,
    italic: Regex,
    code: Regex,
}

impl InlineFormatter {
    /// Create a formatter with its patterns compiled once.
    pub fn new() -> Self {
        Self {
            link: Regex::new(r"\[([^\]]+)\]\(([^)\s]+)\)").unwrap(),
            bold: Regex::new(r"\*\*(.+?)\*\*").unwrap(),
            italic: Regex::new(r"\*(.+?)\*").unwrap(),
            code: Regex::new(r"`(.+?)`").unwrap(),
        }
    }

    /// Render one line of raw text to inline HTML.
    pub fn format(&self, text: &str) -> String {
        let escaped = escape_html(text);

        let linked = self.link.replace_all(&escaped, |caps: &Captures| {
            let label = &caps[1];
            let href = unescape_html(&caps[2]);
            let safe_href = escape_html(&href);
            if href.starts_with("http://") || href.starts_with("https://") {
                format!(
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                    safe_href, label
                )
            } else {
                format!("<a href=\"{}\">{}</a>", safe_href, label)
            }
        });

        let bolded = self.bold.replace_all(&linked, "<strong>$1</strong>");
        let emphasized = self.italic.replace_all(&bolded, "<em>$1</em>");
        self.code
            .replace_all(&emphasized, "<code>$1</code>")
            .into_owned()
    }
}

impl Default for InlineFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("a < b & c > \"d\" 'e'"),
            "a &lt; b &amp; c &gt; &quot;d&quot; &#x27;e&#x27;"
        );
    }

    #[test]
    fn test_unescape_round_trip() {
        let raw = "a < b & \"c\" 'd'";
        assert_eq!(unescape_html(&escape_html(raw)), raw);
    }

    #[test]
    fn test_paragraph_round_trip_modulo_escaping() {
        let formatter = InlineFormatter::new();
        let line = "Testo semplice senza sintassi.";
        assert_eq!(formatter.format(line), line);
    }

    #[test]
    fn test_bold_and_italic() {
        let formatter = InlineFormatter::new();
        assert_eq!(
            formatter.format("**forte** e *corsivo*"),
            "<strong>forte</strong> e <em>corsivo</em>"
        );
    }

    #[test]
    fn test_code_span() {
        let formatter = InlineFormatter::new();
        assert_eq!(
            formatter.format("usa `cargo build` qui"),
            "usa <code>cargo build</code> qui"
        );
    }

    #[test]
    fn test_external_link_opens_new_context() {
        let formatter = InlineFormatter::new();
        assert_eq!(
            formatter.format("[sito](https://example.com/a?b=1&c=2)"),
            "<a href=\"https://example.com/a?b=1&amp;c=2\" target=\"_blank\" \
             rel=\"noopener noreferrer\">sito</a>"
        );
    }

    #[test]
    fn test_relative_link_stays_plain() {
        let formatter = InlineFormatter::new();
        assert_eq!(
            formatter.format("[modulo](module-01.html)"),
            "<a href=\"module-01.html\">modulo</a>"
        );
    }

    #[test]
    fn test_bold_wrapping_link_escapes_once() {
        let formatter = InlineFormatter::new();
        assert_eq!(
            formatter.format("**[x](http://a.com)**"),
            "<strong><a href=\"http://a.com\" target=\"_blank\" \
             rel=\"noopener noreferrer\">x</a></strong>"
        );
    }

    #[test]
    fn test_escaped_text_in_label() {
        let formatter = InlineFormatter::new();
        let html = formatter.format("[a & b](note.html)");
        assert!(html.contains(">a &amp; b</a>"));
    }

    #[test]
    fn test_raw_angle_brackets_stay_escaped() {
        let formatter = InlineFormatter::new();
        assert_eq!(
            formatter.format("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }
}
