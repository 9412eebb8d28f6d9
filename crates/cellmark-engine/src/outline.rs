//! Conversion of dash-prefixed outlines into the HTML subset the engine
//! reads back.
//!
//! ```text
//! Groceries            <p>Groceries</p>
//! - fruit              <ul><li>fruit</li>
//! -- apples                <ul><li>apples</li></ul>
//! - bread                  <li>bread</li></ul>
//! ```

use html_escape::encode_text;

/// Rewrites an outline as HTML.
///
/// The number of leading `-` characters on a trimmed line is its nesting
/// level. A first line without dashes becomes a `<p>`; every other line is an
/// `<li>`, with `<ul>` elements opened and closed to reach its level. Blank
/// lines are skipped and line text is escaped, so the result always parses.
pub fn outline_to_html(text: &str) -> String {
    let mut out = String::new();
    let mut depth = 0;
    let mut first = true;

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let level = line.chars().take_while(|&c| c == '-').count();
        let content = encode_text(line[level..].trim_start());

        if first && level == 0 {
            out.push_str("<p>");
            out.push_str(&content);
            out.push_str("</p>\n");
            first = false;
            continue;
        }
        first = false;

        while depth < level {
            out.push_str("<ul>");
            depth += 1;
        }
        while depth > level {
            out.push_str("</ul>");
            depth -= 1;
        }
        out.push_str("<li>");
        out.push_str(&content);
        out.push_str("</li>");
    }

    for _ in 0..depth {
        out.push_str("</ul>");
    }
    out
}
