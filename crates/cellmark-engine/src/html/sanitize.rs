use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Tags that survive sanitizing. Everything else is stripped.
pub const ALLOWED_TAGS: [&str; 15] = [
    "b", "i", "u", "ul", "ol", "li", "div", "p", "br", "h1", "h2", "h3", "h4", "h5", "h6",
];

pub fn is_allowed_tag(name: &str) -> bool {
    ALLOWED_TAGS
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(name))
}

/// Removes every opening or closing tag whose name is not allowed.
///
/// A tag name runs up to the first whitespace, `/` or `>`, so `<b-x>` is
/// checked as `b-x`, not as `b`.
///
/// Allowed tags are left exactly as written, attributes included. Text
/// between tags is never touched. Stripping can join fragments into a new
/// tag (`<<x>script>`), so stripping repeats until nothing changes, which
/// makes `sanitize(sanitize(s)) == sanitize(s)`.
pub fn sanitize(html: &str) -> String {
    static TAG: OnceLock<Regex> = OnceLock::new();
    let re = TAG.get_or_init(|| {
        Regex::new(r"(?i)</?([a-z][^\s/>]*)[^>]*>").expect("Invalid tag regex")
    });

    let mut current = html.to_string();
    loop {
        let next = re
            .replace_all(&current, |caps: &Captures<'_>| {
                if is_allowed_tag(&caps[1]) {
                    caps[0].to_string()
                } else {
                    String::new()
                }
            })
            .into_owned();
        if next == current {
            return current;
        }
        current = next;
    }
}
