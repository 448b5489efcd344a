use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG_RE: Regex = Regex::new(r"<[^>]*>").expect("tag pattern");
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").expect("whitespace pattern");
}

/// Strip HTML markup from a calendar description.
///
/// The calendar API returns HTML-formatted descriptions; the app renders
/// plain text only. Removes tags, decodes the common entities and collapses
/// whitespace runs into single spaces.
pub fn strip_html(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let text = TAG_RE.replace_all(html, "");
    let text = text
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'");

    WHITESPACE_RE.replace_all(&text, " ").trim().to_string()
}
