//! In-place edits on the page skeleton.
//!
//! Elements are addressed by id, exactly as the page template authors them.
//! Every edit is optional: a missing element returns `None` and the caller
//! skips it, so a skeleton that omits a region is never an error.

use std::ops::Range;

use regex::Regex;

const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Set the text content of the element with `id`, escaping the value.
pub fn set_text_by_id(html: &str, id: &str, text: &str) -> Option<String> {
    replace_inner_by_id(html, id, &escape_html(text))
}

/// Replace the inner HTML of the element with `id` with a pre-rendered
/// fragment.
pub fn replace_inner_by_id(html: &str, id: &str, fragment: &str) -> Option<String> {
    let (tag, open) = open_tag(html, id)?;
    if VOID_TAGS.contains(&tag.as_str()) {
        return None;
    }
    let inner = inner_range(html, &tag, open.end)?;

    let mut out = String::with_capacity(html.len() + fragment.len());
    out.push_str(&html[..inner.start]);
    out.push_str(fragment);
    out.push_str(&html[inner.end..]);
    Some(out)
}

/// Set (or insert) an attribute on the element with `id`.
pub fn set_attr_by_id(html: &str, id: &str, attr: &str, value: &str) -> Option<String> {
    let (_, open) = open_tag(html, id)?;
    let opening = &html[open.clone()];
    let replacement = format!(r#"{}="{}""#, attr, escape_html(value));

    // The value group is optional so a valueless boolean attribute
    // (`download`, `hidden`) is replaced in place instead of duplicated.
    let attr_re = Regex::new(&format!(
        r#"\b{}\b(\s*=\s*"[^"]*")?"#,
        regex::escape(attr)
    ))
    .expect("attribute pattern is valid");

    let updated = if attr_re.is_match(opening) {
        attr_re
            .replace(opening, regex::NoExpand(replacement.as_str()))
            .to_string()
    } else {
        // Insert before the closing bracket, respecting self-closing tags.
        let insert_at = if opening.ends_with("/>") {
            opening.len() - 2
        } else {
            opening.len() - 1
        };
        format!(
            "{} {}{}",
            opening[..insert_at].trim_end(),
            replacement,
            &opening[insert_at..]
        )
    };

    let mut out = String::with_capacity(html.len() + updated.len());
    out.push_str(&html[..open.start]);
    out.push_str(&updated);
    out.push_str(&html[open.end..]);
    Some(out)
}

/// Minimal HTML escaping for text and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Locate the opening tag of the element with `id`, returning the tag name
/// and the byte range of the opening tag.
fn open_tag(html: &str, id: &str) -> Option<(String, Range<usize>)> {
    let pattern = format!(
        r#"<([a-zA-Z][a-zA-Z0-9-]*)\b[^>]*\bid\s*=\s*"{}"[^>]*>"#,
        regex::escape(id)
    );
    let re = Regex::new(&pattern).expect("opening tag pattern is valid");

    let caps = re.captures(html)?;
    let whole = caps.get(0)?;
    Some((caps[1].to_ascii_lowercase(), whole.range()))
}

/// The inner content range of an element whose opening tag ends at
/// `open_end`, accounting for nested elements of the same tag.
fn inner_range(html: &str, tag: &str, open_end: usize) -> Option<Range<usize>> {
    let re = Regex::new(&format!(
        r#"(?i)<{tag}\b[^>]*>|</{tag}\s*>"#,
        tag = regex::escape(tag)
    ))
    .expect("tag scan pattern is valid");

    let mut depth = 1usize;
    for m in re.find_iter(&html[open_end..]) {
        let text = m.as_str();
        if text.starts_with("</") {
            depth -= 1;
            if depth == 0 {
                return Some(open_end..open_end + m.start());
            }
        } else if !text.ends_with("/>") {
            depth += 1;
        }
    }
    None
}
