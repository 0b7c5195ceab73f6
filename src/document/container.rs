use std::ops::Range;

use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::error::TocError;

lazy_static! {
    static ref OPEN_TAG_REGEX: Regex = Regex::new(r"<([a-zA-Z][a-zA-Z0-9-]*)(\s[^>]*)?>").unwrap();

    static ref CLASS_ATTR_REGEX: Regex = Regex::new(
        r#"(?i)(\sclass\s*=\s*)(["'])([^"']*)(["'])"#
    ).unwrap();

    static ref ATTR_REGEX: Regex = Regex::new(
        r#"([^\s"'=<>/]+)\s*=\s*(?:"([^"]*)"|'([^']*)')"#
    ).unwrap();
}

/// Location of an element inside an HTML string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSpan {
    /// Lowercased tag name
    pub name: String,
    /// Byte range of the opening tag, brackets included
    pub open_tag: Range<usize>,
    /// Byte range between the opening and the matching closing tag
    pub inner: Range<usize>,
}

impl ElementSpan {
    pub fn open_tag_str<'h>(&self, html: &'h str) -> &'h str {
        &html[self.open_tag.clone()]
    }

    pub fn overlaps(&self, range: &Range<usize>) -> bool {
        range.start < self.inner.end && self.inner.start < range.end
    }
}

/// Value of attribute `name` in an opening tag or attribute string
pub fn attribute(tag: &str, name: &str) -> Option<String> {
    ATTR_REGEX
        .captures_iter(tag)
        .find(|caps| caps[1].eq_ignore_ascii_case(name))
        .and_then(|caps| caps.get(2).or_else(|| caps.get(3)))
        .map(|m| m.as_str().to_string())
}

/// Find the element whose `id` attribute equals `id`.
///
/// Returns `Ok(None)` when no such element exists and an error when it is never closed.
pub fn find_element_by_id(html: &str, id: &str) -> Result<Option<ElementSpan>, TocError> {
    for cap in OPEN_TAG_REGEX.captures_iter(html) {
        let attrs = match cap.get(2) {
            Some(attrs) => attrs.as_str(),
            None => continue,
        };

        if attribute(attrs, "id").as_deref() != Some(id) {
            continue;
        }

        let whole = cap.get(0).map(|m| m.range()).unwrap_or(0..0);
        let name = cap[1].to_lowercase();

        if attrs.trim_end().ends_with('/') {
            return Err(TocError::Document(format!(
                "Element #{} is self-closing and cannot hold content",
                id
            )));
        }

        let inner_end = find_closing_tag(html, &name, whole.end).ok_or_else(|| {
            TocError::Document(format!("Element #{} (<{}>) is never closed", id, name))
        })?;

        return Ok(Some(ElementSpan {
            name,
            open_tag: whole.clone(),
            inner: whole.end..inner_end,
        }));
    }

    Ok(None)
}

/// Byte offset of the closing tag matching an element opened just before `from`
fn find_closing_tag(html: &str, name: &str, from: usize) -> Option<usize> {
    let pattern = format!(r"(?i)<(/?){}(?:\s[^>]*)?>", regex::escape(name));
    let re = Regex::new(&pattern).ok()?;
    let mut depth = 1usize;

    for cap in re.captures_iter(&html[from..]) {
        let whole = cap.get(0)?;
        let closing = !cap[1].is_empty();

        if closing {
            depth -= 1;
            if depth == 0 {
                return Some(from + whole.start());
            }
        } else if !whole.as_str().ends_with("/>") {
            depth += 1;
        }
    }

    None
}

/// Opening tag with `class` added to its class list (unchanged if already present)
pub fn add_class(open_tag: &str, class: &str) -> String {
    if let Some(caps) = CLASS_ATTR_REGEX.captures(open_tag) {
        if caps[3].split_whitespace().any(|c| c == class) {
            return open_tag.to_string();
        }

        let whole = caps.get(0).map(|m| m.range()).unwrap_or(0..0);
        let classes = if caps[3].trim().is_empty() {
            class.to_string()
        } else {
            format!("{} {}", caps[3].trim(), class)
        };

        return format!(
            "{}{}{}{}{}{}",
            &open_tag[..whole.start],
            &caps[1],
            &caps[2],
            classes,
            &caps[4],
            &open_tag[whole.end..]
        );
    }

    insert_attribute(open_tag, "class", class)
}

/// Opening tag with `class` taken out of its class list; an emptied list drops the attribute
pub fn remove_class(open_tag: &str, class: &str) -> String {
    let caps = match CLASS_ATTR_REGEX.captures(open_tag) {
        Some(caps) => caps,
        None => return open_tag.to_string(),
    };
    if !caps[3].split_whitespace().any(|c| c == class) {
        return open_tag.to_string();
    }

    let whole = caps.get(0).map(|m| m.range()).unwrap_or(0..0);
    let remaining: Vec<&str> = caps[3].split_whitespace().filter(|c| *c != class).collect();

    if remaining.is_empty() {
        return format!("{}{}", &open_tag[..whole.start], &open_tag[whole.end..]);
    }

    format!(
        "{}{}{}{}{}{}",
        &open_tag[..whole.start],
        &caps[1],
        &caps[2],
        remaining.join(" "),
        &caps[4],
        &open_tag[whole.end..]
    )
}

/// Opening tag with a new attribute appended before the closing bracket
pub fn insert_attribute(open_tag: &str, name: &str, value: &str) -> String {
    let cut = if open_tag.ends_with("/>") {
        open_tag.len() - 2
    } else {
        open_tag.len().saturating_sub(1)
    };

    format!(
        "{} {}=\"{}\"{}",
        open_tag[..cut].trim_end(),
        name,
        html_escape::encode_double_quoted_attribute(value),
        &open_tag[cut..]
    )
}
