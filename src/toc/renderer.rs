use serde::Serialize;

use crate::toc::template::TocTemplate;

/// A numbered heading, ready to be rendered into the TOC
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TocEntry {
    pub section_id: String,
    pub toc_depth: usize,
    pub text: String,
    pub element_id: String,
    pub tag: String,
    pub sequence_index: usize,
}

impl TocEntry {
    /// Value for one of the item template placeholders
    pub fn value(&self, key: &str) -> Option<String> {
        match key {
            "link" => Some(format!("#{}", self.element_id)),
            "tag" => Some(self.tag.clone()),
            "id" => Some(self.sequence_index.to_string()),
            "text" => Some(self.text.clone()),
            "section" => Some(self.section_id.clone()),
            "depth" => Some(self.toc_depth.to_string()),
            _ => None,
        }
    }
}

/// Markup wrapped around the rendered items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocWrapper<'a> {
    pub prefix: &'a str,
    pub suffix: &'a str,
}

/// Render the entries no deeper than `max_toc_depth` into a single markup string.
///
/// Filtering only affects what is rendered; the entries were numbered beforehand.
pub fn render_toc(
    entries: &[TocEntry],
    max_toc_depth: usize,
    template: &TocTemplate,
    wrapper: &TocWrapper<'_>,
) -> String {
    let mut html = String::from(wrapper.prefix);

    for entry in entries.iter().filter(|e| e.toc_depth <= max_toc_depth) {
        html.push_str(&template.render(|key| entry.value(key)));
    }

    html.push_str(wrapper.suffix);
    html
}
