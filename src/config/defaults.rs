/// Default root section id, used when the container carries no `data-section-id`
pub fn default_root_section_id() -> String {
    "1".to_string()
}

/// Default maximum TOC depth
pub fn default_max_toc_depth() -> usize {
    3
}

/// Default deepest heading tag collected from documents (h1 through h6)
pub fn default_max_heading_level() -> u32 {
    6
}

/// Default id of the element that receives the TOC
pub fn default_container_id() -> String {
    "inner-toc".to_string()
}

/// Default label shown before heading numbers
pub fn default_section_label() -> String {
    "Section".to_string()
}

/// Default class added to the container when a document has no headings
pub fn default_empty_class() -> String {
    "empty-toc".to_string()
}

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}

/// Default markup opening the TOC list
pub fn default_html_prefix() -> String {
    "<ul id=\"article-toc\" class=\"nav nav-pills nav-stacked nav-toc\">".to_string()
}

/// Default markup closing the TOC list
pub fn default_html_suffix() -> String {
    "</ul>".to_string()
}

/// Default item template (placeholders: link, tag, id, text, section, depth)
pub fn default_html_item() -> String {
    "<li class=\"toc-item toc-level-{depth}\"><a href=\"{link}\"><span class=\"toc-section-id\">{section}</span>{text}</a></li>".to_string()
}
