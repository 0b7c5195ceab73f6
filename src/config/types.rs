use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Markup used to render the TOC
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HtmlConfig {
    /// Opening markup of the TOC container contents
    #[serde(default = "defaults::default_html_prefix")]
    pub prefix: String,

    /// Closing markup of the TOC container contents
    #[serde(default = "defaults::default_html_suffix")]
    pub suffix: String,

    /// Template rendered once per TOC entry
    #[serde(default = "defaults::default_html_item")]
    pub item: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            prefix: defaults::default_html_prefix(),
            suffix: defaults::default_html_suffix(),
            item: defaults::default_html_item(),
        }
    }
}

/// TOC generation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// First segment of every section id
    #[serde(default = "defaults::default_root_section_id")]
    pub root_section_id: String,

    /// Entries deeper than this are left out of the rendered TOC (still numbered)
    #[serde(default = "defaults::default_max_toc_depth")]
    pub max_toc_depth: usize,

    /// Headings with a deeper tag than this are not collected at all
    #[serde(default = "defaults::default_max_heading_level")]
    pub max_heading_level: u32,

    /// Id of the element that receives the TOC
    #[serde(default = "defaults::default_container_id")]
    pub container_id: String,

    /// Id of the element whose headings are numbered (whole document when unset)
    #[serde(default)]
    pub content_id: Option<String>,

    /// Label placed before each heading's number
    #[serde(default = "defaults::default_section_label")]
    pub section_label: String,

    /// Class added to the container when there are no headings
    #[serde(default = "defaults::default_empty_class")]
    pub empty_class: String,

    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "defaults::default_log_level")]
    pub log_level: String,

    /// TOC markup
    #[serde(default)]
    pub html: HtmlConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_section_id: defaults::default_root_section_id(),
            max_toc_depth: defaults::default_max_toc_depth(),
            max_heading_level: defaults::default_max_heading_level(),
            container_id: defaults::default_container_id(),
            content_id: None,
            section_label: defaults::default_section_label(),
            empty_class: defaults::default_empty_class(),
            log_level: defaults::default_log_level(),
            html: HtmlConfig::default(),
        }
    }
}

/// Settings present in one configuration file; absent keys stay `None`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub root_section_id: Option<String>,
    pub max_toc_depth: Option<usize>,
    pub max_heading_level: Option<u32>,
    pub container_id: Option<String>,
    pub content_id: Option<String>,
    pub section_label: Option<String>,
    pub empty_class: Option<String>,
    pub log_level: Option<String>,
    pub html: HtmlFile,
}

/// TOC markup keys present in one configuration file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HtmlFile {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub item: Option<String>,
}

/// Values given on the command line, applied after the config files
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub root_section_id: Option<String>,
    pub max_toc_depth: Option<usize>,
}

impl Config {
    /// Apply command line overrides
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(root) = &overrides.root_section_id {
            self.root_section_id = root.clone();
        }
        if let Some(depth) = overrides.max_toc_depth {
            self.max_toc_depth = depth;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("max_toc_depth: 2\nhtml:\n  suffix: \"</ol>\"\n").unwrap();
        assert_eq!(config.max_toc_depth, 2);
        assert_eq!(config.root_section_id, "1");
        assert_eq!(config.html.suffix, "</ol>");
        assert_eq!(config.html.item, defaults::default_html_item());
    }

    #[test]
    fn test_overrides() {
        let mut config = Config::default();
        config.apply_overrides(&ConfigOverrides {
            root_section_id: Some("4".to_string()),
            max_toc_depth: None,
        });
        assert_eq!(config.root_section_id, "4");
        assert_eq!(config.max_toc_depth, 3);
    }
}
