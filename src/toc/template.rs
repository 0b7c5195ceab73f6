//! Item templates for TOC entries.
//!
//! Substitution is a single left-to-right pass: each `{name}` is looked up once and its value is
//! copied to the output without being scanned again. Names that are not recognized stay in the
//! output exactly as written.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BRACED_NAME: Regex = Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap();
}

/// Placeholder names understood by the item template
pub const PLACEHOLDERS: [&str; 6] = ["link", "tag", "id", "text", "section", "depth"];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed item template, reusable across entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocTemplate {
    segments: Vec<Segment>,
}

impl TocTemplate {
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            literal.push_str(&rest[..open]);
            let after_open = &rest[open + 1..];

            match after_open.find('}') {
                Some(close) if is_placeholder(&after_open[..close]) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(after_open[..close].to_string()));
                    rest = &after_open[close + 1..];
                }
                _ => {
                    // Not a placeholder; keep the brace and resume scanning after it.
                    literal.push('{');
                    rest = after_open;
                }
            }
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { segments }
    }

    /// Placeholders used by this template, in order of appearance
    pub fn placeholders(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Placeholder(name) => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// Expand the template, asking `lookup` for each placeholder value.
    pub fn render<F>(&self, lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut out = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => match lookup(name) {
                    Some(value) => out.push_str(&value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                },
            }
        }

        out
    }
}

fn is_placeholder(name: &str) -> bool {
    PLACEHOLDERS.contains(&name)
}

/// Brace-delimited names in `template` that are not recognized placeholders
pub fn unknown_placeholders(template: &str) -> Vec<String> {
    BRACED_NAME
        .captures_iter(template)
        .map(|cap| cap[1].to_string())
        .filter(|name| !is_placeholder(name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> Option<String> {
        match name {
            "text" => Some("Intro {section}".to_string()),
            "section" => Some("1.2".to_string()),
            "depth" => Some("2".to_string()),
            _ => None,
        }
    }

    #[test]
    fn test_substitutes_all_occurrences() {
        let template = TocTemplate::parse("<li class=\"d{depth}\">{section} {section}</li>");
        assert_eq!(template.render(lookup), "<li class=\"d2\">1.2 1.2</li>");
    }

    #[test]
    fn test_values_are_not_reexpanded() {
        let template = TocTemplate::parse("[{text}]");
        assert_eq!(template.render(lookup), "[Intro {section}]");
    }

    #[test]
    fn test_unknown_placeholder_left_verbatim() {
        let template = TocTemplate::parse("{title}: {section}");
        assert_eq!(template.render(lookup), "{title}: 1.2");
        assert_eq!(template.placeholders(), vec!["section"]);
    }

    #[test]
    fn test_missing_value_left_verbatim() {
        let template = TocTemplate::parse("<a href=\"{link}\">{text}</a>");
        assert_eq!(template.render(lookup), "<a href=\"{link}\">Intro {section}</a>");
    }

    #[test]
    fn test_stray_braces() {
        let template = TocTemplate::parse("{{depth}} { } {depth");
        assert_eq!(template.render(lookup), "{2} { } {depth");
    }

    #[test]
    fn test_unknown_placeholders() {
        assert_eq!(
            unknown_placeholders("{link}{title}{text}{Depth}"),
            vec!["title".to_string(), "Depth".to_string()]
        );
        assert!(unknown_placeholders("{link}{tag}{id}{text}{section}{depth}").is_empty());
    }
}
