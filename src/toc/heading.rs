use serde::{Deserialize, Serialize};

use crate::utils::error::TocError;

/// Deepest heading tag the numberer accepts ("H1" through "H9")
pub const MAX_TAG_DEPTH: u32 = 9;

/// A heading as supplied by a heading source, before numbering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingRecord {
    /// Raw heading level (1 for H1)
    pub tag_depth: u32,
    /// Tag name as it appears in the TOC template ("H2")
    pub tag: String,
    /// Heading caption
    pub text: String,
    /// Anchor id of the heading element
    pub element_id: String,
    /// Zero-based position of the heading in document order
    pub sequence_index: usize,
}

impl HeadingRecord {
    /// Build a record from a tag name such as "H3" or "h3".
    pub fn from_tag(
        tag: &str,
        text: impl Into<String>,
        element_id: impl Into<String>,
        sequence_index: usize,
    ) -> Result<Self, TocError> {
        let tag_depth = parse_tag_depth(tag)?;

        Ok(Self {
            tag_depth,
            tag: format!("H{}", tag_depth),
            text: text.into(),
            element_id: element_id.into(),
            sequence_index,
        })
    }
}

/// Convert a heading tag name into its depth.
///
/// Only `H1`..`H9` (either case) are accepted; anything else fails with
/// `TocError::InvalidHeadingTag` so a bad depth never reaches the counter stack.
pub fn parse_tag_depth(tag: &str) -> Result<u32, TocError> {
    let trimmed = tag.trim();
    let digits = trimmed
        .strip_prefix('H')
        .or_else(|| trimmed.strip_prefix('h'))
        .ok_or_else(|| TocError::InvalidHeadingTag(tag.to_string()))?;

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(TocError::InvalidHeadingTag(tag.to_string()));
    }

    match digits.parse::<u32>() {
        Ok(depth) if (1..=MAX_TAG_DEPTH).contains(&depth) => Ok(depth),
        _ => Err(TocError::InvalidHeadingTag(tag.to_string())),
    }
}

/// Heading descriptor as read from a JSON heading list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingInput {
    pub tag: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub element_id: String,
}

/// Parse a JSON array of heading descriptors into records, in order.
pub fn records_from_json(json: &str) -> Result<Vec<HeadingRecord>, TocError> {
    let inputs: Vec<HeadingInput> = serde_json::from_str(json)
        .map_err(|e| TocError::Document(format!("Failed to parse heading list: {}", e)))?;

    inputs
        .into_iter()
        .enumerate()
        .map(|(index, input)| HeadingRecord::from_tag(&input.tag, input.text, input.element_id, index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag_depth() {
        assert_eq!(parse_tag_depth("H1").unwrap(), 1);
        assert_eq!(parse_tag_depth("h4").unwrap(), 4);
        assert_eq!(parse_tag_depth(" H9 ").unwrap(), 9);
    }

    #[test]
    fn test_parse_tag_depth_rejects_malformed() {
        for tag in ["H", "Hx", "H0", "H10", "P", "", "H-1", "2"] {
            assert!(
                matches!(parse_tag_depth(tag), Err(TocError::InvalidHeadingTag(_))),
                "expected {:?} to be rejected",
                tag
            );
        }
    }

    #[test]
    fn test_from_tag_normalizes_case() {
        let record = HeadingRecord::from_tag("h2", "Setup", "setup", 3).unwrap();
        assert_eq!(record.tag, "H2");
        assert_eq!(record.tag_depth, 2);
        assert_eq!(record.sequence_index, 3);
    }

    #[test]
    fn test_records_from_json() {
        let json = r#"[
            {"tag": "H1", "text": "Intro", "elementId": "intro"},
            {"tag": "H2", "text": "Details", "elementId": "details"}
        ]"#;

        let records = records_from_json(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].element_id, "details");
        assert_eq!(records[1].sequence_index, 1);
    }

    #[test]
    fn test_records_from_json_bad_tag() {
        let json = r#"[{"tag": "Hx", "text": "Broken", "elementId": "b"}]"#;
        assert!(matches!(
            records_from_json(json),
            Err(TocError::InvalidHeadingTag(_))
        ));
    }
}
