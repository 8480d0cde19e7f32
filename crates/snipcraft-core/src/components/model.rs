//! Component record types

use serde::{Deserialize, Serialize};

/// On-disk shape of one component file (components/<name>.json)
///
/// Required fields are plain `String`s so a missing field fails deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentRecord {
    /// Display title
    pub title: String,

    /// One-line description shown next to the title
    pub description: String,

    /// Category key, e.g. "html" or "css"
    #[serde(rename = "type")]
    pub kind: String,

    /// Optional sub-category used for bulk selection
    #[serde(default)]
    pub group: Option<String>,

    /// Raw snippet text
    pub content: String,
}

/// A loaded, normalized component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub title: String,
    pub description: String,
    /// Lowercased, trimmed category key. Never empty.
    pub kind: String,
    pub group: Option<String>,
    pub content: String,
    /// File the component was loaded from
    pub source_file: String,
}

impl Component {
    /// Normalize a parsed record. Returns `None` when the type is blank.
    pub fn from_record(record: ComponentRecord, source_file: impl Into<String>) -> Option<Self> {
        let kind = record.kind.trim().to_lowercase();
        if kind.is_empty() {
            return None;
        }

        let group = record
            .group
            .map(|g| g.trim().to_string())
            .filter(|g| !g.is_empty());

        Some(Self {
            title: record.title,
            description: record.description,
            kind,
            group,
            content: record.content,
            source_file: source_file.into(),
        })
    }
}

/// One finalized pick from a selection run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedComponent {
    pub component: Component,
    /// Unique within a run, assigned in output order from 0
    pub sequence_id: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: &str, group: Option<&str>) -> ComponentRecord {
        ComponentRecord {
            title: "Button".to_string(),
            description: "A button".to_string(),
            kind: kind.to_string(),
            group: group.map(str::to_string),
            content: "<button></button>".to_string(),
        }
    }

    #[test]
    fn test_type_is_lowercased_and_trimmed() {
        let c = Component::from_record(record("  HTML ", None), "button.json").unwrap();
        assert_eq!(c.kind, "html");
        assert_eq!(c.source_file, "button.json");
    }

    #[test]
    fn test_blank_type_is_rejected() {
        assert!(Component::from_record(record("   ", None), "x.json").is_none());
    }

    #[test]
    fn test_blank_group_becomes_ungrouped() {
        let c = Component::from_record(record("css", Some("  ")), "x.json").unwrap();
        assert_eq!(c.group, None);

        let c = Component::from_record(record("css", Some("buttons")), "x.json").unwrap();
        assert_eq!(c.group.as_deref(), Some("buttons"));
    }

    #[test]
    fn test_record_requires_content() {
        let json = r#"{"title":"A","description":"d","type":"css"}"#;
        assert!(serde_json::from_str::<ComponentRecord>(json).is_err());
    }
}
