//! The curated whitelist of scalar project attributes eligible for export.
//!
//! The list is maintained by hand. It is never derived from the project
//! entity's full field set: identifiers, tokens and foreign keys must not end
//! up in an archive.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A scalar project attribute that may be written to an export archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectAttribute {
    Name,
    Path,
    Description,
    IssuesEnabled,
    WallEnabled,
    MergeRequestsEnabled,
    WikiEnabled,
    SnippetsEnabled,
    VisibilityLevel,
    Archived,
}

impl ProjectAttribute {
    /// Every whitelisted attribute, in export order.
    pub const ALL: [Self; 10] = [
        Self::Name,
        Self::Path,
        Self::Description,
        Self::IssuesEnabled,
        Self::WallEnabled,
        Self::MergeRequestsEnabled,
        Self::WikiEnabled,
        Self::SnippetsEnabled,
        Self::VisibilityLevel,
        Self::Archived,
    ];

    /// Field name as it appears in a serialized project record.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Path => "path",
            Self::Description => "description",
            Self::IssuesEnabled => "issues_enabled",
            Self::WallEnabled => "wall_enabled",
            Self::MergeRequestsEnabled => "merge_requests_enabled",
            Self::WikiEnabled => "wiki_enabled",
            Self::SnippetsEnabled => "snippets_enabled",
            Self::VisibilityLevel => "visibility_level",
            Self::Archived => "archived",
        }
    }

    /// Look up a whitelisted attribute by field name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|attr| attr.as_str() == name)
    }
}

impl fmt::Display for ProjectAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed attribute whitelist. Stable for the life of the process.
#[must_use]
pub const fn attributes() -> &'static [ProjectAttribute] {
    &ProjectAttribute::ALL
}

/// Field names of the whitelist, in export order.
#[must_use]
pub fn attribute_names() -> Vec<&'static str> {
    attributes().iter().map(|attr| attr.as_str()).collect()
}

/// Keep only whitelisted fields of a serialized project record.
///
/// Output keys follow whitelist order, whatever the record's order. Fields
/// absent from the record are skipped rather than written as `null`.
#[must_use]
pub fn filter_attributes(record: &Map<String, Value>) -> Map<String, Value> {
    attributes()
        .iter()
        .filter_map(|attr| {
            record
                .get(attr.as_str())
                .map(|value| (attr.as_str().to_string(), value.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn whitelist_matches_curated_list_exactly() {
        assert_eq!(
            attribute_names(),
            vec![
                "name",
                "path",
                "description",
                "issues_enabled",
                "wall_enabled",
                "merge_requests_enabled",
                "wiki_enabled",
                "snippets_enabled",
                "visibility_level",
                "archived",
            ]
        );
    }

    #[test]
    fn whitelist_includes_name_and_visibility() {
        assert!(attributes().contains(&ProjectAttribute::Name));
        assert!(attributes().contains(&ProjectAttribute::VisibilityLevel));
    }

    #[test]
    fn internal_fields_are_not_whitelisted() {
        for field in ["id", "creator_id", "namespace_id", "runners_token", "import_url"] {
            assert_eq!(ProjectAttribute::from_name(field), None, "{field} must not be exportable");
        }
    }

    #[test]
    fn serde_names_match_as_str() {
        for attr in ProjectAttribute::ALL {
            let json = serde_json::to_string(&attr).unwrap();
            assert_eq!(json, format!("\"{}\"", attr.as_str()));
        }
    }

    #[test]
    fn filter_drops_internal_fields() {
        let record = json!({
            "id": 42,
            "archived": false,
            "runners_token": "secret",
            "name": "Gitlab Test",
            "visibility_level": 20,
            "namespace_id": 7,
        });
        let filtered = filter_attributes(record.as_object().unwrap());

        assert_eq!(filtered.len(), 3);
        assert!(!filtered.contains_key("id"));
        assert!(!filtered.contains_key("runners_token"));
        assert!(!filtered.contains_key("namespace_id"));
        assert_eq!(filtered["archived"], json!(false));
        assert_eq!(filtered["name"], json!("Gitlab Test"));
        assert_eq!(filtered["visibility_level"], json!(20));
    }

    #[test]
    fn filter_orders_keys_by_whitelist() {
        let record = json!({
            "archived": true,
            "name": "Gitlab Test",
            "visibility_level": 10,
            "path": "gitlab-test",
        });
        let filtered = filter_attributes(record.as_object().unwrap());

        let keys: Vec<&str> = filtered.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "path", "visibility_level", "archived"]);
    }

    #[test]
    fn filter_of_empty_record_is_empty() {
        assert!(filter_attributes(&Map::new()).is_empty());
    }
}
