//! Exploration pages and their ordering.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::payload::PageConfig;

/// Identifier of an exploration.
///
/// Never empty: use [`ExplorationId::parse`] to turn route input into an id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExplorationId(String);

impl ExplorationId {
    /// Parse an identifier, returning `None` for empty or blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExplorationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ExplorationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One ordered step of an exploration.
///
/// Records are authored server-side and only ever read here. Unknown fields in
/// the payload are ignored so newer backends can add columns freely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorationPage {
    /// Opaque unique identifier.
    pub id: String,

    /// Owning exploration.
    pub exploration_id: ExplorationId,

    /// Rendering tag. Open-ended: new values may appear before any client
    /// knows how to draw them.
    #[serde(rename = "type")]
    pub page_type: String,

    /// Position among sibling pages (ascending).
    pub ordre: i32,

    /// Display title.
    pub nom: String,

    /// Optional free text.
    #[serde(default)]
    pub description: Option<String>,

    /// Type-dependent payload, validated by the renderer for `page_type`.
    #[serde(default)]
    pub config: PageConfig,

    #[serde(default)]
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

impl ExplorationPage {
    /// Description text, or an empty string.
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Sort pages ascending by `ordre`.
///
/// Stable: pages sharing an `ordre` keep their relative input order.
pub fn sort_by_ordre(pages: &mut [ExplorationPage]) {
    pages.sort_by_key(|p| p.ordre);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page(id: &str, ordre: i32) -> ExplorationPage {
        serde_json::from_value(json!({
            "id": id,
            "exploration_id": "E1",
            "type": "texte",
            "ordre": ordre,
            "nom": id,
        }))
        .unwrap()
    }

    #[test]
    fn test_parse_rejects_blank_ids() {
        assert!(ExplorationId::parse("").is_none());
        assert!(ExplorationId::parse("   ").is_none());
        assert_eq!(ExplorationId::parse(" E1 ").unwrap().as_str(), "E1");
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let page: ExplorationPage = serde_json::from_value(json!({
            "id": "p1",
            "exploration_id": "E1",
            "type": "accueil",
            "ordre": 1,
            "nom": "Bienvenue",
            "description": "Au bord de l'eau",
            "config": { "sous_titre": "Balade" },
            "created_at": "2024-05-01T10:00:00Z",
            "updated_at": "2024-05-02T10:00:00Z",
            "theme_color": "#00ff00"
        }))
        .unwrap();

        assert_eq!(page.page_type, "accueil");
        assert_eq!(page.description_or_empty(), "Au bord de l'eau");
        assert_eq!(page.config.get_str("sous_titre"), Some("Balade"));
        assert!(page.updated_at > page.created_at);
    }

    #[test]
    fn test_optional_fields_default() {
        let page = page("p1", 1);
        assert!(page.description.is_none());
        assert!(page.config.is_empty());
        assert_eq!(page.description_or_empty(), "");
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let mut pages = vec![page("c", 3), page("a1", 1), page("b", 2), page("a2", 1)];
        sort_by_ordre(&mut pages);

        let ids: Vec<&str> = pages.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "a2", "b", "c"]);
    }

    #[test]
    fn test_sort_tolerates_gaps_and_negatives() {
        let mut pages = vec![page("x", 40), page("y", -1), page("z", 7)];
        sort_by_ordre(&mut pages);

        let ids: Vec<&str> = pages.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["y", "z", "x"]);
    }
}
