//! The backend read interface.

use std::collections::HashMap;

use async_trait::async_trait;
use explora_core::{ExplorationId, ExplorationPage};

use crate::error::BackendResult;

/// Read access to exploration pages.
///
/// Implementations return pages in whatever order the store yields them;
/// ordering is applied by the caller.
#[async_trait]
pub trait PageBackend: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// List every page belonging to `exploration`.
    async fn list_pages(&self, exploration: &ExplorationId) -> BackendResult<Vec<ExplorationPage>>;

    /// Map a URL slug to an exploration id.
    ///
    /// Returns `Ok(None)` when no exploration has that slug.
    async fn resolve_slug(&self, slug: &str) -> BackendResult<Option<ExplorationId>>;
}

/// In-memory backend.
#[derive(Debug, Default, Clone)]
pub struct StaticBackend {
    pages: Vec<ExplorationPage>,
    slugs: HashMap<String, ExplorationId>,
}

impl StaticBackend {
    /// Create a backend serving `pages`.
    pub fn new(pages: Vec<ExplorationPage>) -> Self {
        Self {
            pages,
            slugs: HashMap::new(),
        }
    }

    /// Register a slug for an exploration.
    pub fn with_slug(mut self, slug: impl Into<String>, id: ExplorationId) -> Self {
        self.slugs.insert(slug.into(), id);
        self
    }

    /// Pages in storage order, for `exploration`.
    pub fn pages_for(&self, exploration: &ExplorationId) -> Vec<ExplorationPage> {
        self.pages
            .iter()
            .filter(|p| &p.exploration_id == exploration)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl PageBackend for StaticBackend {
    fn name(&self) -> &str {
        "static"
    }

    async fn list_pages(&self, exploration: &ExplorationId) -> BackendResult<Vec<ExplorationPage>> {
        Ok(self.pages_for(exploration))
    }

    async fn resolve_slug(&self, slug: &str) -> BackendResult<Option<ExplorationId>> {
        Ok(self.slugs.get(slug).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page(id: &str, exploration: &str) -> ExplorationPage {
        serde_json::from_value(json!({
            "id": id,
            "exploration_id": exploration,
            "type": "texte",
            "ordre": 1,
            "nom": id,
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_static_backend_filters_by_exploration() {
        let backend = StaticBackend::new(vec![page("a", "E1"), page("b", "E2"), page("c", "E1")]);
        let id = ExplorationId::parse("E1").unwrap();

        let pages = backend.list_pages(&id).await.unwrap();
        let ids: Vec<&str> = pages.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[tokio::test]
    async fn test_static_backend_slugs() {
        let id = ExplorationId::parse("E1").unwrap();
        let backend = StaticBackend::default().with_slug("mare-aux-grenouilles", id.clone());

        assert_eq!(backend.resolve_slug("mare-aux-grenouilles").await.unwrap(), Some(id));
        assert_eq!(backend.resolve_slug("inconnue").await.unwrap(), None);
    }
}
