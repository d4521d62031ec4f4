//! JSON document backend.
//!
//! Accepts either a bare array of page records, or a document of the form
//!
//! ```json
//! {
//!   "explorations": [{ "id": "E1", "slug": "mare" }],
//!   "pages": [ ... ]
//! }
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use explora_core::{ExplorationId, ExplorationPage};
use serde::Deserialize;

use crate::backend::{PageBackend, StaticBackend};
use crate::error::BackendResult;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Document {
    Pages(Vec<ExplorationPage>),
    Full {
        #[serde(default)]
        explorations: Vec<ExplorationEntry>,
        pages: Vec<ExplorationPage>,
    },
}

#[derive(Debug, Deserialize)]
struct ExplorationEntry {
    id: ExplorationId,
    #[serde(default)]
    slug: Option<String>,
}

/// Serves pages from a JSON file.
///
/// The file is re-read on every call so edits show up on the next fetch.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Create a backend over `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the file on the calling thread.
    pub fn load_blocking(&self) -> BackendResult<StaticBackend> {
        let contents = std::fs::read_to_string(&self.path)?;
        let backend = match serde_json::from_str::<Document>(&contents)? {
            Document::Pages(pages) => StaticBackend::new(pages),
            Document::Full { explorations, pages } => explorations
                .into_iter()
                .fold(StaticBackend::new(pages), |backend, entry| match entry.slug {
                    Some(slug) => backend.with_slug(slug, entry.id),
                    None => backend,
                }),
        };
        Ok(backend)
    }

    async fn load(&self) -> BackendResult<StaticBackend> {
        let backend = self.clone();
        tokio::task::spawn_blocking(move || backend.load_blocking()).await?
    }
}

#[async_trait]
impl PageBackend for JsonFileBackend {
    fn name(&self) -> &str {
        "json-file"
    }

    async fn list_pages(&self, exploration: &ExplorationId) -> BackendResult<Vec<ExplorationPage>> {
        Ok(self.load().await?.pages_for(exploration))
    }

    async fn resolve_slug(&self, slug: &str) -> BackendResult<Option<ExplorationId>> {
        self.load().await?.resolve_slug(slug).await
    }
}
