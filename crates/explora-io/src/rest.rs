//! Hosted database backend.
//!
//! The database exposes its tables over a PostgREST-style HTTP interface:
//! filters are query parameters of the form `column=eq.value` and the API
//! key travels both as an `apikey` header and as a bearer token.

use std::time::Duration;

use async_trait::async_trait;
use explora_core::{ExplorationId, ExplorationPage};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::backend::PageBackend;
use crate::error::{BackendError, BackendResult};

const PAGES_TABLE: &str = "exploration_pages";
const EXPLORATIONS_TABLE: &str = "explorations";

/// Connection options for [`RestBackend`].
#[derive(Debug, Clone)]
pub struct RestBackendOptions {
    /// Project URL, e.g. `https://xyz.example.co`.
    pub url: String,
    /// Public (anon) API key.
    pub api_key: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl RestBackendOptions {
    /// Options for `url` with no key and a 10 second timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: None,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Reads pages from the hosted database.
#[derive(Clone)]
pub struct RestBackend {
    base_url: String,
    api_key: Option<String>,
    agent: ureq::Agent,
}

#[derive(Debug, Deserialize)]
struct ExplorationRow {
    id: ExplorationId,
}

impl RestBackend {
    /// Create a backend from connection options.
    pub fn new(options: RestBackendOptions) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(options.timeout).build();
        Self {
            base_url: options.url.trim_end_matches('/').to_string(),
            api_key: options.api_key,
            agent,
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn get(&self, url: &str) -> ureq::Request {
        let mut request = self.agent.get(url).set("Accept", "application/json");
        if let Some(key) = &self.api_key {
            request = request
                .set("apikey", key)
                .set("Authorization", &format!("Bearer {key}"));
        }
        request
    }

    /// Blocking page listing.
    pub fn list_pages_blocking(&self, exploration: &ExplorationId) -> BackendResult<Vec<ExplorationPage>> {
        let url = self.table_url(PAGES_TABLE);
        let request = self
            .get(&url)
            .query("exploration_id", &format!("eq.{exploration}"))
            .query("select", "*")
            .query("order", "ordre.asc");

        let pages: Vec<ExplorationPage> = read_json(request, &url)?;
        debug!(exploration = %exploration, count = pages.len(), "listed pages");
        Ok(pages)
    }

    /// Blocking slug lookup.
    pub fn resolve_slug_blocking(&self, slug: &str) -> BackendResult<Option<ExplorationId>> {
        let url = self.table_url(EXPLORATIONS_TABLE);
        let request = self
            .get(&url)
            .query("slug", &format!("eq.{slug}"))
            .query("select", "id")
            .query("limit", "1");

        let rows: Vec<ExplorationRow> = read_json(request, &url)?;
        Ok(rows.into_iter().next().map(|row| row.id))
    }
}

fn read_json<T: serde::de::DeserializeOwned>(request: ureq::Request, url: &str) -> BackendResult<T> {
    let response = match request.call() {
        Ok(response) => response,
        Err(ureq::Error::Status(status, _)) => {
            warn!(status, url, "backend rejected request");
            return Err(BackendError::Http {
                status,
                url: url.to_string(),
            });
        }
        Err(ureq::Error::Transport(t)) => return Err(BackendError::Transport(t.to_string())),
    };

    response
        .into_json::<T>()
        .map_err(|e| BackendError::Decode(e.to_string()))
}

#[async_trait]
impl PageBackend for RestBackend {
    fn name(&self) -> &str {
        "rest"
    }

    async fn list_pages(&self, exploration: &ExplorationId) -> BackendResult<Vec<ExplorationPage>> {
        let backend = self.clone();
        let exploration = exploration.clone();
        tokio::task::spawn_blocking(move || backend.list_pages_blocking(&exploration)).await?
    }

    async fn resolve_slug(&self, slug: &str) -> BackendResult<Option<ExplorationId>> {
        let backend = self.clone();
        let slug = slug.to_string();
        tokio::task::spawn_blocking(move || backend.resolve_slug_blocking(&slug)).await?
    }
}
