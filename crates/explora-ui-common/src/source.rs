//! Cached page reads.
//!
//! The [`PageDataSource`] turns an exploration id into its ordered pages. Results
//! are cached per id and served from memory until they are older than the
//! staleness window. Concurrent requests for the same id share one backend read.

use std::sync::{Arc, Weak};
use std::time::Duration;

use dashmap::DashMap;
use explora_core::{sort_by_ordre, ExplorationId, ExplorationPage};
use explora_io::PageBackend;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Result of a page request.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// No identifier yet; nothing was requested.
    NotYetAvailable,

    /// Pages sorted ascending by `ordre`.
    Pages(Arc<Vec<ExplorationPage>>),
}

struct CacheEntry {
    pages: Arc<Vec<ExplorationPage>>,
    fetched_at: Instant,
}

/// Reads exploration pages through a backend, with caching.
pub struct PageDataSource {
    backend: Arc<dyn PageBackend>,
    stale_after: Duration,
    cache: DashMap<ExplorationId, CacheEntry>,
    in_flight: DashMap<ExplorationId, Arc<Mutex<()>>>,
}

impl PageDataSource {
    /// Create a data source over `backend`.
    pub fn new(backend: Arc<dyn PageBackend>, stale_after: Duration) -> Self {
        Self {
            backend,
            stale_after,
            cache: DashMap::new(),
            in_flight: DashMap::new(),
        }
    }

    /// The staleness window.
    pub fn stale_after(&self) -> Duration {
        self.stale_after
    }

    /// Fetch pages for raw route input.
    ///
    /// Missing or blank input yields [`FetchOutcome::NotYetAvailable`] without
    /// touching the backend.
    pub async fn fetch_pages(&self, exploration: Option<&str>) -> Result<FetchOutcome> {
        match exploration.and_then(ExplorationId::parse) {
            Some(id) => Ok(FetchOutcome::Pages(self.fetch(&id).await?)),
            None => Ok(FetchOutcome::NotYetAvailable),
        }
    }

    /// Fetch pages for an exploration, sorted ascending by `ordre`.
    ///
    /// A fresh cache entry is returned as-is (same `Arc`).
    pub async fn fetch(&self, id: &ExplorationId) -> Result<Arc<Vec<ExplorationPage>>> {
        if let Some(pages) = self.fresh(id) {
            debug!(exploration = %id, "page cache hit");
            return Ok(pages);
        }

        let gate = Arc::clone(self.in_flight.entry(id.clone()).or_default().value());
        let result = {
            let _guard = gate.lock().await;
            self.read_through(id).await
        };

        // The map and this caller are the only holders: nobody is waiting.
        self.in_flight
            .remove_if(id, |_, held| Arc::ptr_eq(held, &gate) && Arc::strong_count(held) == 2);
        result
    }

    async fn read_through(&self, id: &ExplorationId) -> Result<Arc<Vec<ExplorationPage>>> {
        // Another caller may have filled the cache while we waited.
        if let Some(pages) = self.fresh(id) {
            debug!(exploration = %id, "page cache filled by concurrent read");
            return Ok(pages);
        }

        debug!(exploration = %id, backend = self.backend.name(), "page cache miss");
        let mut pages = self.backend.list_pages(id).await.map_err(|source| {
            warn!(exploration = %id, error = %source, "page read failed");
            Error::Fetch {
                exploration: id.clone(),
                source,
            }
        })?;
        sort_by_ordre(&mut pages);

        let pages = Arc::new(pages);
        self.cache.insert(
            id.clone(),
            CacheEntry {
                pages: Arc::clone(&pages),
                fetched_at: Instant::now(),
            },
        );
        Ok(pages)
    }

    fn fresh(&self, id: &ExplorationId) -> Option<Arc<Vec<ExplorationPage>>> {
        self.cache
            .get(id)
            .filter(|entry| entry.fetched_at.elapsed() < self.stale_after)
            .map(|entry| Arc::clone(&entry.pages))
    }

    /// Whether a fresh entry is cached for `id`.
    pub fn is_cached(&self, id: &ExplorationId) -> bool {
        self.fresh(id).is_some()
    }

    /// Drop the cached pages of one exploration.
    pub fn invalidate(&self, id: &ExplorationId) {
        if self.cache.remove(id).is_some() {
            debug!(exploration = %id, "page cache invalidated");
        }
    }

    /// Wrap `on_success` so the cache entry for `id` is dropped first.
    ///
    /// For actions that change an exploration upstream: the next read after
    /// the callback fires goes to the backend.
    pub fn invalidate_then<F>(
        self: &Arc<Self>,
        id: ExplorationId,
        on_success: F,
    ) -> impl Fn() + Send + Sync + 'static
    where
        F: Fn() + Send + Sync + 'static,
    {
        let source: Weak<Self> = Arc::downgrade(self);
        move || {
            if let Some(source) = source.upgrade() {
                source.invalidate(&id);
            }
            on_success();
        }
    }

    /// Map a route slug to an exploration id through the backend.
    pub async fn resolve_slug(&self, slug: &str) -> Result<Option<ExplorationId>> {
        self.backend
            .resolve_slug(slug)
            .await
            .map_err(|source| Error::Resolve {
                slug: slug.to_string(),
                source,
            })
    }
}
