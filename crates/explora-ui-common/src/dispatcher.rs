//! Exploration page dispatcher.
//!
//! Turns an exploration id into the sequence of page views a user walks
//! through. States:
//!
//! ```text
//! NotYetAvailable ──load(id)──► Loading ──ok, 0 pages──► Empty
//!                                  │  └──err──► Failed ──retry──► Loading
//!                                  └──ok──► Ready(0) ──advance──► Ready(1) … ──advance──► Completed
//! ```
//!
//! Every `load` bumps a generation counter. A fetch that completes after a
//! newer `load` has started is discarded, so the dispatcher never shows pages
//! of an exploration the user already navigated away from.

use std::sync::{Arc, Weak};

use explora_core::{ExplorationId, ExplorationPage};
use parking_lot::Mutex;
use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::events::DispatchEvent;
use crate::registry::PageRegistry;
use crate::source::{FetchOutcome, PageDataSource};
use crate::view::{Advance, PageView};

/// Where a dispatcher is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchState {
    /// No exploration id yet; nothing requested.
    NotYetAvailable,
    /// Fetch in flight.
    Loading,
    /// The exploration has no pages.
    Empty,
    /// The fetch failed; `retry` is available.
    Failed(String),
    /// Page `index` of `len` is displayed.
    Ready { index: usize, len: usize },
    /// The user went past the last page.
    Completed,
}

struct Inner {
    exploration: Option<ExplorationId>,
    generation: u64,
    state: DispatchState,
    pages: Arc<Vec<ExplorationPage>>,
}

struct Shared {
    inner: Mutex<Inner>,
    events_tx: broadcast::Sender<DispatchEvent>,
}

impl Shared {
    /// Move past page `from` if it is still the current page of `generation`.
    fn advance_from(&self, generation: u64, from: Option<usize>) -> bool {
        let event = {
            let mut inner = self.inner.lock();
            if inner.generation != generation {
                return false;
            }
            let (index, len) = match inner.state {
                DispatchState::Ready { index, len } => (index, len),
                _ => return false,
            };
            if from.is_some_and(|from| from != index) {
                return false;
            }

            if index + 1 < len {
                inner.state = DispatchState::Ready {
                    index: index + 1,
                    len,
                };
                DispatchEvent::PageChanged { index: index + 1 }
            } else {
                inner.state = DispatchState::Completed;
                let Some(exploration) = inner.exploration.clone() else {
                    return true;
                };
                info!(exploration = %exploration, "exploration completed");
                DispatchEvent::Completed { exploration }
            }
        };

        let _ = self.events_tx.send(event);
        true
    }
}

/// Drives one exploration session.
///
/// Cloning yields another handle to the same session.
#[derive(Clone)]
pub struct ExplorationPageDispatcher {
    source: Arc<PageDataSource>,
    registry: Arc<PageRegistry>,
    shared: Arc<Shared>,
}

impl ExplorationPageDispatcher {
    /// Create a dispatcher in the `NotYetAvailable` state.
    pub fn new(source: Arc<PageDataSource>, registry: Arc<PageRegistry>) -> Self {
        let (events_tx, _) = broadcast::channel(64);
        Self {
            source,
            registry,
            shared: Arc::new(Shared {
                inner: Mutex::new(Inner {
                    exploration: None,
                    generation: 0,
                    state: DispatchState::NotYetAvailable,
                    pages: Arc::new(Vec::new()),
                }),
                events_tx,
            }),
        }
    }

    /// Show the exploration named by raw route input.
    ///
    /// Blank or missing input moves to `NotYetAvailable` without a fetch.
    /// Returns the state once this load settles (or is superseded).
    pub async fn load(&self, exploration: Option<&str>) -> DispatchState {
        let id = exploration.and_then(ExplorationId::parse);
        let generation = {
            let mut inner = self.shared.inner.lock();
            inner.generation += 1;
            inner.exploration = id.clone();
            inner.pages = Arc::new(Vec::new());
            inner.state = match id {
                Some(_) => DispatchState::Loading,
                None => DispatchState::NotYetAvailable,
            };
            inner.generation
        };

        self.fetch_into(id, generation).await
    }

    /// Fetch again after a failure. Does nothing in any other state.
    pub async fn retry(&self) -> DispatchState {
        let pending = {
            let mut inner = self.shared.inner.lock();
            match (&inner.state, inner.exploration.clone()) {
                (DispatchState::Failed(_), Some(id)) => {
                    inner.generation += 1;
                    inner.state = DispatchState::Loading;
                    Some((id, inner.generation))
                }
                _ => None,
            }
        };

        match pending {
            Some((id, generation)) => self.fetch_into(Some(id), generation).await,
            None => self.state(),
        }
    }

    async fn fetch_into(&self, id: Option<ExplorationId>, generation: u64) -> DispatchState {
        if let Some(id) = &id {
            let _ = self.shared.events_tx.send(DispatchEvent::Loading {
                exploration: id.clone(),
            });
        }

        let result = self
            .source
            .fetch_pages(id.as_ref().map(ExplorationId::as_str))
            .await;

        let (state, event) = {
            let mut inner = self.shared.inner.lock();
            if inner.generation != generation {
                debug!(exploration = ?id, "discarding result of superseded load");
                return inner.state.clone();
            }

            let (id, pages) = match (id, result) {
                (Some(id), Ok(FetchOutcome::Pages(pages))) => (id, Ok(pages)),
                (Some(id), Err(e)) => (id, Err(e)),
                _ => {
                    inner.state = DispatchState::NotYetAvailable;
                    return inner.state.clone();
                }
            };

            match pages {
                Ok(pages) if pages.is_empty() => {
                    inner.state = DispatchState::Empty;
                    (inner.state.clone(), DispatchEvent::Empty { exploration: id })
                }
                Ok(pages) => {
                    let len = pages.len();
                    inner.pages = pages;
                    inner.state = DispatchState::Ready { index: 0, len };
                    (
                        inner.state.clone(),
                        DispatchEvent::Ready {
                            exploration: id,
                            pages: len,
                        },
                    )
                }
                Err(e) => {
                    let error = e.to_string();
                    inner.state = DispatchState::Failed(error.clone());
                    (
                        inner.state.clone(),
                        DispatchEvent::Failed {
                            exploration: id,
                            error,
                        },
                    )
                }
            }
        };

        let _ = self.shared.events_tx.send(event);
        state
    }

    /// Move to the next page, or to `Completed` from the last one.
    ///
    /// A no-op outside `Ready`; in particular, repeated calls in `Completed`
    /// change nothing. Returns whether the state changed.
    pub fn advance(&self) -> bool {
        let generation = self.shared.inner.lock().generation;
        self.shared.advance_from(generation, None)
    }

    /// Current state.
    pub fn state(&self) -> DispatchState {
        self.shared.inner.lock().state.clone()
    }

    /// Exploration currently shown, if any.
    pub fn exploration(&self) -> Option<ExplorationId> {
        self.shared.inner.lock().exploration.clone()
    }

    /// The page currently displayed.
    pub fn current_page(&self) -> Option<ExplorationPage> {
        let inner = self.shared.inner.lock();
        match inner.state {
            DispatchState::Ready { index, .. } => inner.pages.get(index).cloned(),
            _ => None,
        }
    }

    /// Render the current page.
    ///
    /// The view's advance action is bound to this exact page: once the
    /// dispatcher has moved on (or loaded another exploration), invoking it
    /// does nothing.
    pub fn current_view(&self) -> Option<PageView> {
        let (page, index, generation) = {
            let inner = self.shared.inner.lock();
            match inner.state {
                DispatchState::Ready { index, .. } => {
                    (inner.pages.get(index).cloned()?, index, inner.generation)
                }
                _ => return None,
            }
        };

        let shared: Weak<Shared> = Arc::downgrade(&self.shared);
        let advance = Advance::new(move || {
            if let Some(shared) = shared.upgrade() {
                shared.advance_from(generation, Some(index));
            }
        });

        let renderer = self.registry.renderer_for(&page.page_type);
        Some(renderer.render(&page, advance))
    }

    /// Subscribe to state-change events.
    pub fn subscribe(&self) -> broadcast::Receiver<DispatchEvent> {
        self.shared.events_tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use explora_io::StaticBackend;
    use serde_json::json;
    use std::time::Duration;

    fn dispatcher(pages: Vec<ExplorationPage>) -> ExplorationPageDispatcher {
        let source = PageDataSource::new(Arc::new(StaticBackend::new(pages)), Duration::from_secs(300));
        ExplorationPageDispatcher::new(Arc::new(source), Arc::new(PageRegistry::with_defaults()))
    }

    fn page(id: &str, page_type: &str, ordre: i32) -> ExplorationPage {
        serde_json::from_value(json!({
            "id": id, "exploration_id": "E1", "type": page_type, "ordre": ordre, "nom": id
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_starts_not_yet_available() {
        let d = dispatcher(vec![]);
        assert_eq!(d.state(), DispatchState::NotYetAvailable);
        assert_eq!(d.load(None).await, DispatchState::NotYetAvailable);
        assert!(d.current_view().is_none());
    }

    #[tokio::test]
    async fn test_blank_reload_clears_shown_pages() {
        let d = dispatcher(vec![page("a", "texte", 1)]);
        assert_eq!(d.load(Some("E1")).await, DispatchState::Ready { index: 0, len: 1 });

        let mut events = d.subscribe();
        assert_eq!(d.load(Some("   ")).await, DispatchState::NotYetAvailable);
        assert!(d.exploration().is_none());
        assert!(d.current_page().is_none());
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_empty_exploration() {
        let d = dispatcher(vec![page("x", "texte", 1)]);
        assert_eq!(d.load(Some("E9")).await, DispatchState::Empty);
        assert!(d.current_view().is_none());
    }

    #[tokio::test]
    async fn test_advance_is_noop_when_not_ready() {
        let d = dispatcher(vec![]);
        assert!(!d.advance());
        assert_eq!(d.state(), DispatchState::NotYetAvailable);
    }

    #[tokio::test]
    async fn test_completed_fires_once() {
        let d = dispatcher(vec![page("a", "texte", 1)]);
        let mut events = d.subscribe();
        d.load(Some("E1")).await;

        assert!(d.advance());
        assert_eq!(d.state(), DispatchState::Completed);
        assert!(!d.advance());
        assert!(!d.advance());

        let mut completed = 0;
        while let Ok(event) = events.try_recv() {
            if matches!(event, DispatchEvent::Completed { .. }) {
                completed += 1;
            }
        }
        assert_eq!(completed, 1);
    }

    #[tokio::test]
    async fn test_view_advance_is_bound_to_its_page() {
        let d = dispatcher(vec![page("a", "texte", 1), page("b", "texte", 2), page("c", "texte", 3)]);
        d.load(Some("E1")).await;

        let first = d.current_view().unwrap();
        assert!(first.advance());
        assert_eq!(d.state(), DispatchState::Ready { index: 1, len: 3 });

        // Pressing the old page's button again must not skip page b.
        first.advance();
        assert_eq!(d.state(), DispatchState::Ready { index: 1, len: 3 });
        assert_eq!(d.current_page().unwrap().id, "b");
    }
}
