//! Screen composition around a dispatcher.
//!
//! The runtime wraps the dispatcher's current page in a [`Screen`] and adds
//! overlays whose visibility depends only on which exploration is shown.

use std::sync::Arc;

use explora_core::ExplorationId;

use crate::config::FloatingActionRule;
use crate::dispatcher::{DispatchState, ExplorationPageDispatcher};
use crate::view::PageView;

/// Auxiliary UI layered over the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    /// Always-visible floating button.
    FloatingAction { label: String, href: String },
}

/// Main area of the screen.
#[derive(Debug, Clone)]
pub enum ScreenBody {
    Unavailable,
    Loading,
    NoContent,
    Error { message: String, retry_label: String },
    Page(PageView),
    Finished,
}

/// Everything a host needs to draw.
#[derive(Debug, Clone)]
pub struct Screen {
    pub exploration: Option<ExplorationId>,
    pub body: ScreenBody,
    pub overlays: Vec<Overlay>,
}

/// Overlays for an exploration, from the static allow-list.
///
/// A rule matches on the exploration id or on its route slug.
pub fn overlays_for(
    rules: &[FloatingActionRule],
    exploration: Option<&ExplorationId>,
    slug: Option<&str>,
) -> Vec<Overlay> {
    let Some(exploration) = exploration else {
        return Vec::new();
    };
    rules
        .iter()
        .filter(|rule| rule.exploration == exploration.as_str() || Some(rule.exploration.as_str()) == slug)
        .map(|rule| Overlay::FloatingAction {
            label: rule.label.clone(),
            href: rule.href.clone(),
        })
        .collect()
}

/// Hosts one exploration session.
#[derive(Clone)]
pub struct ExplorationRuntime {
    dispatcher: ExplorationPageDispatcher,
    rules: Arc<Vec<FloatingActionRule>>,
    slug: Option<String>,
}

impl ExplorationRuntime {
    /// Create a runtime around `dispatcher`.
    pub fn new(dispatcher: ExplorationPageDispatcher, rules: Arc<Vec<FloatingActionRule>>) -> Self {
        Self {
            dispatcher,
            rules,
            slug: None,
        }
    }

    /// Remember the route slug, so slug-keyed overlays match.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// The underlying dispatcher.
    pub fn dispatcher(&self) -> &ExplorationPageDispatcher {
        &self.dispatcher
    }

    /// Load an exploration by id.
    pub async fn load(&self, exploration: Option<&str>) -> DispatchState {
        self.dispatcher.load(exploration).await
    }

    /// Retry after a failed load.
    pub async fn retry(&self) -> DispatchState {
        self.dispatcher.retry().await
    }

    /// Compose the current screen.
    pub fn screen(&self) -> Screen {
        let exploration = self.dispatcher.exploration();
        let body = match self.dispatcher.state() {
            DispatchState::NotYetAvailable => ScreenBody::Unavailable,
            DispatchState::Loading => ScreenBody::Loading,
            DispatchState::Empty => ScreenBody::NoContent,
            DispatchState::Failed(message) => ScreenBody::Error {
                message,
                retry_label: "Réessayer".to_string(),
            },
            DispatchState::Ready { .. } => match self.dispatcher.current_view() {
                Some(view) => ScreenBody::Page(view),
                None => ScreenBody::Loading,
            },
            DispatchState::Completed => ScreenBody::Finished,
        };
        let overlays = overlays_for(&self.rules, exploration.as_ref(), self.slug.as_deref());

        Screen {
            exploration,
            body,
            overlays,
        }
    }
}
