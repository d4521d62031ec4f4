//! Event types for reactive UI updates.

use explora_core::ExplorationId;

/// Events emitted by a dispatcher when its state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchEvent {
    /// A fetch was started.
    Loading { exploration: ExplorationId },

    /// Pages arrived; the first one is now shown.
    Ready {
        exploration: ExplorationId,
        pages: usize,
    },

    /// The exploration has no pages.
    Empty { exploration: ExplorationId },

    /// The fetch failed; a retry is possible.
    Failed {
        exploration: ExplorationId,
        error: String,
    },

    /// The displayed page changed.
    PageChanged { index: usize },

    /// The last page was passed. Emitted once per traversal.
    Completed { exploration: ExplorationId },
}
