//! Renderer-agnostic view model.
//!
//! Renderers describe a page as a [`PageView`]; hosts (terminal, desktop, web)
//! decide how the blocks are drawn.

use std::fmt;
use std::sync::Arc;

use explora_core::ExplorationPage;

/// Callback invoked when the user is ready to leave the current page.
///
/// Passed explicitly to renderers; a renderer that gates progression (a quiz
/// waiting for an answer, say) wraps it in its own callback.
#[derive(Clone)]
pub struct Advance(Arc<dyn Fn() + Send + Sync>);

impl Advance {
    /// Wrap a callback.
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// A callback that does nothing.
    pub fn noop() -> Self {
        Self::new(|| {})
    }

    /// Run the callback.
    pub fn invoke(&self) {
        (self.0)()
    }
}

impl fmt::Debug for Advance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Advance(..)")
    }
}

/// A unit of page content.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading(String),
    Paragraph(String),
    /// A question with answer options. `correct` is the index of the right
    /// answer when the page declares one.
    Choices {
        prompt: String,
        options: Vec<String>,
        correct: Option<usize>,
    },
    Media {
        url: String,
        caption: Option<String>,
    },
    /// Shown in place of content the renderer could not interpret.
    Placeholder(String),
}

/// What a renderer produced for one page.
#[derive(Debug, Clone)]
pub struct PageView {
    pub page_id: String,
    pub page_type: String,
    pub title: String,
    pub blocks: Vec<Block>,
    /// True when drawn by the generic fallback renderer.
    pub fallback: bool,
    pub advance_label: String,
    advance: Option<Advance>,
}

impl PageView {
    /// Start an empty view for `page`.
    pub fn new(page: &ExplorationPage) -> Self {
        Self {
            page_id: page.id.clone(),
            page_type: page.page_type.clone(),
            title: page.nom.clone(),
            blocks: Vec::new(),
            fallback: false,
            advance_label: "Continuer".to_string(),
            advance: None,
        }
    }

    /// Append a block.
    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    /// Expose an advance action with the given label.
    pub fn with_advance(mut self, advance: Advance, label: impl Into<String>) -> Self {
        self.advance = Some(advance);
        self.advance_label = label.into();
        self
    }

    /// Mark the view as drawn by the fallback renderer.
    pub fn as_fallback(mut self) -> Self {
        self.fallback = true;
        self
    }

    /// Whether the page exposes an advance action.
    pub fn can_advance(&self) -> bool {
        self.advance.is_some()
    }

    /// Trigger the advance action. Returns false when none is exposed.
    pub fn advance(&self) -> bool {
        match &self.advance {
            Some(advance) => {
                advance.invoke();
                true
            }
            None => false,
        }
    }

    /// Placeholder blocks, if any.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Placeholder(text) => Some(text.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_advance_is_invoked_through_view() {
        let page: ExplorationPage = serde_json::from_value(serde_json::json!({
            "id": "p1", "exploration_id": "E1", "type": "texte", "ordre": 1, "nom": "Titre"
        }))
        .unwrap();

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let view = PageView::new(&page)
            .with_block(Block::Heading("Titre".into()))
            .with_advance(Advance::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }), "Suivant");

        assert!(view.can_advance());
        assert!(view.advance());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(view.advance_label, "Suivant");

        let silent = PageView::new(&page);
        assert!(!silent.advance());
    }
}
