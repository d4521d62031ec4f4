//! Registry of page renderers.
//!
//! Page types are open-ended strings chosen server-side, so renderers are
//! looked up at runtime by tag. A tag with no registered renderer resolves to
//! [`Resolved::NotFound`]; callers that must draw something use
//! [`PageRegistry::renderer_for`], which falls back to the generic renderer.

use std::collections::HashMap;
use std::sync::Arc;

use explora_core::ExplorationPage;

use crate::renderers::{
    AccueilRenderer, FallbackRenderer, GalerieRenderer, QuizRenderer, TexteRenderer,
};
use crate::view::{Advance, PageView};

/// Draws one kind of page.
pub trait PageRenderer: Send + Sync {
    /// The page-type tag this renderer handles.
    fn page_type(&self) -> &str;

    /// Produce a view for `page`. `advance` must be exposed on the view once
    /// the user may move on; a bad `config` should yield a placeholder, never
    /// a panic.
    fn render(&self, page: &ExplorationPage, advance: Advance) -> PageView;
}

/// Outcome of a registry lookup.
#[derive(Clone)]
pub enum Resolved {
    Renderer(Arc<dyn PageRenderer>),
    NotFound,
}

impl Resolved {
    /// True when no renderer is registered for the tag.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Resolved::NotFound)
    }
}

/// Holds the registered renderers.
///
/// Create with `PageRegistry::new()` for an empty registry or
/// `PageRegistry::with_defaults()` for the built-in page types.
pub struct PageRegistry {
    renderers: HashMap<String, Arc<dyn PageRenderer>>,
    fallback: Arc<dyn PageRenderer>,
}

impl Default for PageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            renderers: HashMap::new(),
            fallback: Arc::new(FallbackRenderer),
        }
    }

    /// Create a registry with the built-in renderers.
    ///
    /// Registers: accueil, texte, quiz, galerie.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(AccueilRenderer));
        registry.register(Arc::new(TexteRenderer));
        registry.register(Arc::new(QuizRenderer));
        registry.register(Arc::new(GalerieRenderer));
        registry
    }

    /// Register a renderer under its own tag, replacing any previous one.
    pub fn register(&mut self, renderer: Arc<dyn PageRenderer>) {
        self.renderers
            .insert(renderer.page_type().to_string(), renderer);
    }

    /// Look up the renderer for a page-type tag.
    pub fn resolve(&self, page_type: &str) -> Resolved {
        match self.renderers.get(page_type) {
            Some(renderer) => Resolved::Renderer(Arc::clone(renderer)),
            None => Resolved::NotFound,
        }
    }

    /// The renderer for a tag, or the generic fallback.
    pub fn renderer_for(&self, page_type: &str) -> Arc<dyn PageRenderer> {
        match self.resolve(page_type) {
            Resolved::Renderer(renderer) => renderer,
            Resolved::NotFound => Arc::clone(&self.fallback),
        }
    }

    /// Whether a renderer is registered for the tag.
    pub fn contains(&self, page_type: &str) -> bool {
        self.renderers.contains_key(page_type)
    }

    /// All registered tags, sorted.
    pub fn list_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.renderers.keys().map(|s| s.as_str()).collect();
        types.sort_unstable();
        types
    }
}
