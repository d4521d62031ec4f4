//! Built-in page renderers.
//!
//! Each renderer validates only the part of `config` it uses. Anything it cannot
//! interpret becomes a [`Block::Placeholder`](crate::view::Block::Placeholder)
//! and the page stays advanceable.

mod accueil;
mod fallback;
mod galerie;
mod quiz;
mod texte;

pub use accueil::AccueilRenderer;
pub use fallback::FallbackRenderer;
pub use galerie::GalerieRenderer;
pub use quiz::QuizRenderer;
pub use texte::TexteRenderer;

#[cfg(test)]
pub(crate) fn test_page(page_type: &str, config: serde_json::Value) -> explora_core::ExplorationPage {
    serde_json::from_value(serde_json::json!({
        "id": "p1",
        "exploration_id": "E1",
        "type": page_type,
        "ordre": 1,
        "nom": "La mare",
        "description": "Une mare forestière",
        "config": config,
    }))
    .unwrap()
}
