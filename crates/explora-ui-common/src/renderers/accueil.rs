use explora_core::ExplorationPage;

use crate::registry::PageRenderer;
use crate::view::{Advance, Block, PageView};

/// Welcome page opening an exploration.
///
/// Optional `config.sous_titre` is shown under the title.
pub struct AccueilRenderer;

impl PageRenderer for AccueilRenderer {
    fn page_type(&self) -> &str {
        "accueil"
    }

    fn render(&self, page: &ExplorationPage, advance: Advance) -> PageView {
        let mut view = PageView::new(page).with_block(Block::Heading(page.nom.clone()));
        if let Some(sous_titre) = page.config.get_str("sous_titre") {
            view = view.with_block(Block::Paragraph(sous_titre.to_string()));
        }
        if let Some(description) = &page.description {
            view = view.with_block(Block::Paragraph(description.clone()));
        }
        let label = page.config.get_str("bouton").unwrap_or("Commencer").to_string();
        view.with_advance(advance, label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderers::test_page;
    use serde_json::json;

    #[test]
    fn test_renders_subtitle_and_custom_button() {
        let page = test_page("accueil", json!({ "sous_titre": "Balade du matin", "bouton": "C'est parti" }));
        let view = AccueilRenderer.render(&page, Advance::noop());

        assert_eq!(view.blocks[0], Block::Heading("La mare".into()));
        assert_eq!(view.blocks[1], Block::Paragraph("Balade du matin".into()));
        assert_eq!(view.advance_label, "C'est parti");
        assert!(!view.fallback);
    }

    #[test]
    fn test_defaults_without_config() {
        let page = test_page("accueil", json!(null));
        let view = AccueilRenderer.render(&page, Advance::noop());

        assert_eq!(view.blocks.len(), 2);
        assert_eq!(view.advance_label, "Commencer");
    }
}
