use explora_core::ExplorationPage;

use crate::registry::PageRenderer;
use crate::view::{Advance, Block, PageView};

/// Generic view for page types this build does not know.
///
/// Shows the title and description and always lets the user continue, so an
/// unknown type never blocks a traversal.
pub struct FallbackRenderer;

impl PageRenderer for FallbackRenderer {
    fn page_type(&self) -> &str {
        "*"
    }

    fn render(&self, page: &ExplorationPage, advance: Advance) -> PageView {
        let mut view = PageView::new(page).with_block(Block::Heading(page.nom.clone()));
        if let Some(description) = page.description.as_deref().filter(|d| !d.is_empty()) {
            view = view.with_block(Block::Paragraph(description.to_string()));
        }
        view.as_fallback().with_advance(advance, "Continuer")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderers::test_page;
    use serde_json::json;

    #[test]
    fn test_shows_title_and_description() {
        let view = FallbackRenderer.render(&test_page("realite-augmentee", json!({})), Advance::noop());
        assert!(view.fallback);
        assert_eq!(
            view.blocks,
            vec![
                Block::Heading("La mare".into()),
                Block::Paragraph("Une mare forestière".into())
            ]
        );
        assert!(view.can_advance());
    }
}
