use explora_core::ExplorationPage;
use serde_json::Value;

use crate::registry::PageRenderer;
use crate::view::{Advance, Block, PageView};

/// Reading page: `config.paragraphes` is a list of strings. Without it the
/// description is shown instead.
pub struct TexteRenderer;

impl PageRenderer for TexteRenderer {
    fn page_type(&self) -> &str {
        "texte"
    }

    fn render(&self, page: &ExplorationPage, advance: Advance) -> PageView {
        let mut view = PageView::new(page).with_block(Block::Heading(page.nom.clone()));

        match page.config.get_array("paragraphes") {
            Some(paragraphes) => {
                let texts: Vec<&str> = paragraphes.iter().filter_map(Value::as_str).collect();
                if texts.len() != paragraphes.len() {
                    view = view.with_block(Block::Placeholder(
                        "Une partie du texte n'a pas pu être affichée.".to_string(),
                    ));
                }
                for text in texts {
                    view = view.with_block(Block::Paragraph(text.to_string()));
                }
            }
            None => {
                if let Some(description) = &page.description {
                    view = view.with_block(Block::Paragraph(description.clone()));
                }
            }
        }

        view.with_advance(advance, "Continuer")
    }
}
