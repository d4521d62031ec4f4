use explora_core::ExplorationPage;
use serde::Deserialize;

use crate::registry::PageRenderer;
use crate::view::{Advance, Block, PageView};

#[derive(Debug, Deserialize)]
struct Image {
    url: String,
    #[serde(default)]
    legende: Option<String>,
}

/// Photo gallery: `config.images = [{ url, legende? }, ..]`.
///
/// Entries that do not parse are skipped.
pub struct GalerieRenderer;

impl PageRenderer for GalerieRenderer {
    fn page_type(&self) -> &str {
        "galerie"
    }

    fn render(&self, page: &ExplorationPage, advance: Advance) -> PageView {
        let mut view = PageView::new(page).with_block(Block::Heading(page.nom.clone()));

        let images: Vec<Image> = page
            .config
            .get_array("images")
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| Image::deserialize(item).ok())
                    .collect()
            })
            .unwrap_or_default();

        if images.is_empty() {
            view = view.with_block(Block::Placeholder("Aucune image à afficher.".to_string()));
        }
        for image in images {
            view = view.with_block(Block::Media {
                url: image.url,
                caption: image.legende,
            });
        }

        view.with_advance(advance, "Continuer")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderers::test_page;
    use serde_json::json;

    #[test]
    fn test_skips_bad_entries() {
        let page = test_page(
            "galerie",
            json!({ "images": [
                { "url": "https://cdn.example.org/heron.jpg", "legende": "Héron cendré" },
                { "legende": "sans url" },
                { "url": "https://cdn.example.org/mare.jpg" }
            ]}),
        );
        let view = GalerieRenderer.render(&page, Advance::noop());

        let media: Vec<&Block> = view.blocks.iter().filter(|b| matches!(b, Block::Media { .. })).collect();
        assert_eq!(media.len(), 2);
        assert_eq!(view.placeholders().count(), 0);
    }

    #[test]
    fn test_missing_images_is_placeholder() {
        let view = GalerieRenderer.render(&test_page("galerie", json!({})), Advance::noop());
        assert_eq!(view.placeholders().count(), 1);
        assert!(view.can_advance());
    }
}
