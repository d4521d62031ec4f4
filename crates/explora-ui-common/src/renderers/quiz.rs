use explora_core::ExplorationPage;
use serde::Deserialize;
use tracing::warn;

use crate::registry::PageRenderer;
use crate::view::{Advance, Block, PageView};

#[derive(Debug, Deserialize)]
struct QuizConfig {
    question: String,
    options: Vec<String>,
    #[serde(default)]
    reponse: Option<usize>,
    #[serde(default)]
    explication: Option<String>,
}

/// Multiple-choice question.
///
/// Expects `config = { question, options: [..], reponse?: index, explication? }`.
pub struct QuizRenderer;

impl PageRenderer for QuizRenderer {
    fn page_type(&self) -> &str {
        "quiz"
    }

    fn render(&self, page: &ExplorationPage, advance: Advance) -> PageView {
        let view = PageView::new(page).with_block(Block::Heading(page.nom.clone()));

        let view = match page.config.parse::<QuizConfig>(&page.page_type) {
            Ok(quiz) if !quiz.options.is_empty() => {
                let correct = quiz.reponse.filter(|&i| i < quiz.options.len());
                let view = view.with_block(Block::Choices {
                    prompt: quiz.question,
                    options: quiz.options,
                    correct,
                });
                match quiz.explication {
                    Some(explication) => view.with_block(Block::Paragraph(explication)),
                    None => view,
                }
            }
            Ok(_) => view.with_block(Block::Placeholder("Ce quiz n'a pas encore de réponses.".to_string())),
            Err(e) => {
                warn!(page = %page.id, error = %e, "unreadable quiz config");
                view.with_block(Block::Placeholder("Ce quiz n'a pas pu être chargé.".to_string()))
            }
        };

        view.with_advance(advance, "Valider")
    }
}
