use std::io::{self, BufRead, Write};

use anyhow::bail;
use explora_ui_common::{ExplorationService, ScreenBody};
use tracing::info;

use crate::render::draw_screen;

enum Input {
    Next,
    Retry,
    Quit,
}

fn read_input(lines: &mut impl Iterator<Item = io::Result<String>>) -> anyhow::Result<Input> {
    match lines.next() {
        None => Ok(Input::Quit),
        Some(line) => Ok(match line?.trim() {
            "q" | "quit" => Input::Quit,
            "r" | "retry" => Input::Retry,
            _ => Input::Next,
        }),
    }
}

pub async fn handle(
    service: &ExplorationService,
    exploration: &str,
    slug: bool,
    auto: bool,
) -> anyhow::Result<()> {
    let id = super::resolve(service, exploration, slug).await?;
    let mut runtime = service.runtime();
    if slug {
        runtime = runtime.with_slug(exploration.trim());
    }
    runtime.load(Some(id.as_str())).await;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    loop {
        let screen = runtime.screen();
        draw_screen(&mut stdout, &screen)?;
        stdout.flush()?;

        match screen.body {
            ScreenBody::Page(view) => {
                if !auto && matches!(read_input(&mut lines)?, Input::Quit) {
                    return Ok(());
                }
                view.advance();
            }
            ScreenBody::Error { message, .. } => {
                if auto {
                    bail!("failed to load exploration {id}: {message}");
                }
                match read_input(&mut lines)? {
                    Input::Quit => return Ok(()),
                    Input::Retry | Input::Next => {
                        runtime.retry().await;
                    }
                }
            }
            ScreenBody::Finished => {
                info!(exploration = %id, "walk finished");
                return Ok(());
            }
            ScreenBody::Unavailable | ScreenBody::NoContent | ScreenBody::Loading => return Ok(()),
        }
    }
}
