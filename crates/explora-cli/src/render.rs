//! Plain-text drawing of screens.

use std::io::{self, Write};

use explora_ui_common::{Block, Overlay, PageView, Screen, ScreenBody};

pub fn draw_screen(out: &mut impl Write, screen: &Screen) -> io::Result<()> {
    match &screen.body {
        ScreenBody::Unavailable => writeln!(out, "Aucune exploration sélectionnée.")?,
        ScreenBody::Loading => writeln!(out, "Chargement…")?,
        ScreenBody::NoContent => writeln!(out, "Cette exploration ne contient encore aucune page.")?,
        ScreenBody::Error { message, retry_label } => {
            writeln!(out, "Impossible de charger l'exploration : {message}")?;
            writeln!(out, "[r] {retry_label}")?;
        }
        ScreenBody::Page(view) => draw_page(out, view)?,
        ScreenBody::Finished => writeln!(out, "Exploration terminée. Merci !")?,
    }

    for overlay in &screen.overlays {
        match overlay {
            Overlay::FloatingAction { label, href } => writeln!(out, "(+) {label} → {href}")?,
        }
    }
    Ok(())
}

pub fn draw_page(out: &mut impl Write, view: &PageView) -> io::Result<()> {
    writeln!(out)?;
    for block in &view.blocks {
        match block {
            Block::Heading(text) => {
                writeln!(out, "== {text} ==")?;
            }
            Block::Paragraph(text) => writeln!(out, "{text}")?,
            Block::Choices { prompt, options, .. } => {
                writeln!(out, "{prompt}")?;
                for (i, option) in options.iter().enumerate() {
                    writeln!(out, "  {}. {option}", i + 1)?;
                }
            }
            Block::Media { url, caption } => match caption {
                Some(caption) => writeln!(out, "[image] {caption} ({url})")?,
                None => writeln!(out, "[image] {url}")?,
            },
            Block::Placeholder(text) => writeln!(out, "[!] {text}")?,
        }
    }
    if view.fallback {
        writeln!(out, "(type de page « {} » non pris en charge)", view.page_type)?;
    }
    if view.can_advance() {
        writeln!(out, "[Entrée] {}", view.advance_label)?;
    }
    Ok(())
}
