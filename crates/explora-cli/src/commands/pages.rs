use std::io::{self, Write};

use explora_ui_common::ExplorationService;
use tabwriter::TabWriter;

use crate::cli::OutputFormat;

pub async fn handle(
    service: &ExplorationService,
    exploration: &str,
    slug: bool,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let id = super::resolve(service, exploration, slug).await?;
    let pages = service.source().fetch(&id).await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(pages.as_slice())?);
        }
        OutputFormat::Plain => {
            if pages.is_empty() {
                println!("Exploration {id} has no pages.");
                return Ok(());
            }
            let registry = service.registry();
            let mut writer = TabWriter::new(io::stdout());
            writeln!(writer, "ORDRE\tTYPE\tID\tNOM\tRENDERER")?;
            for page in pages.iter() {
                let renderer = if registry.contains(&page.page_type) {
                    "built-in"
                } else {
                    "fallback"
                };
                writeln!(
                    writer,
                    "{}\t{}\t{}\t{}\t{}",
                    page.ordre, page.page_type, page.id, page.nom, renderer
                )?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}
