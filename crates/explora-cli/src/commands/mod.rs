pub mod config;
pub mod pages;
pub mod walk;

use anyhow::anyhow;
use explora_core::ExplorationId;
use explora_ui_common::ExplorationService;

/// Resolve the exploration argument, failing when nothing matches.
pub(crate) async fn resolve(
    service: &ExplorationService,
    exploration: &str,
    slug: bool,
) -> anyhow::Result<ExplorationId> {
    service
        .resolve_route(exploration, slug)
        .await?
        .ok_or_else(|| match slug {
            true => anyhow!("no exploration with slug `{exploration}`"),
            false => anyhow!("exploration id must not be empty"),
        })
}
