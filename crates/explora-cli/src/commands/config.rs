use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context};
use explora_ui_common::ExploraConfig;

use crate::cli::ConfigCommands;

fn target_path(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(ExploraConfig::config_path)
        .ok_or_else(|| anyhow!("could not determine config directory"))
}

pub fn handle(command: &ConfigCommands, explicit: Option<&Path>) -> anyhow::Result<()> {
    match command {
        ConfigCommands::Show => {
            let config = crate::load_config(explicit)?;
            print!("{}", config.to_toml_string()?);
        }
        ConfigCommands::Init { force } => {
            let path = target_path(explicit)?;
            if path.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            let config = ExploraConfig::default();
            let written = match explicit {
                Some(path) => config.save_to(path),
                None => config.save(),
            };
            written.with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        ConfigCommands::Path => {
            println!("{}", target_path(explicit)?.display());
        }
    }
    Ok(())
}
