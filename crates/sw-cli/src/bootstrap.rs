use std::path::{Path, PathBuf};

use anyhow::Context;
use sw_config::StockwatchConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then the layered configuration.
///
/// Validation is left to the caller so commands that need no catalog access
/// can run with partial configuration.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<StockwatchConfig> {
    load_dotenv(flags.config.as_deref())?;

    match &flags.config {
        Some(path) => StockwatchConfig::load_from(Path::new(path))
            .with_context(|| format!("failed to load config from {path}")),
        None => StockwatchConfig::load().context("failed to load configuration"),
    }
}

/// Prefer a `.env` next to an explicit config file, then the working directory.
fn load_dotenv(config_path: Option<&str>) -> anyhow::Result<()> {
    if let Some(dir) = config_path
        .map(PathBuf::from)
        .and_then(|path| path.parent().map(Path::to_path_buf))
    {
        let env_path = dir.join(".env");
        if env_path.is_file() {
            dotenvy::from_path(&env_path)
                .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
            return Ok(());
        }
    }

    dotenvy::dotenv().ok();
    Ok(())
}
