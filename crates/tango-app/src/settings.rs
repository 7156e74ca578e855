use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use tango_config::Config;

use crate::Cli;

/// Load a JSON config file. Missing fields take their defaults.
fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

/// Environment (and `.env`) first, a config file replaces it, CLI flags win
pub fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => load_config_file(path)?,
        None => Config::new(),
    };

    if let Some(url) = &cli.backend_url {
        config.backend.url = url.trim_end_matches('/').to_string();
    }

    Ok(config)
}
