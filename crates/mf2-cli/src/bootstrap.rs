use anyhow::Context;
use mf2_config::Mf2Config;

use crate::cli::GlobalFlags;

/// Load the layered configuration, with `--config` as an extra file layer.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<Mf2Config> {
    match &flags.config {
        Some(path) => Mf2Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Mf2Config::load_with_dotenv().context("failed to load configuration"),
    }
}
