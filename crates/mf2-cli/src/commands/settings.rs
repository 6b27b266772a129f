use mf2_config::Mf2Config;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `mf2 settings`.
pub fn handle(config: &Mf2Config, flags: &GlobalFlags) -> anyhow::Result<()> {
    let parser = config.parser()?;
    output(parser.settings(), flags.format)
}
