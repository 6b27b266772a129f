use mf2_config::Mf2Config;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, config: &Mf2Config, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Parse(args) => commands::parse::handle(args, config, flags),
        Commands::Settings => commands::settings::handle(config, flags),
        Commands::Vocab => commands::vocab::handle(config, flags),
    }
}
