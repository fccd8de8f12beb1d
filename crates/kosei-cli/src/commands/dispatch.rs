use kosei_config::KoseiConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &KoseiConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Review(args) => commands::review::handle(&args, config, flags).await,
        Commands::Check(args) => commands::check::handle(&args, flags),
        Commands::Show(_) => unreachable!("show is pre-dispatched in main"),
    }
}
