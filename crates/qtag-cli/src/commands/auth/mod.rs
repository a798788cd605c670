pub(crate) mod login;
mod logout;
mod status;

use qtag_config::QtagConfig;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;

/// Handle `qtag auth <subcommand>`.
pub fn handle(action: &AuthCommands, flags: &GlobalFlags, config: QtagConfig) -> anyhow::Result<()> {
    match action {
        AuthCommands::Login(args) => login::handle(args, flags, config),
        AuthCommands::Logout => logout::handle(flags, &config),
        AuthCommands::Status => status::handle(flags, &config),
    }
}
