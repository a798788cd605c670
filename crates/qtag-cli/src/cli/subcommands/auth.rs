use clap::{Args, Subcommand};

/// Credential commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Prompt for endpoint and credentials and store them.
    Login(AuthLoginArgs),
    /// Clear the stored password.
    Logout,
    /// Show what is configured and where the password comes from.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// API base URL, e.g. https://qualysapi.qualys.com (prompted if omitted).
    #[arg(long)]
    pub url: Option<String>,
    /// API username (prompted if omitted).
    #[arg(long)]
    pub username: Option<String>,
}
