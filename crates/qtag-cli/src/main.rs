use anyhow::Context;
use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod logging;
mod output;
mod progress;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("qtag error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    logging::init(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    let config = bootstrap::load_config()?;

    if let cli::Commands::Auth { action } = &cli.command {
        return commands::auth::handle(action, &flags, config);
    }

    let config = bootstrap::ensure_configured(config)?;
    let ctx = context::AppContext::init(&config).context("failed to initialize qtag client")?;

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}
