use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use curio::app::AppContext;
use curio::cli::{commands, Cli, Commands};
use curio::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let ctx = AppContext::new(config)?;

    match cli.command {
        Commands::Feed {
            query,
            source,
            saved,
        } => {
            commands::feed(&ctx, &query, source.map(Into::into), saved)?;
        }
        Commands::Scrape => {
            commands::scrape(&ctx).await?;
        }
        Commands::Show { id } => {
            commands::show(&ctx, &id)?;
        }
        Commands::Save { id } => {
            commands::toggle(&ctx, &id, true).await?;
        }
        Commands::Unsave { id } => {
            commands::toggle(&ctx, &id, false).await?;
        }
        Commands::Hooks { id } => {
            commands::hooks(&ctx, &id).await?;
        }
        Commands::Open { id } => {
            commands::open(&ctx, &id)?;
        }
    }

    Ok(())
}
