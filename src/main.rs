//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use chess_tracker::{
    cli::{ChessTracker, Commands},
    commands::{
        championships::handle_championships, common::SessionContext,
        create_championship::handle_create, matches::handle_matches, record_match::handle_log,
        session::handle_session, standings::handle_standings,
    },
};
use clap::Parser;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = ChessTracker::parse();

    let mut ctx = SessionContext::new(app.config.as_deref())
        .await
        .context("failed to start session (check store configuration and connectivity)")?;

    match app.command {
        Commands::Create { name } => handle_create(&mut ctx, &name).await?,

        Commands::Log {
            championship,
            winner,
            colour,
            date,
        } => handle_log(&mut ctx, &championship, winner, colour, date).await?,

        Commands::Matches { championship, json } => {
            handle_matches(&ctx, &championship, json).await?
        }

        Commands::Standings { championship, json } => {
            handle_standings(&ctx, championship.as_deref(), json).await?
        }

        Commands::Championships { json } => handle_championships(&ctx, json).await?,

        Commands::Session => handle_session(&mut ctx).await?,
    }

    Ok(())
}
