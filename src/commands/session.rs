//! Interactive session command implementation
//!
//! Reproduces the original form flow: create a championship (name plus two
//! player-name inputs), pick a championship, log a result (winner, colour,
//! date defaulting to today), and browse per-championship or overall
//! tallies. Rejected inputs are reported and the loop continues; store and
//! config failures abort the session.

use chrono::{Local, NaiveDate};
use dialoguer::{theme::ColorfulTheme, Input, Select};

use super::common::SessionContext;
use super::matches::match_table;
use super::standings::standings;
use crate::registry::{Colour, MatchRecord};
use crate::store::DATE_FORMAT;
use crate::{Result, TrackerError};

const ACTIONS: [&str; 6] = [
    "Create championship",
    "Log match result",
    "Show match results",
    "Show championship standings",
    "Show overall standings",
    "Quit",
];

/// Handle the session command
pub async fn handle_session(ctx: &mut SessionContext) -> Result<()> {
    let theme = ColorfulTheme::default();

    println!("Chess Championship Tracker");
    println!("Create championships, log match results, and compare overall scores between players.");
    if ctx.registry.is_empty() {
        println!("No championships available. Please create a new championship to get started.");
    }

    loop {
        println!();
        let action = Select::with_theme(&theme)
            .with_prompt("Action")
            .items(&ACTIONS)
            .default(0)
            .interact()?;

        let outcome = match action {
            0 => create_flow(ctx, &theme).await,
            1 => log_flow(ctx, &theme).await,
            2 => matches_flow(ctx, &theme),
            3 => championship_standings_flow(ctx, &theme),
            4 => overall_standings_flow(ctx),
            _ => break,
        };

        if let Err(e) = outcome {
            if e.is_validation() {
                println!("⚠ {e}");
            } else {
                return Err(e);
            }
        }
    }

    Ok(())
}

async fn create_flow(ctx: &mut SessionContext, theme: &ColorfulTheme) -> Result<()> {
    let name: String = Input::with_theme(theme)
        .with_prompt("Championship name")
        .allow_empty(true)
        .interact_text()?;

    let player_one: String = Input::with_theme(theme)
        .with_prompt("Player 1 name")
        .default(ctx.config.players.one.clone())
        .interact_text()?;
    let player_two: String = Input::with_theme(theme)
        .with_prompt("Player 2 name")
        .default(ctx.config.players.two.clone())
        .interact_text()?;

    // Session-scoped, like the original's sidebar inputs: the names feed the
    // winner roster but are not written back to the config file.
    ctx.config.players.one = player_one;
    ctx.config.players.two = player_two;

    ctx.registry
        .create_championship(ctx.store.as_ref(), &name)
        .await?;
    println!("✓ Championship '{}' created", name.trim());
    Ok(())
}

async fn log_flow(ctx: &mut SessionContext, theme: &ColorfulTheme) -> Result<()> {
    let Some(championship) = select_championship(ctx, theme)? else {
        return Ok(());
    };

    let roster = ctx.roster();
    let winner_idx = Select::with_theme(theme)
        .with_prompt("Winner")
        .items(&roster)
        .default(0)
        .interact()?;
    let winner = roster[winner_idx].clone();

    let colours = [Colour::White, Colour::Black];
    let colour_idx = Select::with_theme(theme)
        .with_prompt("Winner's colour")
        .items(&colours.map(|c| c.to_string()))
        .default(0)
        .interact()?;

    let today = Local::now().date_naive();
    let date_input: String = Input::with_theme(theme)
        .with_prompt("Match date")
        .default(today.format(DATE_FORMAT).to_string())
        .interact_text()?;
    let date = NaiveDate::parse_from_str(date_input.trim(), DATE_FORMAT).map_err(|_| {
        TrackerError::InvalidDate {
            date: date_input.clone(),
        }
    })?;

    let record = MatchRecord {
        winner,
        colour: colours[colour_idx],
        date,
    };
    ctx.registry
        .record_match(ctx.store.as_ref(), &championship, record, &roster)
        .await?;
    println!("✓ Match result saved for championship '{championship}'");
    Ok(())
}

fn matches_flow(ctx: &SessionContext, theme: &ColorfulTheme) -> Result<()> {
    let Some(name) = select_championship(ctx, theme)? else {
        return Ok(());
    };
    // Selected from the registry's own list, so the lookup cannot miss.
    if let Some(champ) = ctx.registry.get(&name) {
        println!("Championship: {}", champ.name);
        if champ.matches.is_empty() {
            println!("No match results recorded yet.");
        } else {
            println!("{}", match_table(&champ.matches));
        }
    }
    Ok(())
}

fn championship_standings_flow(ctx: &SessionContext, theme: &ColorfulTheme) -> Result<()> {
    let Some(name) = select_championship(ctx, theme)? else {
        return Ok(());
    };
    if let Some(champ) = ctx.registry.get(&name) {
        println!("Overall statistics for championship '{}':", champ.name);
        print_lines(standings(&champ.matches));
    }
    Ok(())
}

fn overall_standings_flow(ctx: &SessionContext) -> Result<()> {
    println!("Overall statistics across all championships:");
    print_lines(standings(ctx.registry.all_matches()));
    Ok(())
}

fn print_lines(lines: Vec<super::standings::StandingLine>) {
    if lines.is_empty() {
        println!("No match results recorded yet.");
    }
    for line in lines {
        println!("{} Wins: {}", line.player, line.wins);
    }
}

/// Pick a championship from the registry's display order, or report that
/// none exist yet.
fn select_championship(ctx: &SessionContext, theme: &ColorfulTheme) -> Result<Option<String>> {
    let names = ctx.registry.names();
    if names.is_empty() {
        println!("No championships available. Please create a new championship to get started.");
        return Ok(None);
    }
    let idx = Select::with_theme(theme)
        .with_prompt("Select championship")
        .items(&names)
        .default(0)
        .interact()?;
    Ok(Some(names[idx].to_string()))
}
