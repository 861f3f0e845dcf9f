//! Win tally command implementation
//!
//! Tallies are derived on demand from the match lists with `win_counts`,
//! never stored.

use serde::Serialize;

use super::common::SessionContext;
use crate::registry::{win_counts, MatchRecord};
use crate::{Result, TrackerError};

#[derive(Debug, Serialize)]
pub struct StandingLine {
    pub player: String,
    pub wins: u32,
}

/// Tally an ordered sequence of matches into display lines.
pub fn standings<'a, I>(matches: I) -> Vec<StandingLine>
where
    I: IntoIterator<Item = &'a MatchRecord>,
{
    win_counts(matches)
        .into_iter()
        .map(|(player, wins)| StandingLine { player, wins })
        .collect()
}

fn print_standings(heading: &str, lines: &[StandingLine], as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(lines)?);
        return Ok(());
    }

    println!("{heading}");
    if lines.is_empty() {
        println!("No match results recorded yet.");
    }
    for line in lines {
        println!("{} Wins: {}", line.player, line.wins);
    }
    Ok(())
}

/// Handle the standings command: one championship's tally, or the
/// cross-championship tally when no championship is named.
pub async fn handle_standings(
    ctx: &SessionContext,
    championship: Option<&str>,
    as_json: bool,
) -> Result<()> {
    match championship {
        Some(name) => {
            let champ =
                ctx.registry
                    .get(name)
                    .ok_or_else(|| TrackerError::UnknownChampionship {
                        name: name.to_string(),
                    })?;
            let lines = standings(&champ.matches);
            print_standings(
                &format!("Overall statistics for championship '{}':", champ.name),
                &lines,
                as_json,
            )
        }
        None => {
            let lines = standings(ctx.registry.all_matches());
            print_standings("Overall statistics across all championships:", &lines, as_json)
        }
    }
}
