//! Match results command implementation

use tabled::{Table, Tabled};

use super::common::SessionContext;
use crate::registry::MatchRecord;
use crate::store::DATE_FORMAT;
use crate::{Result, TrackerError};

#[derive(Tabled)]
struct MatchLine {
    #[tabled(rename = "Winner")]
    winner: String,
    #[tabled(rename = "Winner Colour")]
    colour: String,
    #[tabled(rename = "Date")]
    date: String,
}

/// Render a championship's matches as a table, in recorded order.
pub fn match_table(matches: &[MatchRecord]) -> String {
    let lines: Vec<MatchLine> = matches
        .iter()
        .map(|m| MatchLine {
            winner: m.winner.clone(),
            colour: m.colour.to_string(),
            date: m.date.format(DATE_FORMAT).to_string(),
        })
        .collect();
    Table::new(lines).to_string()
}

/// Handle the matches command
pub async fn handle_matches(ctx: &SessionContext, championship: &str, as_json: bool) -> Result<()> {
    let champ = ctx
        .registry
        .get(championship)
        .ok_or_else(|| TrackerError::UnknownChampionship {
            name: championship.to_string(),
        })?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&champ.matches)?);
        return Ok(());
    }

    println!("Championship: {}", champ.name);
    if champ.matches.is_empty() {
        println!("No match results recorded yet.");
    } else {
        println!("{}", match_table(&champ.matches));
    }
    Ok(())
}
