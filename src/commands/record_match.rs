//! Log match result command implementation

use chrono::{Local, NaiveDate};

use super::common::SessionContext;
use crate::registry::{Colour, MatchRecord};
use crate::Result;

/// Handle the log match command. `date` defaults to today.
pub async fn handle_log(
    ctx: &mut SessionContext,
    championship: &str,
    winner: String,
    colour: Colour,
    date: Option<NaiveDate>,
) -> Result<()> {
    let record = MatchRecord {
        winner,
        colour,
        date: date.unwrap_or_else(|| Local::now().date_naive()),
    };
    let roster = ctx.roster();

    ctx.registry
        .record_match(ctx.store.as_ref(), championship, record, &roster)
        .await?;
    println!("✓ Match result saved for championship '{championship}'");
    Ok(())
}
