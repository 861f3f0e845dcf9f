//! Championship listing command implementation

use super::common::SessionContext;
use crate::Result;

/// Handle the championships command
pub async fn handle_championships(ctx: &SessionContext, as_json: bool) -> Result<()> {
    let names = ctx.registry.names();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    if names.is_empty() {
        println!("No championships available. Create one to get started.");
        return Ok(());
    }
    for name in names {
        println!("{name}");
    }
    Ok(())
}
