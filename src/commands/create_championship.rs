//! Create championship command implementation

use super::common::SessionContext;
use crate::Result;

/// Handle the create championship command
pub async fn handle_create(ctx: &mut SessionContext, name: &str) -> Result<()> {
    ctx.registry
        .create_championship(ctx.store.as_ref(), name)
        .await?;
    println!("✓ Championship '{}' created", name.trim());
    Ok(())
}
