//! The `vidyamitra health` command.

use anyhow::Result;

use vidyamitra_core::assess;
use vidyamitra_core::CareerApi;

pub async fn execute(api: &dyn CareerApi) -> Result<()> {
    let health = assess::check_health(api).await?;
    println!("{}: {}", health.status, health.message);
    Ok(())
}
