//! The `vidyamitra progress` command.

use anyhow::Result;
use comfy_table::Table;

use vidyamitra_core::assess;
use vidyamitra_core::CareerApi;

pub async fn execute(api: &dyn CareerApi) -> Result<()> {
    let report = assess::fetch_progress(api).await?;

    let mut table = Table::new();
    table.set_header(vec!["Module", "Completed", "Total"]);
    for item in &report.items {
        table.add_row(vec![
            item.module.clone(),
            item.completed.to_string(),
            item.total.to_string(),
        ]);
    }
    println!("{table}");

    Ok(())
}
