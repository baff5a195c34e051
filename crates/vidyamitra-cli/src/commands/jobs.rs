//! The `vidyamitra jobs` command.

use anyhow::Result;
use comfy_table::Table;

use vidyamitra_core::assess;
use vidyamitra_core::CareerApi;

pub async fn execute(api: &dyn CareerApi, role: String, location: Option<String>) -> Result<()> {
    let jobs = assess::recommend_jobs(api, &role, location.as_deref()).await?;

    if jobs.is_empty() {
        println!("No matching jobs found for {role}.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Title", "Company", "Location", "Match"]);
    for job in &jobs {
        table.add_row(vec![
            job.title.clone(),
            job.company.clone(),
            job.location.clone(),
            format!("{}%", job.match_score),
        ]);
    }
    println!("{table}");

    Ok(())
}
