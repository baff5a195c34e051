//! The `vidyamitra plan` command.

use anyhow::Result;
use comfy_table::Table;

use vidyamitra_core::assess;
use vidyamitra_core::model::AssessmentProfile;
use vidyamitra_core::CareerApi;

pub async fn execute(api: &dyn CareerApi, role: String, gaps: Vec<String>, weeks: u32) -> Result<()> {
    let profile = AssessmentProfile::new(&role, gaps, weeks as f64);
    let plan = assess::build_training_plan(api, &profile).await?;

    println!("Training plan for {} ({} weeks)", plan.role, plan.duration_weeks);

    let mut table = Table::new();
    table.set_header(vec!["Week", "Focus", "Resources"]);
    for week in &plan.plan {
        table.add_row(vec![
            week.week.to_string(),
            week.focus.clone(),
            week.resources.join("\n"),
        ]);
    }
    println!("\n{table}");

    Ok(())
}
