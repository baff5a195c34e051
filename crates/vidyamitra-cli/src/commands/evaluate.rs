//! The `vidyamitra evaluate` command.

use anyhow::Result;
use comfy_table::Table;

use vidyamitra_core::assess;
use vidyamitra_core::model::AssessmentProfile;
use vidyamitra_core::CareerApi;

pub async fn execute(
    api: &dyn CareerApi,
    role: String,
    skills: Vec<String>,
    years: f64,
) -> Result<()> {
    let profile = AssessmentProfile::new(&role, skills, years);
    let evaluation = assess::evaluate_skills(api, &profile).await?;

    println!("Evaluation for {}", evaluation.role);

    if !evaluation.strengths.is_empty() {
        println!("\nStrengths:");
        for strength in &evaluation.strengths {
            println!("  - {strength}");
        }
    }

    if !evaluation.gaps.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Gap", "Level", "Priority"]);
        for gap in &evaluation.gaps {
            table.add_row(vec![&gap.skill, &gap.level, &gap.priority]);
        }
        println!("\n{table}");
    }

    println!("\n{}", evaluation.summary);
    Ok(())
}
