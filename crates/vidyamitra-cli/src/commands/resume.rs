//! The `vidyamitra resume` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use vidyamitra_core::assess;
use vidyamitra_core::CareerApi;

pub async fn execute(api: &dyn CareerApi, file: PathBuf) -> Result<()> {
    let content = std::fs::read(&file)
        .with_context(|| format!("failed to read resume file {}", file.display()))?;
    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let analysis = assess::analyze_resume(api, &file_name, content).await?;

    println!("{}", analysis.summary);
    print_list("Detected skills", &analysis.detected_skills);
    print_list("Missing skills", &analysis.missing_skills);
    print_list("Suggested improvements", &analysis.suggested_improvements);

    Ok(())
}

fn print_list(heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("\n{heading}:");
    for item in items {
        println!("  - {item}");
    }
}
