//! The `vidyamitra interview` command.

use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::Result;

use vidyamitra_core::interview::InterviewWorkflow;
use vidyamitra_core::model::InterviewQuestion;
use vidyamitra_core::CareerApi;

pub async fn execute(
    api: Arc<dyn CareerApi>,
    role: String,
    years: f64,
    answers: Vec<String>,
) -> Result<()> {
    let interview = InterviewWorkflow::new(api);
    let questions = interview.start(&role, years).await?;
    println!("Mock interview for {role} — {} question(s)\n", questions.len());

    if answers.is_empty() {
        collect_interactively(&interview, &questions)?;
    } else {
        // --answer values map to questions in order; extras are ignored
        for (index, text) in answers.iter().enumerate().take(questions.len()) {
            if !text.trim().is_empty() {
                interview.record_answer(index, text)?;
            }
        }
    }

    tracing::info!(
        answered = interview.answered(),
        total = questions.len(),
        "requesting feedback"
    );
    let feedback = interview.request_feedback().await?;

    println!("\nScore: {}/10", feedback.score);
    print_list("Strengths", &feedback.strengths);
    print_list("Improvements", &feedback.improvements);
    Ok(())
}

fn collect_interactively(
    interview: &InterviewWorkflow,
    questions: &[InterviewQuestion],
) -> Result<()> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    for (index, question) in questions.iter().enumerate() {
        println!("{}. {}", index + 1, question.question);
        if let Some(hint) = &question.hint {
            println!("   Hint: {hint}");
        }
        print!("Your answer (blank to skip): ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        if !line.trim().is_empty() {
            interview.record_answer(index, line.trim())?;
        }
    }
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
