//! The `vidyamitra quiz` command.
//!
//! Issues a question set, collects answers (from `--answers` or stdin), then
//! submits the whole sheet. Skipped questions stay unanswered; the service
//! accepts partial sheets.

use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::Result;

use vidyamitra_core::model::{Difficulty, QuizQuestion};
use vidyamitra_core::quiz::QuizWorkflow;
use vidyamitra_core::CareerApi;

pub async fn execute(
    api: Arc<dyn CareerApi>,
    domain: String,
    difficulty: Difficulty,
    count: usize,
    answers: Option<Vec<usize>>,
) -> Result<()> {
    let quiz = QuizWorkflow::new(api);
    let questions = quiz.generate(&domain, difficulty, count).await?;
    println!(
        "{} {} question(s) on {domain}:\n",
        questions.len(),
        difficulty
    );

    match answers {
        Some(chosen) => {
            // 1-based option numbers, 0 skips; extra entries are ignored
            for (index, option) in chosen.iter().enumerate().take(questions.len()) {
                if *option > 0 {
                    quiz.select_answer(index, option - 1)?;
                }
            }
        }
        None => collect_interactively(&quiz, &questions)?,
    }

    tracing::info!(answered = quiz.answered(), total = questions.len(), "submitting quiz");
    let result = quiz.submit().await?;

    println!("\nScore: {}/{}", result.score, result.total);
    println!("{}", result.feedback);
    Ok(())
}

fn collect_interactively(quiz: &QuizWorkflow, questions: &[QuizQuestion]) -> Result<()> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    for (index, question) in questions.iter().enumerate() {
        println!("{}. {}", index + 1, question.question);
        for (n, option) in question.options.iter().enumerate() {
            println!("   {}) {option}", n + 1);
        }
        print!("Your answer (1-{}, blank to skip): ", question.options.len());
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match trimmed.parse::<usize>() {
            Ok(n) if n >= 1 && n <= question.options.len() => {
                quiz.select_answer(index, n - 1)?;
            }
            _ => println!("Skipping: not a valid option number"),
        }
    }
    Ok(())
}
