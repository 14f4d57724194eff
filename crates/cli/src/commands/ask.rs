//! Ask command handler.
//!
//! Answers a single question and exits.

use clap::Args;
use relief_bot::{Answer, ReliefBot};
use relief_core::{config::AppConfig, AppError, AppResult};
use std::path::PathBuf;

/// Ask one disaster-preparedness question
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question to ask
    pub question: Option<String>,

    /// Read the question from a file
    #[arg(short, long, conflicts_with = "question")]
    pub file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl AskCommand {
    /// Execute the ask command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing ask command");

        let question = self.get_question()?;
        let bot = ReliefBot::from_config(config)?;
        let answer = bot.respond(&question).await;

        if self.json {
            println!("{}", render_json(&question, &answer)?);
        } else {
            println!("{}", answer);
        }

        Ok(())
    }

    /// Get the question from the argument or the file.
    fn get_question(&self) -> AppResult<String> {
        let question = match (&self.question, &self.file) {
            (Some(q), _) => q.clone(),
            (None, Some(path)) => std::fs::read_to_string(path).map_err(|e| {
                AppError::Config(format!("Failed to read question file {:?}: {}", path, e))
            })?,
            (None, None) => String::new(),
        };

        let question = question.trim().to_string();
        if question.is_empty() {
            return Err(AppError::Config("No question provided".to_string()));
        }

        Ok(question)
    }
}

/// Structured form of an answer.
fn render_json(question: &str, answer: &Answer) -> AppResult<String> {
    let output = serde_json::json!({
        "question": question,
        "kind": answer.kind(),
        "answer": answer.message(),
    });

    Ok(serde_json::to_string_pretty(&output)?)
}
