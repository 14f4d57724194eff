//! Chat command handler.
//!
//! Interactive single-session loop: one question per line, each answered in
//! full before the next line is read. Nothing is remembered between turns.

use crate::commands::about::{DISCLAIMER, TITLE};
use clap::Args;
use relief_bot::{Answer, ReliefBot};
use relief_core::{config::AppConfig, AppResult};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Start an interactive question session
#[derive(Args, Debug)]
pub struct ChatCommand {
    /// Hide the banner and disclaimer
    #[arg(long)]
    pub quiet: bool,
}

impl ChatCommand {
    /// Execute the chat command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let bot = ReliefBot::from_config(config)?;

        if !self.quiet {
            println!("{}", TITLE);
            println!("Public information assistant for disaster preparedness & awareness\n");
            println!("{}\n", DISCLAIMER);
            println!("Ask a question (e.g. \"Explain evacuation procedures\"). Type 'exit' to quit.");
        }

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut turns = 0usize;

        loop {
            print!("\n> ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                println!();
                break;
            };

            let query = line.trim();
            if query.is_empty() {
                continue;
            }
            if is_exit(query) {
                break;
            }

            turns += 1;
            let answer = bot.respond(query).await;
            println!("\n{}", label(&answer));
            println!("{}", answer);
        }

        tracing::info!("Chat session ended after {} questions", turns);
        Ok(())
    }
}

fn is_exit(query: &str) -> bool {
    matches!(query.to_lowercase().as_str(), "exit" | "quit" | ":q")
}

/// Heading printed above an answer.
fn label(answer: &Answer) -> &'static str {
    match answer {
        Answer::SafetyRedirect => "[!] Emergency",
        Answer::NoInformation | Answer::Explanation(_) => "Explanation",
        Answer::Failure => "[x] Error",
    }
}
