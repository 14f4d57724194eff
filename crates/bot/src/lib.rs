//! Disaster Response & Relief Explainer bot.
//!
//! Answers preparedness questions from a local corpus. Each query goes
//! through three steps, and stops at the first one that decides:
//! 1. Emergency classifier: distress wording gets a safety redirect
//! 2. Relevance filter: no matching documents gets a no-information reply
//! 3. Answer synthesizer: matching documents and the question go to the model
//!
//! # Example
//! ```no_run
//! use relief_bot::ReliefBot;
//! use relief_core::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load(None)?;
//! let bot = ReliefBot::from_config(&config)?;
//! println!("{}", bot.respond("Explain evacuation procedures").await);
//! # Ok(())
//! # }
//! ```

pub mod answer;
pub mod orchestrator;
pub mod safety;
pub mod synthesizer;

#[cfg(test)]
mod testing;

// Re-export main types
pub use answer::Answer;
pub use orchestrator::ReliefBot;
pub use safety::{is_emergency, matched_keyword};
pub use synthesizer::AnswerSynthesizer;
