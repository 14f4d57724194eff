//! About command handler.

use clap::Args;
use relief_core::AppResult;

/// Title shown at the top of interactive sessions.
pub const TITLE: &str = "Disaster Response & Relief Explainer";

/// Shown before any answer is given.
pub const DISCLAIMER: &str = "Disclaimer: This system provides general informational \
explanations only. It does NOT issue alerts, provide real-time instructions, or replace \
emergency services.";

const ABOUT: &str = "\
This assistant explains disaster response and relief processes.

What it does:
  - Explains evacuation procedures
  - Describes relief camp operations
  - Explains disaster response stages
  - Shares general safety guidelines

What it does NOT do:
  - Issue emergency alerts
  - Give real-time instructions
  - Coordinate rescue

For emergencies, contact official services.";

/// Describe what the assistant does and does not do
#[derive(Args, Debug)]
pub struct AboutCommand;

impl AboutCommand {
    /// Execute the about command.
    pub fn execute(&self) -> AppResult<()> {
        println!("{}\n", TITLE);
        println!("{}\n", ABOUT);
        println!("{}", DISCLAIMER);
        Ok(())
    }
}
