//! Command handlers for the relief CLI.

pub mod about;
pub mod ask;
pub mod chat;
pub mod docs;

// Re-export command types for convenience
pub use about::AboutCommand;
pub use ask::AskCommand;
pub use chat::ChatCommand;
pub use docs::DocsCommand;
