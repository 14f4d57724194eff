//! Prompt system for the Relief Explainer.
//!
//! This crate provides:
//! - The built-in explainer template
//! - YAML template overrides
//! - Handlebars rendering of context and question into a single prompt

pub mod builder;
pub mod loader;
pub mod types;

// Re-export main types
pub use builder::build_prompt;
pub use loader::{default_template, load_template};
pub use types::{BuiltPrompt, PromptTemplate};
