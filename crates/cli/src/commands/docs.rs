//! Docs command handler.
//!
//! Lists the loaded corpus without touching the text-generation provider.

use clap::Args;
use relief_core::{config::AppConfig, AppResult};
use relief_knowledge::DocumentStore;

/// List the reference documents the bot answers from
#[derive(Args, Debug)]
pub struct DocsCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl DocsCommand {
    /// Execute the docs command.
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let store = DocumentStore::from_config(config);
        let corpus = store.load()?;

        if self.json {
            let documents: Vec<_> = corpus
                .iter()
                .enumerate()
                .map(|(i, doc)| {
                    serde_json::json!({
                        "index": i + 1,
                        "chars": doc.text.chars().count(),
                        "headline": doc.headline(),
                    })
                })
                .collect();

            let output = serde_json::json!({
                "directory": store.root().display().to_string(),
                "count": corpus.len(),
                "documents": documents,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(());
        }

        println!("{} documents in {}", corpus.len(), store.root().display());
        for (i, doc) in corpus.iter().enumerate() {
            println!(
                "{:>3}. {:>6} chars  {}",
                i + 1,
                doc.text.chars().count(),
                doc.headline()
            );
        }

        Ok(())
    }
}
