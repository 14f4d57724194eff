//! Reference knowledge for the Relief Explainer.
//!
//! Loads a fixed set of text documents once at startup and selects the ones
//! lexically related to a query. There is no index, no embeddings and no
//! ranking: a document either mentions a query term or it does not.

pub mod retriever;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use retriever::retrieve;
pub use store::DocumentStore;
pub use types::{Corpus, Document, RetrievalResult};
