//! Lexical relevance filter.
//!
//! A document is relevant when its lowercased text contains the whole
//! lowercased query, or any query token, as a plain substring. No stemming,
//! no word boundaries, no scoring: matches are kept in corpus order.

use crate::types::{Corpus, RetrievalResult};

/// Select the documents of `corpus` that mention `query`.
///
/// Deterministic and order-preserving. A blank query matches nothing.
///
/// # Example
/// ```
/// use relief_knowledge::{retrieve, Corpus};
///
/// let corpus: Corpus = ["Evacuation procedures require moving to designated shelters."]
///     .into_iter()
///     .collect();
/// let result = retrieve("Explain evacuation procedures", &corpus);
/// assert_eq!(result.len(), 1);
/// ```
pub fn retrieve<'a>(query: &str, corpus: &'a Corpus) -> RetrievalResult<'a> {
    let normalized = query.trim().to_lowercase();
    let tokens = tokenize(&normalized);

    if tokens.is_empty() {
        tracing::debug!("Blank query, nothing to match");
        return RetrievalResult::new(Vec::new());
    }

    let matched = corpus
        .iter()
        .filter(|doc| {
            let text = doc.text.to_lowercase();
            text.contains(normalized.as_str()) || tokens.iter().any(|t| text.contains(t))
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        "Matched {} of {} documents for {} tokens",
        matched.len(),
        corpus.len(),
        tokens.len()
    );

    RetrievalResult::new(matched)
}

/// Whitespace-separated words with surrounding ASCII punctuation removed.
fn tokenize(normalized: &str) -> Vec<&str> {
    normalized
        .split_whitespace()
        .map(|word| word.trim_matches(|c: char| c.is_ascii_punctuation()))
        .filter(|word| !word.is_empty())
        .collect()
}
