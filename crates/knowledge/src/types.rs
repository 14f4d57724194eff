//! Knowledge type definitions.

use serde::{Deserialize, Serialize};

/// A unit of reference text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Raw text content
    pub text: String,
}

impl Document {
    /// Create a document from its text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// First non-blank line, used for listings.
    pub fn headline(&self) -> &str {
        self.text
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("")
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Ordered, immutable set of documents fixed at load time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    /// Create a corpus from documents in the order given.
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// Documents in corpus order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the corpus holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Iterate documents in corpus order.
    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Into<Document>> FromIterator<T> for Corpus {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Documents judged relevant to one query, in corpus order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievalResult<'a> {
    documents: Vec<&'a Document>,
}

impl<'a> RetrievalResult<'a> {
    pub(crate) fn new(documents: Vec<&'a Document>) -> Self {
        Self { documents }
    }

    /// Matched documents in corpus order.
    pub fn documents(&self) -> &[&'a Document] {
        &self.documents
    }

    /// Number of matched documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Matched texts joined by a blank line, ready to paste into a prompt.
    pub fn context(&self) -> String {
        self.documents
            .iter()
            .map(|doc| doc.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
