//! Document store: reads the reference corpus from disk.

use crate::types::{Corpus, Document};
use relief_core::{AppConfig, AppError, AppResult};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Loads the corpus from a directory of text files.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    /// Directory holding the documents
    root: PathBuf,

    /// Accepted file extensions, lowercase, without the dot
    extensions: Vec<String>,
}

impl DocumentStore {
    /// Create a store reading `root` for files with the given extensions.
    pub fn new(root: impl Into<PathBuf>, extensions: Vec<String>) -> Self {
        Self {
            root: root.into(),
            extensions: extensions.into_iter().map(|e| e.to_lowercase()).collect(),
        }
    }

    /// Create a store from the application configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.docs_dir.clone(), config.doc_extensions.clone())
    }

    /// Directory the store reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read every matching document, ordered by path.
    ///
    /// Files that are blank after trimming are skipped. Fails if the
    /// directory is missing, a file cannot be read, or nothing was loaded.
    pub fn load(&self) -> AppResult<Corpus> {
        if !self.root.is_dir() {
            return Err(AppError::Load(format!(
                "Document directory not found: {:?}",
                self.root
            )));
        }

        tracing::info!("Loading documents from {:?}", self.root);

        let mut documents = Vec::new();

        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                AppError::Load(format!("Failed to walk {:?}: {}", self.root, e))
            })?;

            let path = entry.path();
            if !entry.file_type().is_file() || !self.accepts(path) {
                continue;
            }

            let text = std::fs::read_to_string(path)
                .map_err(|e| AppError::Load(format!("Failed to read {:?}: {}", path, e)))?;

            let text = text.trim();
            if text.is_empty() {
                tracing::warn!("Skipping empty document: {:?}", path);
                continue;
            }

            tracing::debug!("Loaded {:?} ({} bytes)", path, text.len());
            documents.push(Document::new(text));
        }

        if documents.is_empty() {
            return Err(AppError::Load(format!(
                "No documents found in {:?} (extensions: {})",
                self.root,
                self.extensions.join(", ")
            )));
        }

        tracing::info!("Loaded {} documents", documents.len());

        Ok(Corpus::new(documents))
    }

    /// Whether `path` has one of the accepted extensions.
    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| self.extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext)))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn store(dir: &Path) -> DocumentStore {
        DocumentStore::new(dir, vec!["txt".to_string(), "md".to_string()])
    }

    #[test]
    fn test_load_orders_by_path() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b_shelters.txt"), "Shelters are safe places.").unwrap();
        fs::write(temp_dir.path().join("a_evacuation.txt"), "Evacuation means leaving.").unwrap();
        fs::create_dir(temp_dir.path().join("c_more")).unwrap();
        fs::write(temp_dir.path().join("c_more/relief.md"), "# Relief\nCamps.").unwrap();

        let corpus = store(temp_dir.path()).load().unwrap();
        let texts: Vec<&str> = corpus.iter().map(|d| d.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "Evacuation means leaving.",
                "Shelters are safe places.",
                "# Relief\nCamps."
            ]
        );
    }

    #[test]
    fn test_load_filters_extensions_and_blank_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "  Flood safety.\n").unwrap();
        fs::write(temp_dir.path().join("blank.txt"), "   \n\n").unwrap();
        fs::write(temp_dir.path().join("image.png"), "not text").unwrap();
        fs::write(temp_dir.path().join("UPPER.TXT"), "Cyclone stages.").unwrap();

        let corpus = store(temp_dir.path()).load().unwrap();
        let texts: Vec<&str> = corpus.iter().map(|d| d.text.as_str()).collect();
        assert_eq!(texts, vec!["Cyclone stages.", "Flood safety."]);
    }

    #[test]
    fn test_load_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = store(&temp_dir.path().join("missing")).load();
        assert!(matches!(result, Err(AppError::Load(_))));
    }

    #[test]
    fn test_load_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("readme.pdf"), "ignored").unwrap();

        match store(temp_dir.path()).load() {
            Err(AppError::Load(msg)) => assert!(msg.contains("No documents found")),
            other => panic!("Expected load error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_config() {
        let mut config = AppConfig::default();
        config.docs_dir = PathBuf::from("knowledge");
        config.doc_extensions = vec!["TXT".to_string()];

        let store = DocumentStore::from_config(&config);
        assert_eq!(store.root(), Path::new("knowledge"));
        assert!(store.accepts(Path::new("a.txt")));
        assert!(!store.accepts(Path::new("a.md")));
    }
}
