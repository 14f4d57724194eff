//! Configuration management for the Relief Explainer.
//!
//! Configuration is merged from, in increasing precedence:
//! - Built-in defaults
//! - A YAML config file (`RELIEF_CONFIG` or `./relief.yaml`)
//! - Environment variables
//! - Command-line flags
//!
//! The resulting `AppConfig` is process-scoped state handed to the bot at
//! construction; nothing here is read again after startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Default location of the hosted text-generation API.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default environment variable holding the provider credential.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Config file picked up from the working directory when none is named.
const DEFAULT_CONFIG_FILE: &str = "relief.yaml";

const KNOWN_PROVIDERS: [&str; 2] = ["gemini", "google"];

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the reference documents
    pub docs_dir: PathBuf,

    /// File extensions treated as documents (without the dot)
    pub doc_extensions: Vec<String>,

    /// Config file that was merged, if any
    pub config_file: Option<PathBuf>,

    /// Text-generation provider (e.g., "gemini")
    pub provider: String,

    /// Model identifier
    pub model: String,

    /// Base URL of the provider API
    pub endpoint: String,

    /// Environment variable the credential is read from
    pub api_key_env: String,

    /// Resolved credential for the provider
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// Sampling temperature passed to the model
    pub temperature: Option<f32>,

    /// Maximum tokens the model may generate
    pub max_tokens: Option<u32>,

    /// Optional YAML prompt template replacing the built-in one
    pub prompt_file: Option<PathBuf>,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

/// Full configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    documents: Option<DocumentsConfig>,
    llm: Option<LlmSection>,
    prompt: Option<PromptSection>,
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DocumentsConfig {
    path: Option<String>,
    extensions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LlmSection {
    provider: Option<String>,
    model: Option<String>,
    endpoint: Option<String>,
    #[serde(rename = "apiKeyEnv")]
    api_key_env: Option<String>,
    temperature: Option<f32>,
    #[serde(rename = "maxTokens")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PromptSection {
    #[serde(rename = "templateFile")]
    template_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from("data"),
            doc_extensions: vec!["txt".to_string(), "md".to_string()],
            config_file: None,
            provider: "gemini".to_string(),
            model: "gemini-1.5-flash".to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            api_key: None,
            temperature: None,
            max_tokens: None,
            prompt_file: None,
            log_level: None,
            verbose: false,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// Environment variables:
    /// - `RELIEF_CONFIG`: Path to config file (when `config_file` is `None`)
    /// - `RELIEF_DOCS_DIR`: Document directory
    /// - `RELIEF_PROVIDER`: Text-generation provider
    /// - `RELIEF_MODEL`: Model identifier
    /// - `RELIEF_ENDPOINT`: Provider base URL
    /// - `RELIEF_API_KEY`: Credential (wins over the provider variable)
    /// - `GEMINI_API_KEY`: Provider credential (name configurable via `apiKeyEnv`)
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    ///
    /// # Example
    /// ```no_run
    /// use relief_core::config::AppConfig;
    ///
    /// let config = AppConfig::load(None).expect("Failed to load config");
    /// println!("Documents: {:?}", config.docs_dir);
    /// ```
    pub fn load(config_file: Option<PathBuf>) -> AppResult<Self> {
        Self::load_with(config_file, |key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` in place of the process environment.
    pub fn load_with<F>(config_file: Option<PathBuf>, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let explicit = config_file.or_else(|| lookup("RELIEF_CONFIG").map(PathBuf::from));
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::Config(format!(
                        "Config file does not exist: {:?}",
                        path
                    )));
                }
                config = config.merge_yaml(&path)?;
            }
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    config = config.merge_yaml(&path)?;
                }
            }
        }

        // Environment variables override YAML config
        if let Some(dir) = lookup("RELIEF_DOCS_DIR") {
            config.docs_dir = PathBuf::from(dir);
        }

        if let Some(provider) = lookup("RELIEF_PROVIDER") {
            config.provider = provider;
        }

        if let Some(model) = lookup("RELIEF_MODEL") {
            config.model = model;
        }

        if let Some(endpoint) = lookup("RELIEF_ENDPOINT") {
            config.endpoint = endpoint;
        }

        config.api_key = lookup("RELIEF_API_KEY")
            .or_else(|| lookup(&config.api_key_env))
            .filter(|key| !key.trim().is_empty());

        if let Some(level) = lookup("RUST_LOG") {
            config.log_level = Some(level);
        }

        if lookup("NO_COLOR").is_some() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge YAML configuration file into this config.
    fn merge_yaml(&self, path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        let mut result = self.clone();
        result.config_file = Some(path.to_path_buf());

        if let Some(docs) = config_file.documents {
            if let Some(path) = docs.path {
                result.docs_dir = PathBuf::from(path);
            }
            if let Some(extensions) = docs.extensions {
                result.doc_extensions = extensions
                    .into_iter()
                    .map(|ext| ext.trim_start_matches('.').to_lowercase())
                    .collect();
            }
        }

        if let Some(llm) = config_file.llm {
            if let Some(provider) = llm.provider {
                result.provider = provider;
            }
            if let Some(model) = llm.model {
                result.model = model;
            }
            if let Some(endpoint) = llm.endpoint {
                result.endpoint = endpoint;
            }
            if let Some(api_key_env) = llm.api_key_env {
                result.api_key_env = api_key_env;
            }
            result.temperature = llm.temperature.or(result.temperature);
            result.max_tokens = llm.max_tokens.or(result.max_tokens);
        }

        if let Some(prompt) = config_file.prompt {
            if let Some(file) = prompt.template_file {
                result.prompt_file = Some(PathBuf::from(file));
            }
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// Command-line flags take precedence over the file and environment.
    pub fn with_overrides(
        mut self,
        docs_dir: Option<PathBuf>,
        provider: Option<String>,
        model: Option<String>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(docs_dir) = docs_dir {
            self.docs_dir = docs_dir;
        }

        if let Some(provider) = provider {
            self.provider = provider;
        }

        if let Some(model) = model {
            self.model = model;
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Validate everything the answer pipeline needs before the first query.
    pub fn validate(&self) -> AppResult<()> {
        let provider = self.provider.to_lowercase();
        if !KNOWN_PROVIDERS.contains(&provider.as_str()) {
            return Err(AppError::Config(format!(
                "Unknown provider: {}. Supported: {}",
                self.provider,
                KNOWN_PROVIDERS.join(", ")
            )));
        }

        if self.model.trim().is_empty() {
            return Err(AppError::Config("Model identifier is empty".to_string()));
        }

        if self.api_key.is_none() {
            return Err(AppError::Config(format!(
                "API key not found: set RELIEF_API_KEY or {}",
                self.api_key_env
            )));
        }

        if let Some(temperature) = self.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(AppError::Config(format!(
                    "Temperature must be between 0.0 and 2.0, got {}",
                    temperature
                )));
            }
        }

        tracing::debug!(
            "Configuration valid: provider {}, model {}, documents {:?}",
            self.provider,
            self.model,
            self.docs_dir
        );
        Ok(())
    }
}
