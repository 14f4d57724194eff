//! Request orchestrator: classify, retrieve, synthesize.

use crate::answer::Answer;
use crate::safety::matched_keyword;
use crate::synthesizer::AnswerSynthesizer;
use relief_core::{AppConfig, AppError, AppResult};
use relief_knowledge::{retrieve, Corpus, DocumentStore};
use relief_llm::create_client;
use relief_prompt::{default_template, load_template};
use tracing::Instrument;

/// The explainer bot.
///
/// Holds the corpus and the synthesizer for the whole session. Each call to
/// [`ReliefBot::respond`] handles exactly one query and yields exactly one
/// [`Answer`].
pub struct ReliefBot {
    corpus: Corpus,
    synthesizer: AnswerSynthesizer,
}

impl ReliefBot {
    /// Create a bot from an already loaded corpus and synthesizer.
    pub fn new(corpus: Corpus, synthesizer: AnswerSynthesizer) -> Self {
        Self {
            corpus,
            synthesizer,
        }
    }

    /// Wire a bot from configuration.
    ///
    /// Fails with `AppError::Config` when the credential is missing or the
    /// provider is unknown, and with `AppError::Load` when the corpus cannot
    /// be read. Both are startup failures.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        config.validate()?;

        let corpus = DocumentStore::from_config(config).load()?;

        let template = match config.prompt_file {
            Some(ref path) => load_template(path)?,
            None => default_template(),
        };

        let client = create_client(
            &config.provider,
            Some(config.endpoint.as_str()),
            config.api_key.as_deref(),
        )
        .map_err(AppError::Config)?;

        let synthesizer = AnswerSynthesizer::new(client, &config.model)
            .with_template(template)
            .with_temperature(config.temperature)
            .with_max_tokens(config.max_tokens);

        tracing::info!(
            "Relief bot ready: {} documents, provider {}, model {}",
            corpus.len(),
            config.provider,
            config.model
        );

        Ok(Self::new(corpus, synthesizer))
    }

    /// The loaded corpus.
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Answer one query.
    pub async fn respond(&self, query: &str) -> Answer {
        let span = tracing::info_span!("query", len = query.len());
        self.answer(query).instrument(span).await
    }

    async fn answer(&self, query: &str) -> Answer {
        if let Some(keyword) = matched_keyword(query) {
            tracing::info!("Emergency keyword {:?} matched, redirecting", keyword);
            return Answer::SafetyRedirect;
        }

        let retrieved = retrieve(query, &self.corpus);
        if retrieved.is_empty() {
            tracing::info!("No relevant documents");
            return Answer::NoInformation;
        }

        tracing::info!("Retrieved {} documents", retrieved.len());
        let context = retrieved.context();

        match self.synthesizer.synthesize(&context, query).await {
            Ok(text) => Answer::Explanation(text),
            Err(e) => {
                tracing::error!("Synthesis failed: {}", e);
                Answer::Failure
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::{FAILURE_MESSAGE, NO_INFORMATION_MESSAGE, SAFETY_MESSAGE};
    use crate::testing::FakeClient;
    use relief_core::SynthesisError;
    use std::sync::Arc;

    fn bot(texts: &[&str], client: Arc<FakeClient>) -> ReliefBot {
        let corpus: Corpus = texts.iter().copied().collect();
        ReliefBot::new(corpus, AnswerSynthesizer::new(client, "test-model"))
    }

    #[tokio::test]
    async fn test_emergency_short_circuits() {
        let client = Arc::new(FakeClient::answering("should not be used"));
        let bot = bot(&["People trapped by floods wait for rescue teams."], client.clone());

        for query in ["I am trapped", "HELP ME", "help me", "Please call someone"] {
            let answer = bot.respond(query).await;
            assert_eq!(answer, Answer::SafetyRedirect);
            assert_eq!(answer.message(), SAFETY_MESSAGE);
        }
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_no_match_skips_synthesis() {
        let client = Arc::new(FakeClient::answering("unused"));
        let bot = bot(&["Evacuation means leaving a dangerous area."], client.clone());

        let answer = bot.respond("xylophone").await;
        assert_eq!(answer, Answer::NoInformation);
        assert_eq!(answer.message(), NO_INFORMATION_MESSAGE);
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_corpus_yields_no_information() {
        let client = Arc::new(FakeClient::answering("unused"));
        let bot = bot(&[], client.clone());

        assert_eq!(bot.respond("evacuation").await, Answer::NoInformation);
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_relevant_document_is_sent_as_context() {
        let doc = "Evacuation procedures require moving to designated shelters.";
        let client = Arc::new(FakeClient::answering("Go to the nearest shelter."));
        let bot = bot(&[doc, "Cyclones form over warm oceans."], client.clone());

        let answer = bot.respond("Explain evacuation procedures").await;
        assert_eq!(
            answer,
            Answer::Explanation("Go to the nearest shelter.".to_string())
        );

        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].prompt.contains(doc));
        assert!(!requests[0].prompt.contains("Cyclones form over warm oceans."));
        assert!(requests[0].prompt.contains("Explain evacuation procedures"));
    }

    #[tokio::test]
    async fn test_context_joins_matches_in_corpus_order() {
        let client = Arc::new(FakeClient::answering("ok"));
        let bot = bot(
            &["Relief camps provide food.", "Floods damage roads.", "Camps need water."],
            client.clone(),
        );

        bot.respond("camps").await;
        let prompt = &client.requests()[0].prompt;
        assert!(prompt.contains("Relief camps provide food.\n\nCamps need water."));
    }

    #[tokio::test]
    async fn test_synthesis_failure_is_generic() {
        let client = Arc::new(FakeClient::failing(SynthesisError::Auth(
            "API key not valid".to_string(),
        )));
        let bot = bot(&["Evacuation routes are signposted."], client.clone());

        let answer = bot.respond("evacuation routes").await;
        assert_eq!(answer, Answer::Failure);
        assert_eq!(answer.message(), FAILURE_MESSAGE);
        assert!(!answer.message().contains("API key"));
        assert_eq!(client.call_count(), 1);
    }

    #[test]
    fn test_from_config_requires_api_key() {
        let config = AppConfig::default();
        assert!(matches!(
            ReliefBot::from_config(&config),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_from_config_requires_documents() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let mut config = AppConfig::default();
        config.api_key = Some("key".to_string());
        config.docs_dir = temp_dir.path().join("missing");

        assert!(matches!(
            ReliefBot::from_config(&config),
            Err(AppError::Load(_))
        ));
    }

    #[test]
    fn test_from_config_loads_corpus() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("camps.txt"), "Relief camps provide food.").unwrap();

        let mut config = AppConfig::default();
        config.api_key = Some("key".to_string());
        config.docs_dir = temp_dir.path().to_path_buf();

        let bot = ReliefBot::from_config(&config).unwrap();
        assert_eq!(bot.corpus().len(), 1);
    }
}
