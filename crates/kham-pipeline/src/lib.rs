//! Glossary-first lookup, translation and summarization of a single term.

use std::sync::Arc;

use kham_config::Config;
use kham_core::{
    GlossaryEntry, GlossaryHit, GlossaryStore, LookupError, LookupResult, Stage, TextNormalizer,
    WikipediaHit,
};
use kham_summarizer::{LengthBounds, SummarizerAdapter};
use kham_translator::TranslationAdapter;
use kham_wiki::DefinitionSource;

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Language of search terms and of the reference source
    pub source_lang: String,
    pub target_lang: String,
    pub bounds: LengthBounds,
    pub thai_reference: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            source_lang: "en".to_string(),
            target_lang: "th".to_string(),
            bounds: LengthBounds::default(),
            thai_reference: false,
        }
    }
}

impl PipelineOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            source_lang: config.wiki.language.clone(),
            target_lang: config.pipeline.target_lang.clone(),
            bounds: LengthBounds {
                max_length: config.summarizer.max_length,
                min_length: config.summarizer.min_length,
            },
            thai_reference: config.pipeline.thai_reference,
        }
    }
}

/// Long-lived services shared by every lookup
#[derive(Clone)]
pub struct Services {
    pub glossary: Arc<GlossaryStore>,
    pub definitions: Arc<dyn DefinitionSource>,
    pub translator: Arc<TranslationAdapter>,
    pub summarizer: Arc<SummarizerAdapter>,
    pub normalizer: TextNormalizer,
}

pub struct Pipeline {
    services: Services,
    options: PipelineOptions,
}

impl Pipeline {
    pub fn new(services: Services, options: PipelineOptions) -> Self {
        Self { services, options }
    }

    pub fn glossary(&self) -> &GlossaryStore {
        &self.services.glossary
    }

    /// Build the translation provider and load the summary model up front.
    /// Returns whether each came up.
    pub async fn warm_up(&self) -> (bool, bool) {
        tokio::join!(
            self.services.translator.warm_up(),
            self.services.summarizer.warm_up()
        )
    }

    /// Look up one term. Callers trim and reject blank input first.
    pub async fn process_word(&self, term: &str) -> Result<LookupResult, LookupError> {
        let term = term.trim();

        if let Some(entry) = self.services.glossary.lookup(term) {
            tracing::debug!("Glossary hit for '{}': {}", term, entry.en);
            return Ok(LookupResult::Glossary(GlossaryHit::from_entry(term, entry)));
        }

        let definition = self
            .services
            .definitions
            .fetch_definition(term, &self.options.source_lang)
            .await
            .map_err(|e| {
                tracing::debug!("No definition for '{}': {}", term, e);
                LookupError::NotFound {
                    term: term.to_string(),
                }
            })?;
        tracing::debug!("Fetched {} char definition for '{}'", definition.len(), term);

        let english = self.services.normalizer.clean(&definition);

        // Independent calls; results are checked in stage order below
        let (term_th, definition_th, summary_en) = tokio::join!(
            self.translate(term, Stage::Term),
            self.translate(&definition, Stage::Definition),
            self.services.summarizer.summarize(&english, self.options.bounds),
        );

        let definition_th = definition_th?;
        let summary_en = summary_en.map_err(|e| LookupError::SummarizationUnavailable {
            reason: e.to_string(),
        })?;
        let summary = self.translate(&summary_en, Stage::Summary).await?;
        let translation = term_th?;

        let thai_reference_summary = if self.options.thai_reference {
            self.thai_reference_summary(&translation).await
        } else {
            None
        };

        Ok(LookupResult::Wikipedia(WikipediaHit {
            term: term.to_string(),
            translation,
            english_definition: definition,
            thai_translation: self.services.normalizer.normalize(&definition_th),
            summary,
            thai_reference_summary,
        }))
    }

    /// Add a user-submitted entry to the glossary
    pub fn add_entry(&self, entry: GlossaryEntry) -> Result<(), LookupError> {
        self.services.glossary.add(entry).map_err(|e| {
            tracing::warn!("Glossary addition rejected: {}", e);
            LookupError::from(e)
        })
    }

    async fn translate(&self, text: &str, stage: Stage) -> Result<String, LookupError> {
        self.services
            .translator
            .translate(text, &self.options.source_lang, &self.options.target_lang)
            .await
            .map_err(|e| LookupError::TranslationUnavailable {
                stage,
                reason: e.to_string(),
            })
    }

    /// Summary of the target-language article for the translated term.
    /// Optional: any failure just leaves it out.
    async fn thai_reference_summary(&self, translated_term: &str) -> Option<String> {
        let extract = self
            .services
            .definitions
            .fetch_definition(translated_term, &self.options.target_lang)
            .await
            .ok()?;

        let cleaned = self.services.normalizer.clean(&extract);
        match self
            .services
            .summarizer
            .summarize(&cleaned, self.options.bounds)
            .await
        {
            Ok(summary) => Some(self.services.normalizer.normalize(&summary)),
            Err(e) => {
                tracing::debug!("Thai reference summary skipped: {}", e);
                None
            }
        }
    }
}
