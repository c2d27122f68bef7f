use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use kham_config::Config;
use kham_core::seed::seed_entries;
use kham_core::{GlossaryError, GlossaryLoad, GlossaryStore, TextNormalizer};
use kham_lang_thai::{GoogleTranslator, ThaiSegmenter};
use kham_pipeline::Services;
use kham_summarizer::{HfLoader, SummarizerAdapter};
use kham_translator::{ProviderFactory, TranslateError, TranslationAdapter, Translator};
use kham_wiki::WikipediaClient;

/// Wire the concrete providers. A glossary load failure is returned
/// alongside the services, which then serve the seed set.
pub fn build_services(config: &Config) -> anyhow::Result<(Services, Option<GlossaryError>)> {
    let GlossaryLoad { store, error } = GlossaryStore::open(
        &config.glossary.path,
        seed_entries(),
        config.glossary.match_policy,
    );

    // Glossary translations double as segmentation vocabulary
    let mut segmenter = ThaiSegmenter::new();
    let entries = store.entries();
    segmenter.extend(entries.iter().map(|e| e.th.as_str()));
    tracing::debug!("Thai segmenter vocabulary: {} words", segmenter.word_count());
    let normalizer = TextNormalizer::new(Arc::new(segmenter), config.pipeline.join_style);

    let definitions = WikipediaClient::new(
        config.wiki.api_url.clone(),
        config.wiki.timeout(),
        &config.wiki.user_agent,
    )
    .context("Failed to build Wikipedia client")?;

    let loader = HfLoader::new(
        config.summarizer.api_url.clone(),
        Some(config.summarizer.api_token.clone()),
        Duration::from_secs(config.summarizer.timeout_secs),
    )
    .context("Failed to build summarization client")?;

    let summarizer = SummarizerAdapter::new(
        Arc::new(loader),
        config.summarizer.primary_model.clone(),
        config.summarizer.fallback_model.clone(),
        normalizer.clone(),
        config.summarizer.sentence_limit,
    );

    let services = Services {
        glossary: Arc::new(store),
        definitions: Arc::new(definitions),
        translator: Arc::new(TranslationAdapter::new(translator_factory(config))),
        summarizer: Arc::new(summarizer),
        normalizer,
    };

    Ok((services, error))
}

fn translator_factory(config: &Config) -> ProviderFactory {
    let translator = config.translator.clone();

    Box::new(move || {
        if !translator.enabled {
            return Err(TranslateError::Unavailable(
                "translation is disabled in config".to_string(),
            ));
        }

        match translator.provider.as_str() {
            "google" => {
                let timeout = Duration::from_secs(translator.timeout_secs);
                let provider = GoogleTranslator::new(translator.api_url.clone(), timeout)?;
                Ok(Arc::new(provider) as Arc<dyn Translator>)
            }
            other => Err(TranslateError::Unavailable(format!(
                "unknown translation provider: {other}"
            ))),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &tempfile::TempDir) -> Config {
        let mut config = Config::default();
        config.glossary.path = dir.path().join("glossary.json").display().to_string();
        config
    }

    #[test]
    fn first_run_writes_seed_glossary() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);

        let (services, error) = build_services(&config).unwrap();

        assert!(error.is_none());
        assert!(dir.path().join("glossary.json").exists());
        assert!(services.glossary.lookup("blockchain").is_some());
    }

    #[tokio::test]
    async fn disabled_translator_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(&dir);
        config.translator.enabled = false;

        let (services, _) = build_services(&config).unwrap();
        let err = services.translator.translate("x", "en", "th").await.unwrap_err();

        assert!(matches!(err, TranslateError::Unavailable(_)));
    }

    #[tokio::test]
    async fn unknown_provider_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(&dir);
        config.translator.provider = "carrier-pigeon".to_string();

        let (services, _) = build_services(&config).unwrap();

        assert!(!services.translator.warm_up().await);
    }
}
