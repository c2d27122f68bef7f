use std::sync::Arc;

use kham_core::TextNormalizer;
use tokio::sync::OnceCell;

use crate::{LengthBounds, ModelLoader, SummarizeError, SummaryModel};

/// Extractive pre-cut followed by an abstractive model.
///
/// Model selection runs once: the primary model, then the fallback if the
/// primary fails to load. When both fail the adapter stays unusable and
/// never retries.
pub struct SummarizerAdapter {
    loader: Arc<dyn ModelLoader>,
    primary: String,
    fallback: String,
    model: OnceCell<Option<Arc<dyn SummaryModel>>>,
    normalizer: TextNormalizer,
    sentence_limit: usize,
}

impl SummarizerAdapter {
    pub fn new(
        loader: Arc<dyn ModelLoader>,
        primary: impl Into<String>,
        fallback: impl Into<String>,
        normalizer: TextNormalizer,
        sentence_limit: usize,
    ) -> Self {
        Self {
            loader,
            primary: primary.into(),
            fallback: fallback.into(),
            model: OnceCell::new(),
            normalizer,
            sentence_limit: sentence_limit.max(1),
        }
    }

    async fn model(&self) -> Option<Arc<dyn SummaryModel>> {
        self.model
            .get_or_init(|| async {
                for model_id in [&self.primary, &self.fallback] {
                    match self.loader.load(model_id).await {
                        Ok(model) => {
                            tracing::info!("Summarization model loaded: {}", model.name());
                            return Some(model);
                        }
                        Err(e) => tracing::warn!("Summarization model {} unavailable: {}", model_id, e),
                    }
                }
                tracing::error!("No summarization model could be loaded");
                None
            })
            .await
            .clone()
    }

    /// Load the model now instead of on the first summary
    pub async fn warm_up(&self) -> bool {
        self.model().await.is_some()
    }

    /// Name of the model in use, if one loaded
    pub async fn active_model(&self) -> Option<String> {
        self.model().await.map(|m| m.name().to_string())
    }

    pub async fn summarize(&self, text: &str, bounds: LengthBounds) -> Result<String, SummarizeError> {
        let model = self.model().await.ok_or(SummarizeError::Unavailable)?;

        let extract = self.normalizer.first_sentences(text, self.sentence_limit);
        if extract.trim().is_empty() {
            return Err(SummarizeError::EmptyInput);
        }
        tracing::debug!(
            "Summarizing {} chars with {} (max {}, min {})",
            extract.len(),
            model.name(),
            bounds.max_length,
            bounds.min_length
        );

        match model.summarize(&extract, bounds).await {
            Ok(summary) if !summary.trim().is_empty() => Ok(summary.trim().to_string()),
            Ok(_) => Err(SummarizeError::Model("model returned an empty summary".to_string())),
            Err(e) => {
                tracing::warn!("Summarization with {} failed: {}", model.name(), e);
                Err(e)
            }
        }
    }
}
