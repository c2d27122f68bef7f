mod adapter;
mod hf;

pub use adapter::SummarizerAdapter;
pub use hf::{HfInferenceModel, HfLoader};

use std::sync::Arc;

/// Soft length targets in model units (tokens, not characters)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    pub max_length: u32,
    pub min_length: u32,
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self {
            max_length: 50,
            min_length: 15,
        }
    }
}

/// Abstractive summarization model
#[async_trait::async_trait]
pub trait SummaryModel: Send + Sync {
    fn name(&self) -> &str;

    async fn summarize(&self, text: &str, bounds: LengthBounds) -> Result<String, SummarizeError>;
}

/// Loads summarization models by id
#[async_trait::async_trait]
pub trait ModelLoader: Send + Sync {
    async fn load(&self, model_id: &str) -> Result<Arc<dyn SummaryModel>, SummarizeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizeError {
    #[error("No summarization model could be loaded")]
    Unavailable,

    #[error("Failed to load model {model}: {reason}")]
    LoadFailed { model: String, reason: String },

    #[error("Nothing to summarize")]
    EmptyInput,

    #[error("Model error: {0}")]
    Model(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(u16),
}
