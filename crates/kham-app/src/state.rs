use std::sync::Arc;

use kham_config::Config;
use kham_pipeline::{Pipeline, PipelineOptions};
use tokio::sync::OnceCell;

use crate::services::build_services;

pub struct AppState {
    pub config: Config,
    pipeline: OnceCell<Arc<Pipeline>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            pipeline: OnceCell::new(),
        }
    }

    /// Pipeline built on first use and shared afterwards
    pub async fn pipeline(&self) -> anyhow::Result<Arc<Pipeline>> {
        let pipeline = self
            .pipeline
            .get_or_try_init(|| async {
                let (services, glossary_error) = build_services(&self.config)?;
                if let Some(e) = glossary_error {
                    tracing::warn!("Serving built-in glossary: {}", e);
                    eprintln!("warning: glossary could not be loaded, using built-in terms ({e})");
                }
                let options = PipelineOptions::from_config(&self.config);
                anyhow::Ok(Arc::new(Pipeline::new(services, options)))
            })
            .await?;

        Ok(Arc::clone(pipeline))
    }
}
