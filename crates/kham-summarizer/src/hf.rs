use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{LengthBounds, ModelLoader, SummarizeError, SummaryModel};

/// Loads models served by a Hugging Face style inference endpoint
#[derive(Clone)]
pub struct HfLoader {
    client: reqwest::Client,
    api_url: String,
    token: Option<String>,
}

impl HfLoader {
    pub fn new(api_url: String, token: Option<String>, timeout: Duration) -> Result<Self, SummarizeError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
        })
    }
}

#[async_trait::async_trait]
impl ModelLoader for HfLoader {
    async fn load(&self, model_id: &str) -> Result<Arc<dyn SummaryModel>, SummarizeError> {
        let model = HfInferenceModel {
            client: self.client.clone(),
            url: format!("{}/{}", self.api_url, model_id),
            token: self.token.clone(),
            name: model_id.to_string(),
        };

        // Probe the model so an unreachable endpoint counts as a load failure
        let response = model
            .authorize(self.client.get(&model.url))
            .send()
            .await
            .map_err(|e| SummarizeError::LoadFailed {
                model: model_id.to_string(),
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(SummarizeError::LoadFailed {
                model: model_id.to_string(),
                reason: format!("HTTP {}", response.status()),
            });
        }

        Ok(Arc::new(model))
    }
}

pub struct HfInferenceModel {
    client: reqwest::Client,
    url: String,
    token: Option<String>,
    name: String,
}

impl HfInferenceModel {
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[derive(Serialize)]
struct SummaryRequest<'a> {
    inputs: &'a str,
    parameters: SummaryParameters,
}

#[derive(Serialize)]
struct SummaryParameters {
    max_length: u32,
    min_length: u32,
    do_sample: bool,
}

#[derive(Deserialize)]
struct SummaryOutput {
    summary_text: String,
}

#[async_trait::async_trait]
impl SummaryModel for HfInferenceModel {
    fn name(&self) -> &str {
        &self.name
    }

    async fn summarize(&self, text: &str, bounds: LengthBounds) -> Result<String, SummarizeError> {
        let request = SummaryRequest {
            inputs: text,
            parameters: SummaryParameters {
                max_length: bounds.max_length,
                min_length: bounds.min_length,
                do_sample: false,
            },
        };

        let response = self
            .authorize(self.client.post(&self.url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SummarizeError::Status(response.status().as_u16()));
        }

        let outputs: Vec<SummaryOutput> = response
            .json()
            .await
            .map_err(|e| SummarizeError::Model(format!("Failed to parse response: {}", e)))?;

        outputs
            .into_iter()
            .next()
            .map(|o| o.summary_text)
            .ok_or_else(|| SummarizeError::Model("No summary in response".to_string()))
    }
}
