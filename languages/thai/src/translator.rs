use std::time::Duration;

use async_trait::async_trait;
use kham_translator::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};

/// Google Translate web endpoint (`client=gtx`), no key required
#[derive(Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    api_url: String,
}

impl GoogleTranslator {
    pub fn new(api_url: String, timeout: Duration) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { client, api_url })
    }
}

/// Response is `[[["แปล", "source", ...], ...], ...]`; translated chunks are
/// the first element of each inner array.
fn collect_chunks(json: &serde_json::Value) -> Option<String> {
    let chunks = json.get(0)?.as_array()?;
    let text: String = chunks
        .iter()
        .filter_map(|chunk| chunk.get(0).and_then(|t| t.as_str()))
        .collect();

    if text.trim().is_empty() { None } else { Some(text) }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let params = [
            ("client", "gtx"),
            ("sl", from.as_str()),
            ("tl", to.as_str()),
            ("dt", "t"),
            ("q", text),
        ];

        let response = self.client.get(&self.api_url).query(&params).send().await?;

        if response.status() == 429 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            TranslateError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        let translated_text = collect_chunks(&json)
            .ok_or_else(|| TranslateError::ApiError("No translation in response".to_string()))?;

        Ok(Translation {
            text: translated_text,
            from,
            to,
            provider: "google".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Google Translate".to_string(),
            requires_api_key: false,
        }
    }
}
