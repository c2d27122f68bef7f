use std::time::Duration;

use serde::Deserialize;

use crate::{DefinitionSource, FetchError};

/// MediaWiki extracts API client. One request per lookup, no retries.
#[derive(Clone)]
pub struct WikipediaClient {
    /// Endpoint template, `{lang}` is replaced per request
    api_url: String,
    client: reqwest::Client,
}

impl WikipediaClient {
    pub fn new(api_url: String, timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { api_url, client })
    }

    pub fn endpoint(&self, lang: &str) -> String {
        self.api_url.replace("{lang}", lang)
    }

    async fn query_extract(&self, term: &str, lang: &str) -> Result<String, FetchError> {
        let params = [
            ("action", "query"),
            ("format", "json"),
            ("titles", term),
            ("prop", "extracts"),
            ("exintro", "true"),
            ("explaintext", "true"),
        ];

        let response = self
            .client
            .get(self.endpoint(lang))
            .query(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        let parsed: QueryResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))?;

        first_extract(parsed).ok_or_else(|| FetchError::NotFound(term.to_string()))
    }
}

#[async_trait::async_trait]
impl DefinitionSource for WikipediaClient {
    async fn fetch_definition(&self, term: &str, lang: &str) -> Result<String, FetchError> {
        tracing::debug!("Querying {} Wikipedia for '{}'", lang, term);

        let result = self.query_extract(term, lang).await;
        if let Err(e) = &result {
            tracing::warn!("Wikipedia lookup for '{}' failed: {}", term, e);
        }
        result
    }
}

// { "query": { "pages": { "<id>": { "extract": "..." }, ... } } }
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    query: Option<Query>,
}

#[derive(Debug, Deserialize)]
struct Query {
    #[serde(default)]
    pages: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct Page {
    #[serde(default)]
    extract: Option<String>,
}

fn first_extract(response: QueryResponse) -> Option<String> {
    response
        .query?
        .pages
        .into_iter()
        .filter_map(|(_, page)| serde_json::from_value::<Page>(page).ok())
        .filter_map(|page| page.extract)
        .map(|extract| extract.trim().to_string())
        .find(|extract| !extract.is_empty())
}
