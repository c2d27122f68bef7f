use std::env;

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://api-inference.huggingface.co/models".to_string()
}

fn default_primary_model() -> String {
    "csebuetnlp/mT5_multilingual_XLSum".to_string()
}

fn default_fallback_model() -> String {
    "facebook/bart-large-cnn".to_string()
}

fn default_max_length() -> u32 {
    50
}

fn default_min_length() -> u32 {
    15
}

fn default_sentence_limit() -> usize {
    10
}

fn default_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SummarizerConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub api_token: String,
    #[serde(default = "default_primary_model")]
    pub primary_model: String,
    #[serde(default = "default_fallback_model")]
    pub fallback_model: String,
    #[serde(default = "default_max_length")]
    pub max_length: u32,
    #[serde(default = "default_min_length")]
    pub min_length: u32,
    /// Sentences kept for the extractive pre-summary
    #[serde(default = "default_sentence_limit")]
    pub sentence_limit: usize,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_token: String::new(),
            primary_model: default_primary_model(),
            fallback_model: default_fallback_model(),
            max_length: default_max_length(),
            min_length: default_min_length(),
            sentence_limit: default_sentence_limit(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SummarizerConfig {
    pub fn new() -> Self {
        let api_token = env::var("KHAM_HF_TOKEN").unwrap_or_default();

        let sentence_limit = env::var("KHAM_SUMMARY_SENTENCES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_sentence_limit);

        let api_url = env::var("KHAM_HF_API_URL").unwrap_or_else(|_| default_api_url());

        Self {
            api_url,
            api_token,
            sentence_limit,
            ..Self::default()
        }
    }
}
