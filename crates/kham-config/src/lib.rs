use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::glossary::GlossaryConfig;
use self::pipeline::PipelineConfig;
use self::summarizer::SummarizerConfig;
use self::translator::TranslatorConfig;
use self::wiki::WikiConfig;

pub mod glossary;
pub mod pipeline;
pub mod summarizer;
pub mod translator;
pub mod wiki;

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub glossary: GlossaryConfig,
    pub wiki: WikiConfig,
    pub translator: TranslatorConfig,
    pub summarizer: SummarizerConfig,
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        Config {
            glossary: GlossaryConfig::new(),
            wiki: WikiConfig::new(),
            translator: TranslatorConfig::new(),
            summarizer: SummarizerConfig::new(),
            pipeline: PipelineConfig::new(),
        }
    }

    /// Load a JSON config file. Missing fields take their defaults.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use kham_core::{JoinStyle, MatchPolicy};

    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{
                "glossary": { "match_policy": "exact" },
                "pipeline": { "join_style": "space" },
                "summarizer": { "sentence_limit": 2 }
            }"#,
        )
        .unwrap();

        let config = Config::load_from_file(&path).unwrap();

        assert_eq!(config.glossary.match_policy, MatchPolicy::Exact);
        assert_eq!(config.glossary.path, "glossary.json");
        assert_eq!(config.pipeline.join_style, JoinStyle::Space);
        assert_eq!(config.summarizer.sentence_limit, 2);
        assert_eq!(config.summarizer.max_length, 50);
        assert_eq!(config.wiki.api_url, "https://{lang}.wikipedia.org/w/api.php");
    }

    #[test]
    fn defaults_match_latest_pipeline() {
        let config = Config::default();

        assert_eq!(config.glossary.match_policy, MatchPolicy::Substring);
        assert_eq!(config.pipeline.join_style, JoinStyle::Concatenate);
        assert_eq!(config.summarizer.sentence_limit, 10);
        assert_eq!(config.summarizer.min_length, 15);
        assert!(!config.pipeline.thai_reference);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{").unwrap();

        let err = Config::load_from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
