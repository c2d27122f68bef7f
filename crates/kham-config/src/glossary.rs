use std::env;

use kham_core::MatchPolicy;
use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "glossary.json".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GlossaryConfig {
    /// Backing JSON file, created from the seed data when missing
    #[serde(default = "default_path")]
    pub path: String,
    #[serde(default)]
    pub match_policy: MatchPolicy,
}

impl Default for GlossaryConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            match_policy: MatchPolicy::default(),
        }
    }
}

impl GlossaryConfig {
    pub fn new() -> Self {
        let path = env::var("KHAM_GLOSSARY_PATH").unwrap_or_else(|_| default_path());

        let match_policy = match env::var("KHAM_MATCH_POLICY").as_deref() {
            Ok("exact") => MatchPolicy::Exact,
            _ => MatchPolicy::Substring,
        };

        Self { path, match_policy }
    }
}
