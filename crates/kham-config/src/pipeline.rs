use std::env;

use kham_core::JoinStyle;
use serde::{Deserialize, Serialize};

fn default_target_lang() -> String {
    "th".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PipelineConfig {
    /// Re-join style for the displayed Thai translation
    #[serde(default)]
    pub join_style: JoinStyle,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
    /// Also summarize the Thai Wikipedia article for the translated term
    #[serde(default)]
    pub thai_reference: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            join_style: JoinStyle::default(),
            target_lang: default_target_lang(),
            thai_reference: false,
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        let join_style = match env::var("KHAM_JOIN_STYLE").as_deref() {
            Ok("space") => JoinStyle::Space,
            _ => JoinStyle::Concatenate,
        };

        let thai_reference = env::var("KHAM_THAI_REFERENCE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            join_style,
            thai_reference,
            ..Self::default()
        }
    }
}
