use serde::Serialize;

use crate::glossary::GlossaryEntry;

/// Successful lookup, tagged by where the answer came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum LookupResult {
    Glossary(GlossaryHit),
    Wikipedia(WikipediaHit),
}

impl LookupResult {
    pub fn source(&self) -> &'static str {
        match self {
            LookupResult::Glossary(_) => "glossary",
            LookupResult::Wikipedia(_) => "wikipedia",
        }
    }

    pub fn term(&self) -> &str {
        match self {
            LookupResult::Glossary(hit) => &hit.term,
            LookupResult::Wikipedia(hit) => &hit.term,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlossaryHit {
    pub term: String,
    pub translation: String,
    pub description: String,
}

impl GlossaryHit {
    /// `term` echoes the query; under substring matching it can differ
    /// from the entry's own spelling
    pub fn from_entry(query: &str, entry: GlossaryEntry) -> Self {
        Self {
            term: query.to_string(),
            translation: entry.th,
            description: entry.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WikipediaHit {
    pub term: String,
    /// The term itself in Thai
    pub translation: String,
    pub english_definition: String,
    /// Full definition in Thai, re-segmented for display
    pub thai_translation: String,
    /// Thai rendering of the English summary
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thai_reference_summary: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glossary_hit_serializes_with_source_tag() {
        let result = LookupResult::Glossary(GlossaryHit::from_entry(
            "big data",
            GlossaryEntry::new("Big Data", "ข้อมูลขนาดใหญ่", "desc"),
        ));

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["source"], "glossary");
        assert_eq!(json["translation"], "ข้อมูลขนาดใหญ่");
        assert_eq!(result.term(), "big data");
    }

    #[test]
    fn wikipedia_hit_uses_camel_case_fields() {
        let result = LookupResult::Wikipedia(WikipediaHit {
            term: "Rust".to_string(),
            translation: "สนิม".to_string(),
            english_definition: "A language.".to_string(),
            thai_translation: "ภาษา".to_string(),
            summary: "ภาษา".to_string(),
            thai_reference_summary: None,
        });

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["source"], "wikipedia");
        assert_eq!(json["englishDefinition"], "A language.");
        assert!(json.get("thaiReferenceSummary").is_none());
    }
}
