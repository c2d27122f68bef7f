use std::fmt::Write;

use kham_core::{GlossaryEntry, LookupError, LookupResult};

pub fn result_json(result: &LookupResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

pub fn error_json(err: &LookupError) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&err.to_record())
}

pub fn result_plain(result: &LookupResult) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    match result {
        LookupResult::Glossary(hit) => {
            let _ = writeln!(out, "{} (glossary)", hit.term);
            let _ = writeln!(out, "Thai: {}", hit.translation);
            if !hit.description.is_empty() {
                let _ = writeln!(out, "Description: {}", hit.description);
            }
        }
        LookupResult::Wikipedia(hit) => {
            let _ = writeln!(out, "{} (wikipedia)", hit.term);
            let _ = writeln!(out, "Thai: {}", hit.translation);
            let _ = writeln!(out, "\nDefinition:\n{}", hit.english_definition);
            let _ = writeln!(out, "\nThai translation:\n{}", hit.thai_translation);
            let _ = writeln!(out, "\nSummary:\n{}", hit.summary);
            if let Some(reference) = &hit.thai_reference_summary {
                let _ = writeln!(out, "\nThai Wikipedia summary:\n{}", reference);
            }
        }
    }

    out
}

pub fn entries_plain(entries: &[GlossaryEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{} - {}\n", e.en, e.th))
        .collect()
}

#[cfg(test)]
mod tests {
    use kham_core::{GlossaryHit, WikipediaHit};

    use super::*;

    fn wikipedia_hit(reference: Option<&str>) -> LookupResult {
        LookupResult::Wikipedia(WikipediaHit {
            term: "Rust".to_string(),
            translation: "รัสต์".to_string(),
            english_definition: "Rust is a language.".to_string(),
            thai_translation: "รัสต์เป็นภาษา".to_string(),
            summary: "ภาษา".to_string(),
            thai_reference_summary: reference.map(str::to_string),
        })
    }

    #[test]
    fn plain_glossary_hit_skips_empty_description() {
        let result = LookupResult::Glossary(GlossaryHit {
            term: "Cloud".to_string(),
            translation: "คลาวด์".to_string(),
            description: String::new(),
        });

        let out = result_plain(&result);

        assert!(out.starts_with("Cloud (glossary)\n"));
        assert!(out.contains("Thai: คลาวด์"));
        assert!(!out.contains("Description"));
    }

    #[test]
    fn plain_wikipedia_hit_shows_reference_only_when_present() {
        assert!(!result_plain(&wikipedia_hit(None)).contains("Thai Wikipedia"));

        let out = result_plain(&wikipedia_hit(Some("สรุป")));
        assert!(out.contains("Summary:\nภาษา"));
        assert!(out.contains("Thai Wikipedia summary:\nสรุป"));
    }

    #[test]
    fn error_record_carries_kind_and_message() {
        let err = LookupError::NotFound {
            term: "Widget".to_string(),
        };

        let json: serde_json::Value = serde_json::from_str(&error_json(&err).unwrap()).unwrap();

        assert_eq!(json["kind"], "not_found");
        assert!(json["message"].as_str().unwrap().contains("Widget"));
    }

    #[test]
    fn entries_are_listed_one_per_line() {
        let entries = vec![
            GlossaryEntry::new("Python", "ไพธอน", ""),
            GlossaryEntry::new("Algorithm", "อัลกอริทึม", ""),
        ];

        assert_eq!(entries_plain(&entries), "Python - ไพธอน\nAlgorithm - อัลกอริทึม\n");
    }
}
