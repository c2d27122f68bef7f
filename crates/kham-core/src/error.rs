use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Pipeline step a translation was requested for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The search term itself
    Term,
    /// The full English definition
    Definition,
    /// The English summary
    Summary,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Term => "term",
            Stage::Definition => "definition",
            Stage::Summary => "summary",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GlossaryError {
    #[error("Term already exists in glossary: {0}")]
    Duplicate(String),

    #[error("Failed to access glossary file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glossary file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Glossary file {} could not be loaded, refusing to overwrite it", .0.display())]
    Unreadable(PathBuf),
}

/// Terminal failures of a lookup or a glossary mutation
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("'{term}' was not found in the glossary or the reference source")]
    NotFound { term: String },

    #[error("Translation of the {stage} is unavailable: {reason}")]
    TranslationUnavailable { stage: Stage, reason: String },

    #[error("Summarization is unavailable: {reason}")]
    SummarizationUnavailable { reason: String },

    #[error("'{term}' is already in the glossary")]
    DuplicateGlossaryTerm { term: String },

    #[error("Glossary could not be persisted: {reason}")]
    PersistenceFailure { reason: String },
}

impl LookupError {
    /// Stable tag for the error shape of a result record
    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::NotFound { .. } => "not_found",
            LookupError::TranslationUnavailable { .. } => "translation_unavailable",
            LookupError::SummarizationUnavailable { .. } => "summarization_unavailable",
            LookupError::DuplicateGlossaryTerm { .. } => "duplicate_glossary_term",
            LookupError::PersistenceFailure { .. } => "persistence_failure",
        }
    }

    /// Message safe to show an end user. Provider details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            LookupError::NotFound { term } => {
                format!("No information found for '{term}' in the glossary or on Wikipedia")
            }
            LookupError::TranslationUnavailable { stage, .. } => {
                format!("Found a definition, but translating the {stage} to Thai failed")
            }
            LookupError::SummarizationUnavailable { .. } => {
                "Found a definition, but it could not be summarized".to_string()
            }
            LookupError::DuplicateGlossaryTerm { term } => {
                format!("'{term}' is already in the glossary")
            }
            LookupError::PersistenceFailure { .. } => {
                "Your new term was not saved: the glossary file could not be written".to_string()
            }
        }
    }

    pub fn to_record(&self) -> ErrorRecord {
        ErrorRecord {
            kind: self.kind().to_string(),
            message: self.user_message(),
        }
    }
}

impl From<GlossaryError> for LookupError {
    fn from(err: GlossaryError) -> Self {
        match err {
            GlossaryError::Duplicate(term) => LookupError::DuplicateGlossaryTerm { term },
            other => LookupError::PersistenceFailure {
                reason: other.to_string(),
            },
        }
    }
}

/// Serialized `Error { kind, message }` result shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
    pub kind: String,
    pub message: String,
}
