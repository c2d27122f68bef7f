pub mod error;
pub mod glossary;
pub mod language;
pub mod preprocess;
pub mod seed;
pub mod types;

pub use error::{ErrorRecord, GlossaryError, LookupError, Stage};
pub use glossary::{GlossaryEntry, GlossaryLoad, GlossaryStore, MatchPolicy};
pub use language::{SegmentError, Segmenter};
pub use preprocess::{JoinStyle, TextNormalizer};
pub use types::{GlossaryHit, LookupResult, WikipediaHit};
