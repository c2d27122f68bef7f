pub mod segmenter;
pub mod translator;

pub use segmenter::ThaiSegmenter;
pub use translator::GoogleTranslator;
