/// Word and sentence segmentation provider
pub trait Segmenter: Send + Sync {
    /// Language identifier (ISO 639-1 code: "th", "en", ...)
    fn language_code(&self) -> &str;

    /// Break text into word tokens, whitespace runs included as their own tokens
    fn words(&self, text: &str) -> Result<Vec<String>, SegmentError>;

    /// Break text into sentences, in order
    fn sentences(&self, text: &str) -> Result<Vec<String>, SegmentError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SegmentError {
    #[error("Segmenter is not ready: {0}")]
    NotReady(String),

    #[error("Failed to segment text: {0}")]
    Failed(String),
}
