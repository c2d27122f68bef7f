use std::sync::Arc;

use tokio::sync::OnceCell;

pub type LanguageCode = String;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text from source to target language
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct Translation {
    pub text: String,
    pub from: LanguageCode,
    pub to: LanguageCode,
    pub provider: String,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Translation provider unavailable: {0}")]
    Unavailable(String),
}

/// Builds the provider on first use
pub type ProviderFactory =
    Box<dyn Fn() -> Result<Arc<dyn Translator>, TranslateError> + Send + Sync>;

/// Failure-contained access to a translation provider.
///
/// The provider is built at most once per adapter. A failed build is final:
/// every later call reports `Unavailable` without retrying.
pub struct TranslationAdapter {
    factory: ProviderFactory,
    provider: OnceCell<Result<Arc<dyn Translator>, String>>,
}

impl TranslationAdapter {
    pub fn new(factory: ProviderFactory) -> Self {
        Self {
            factory,
            provider: OnceCell::new(),
        }
    }

    /// Adapter over an already constructed provider
    pub fn with_provider(provider: Arc<dyn Translator>) -> Self {
        Self::new(Box::new(move || Ok(provider.clone())))
    }

    async fn provider(&self) -> Result<Arc<dyn Translator>, TranslateError> {
        let slot = self
            .provider
            .get_or_init(|| async {
                match (self.factory)() {
                    Ok(provider) => {
                        tracing::info!("Translation provider ready: {}", provider.metadata().name);
                        Ok(provider)
                    }
                    Err(e) => {
                        tracing::error!("Translation provider failed to start: {}", e);
                        Err(e.to_string())
                    }
                }
            })
            .await;

        slot.clone().map_err(TranslateError::Unavailable)
    }

    /// Build the provider now instead of on the first translation
    pub async fn warm_up(&self) -> bool {
        self.provider().await.is_ok()
    }

    pub async fn translate(&self, text: &str, from: &str, to: &str) -> Result<String, TranslateError> {
        let provider = self.provider().await?;

        match provider.translate(text, from.to_string(), to.to_string()).await {
            Ok(translation) => Ok(translation.text),
            Err(e) => {
                tracing::warn!(
                    "Translation {} -> {} via {} failed: {}",
                    from,
                    to,
                    provider.metadata().name,
                    e
                );
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct UpperTranslator {
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl Translator for UpperTranslator {
        async fn translate(
            &self,
            text: &str,
            from: LanguageCode,
            to: LanguageCode,
        ) -> Result<Translation, TranslateError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if text.is_empty() {
                return Err(TranslateError::ApiError("empty".to_string()));
            }
            Ok(Translation {
                text: text.to_uppercase(),
                from,
                to,
                provider: "upper".to_string(),
            })
        }

        fn metadata(&self) -> ProviderMetadata {
            ProviderMetadata {
                name: "upper".to_string(),
                requires_api_key: false,
            }
        }
    }

    #[tokio::test]
    async fn translates_through_provider() {
        let adapter = TranslationAdapter::with_provider(Arc::new(UpperTranslator {
            calls: AtomicUsize::new(0),
        }));

        assert_eq!(adapter.translate("data", "en", "th").await.unwrap(), "DATA");
    }

    #[tokio::test]
    async fn provider_errors_are_returned_not_panicked() {
        let adapter = TranslationAdapter::with_provider(Arc::new(UpperTranslator {
            calls: AtomicUsize::new(0),
        }));

        let err = adapter.translate("", "en", "th").await.unwrap_err();
        assert!(matches!(err, TranslateError::ApiError(_)));
    }

    #[tokio::test]
    async fn failed_construction_is_permanent() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let counter = attempts.clone();
        let adapter = TranslationAdapter::new(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(TranslateError::Unavailable("offline".to_string()))
        }));

        assert!(!adapter.warm_up().await);
        for _ in 0..3 {
            let err = adapter.translate("data", "en", "th").await.unwrap_err();
            assert!(matches!(err, TranslateError::Unavailable(_)));
        }
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn concurrent_first_use_builds_once() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let counter = attempts.clone();
        let adapter = Arc::new(TranslationAdapter::new(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(UpperTranslator {
                calls: AtomicUsize::new(0),
            }) as Arc<dyn Translator>)
        })));

        let mut tasks = tokio::task::JoinSet::new();
        for _ in 0..8 {
            let adapter = adapter.clone();
            tasks.spawn(async move { adapter.translate("x", "en", "th").await.is_ok() });
        }
        while let Some(ok) = tasks.join_next().await {
            assert!(ok.unwrap());
        }

        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }
}
