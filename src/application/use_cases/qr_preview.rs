use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::application::cache::PreviewCache;
use crate::application::ports::{QrEncoder, QrEncodingError};

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("Text is required")]
    EmptyText,

    #[error(transparent)]
    Encoding(#[from] QrEncodingError),
}

/// Use case: render QR previews for arbitrary text
pub struct QrPreviewUseCase {
    encoder: Arc<dyn QrEncoder>,
    cache: Option<Arc<PreviewCache>>,
}

impl QrPreviewUseCase {
    pub fn new(encoder: Arc<dyn QrEncoder>, cache: Option<Arc<PreviewCache>>) -> Self {
        Self { encoder, cache }
    }

    pub fn cache(&self) -> Option<&Arc<PreviewCache>> {
        self.cache.as_ref()
    }

    pub fn png(&self, text: &str) -> Result<Vec<u8>, PreviewError> {
        if text.is_empty() {
            return Err(PreviewError::EmptyText);
        }
        Ok(self.encoder.encode_png(text)?)
    }

    /// Base64 PNG, served from the cache while fresh
    pub fn base64(&self, text: &str) -> Result<String, PreviewError> {
        if text.is_empty() {
            return Err(PreviewError::EmptyText);
        }

        let Some(cache) = &self.cache else {
            return Ok(self.encoder.encode_to_base64(text)?);
        };

        let key = PreviewCache::key_for(text);
        if let Some(hit) = cache.get(&key) {
            debug!("QR preview cache hit: {}", key);
            return Ok(hit);
        }

        let encoded = self.encoder.encode_to_base64(text)?;
        cache.insert(key, encoded.clone());
        Ok(encoded)
    }

    /// Evict stale cache entries; zero when caching is off
    pub fn cleanup_expired(&self) -> usize {
        self.cache
            .as_ref()
            .map(|cache| cache.cleanup_expired())
            .unwrap_or(0)
    }
}
