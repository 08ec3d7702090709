use async_trait::async_trait;

use crate::error::{ProbeError, SourceError};
use crate::state::data::Manifest;

/// Fetch-and-parse operation for the image manifest.
///
/// The manifest is load-bearing: callers treat any error from here as
/// fatal to initialization.
#[async_trait]
pub trait ManifestSource: Send + Sync {
    async fn fetch(&self) -> Result<Manifest, SourceError>;
}

/// Fetch-and-parse operation for the caption list.
///
/// Errors from here are recoverable; the selector substitutes its
/// built-in fallback captions.
#[async_trait]
pub trait CaptionSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<String>, SourceError>;
}

/// Asynchronous check that an image resource is retrievable and
/// renderable before it is committed to display.
#[async_trait]
pub trait AssetProbe: Send + Sync {
    async fn probe(&self, path: &str) -> Result<(), ProbeError>;
}
