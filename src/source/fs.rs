/// Filesystem-backed data sources
///
/// These are the shipped implementations of the source traits: the
/// manifest and caption lists are JSON files on disk, and the asset
/// probe resolves image paths relative to a root directory.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use image::ImageReader;
use serde::Deserialize;
use tokio::task;

use crate::error::{ProbeError, SourceError};
use crate::source::traits::{AssetProbe, CaptionSource, ManifestSource};
use crate::state::data::Manifest;

/// Reads a manifest JSON file, shape `{ "Folder": ["a.jpg", ...], ... }`.
pub struct FsManifestSource {
    path: PathBuf,
}

impl FsManifestSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ManifestSource for FsManifestSource {
    async fn fetch(&self) -> Result<Manifest, SourceError> {
        let bytes = tokio::fs::read(&self.path).await?;
        let manifest = serde_json::from_slice(&bytes)?;
        Ok(manifest)
    }
}

/// Wire shape of the caption file: `{ "captions": [ ... ] }`.
#[derive(Deserialize)]
struct CaptionFile {
    captions: Vec<String>,
}

/// Reads a caption JSON file.
pub struct FsCaptionSource {
    path: PathBuf,
}

impl FsCaptionSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CaptionSource for FsCaptionSource {
    async fn fetch(&self) -> Result<Vec<String>, SourceError> {
        let bytes = tokio::fs::read(&self.path).await?;
        let file: CaptionFile = serde_json::from_slice(&bytes)?;
        Ok(file.captions)
    }
}

/// Probes image paths against a root directory on disk.
///
/// A path passes when the file exists and its image header decodes;
/// callers treat that as "retrievable and renderable" before
/// committing to display.
pub struct FsAssetProbe {
    root: PathBuf,
}

impl FsAssetProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl AssetProbe for FsAssetProbe {
    async fn probe(&self, path: &str) -> Result<(), ProbeError> {
        let full = self.root.join(path);
        let display_path = path.to_string();

        // Decode is CPU-bound, keep it off the async threads
        task::spawn_blocking(move || probe_blocking(&full, &display_path))
            .await
            .map_err(|_| ProbeError::Undecodable(path.to_string()))?
    }
}

fn probe_blocking(full: &Path, display_path: &str) -> Result<(), ProbeError> {
    if !full.exists() {
        return Err(ProbeError::NotFound(display_path.to_string()));
    }

    let reader = ImageReader::open(full)
        .map_err(|_| ProbeError::NotFound(display_path.to_string()))?
        .with_guessed_format()
        .map_err(|_| ProbeError::Undecodable(display_path.to_string()))?;

    // Header decode only; a full pixel decode is the renderer's job
    reader
        .into_dimensions()
        .map(|_| ())
        .map_err(|_| ProbeError::Undecodable(display_path.to_string()))
}
