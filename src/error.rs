//! Error types for image-roulette.

use thiserror::Error;

/// Failure while fetching or parsing an external data source.
#[derive(Error, Debug)]
pub enum SourceError {
    /// IO error (file missing, unreadable, network-equivalent failure)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The payload was not valid JSON of the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fatal initialization failure.
///
/// The manifest is load-bearing: without it there is nothing to select
/// from, so any manifest problem aborts `Selector::load` outright.
/// Caption failures never appear here; they are absorbed by the
/// built-in fallback list.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The manifest source could not be fetched or parsed
    #[error("failed to load manifest: {0}")]
    Manifest(#[source] SourceError),

    /// The manifest parsed but contains zero folders
    #[error("manifest contains no folders")]
    EmptyManifest,
}

/// Rejected folder selection.
#[derive(Error, Debug)]
pub enum SelectError {
    /// The named folder is not a key of the manifest
    #[error("unknown folder: {0}")]
    UnknownFolder(String),
}

/// Failure to produce a pick from the active folder.
#[derive(Error, Debug)]
pub enum PickError {
    /// The active folder has no images to draw from
    #[error("no images in {0} folder")]
    EmptyFolder(String),
}

/// Failure reported by an asset probe.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The asset does not exist at the given path
    #[error("image not found: {0}")]
    NotFound(String),

    /// The asset exists but cannot be decoded for display
    #[error("failed to display: {0}")]
    Undecodable(String),
}
