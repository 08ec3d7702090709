/// Shared data structures for the selector state
///
/// These structs represent the data model that flows between the
/// data-source layer and the observer/presentation layer.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Mapping from folder name to the image filenames inside it.
///
/// Key order follows the manifest JSON, so "the first folder" is
/// well-defined. A folder with an empty list is valid; picking from it
/// yields an empty-folder error rather than a pick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    folders: IndexMap<String, Vec<String>>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of folders (not images).
    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    pub fn contains_folder(&self, name: &str) -> bool {
        self.folders.contains_key(name)
    }

    /// Image filenames for a folder, `None` if the folder is unknown.
    pub fn images(&self, folder: &str) -> Option<&[String]> {
        self.folders.get(folder).map(Vec::as_slice)
    }

    /// Folder names in manifest order.
    pub fn folder_names(&self) -> impl Iterator<Item = &str> {
        self.folders.keys().map(String::as_str)
    }

    /// First folder in manifest order, if any.
    pub fn first_folder(&self) -> Option<&str> {
        self.folders.keys().next().map(String::as_str)
    }

    pub fn insert(&mut self, folder: impl Into<String>, images: Vec<String>) {
        self.folders.insert(folder.into(), images);
    }

    /// Total image count across all folders.
    pub fn image_count(&self) -> usize {
        self.folders.values().map(Vec::len).sum()
    }
}

/// A folder selection request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderChoice {
    /// Select this folder by name
    Named(String),
    /// Select uniformly at random from the candidate set
    Random,
}

impl From<&str> for FolderChoice {
    /// `"random"` is the sentinel for a random folder choice.
    fn from(name: &str) -> Self {
        if name == "random" {
            FolderChoice::Random
        } else {
            FolderChoice::Named(name.to_string())
        }
    }
}

/// One resolved (image, caption) pair produced for display.
///
/// Ephemeral: created per generation request, handed to the observer,
/// never stored by the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    /// Relative locator, `"{folder}/{filename}"`. Existence is not
    /// validated here; that is the asset probe's job.
    pub image_path: String,
    pub caption: String,
    /// Folder the image was drawn from
    pub folder: String,
}

/// Identifies one in-flight pick. Tokens are issued monotonically; only
/// the most recently issued token may complete the display cycle, which
/// is how overlapping picks resolve to last-one-wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProbeToken(pub(crate) u64);

/// A successful pick waiting on its asset probe.
#[derive(Debug, Clone)]
pub struct PendingPick {
    pub pick: Pick,
    pub token: ProbeToken,
}

/// Presentation state for the current pick cycle.
///
/// `Displayed` and `Failed` are terminal per pick; a new pick restarts
/// the cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayState {
    Idle,
    Loading { token: ProbeToken },
    Displayed { image_path: String },
    Failed { message: String },
}
