use serde::Deserialize;

/// Captions substituted when the caption source is missing, unreachable,
/// malformed, or yields an empty list. Order is fixed and observable.
pub const FALLBACK_CAPTIONS: [&str; 5] = [
    "A beautiful moment captured.",
    "Memories that will last forever.",
    "Pure happiness in a frame.",
    "A snapshot of joy.",
    "Time stands still here.",
];

/// Top-level configuration for a [`Selector`](crate::state::selector::Selector).
#[derive(Debug, Clone, Deserialize)]
pub struct SelectorConfig {
    /// Folder activated after load. Falls back to the first manifest key
    /// when absent or not present in the manifest.
    pub default_folder: Option<String>,
    /// Candidate set for random folder selection. `None` means every
    /// manifest key is a candidate.
    pub random_candidates: Option<Vec<String>>,
    /// Seed for the selection RNG. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            default_folder: None,
            random_candidates: None,
            seed: None,
        }
    }
}

impl SelectorConfig {
    /// Config with a deterministic RNG, for reproducible runs and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}
