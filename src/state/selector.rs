/// The selection core
///
/// Owns the loaded manifest and caption set, the active folder, and the
/// per-pick display state machine (`Idle -> Loading -> Displayed |
/// Failed`). All presentation happens through the observer; all
/// randomness goes through one seedable RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::config::{SelectorConfig, FALLBACK_CAPTIONS};
use crate::error::{LoadError, PickError, ProbeError, SelectError};
use crate::observer::SelectorObserver;
use crate::source::traits::{AssetProbe, CaptionSource, ManifestSource};
use crate::state::data::{
    DisplayState, FolderChoice, Manifest, PendingPick, Pick, ProbeToken,
};

pub struct Selector {
    manifest: Manifest,
    captions: Vec<String>,
    current_folder: String,
    random_candidates: Vec<String>,
    display: DisplayState,
    /// Last issued probe token; strictly increasing
    next_token: u64,
    rng: StdRng,
    observer: Box<dyn SelectorObserver>,
}

impl Selector {
    /// Load both data sources and build a ready selector.
    ///
    /// The manifest is mandatory: any fetch or parse failure, or a
    /// manifest with zero folders, aborts with no state initialized.
    /// Caption failures (and empty caption lists) are absorbed by the
    /// built-in fallback set, so the caption invariant — at least one
    /// caption available — holds whenever this returns `Ok`.
    pub async fn load(
        config: SelectorConfig,
        manifest_source: &dyn ManifestSource,
        caption_source: &dyn CaptionSource,
        observer: Box<dyn SelectorObserver>,
    ) -> Result<Self, LoadError> {
        let manifest = manifest_source.fetch().await.map_err(LoadError::Manifest)?;
        if manifest.is_empty() {
            return Err(LoadError::EmptyManifest);
        }

        let captions = match caption_source.fetch().await {
            Ok(captions) if !captions.is_empty() => captions,
            Ok(_) => {
                warn!("caption source returned an empty list, using fallback captions");
                fallback_captions()
            }
            Err(err) => {
                warn!(error = %err, "failed to load captions, using fallback captions");
                fallback_captions()
            }
        };

        let SelectorConfig {
            default_folder,
            random_candidates,
            seed,
        } = config;

        let current_folder = match default_folder {
            Some(name) if manifest.contains_folder(&name) => name,
            Some(name) => {
                warn!(folder = %name, "default folder not in manifest, using first folder");
                first_folder(&manifest)?
            }
            None => first_folder(&manifest)?,
        };

        let random_candidates = match random_candidates {
            Some(candidates) if !candidates.is_empty() => {
                for candidate in &candidates {
                    if !manifest.contains_folder(candidate) {
                        warn!(folder = %candidate, "random candidate not in manifest");
                    }
                }
                candidates
            }
            _ => manifest.folder_names().map(str::to_string).collect(),
        };

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let selector = Selector {
            manifest,
            captions,
            current_folder,
            random_candidates,
            display: DisplayState::Idle,
            next_token: 0,
            rng,
            observer,
        };
        selector.observer.on_folders_changed(&selector.current_folder);
        Ok(selector)
    }

    /// Change the active folder.
    ///
    /// Named selections are checked against the manifest and rejected
    /// when unknown, so a bad folder surfaces here instead of as a
    /// confusing empty-folder error at the next pick. Random selections
    /// draw uniformly from the candidate set. The observer is notified
    /// on every accepted selection, including re-selecting the folder
    /// that is already active.
    pub fn select_folder(&mut self, choice: FolderChoice) -> Result<(), SelectError> {
        match choice {
            FolderChoice::Named(name) => {
                if !self.manifest.contains_folder(&name) {
                    return Err(SelectError::UnknownFolder(name));
                }
                self.current_folder = name;
            }
            FolderChoice::Random => {
                let idx = self.rng.gen_range(0..self.random_candidates.len());
                self.current_folder = self.random_candidates[idx].clone();
            }
        }
        self.observer.on_folders_changed(&self.current_folder);
        Ok(())
    }

    /// Draw one random (image, caption) pair from the active folder.
    ///
    /// Image and caption indices are drawn independently and uniformly;
    /// repeats across calls are allowed. On success the display cycle
    /// enters `Loading` and the returned token must be handed back to
    /// [`resolve`](Self::resolve) with the probe outcome. An absent or
    /// empty folder fails the cycle immediately without touching the
    /// folder or caption state.
    pub fn pick(&mut self) -> Result<PendingPick, PickError> {
        let images = self.manifest.images(&self.current_folder).unwrap_or(&[]);
        if images.is_empty() {
            let message = format!("No images in {} folder", self.current_folder);
            self.display = DisplayState::Failed {
                message: message.clone(),
            };
            self.observer.on_pick_failed(&message);
            return Err(PickError::EmptyFolder(self.current_folder.clone()));
        }

        let image_file = images[self.rng.gen_range(0..images.len())].clone();
        let caption = self.captions[self.rng.gen_range(0..self.captions.len())].clone();
        let image_path = format!("{}/{}", self.current_folder, image_file);

        self.next_token += 1;
        let token = ProbeToken(self.next_token);
        self.display = DisplayState::Loading { token };
        self.observer.on_pick_started();

        Ok(PendingPick {
            pick: Pick {
                image_path,
                caption,
                folder: self.current_folder.clone(),
            },
            token,
        })
    }

    /// Complete a pick's display cycle with its probe outcome.
    ///
    /// Only the most recently issued pick may complete: if another pick
    /// was started since `pending` was issued, the completion is stale
    /// and ignored (returns `false`, no state change, no notification).
    /// Overlapping picks therefore resolve to last-issued-wins
    /// regardless of probe completion order.
    pub fn resolve(&mut self, pending: &PendingPick, outcome: Result<(), ProbeError>) -> bool {
        match self.display {
            DisplayState::Loading { token } if token == pending.token => {}
            _ => {
                debug!(token = pending.token.0, "ignoring stale probe completion");
                return false;
            }
        }

        match outcome {
            Ok(()) => {
                self.display = DisplayState::Displayed {
                    image_path: pending.pick.image_path.clone(),
                };
                self.observer.on_pick_succeeded(
                    &pending.pick.image_path,
                    &pending.pick.caption,
                    &pending.pick.folder,
                );
            }
            Err(err) => {
                let message = err.to_string();
                self.display = DisplayState::Failed {
                    message: message.clone(),
                };
                self.observer.on_pick_failed(&message);
            }
        }
        true
    }

    /// Pick, probe, and resolve in one call. Returns whether the cycle
    /// ended in `Displayed`.
    pub async fn generate(&mut self, probe: &dyn AssetProbe) -> bool {
        let pending = match self.pick() {
            Ok(pending) => pending,
            Err(_) => return false,
        };
        let outcome = probe.probe(&pending.pick.image_path).await;
        self.resolve(&pending, outcome) && matches!(self.display, DisplayState::Displayed { .. })
    }

    pub fn current_folder(&self) -> &str {
        &self.current_folder
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn captions(&self) -> &[String] {
        &self.captions
    }

    pub fn display_state(&self) -> &DisplayState {
        &self.display
    }
}

fn fallback_captions() -> Vec<String> {
    FALLBACK_CAPTIONS.iter().map(|c| c.to_string()).collect()
}

fn first_folder(manifest: &Manifest) -> Result<String, LoadError> {
    manifest
        .first_folder()
        .map(str::to_string)
        .ok_or(LoadError::EmptyManifest)
}

impl std::fmt::Debug for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Selector")
            .field("current_folder", &self.current_folder)
            .field("folders", &self.manifest.len())
            .field("captions", &self.captions.len())
            .field("display", &self.display)
            .finish()
    }
}
