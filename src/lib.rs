//! image-roulette: random image + caption generation core.
//!
//! The [`Selector`](state::selector::Selector) loads an image manifest
//! and a caption list, tracks the active folder, and produces one
//! random (image, caption) pair per generation request. Presentation
//! is decoupled behind [`observer::SelectorObserver`]; data acquisition
//! and asset probing are decoupled behind the traits in
//! [`source::traits`].

pub mod config;
pub mod error;
pub mod observer;
pub mod scan;
pub mod source;
pub mod state;

pub use config::SelectorConfig;
pub use error::{LoadError, PickError, ProbeError, SelectError, SourceError};
pub use observer::{NullObserver, SelectorObserver};
pub use state::data::{DisplayState, FolderChoice, Manifest, PendingPick, Pick, ProbeToken};
pub use state::selector::Selector;
