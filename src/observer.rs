/// Observer seam between the selector core and the presentation layer
///
/// The core never touches presentation directly; it announces state
/// changes through this interface and the UI layer (or the CLI, or a
/// test recorder) decides what to show.

/// Notifications emitted by the selector.
pub trait SelectorObserver: Send {
    /// The active folder changed (or was re-asserted). Exactly one
    /// folder is active at a time.
    fn on_folders_changed(&self, active: &str);

    /// A pick succeeded and its asset probe is in flight; show a
    /// loading placeholder.
    fn on_pick_started(&self);

    /// The probe confirmed the asset; render it with its caption.
    fn on_pick_succeeded(&self, image_path: &str, caption: &str, folder: &str);

    /// The pick or its probe failed; show the message instead.
    fn on_pick_failed(&self, message: &str);
}

/// Observer that ignores every notification. Default for headless use.
pub struct NullObserver;

impl SelectorObserver for NullObserver {
    fn on_folders_changed(&self, _active: &str) {}
    fn on_pick_started(&self) {}
    fn on_pick_succeeded(&self, _image_path: &str, _caption: &str, _folder: &str) {}
    fn on_pick_failed(&self, _message: &str) {}
}

#[cfg(test)]
pub mod recording {
    use std::sync::{Arc, Mutex};

    use super::SelectorObserver;

    /// Every notification the selector emitted, in order.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Event {
        FoldersChanged(String),
        PickStarted,
        PickSucceeded {
            image_path: String,
            caption: String,
            folder: String,
        },
        PickFailed(String),
    }

    /// Test observer that records notifications for later assertions.
    #[derive(Clone, Default)]
    pub struct RecordingObserver {
        events: Arc<Mutex<Vec<Event>>>,
    }

    impl RecordingObserver {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn events(&self) -> Vec<Event> {
            self.events.lock().unwrap().clone()
        }

        pub fn last(&self) -> Option<Event> {
            self.events.lock().unwrap().last().cloned()
        }
    }

    impl SelectorObserver for RecordingObserver {
        fn on_folders_changed(&self, active: &str) {
            self.events
                .lock()
                .unwrap()
                .push(Event::FoldersChanged(active.to_string()));
        }

        fn on_pick_started(&self) {
            self.events.lock().unwrap().push(Event::PickStarted);
        }

        fn on_pick_succeeded(&self, image_path: &str, caption: &str, folder: &str) {
            self.events.lock().unwrap().push(Event::PickSucceeded {
                image_path: image_path.to_string(),
                caption: caption.to_string(),
                folder: folder.to_string(),
            });
        }

        fn on_pick_failed(&self, message: &str) {
            self.events
                .lock()
                .unwrap()
                .push(Event::PickFailed(message.to_string()));
        }
    }
}
