/// State management module
///
/// This module handles all selector state:
/// - Shared data structures (data.rs)
/// - The selection core and its display state machine (selector.rs)

pub mod data;
pub mod selector;
