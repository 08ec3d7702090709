/// External data sources
///
/// This module handles:
/// - The async trait seams for manifest, captions, and asset probing (traits.rs)
/// - The shipped filesystem-backed implementations (fs.rs)

pub mod fs;
pub mod traits;
