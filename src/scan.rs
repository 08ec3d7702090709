/// Manifest scanner
///
/// Builds the manifest JSON the selector consumes by walking a root
/// directory: every immediate subdirectory becomes a folder, and the
/// image files inside it (sorted by name) become its entries.

use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::state::data::Manifest;

/// Supported image file extensions (lowercased match)
const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// Build a manifest from the subdirectories of `root`.
///
/// Folder order follows directory listing order of `root`; filenames
/// within a folder are sorted so repeated scans of the same tree
/// produce identical manifests. Non-image files are skipped, and a
/// subdirectory with no images still appears with an empty list.
pub fn build_manifest(root: &Path) -> io::Result<Manifest> {
    let mut manifest = Manifest::new();

    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }

        let folder = entry.file_name().to_string_lossy().to_string();
        let mut images = Vec::new();

        for file in WalkDir::new(entry.path())
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = file.path();
            if !path.is_file() {
                continue;
            }
            let Some(extension) = path.extension() else {
                continue;
            };
            let ext = extension.to_string_lossy().to_lowercase();
            if !IMAGE_EXTENSIONS.contains(&ext.as_str()) {
                continue;
            }
            images.push(
                path.file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string(),
            );
        }

        images.sort();
        manifest.insert(folder, images);
    }

    Ok(manifest)
}

/// Serialize a manifest to pretty JSON at `output`.
pub fn write_manifest(manifest: &Manifest, output: &Path) -> io::Result<()> {
    let json = serde_json::to_string_pretty(manifest)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    std::fs::write(output, json)
}
