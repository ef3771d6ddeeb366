//! Project name lookup from `package.json`.

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

/// Manifest file read from the scan root.
pub const PACKAGE_MANIFEST: &str = "package.json";

#[derive(Debug, Deserialize)]
struct PackageManifest {
    name: Option<String>,
}

/// The `name` field of `<dir>/package.json`.
///
/// Returns `None` when the manifest is missing, unparseable, or unnamed.
pub fn package_name(dir: impl AsRef<Path>) -> Option<String> {
    let manifest_path = dir.as_ref().join(PACKAGE_MANIFEST);

    let content = match fs::read_to_string(&manifest_path) {
        Ok(content) => content,
        Err(e) => {
            debug!("no package manifest at {}: {e}", manifest_path.display());
            return None;
        }
    };

    match serde_json::from_str::<PackageManifest>(&content) {
        Ok(manifest) => manifest.name.filter(|name| !name.trim().is_empty()),
        Err(e) => {
            debug!("ignoring malformed {}: {e}", manifest_path.display());
            None
        }
    }
}
