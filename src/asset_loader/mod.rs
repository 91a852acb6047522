pub mod img_loader;
pub mod obj_loader;

use std::path::PathBuf;

/// Checks the env variable ASSET_DIR to find where assets are stored.
/// Otherwise searches up to 6 directories up for a folder called `assets`.
pub fn build_asset_path(asset_filename: &str) -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("ASSET_DIR") {
        return Some(PathBuf::from(dir).join(asset_filename));
    }

    let mut prefix = PathBuf::new();
    for _ in 0..6 {
        let candidate = prefix.join("assets").join(asset_filename);
        if candidate.is_file() {
            return Some(candidate);
        }
        prefix.push("..");
    }
    None
}
