/// Image asset module
///
/// This module handles:
/// - Resolving record sources against the asset root
/// - Decoding and resizing card thumbnails off the UI thread

pub mod thumbnail;

use std::path::{Path, PathBuf};

/// Resolve a record source against the asset root.
///
/// Sources are published relative to a web root ("/assets/asset.png"), so a
/// leading slash anchors at `asset_root` rather than the filesystem root.
pub fn resolve(asset_root: &Path, src: &str) -> PathBuf {
    asset_root.join(src.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_strips_web_root() {
        let root = Path::new("public");
        assert_eq!(
            resolve(root, "/assets/asset_1.png"),
            PathBuf::from("public/assets/asset_1.png")
        );
    }

    #[test]
    fn test_resolve_relative_source() {
        let root = Path::new("/srv/gallery");
        assert_eq!(
            resolve(root, "assets/asset.png"),
            PathBuf::from("/srv/gallery/assets/asset.png")
        );
    }
}
