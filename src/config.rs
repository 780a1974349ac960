/// User settings
///
/// Read once at startup from `settings.json` in the user's config directory:
/// - Linux: ~/.config/ghibli-gallery/settings.json
/// - macOS: ~/Library/Application Support/ghibli-gallery/settings.json
/// - Windows: %APPDATA%\ghibli-gallery\settings.json
///
/// Every field is optional; missing fields fall back to their defaults.
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{GalleryError, Result};

const APP_DIR: &str = "ghibli-gallery";
const SETTINGS_FILE: &str = "settings.json";
/// Smallest thumbnail edge the decoder is asked for
const MIN_THUMBNAIL_SIZE: u32 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Web root that record sources such as "/assets/asset.png" live under
    pub asset_root: PathBuf,
    /// Extension appended to the title for suggested download names
    pub download_extension: String,
    /// Edge length of the square card thumbnails, in pixels
    pub thumbnail_size: u32,
    /// Optional JSON manifest replacing the built-in catalog
    pub manifest: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("public"),
            download_extension: "png".to_string(),
            thumbnail_size: 384,
            manifest: None,
        }
    }
}

impl Settings {
    /// Path where the settings file is expected
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
    }

    /// Load settings from the default location, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            tracing::warn!("no config directory on this platform, using default settings");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!("no settings at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::from_file(&path) {
            Ok(settings) => {
                tracing::info!("loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                tracing::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    /// Parse a settings file
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| GalleryError::io(path, e))?;
        Self::from_json(&json).map_err(|e| GalleryError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::clamped)
    }

    /// A zero-sized thumbnail would hand an empty RGBA buffer to the renderer
    fn clamped(mut self) -> Self {
        if self.thumbnail_size < MIN_THUMBNAIL_SIZE {
            tracing::warn!(
                "thumbnail_size {} is too small, using {}",
                self.thumbnail_size,
                MIN_THUMBNAIL_SIZE
            );
            self.thumbnail_size = MIN_THUMBNAIL_SIZE;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.asset_root, PathBuf::from("public"));
        assert_eq!(settings.download_extension, "png");
        assert_eq!(settings.thumbnail_size, 384);
        assert!(settings.manifest.is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "asset_root": "/srv/gallery" }"#).unwrap();
        assert_eq!(settings.asset_root, PathBuf::from("/srv/gallery"));
        assert_eq!(settings.download_extension, "png");
        assert_eq!(settings.thumbnail_size, 384);
    }

    #[test]
    fn test_zero_thumbnail_size_is_clamped() {
        let settings = Settings::from_json(r#"{ "thumbnail_size": 0 }"#).unwrap();
        assert_eq!(settings.thumbnail_size, 1);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "thumbnail_size": 0, "download_extension": "webp" }}"#).unwrap();
        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.thumbnail_size, 1);
        assert_eq!(settings.download_extension, "webp");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "download_extension": "jpg", "manifest": "gallery.json" }}"#
        )
        .unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.download_extension, "jpg");
        assert_eq!(settings.manifest, Some(PathBuf::from("gallery.json")));
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "thumbnail_size": "large" }}"#).unwrap();

        let result = Settings::from_file(file.path());
        assert!(matches!(result, Err(GalleryError::Config { .. })));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Settings::from_file(Path::new("/nonexistent/settings.json"));
        assert!(matches!(result, Err(GalleryError::Io { .. })));
    }
}
