/// Desktop stand-ins for the two overlay actions.
///
/// Both are fire-and-forget from the overlay's point of view: callers log
/// the outcome and never surface it in the UI.
use rfd::AsyncFileDialog;
use std::path::{Path, PathBuf};

use crate::error::{GalleryError, Result};

/// Show the asset in the system's default image viewer
pub fn open_in_viewer(path: &Path) -> Result<()> {
    open::that_detached(path).map_err(|e| GalleryError::Open {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Suggested filename for a download: the title plus a fixed extension.
///
/// Path separators in the title would turn the name into a path, so they
/// are replaced.
pub fn suggested_filename(title: &str, extension: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{}.{}", stem, extension)
}

/// Ask where to save the asset, then copy it there.
///
/// Returns `Ok(None)` when the user dismisses the dialog.
pub async fn download(source: PathBuf, suggested_name: String) -> Result<Option<PathBuf>> {
    let mut dialog = AsyncFileDialog::new()
        .set_title("이미지 다운로드")
        .set_file_name(suggested_name);
    if let Some(dir) = dirs::download_dir() {
        dialog = dialog.set_directory(dir);
    }

    let Some(target) = dialog.save_file().await else {
        return Ok(None);
    };
    let target = target.path().to_path_buf();

    save_copy(&source, &target).await?;
    Ok(Some(target))
}

async fn save_copy(source: &Path, target: &Path) -> Result<()> {
    tokio::fs::copy(source, target)
        .await
        .map_err(|e| GalleryError::io(source, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggested_filename() {
        assert_eq!(suggested_filename("하늘 위의 성", "png"), "하늘 위의 성.png");
        assert_eq!(suggested_filename("a/b\\c", "jpg"), "a_b_c.jpg");
    }

    #[tokio::test]
    async fn test_save_copy() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("asset.png");
        let target = dir.path().join("copy.png");
        std::fs::write(&source, b"pixels").unwrap();

        save_copy(&source, &target).await.unwrap();
        assert_eq!(std::fs::read(&target).unwrap(), b"pixels");
    }

    #[tokio::test]
    async fn test_save_copy_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let result = save_copy(&dir.path().join("gone.png"), &dir.path().join("out.png")).await;
        assert!(matches!(result, Err(GalleryError::Io { .. })));
    }
}
