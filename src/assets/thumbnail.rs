use iced::widget::image::Handle;
use image::imageops::FilterType;
use std::path::{Path, PathBuf};

use crate::error::{GalleryError, Result};
use crate::state::data::ImageId;

/// A decoded card thumbnail, ready for the image widget
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub id: ImageId,
    pub width: u32,
    pub height: u32,
    pub handle: Handle,
}

/// Decode an asset into a square thumbnail of `size` pixels.
///
/// Completion of this future is the load signal for `id`; the grid keeps its
/// placeholder until it arrives and keeps it forever if decoding fails.
pub async fn load_thumbnail(id: ImageId, path: PathBuf, size: u32) -> Result<Thumbnail> {
    // Decoding and Lanczos resizing are CPU-bound
    tokio::task::spawn_blocking(move || load_thumbnail_blocking(id, &path, size))
        .await
        .map_err(|e| GalleryError::Join(e.to_string()))?
}

fn load_thumbnail_blocking(id: ImageId, path: &Path, size: u32) -> Result<Thumbnail> {
    if !path.exists() {
        return Err(GalleryError::Io {
            path: path.display().to_string(),
            message: "file not found".to_string(),
        });
    }

    let img = image::open(path).map_err(|e| GalleryError::Decode {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let thumbnail = img.resize_to_fill(size, size, FilterType::Lanczos3).to_rgba8();
    let (width, height) = thumbnail.dimensions();

    tracing::debug!("decoded thumbnail {} ({}x{}) from {}", id, width, height, path.display());

    Ok(Thumbnail {
        id,
        width,
        height,
        handle: Handle::from_rgba(width, height, thumbnail.into_raw()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_fails() {
        let result = load_thumbnail(1, PathBuf::from("/nonexistent/asset.png"), 64).await;
        assert!(matches!(result, Err(GalleryError::Io { .. })));
    }

    #[tokio::test]
    async fn test_decodes_to_square() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.png");
        image::RgbaImage::from_pixel(64, 32, image::Rgba([40, 90, 200, 255]))
            .save(&path)
            .unwrap();

        let thumbnail = load_thumbnail(9, path, 16).await.unwrap();
        assert_eq!(thumbnail.id, 9);
        assert_eq!((thumbnail.width, thumbnail.height), (16, 16));
    }

    #[tokio::test]
    async fn test_garbage_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let result = load_thumbnail(2, path, 16).await;
        assert!(matches!(result, Err(GalleryError::Decode { .. })));
    }
}
