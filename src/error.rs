/// Error type shared by every layer of the gallery.
///
/// Errors travel inside iced messages, so the enum is `Clone` and carries
/// rendered messages instead of the underlying source errors.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("failed to decode {path}: {message}")]
    Decode { path: String, message: String },

    #[error("invalid configuration in {path}: {message}")]
    Config { path: String, message: String },

    #[error("duplicate image id {0} in catalog")]
    DuplicateId(u32),

    #[error("key listener and scroll lock are already held")]
    ChromeBusy,

    #[error("failed to open {path}: {message}")]
    Open { path: String, message: String },

    #[error("background task failed: {0}")]
    Join(String),
}

impl GalleryError {
    pub fn io(path: impl AsRef<std::path::Path>, err: std::io::Error) -> Self {
        GalleryError::Io {
            path: path.as_ref().display().to_string(),
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GalleryError>;
