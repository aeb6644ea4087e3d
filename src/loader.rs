//! Image loading.
//!
//! The editor only needs a grayscale [`PixelMatrix`]; how it is decoded is
//! behind the [`ImageLoader`] trait so the menu can be driven by an in-memory
//! loader in tests.

use std::path::{Path, PathBuf};

use image::ImageError;

use crate::ascii::{MatrixError, PixelMatrix};

/// Errors that can occur while loading an image.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("image not found: {}", path.display())]
    ImageNotFound { path: PathBuf },

    #[error("unsupported image format for {}: {reason}", path.display())]
    UnsupportedImageFormat { path: PathBuf, reason: String },

    #[error("failed to read image {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("decoded image {} is malformed: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: MatrixError,
    },
}

/// Source of grayscale pixel matrices.
pub trait ImageLoader {
    fn load(&self, path: &Path) -> Result<PixelMatrix, LoadError>;
}

/// Decodes image files from disk with the `image` crate.
///
/// Any format the crate's default features can decode is accepted (PNG,
/// JPEG, GIF, BMP, ...). Color images are reduced to BT.601 luminance and
/// alpha is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileImageLoader;

impl ImageLoader for FileImageLoader {
    fn load(&self, path: &Path) -> Result<PixelMatrix, LoadError> {
        if !path.is_file() {
            return Err(LoadError::ImageNotFound {
                path: path.to_path_buf(),
            });
        }

        let img = image::open(path).map_err(|e| classify(path, e))?;
        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        let matrix = PixelMatrix::from_rgb(width, height, rgb.as_raw()).map_err(|source| {
            LoadError::Malformed {
                path: path.to_path_buf(),
                source,
            }
        })?;

        log::info!("loaded {} ({}x{})", path.display(), width, height);
        Ok(matrix)
    }
}

fn classify(path: &Path, err: ImageError) -> LoadError {
    let path = path.to_path_buf();
    match err {
        ImageError::IoError(source) if source.kind() == std::io::ErrorKind::NotFound => {
            LoadError::ImageNotFound { path }
        }
        ImageError::IoError(source) => LoadError::Io { path, source },
        other => LoadError::UnsupportedImageFormat {
            path,
            reason: other.to_string(),
        },
    }
}
