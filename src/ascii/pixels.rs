//! Grayscale pixel matrix.

use super::grayscale::to_grayscale;

/// Errors raised when a pixel buffer does not describe a rectangle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    #[error("pixel buffer holds {actual} values, expected {width}x{height} = {expected}")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("row {row} has {actual} pixels, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("image dimensions {width}x{height} are too large")]
    TooLarge { width: usize, height: usize },
}

/// Rectangular grid of grayscale values (0-255), row-major.
///
/// A matrix of width or height 0 is valid and holds no pixels.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelMatrix {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelMatrix {
    /// Wrap a row-major buffer, checking that it is exactly `width * height` long.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, MatrixError> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(MatrixError::SizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self::new_unchecked(width, height, data))
    }

    /// Build from nested rows; every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, MatrixError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let (w, h) = match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) => (w, h),
            _ => return Err(MatrixError::TooLarge { width, height }),
        };

        let mut data = Vec::with_capacity(width * height);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(MatrixError::RaggedRow {
                    row,
                    expected: width,
                    actual: values.len(),
                });
            }
            data.extend(values);
        }
        Ok(Self::new_unchecked(w, h, data))
    }

    /// Convert packed RGB bytes to a grayscale matrix.
    pub fn from_rgb(width: u32, height: u32, rgb: &[u8]) -> Result<Self, MatrixError> {
        let expected = width as usize * height as usize * 3;
        if rgb.len() != expected {
            return Err(MatrixError::SizeMismatch {
                width,
                height,
                expected,
                actual: rgb.len(),
            });
        }
        Ok(Self::new_unchecked(width, height, to_grayscale(rgb)))
    }

    pub(crate) fn new_unchecked(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        // Zero-area matrices are normalized to 0x0 so equality ignores the
        // leftover dimension.
        if width == 0 || height == 0 {
            return Self::default();
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Pixel at column `x`, row `y`, if in bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// One row of pixels.
    ///
    /// # Panics
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.data[start..start + w]
    }

    /// Iterate over rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks_exact panics on 0, and an empty matrix has no rows anyway.
        self.data.chunks_exact(self.width.max(1) as usize)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows().map(<[u8]>::to_vec).collect()
    }
}
