//! Editing session: one image, its edits, and the ramp used to draw it.

use std::path::{Path, PathBuf};

use crate::ascii::{CharacterRamp, PixelMatrix};
use crate::edit::{CropSide, EditError, EditState};
use crate::loader::{ImageLoader, LoadError};
use crate::render::{render, CharacterGrid};

/// Owns the loaded image and the edits applied to it.
///
/// The pixel matrix is never modified; loading another image replaces it
/// and starts over from default edits.
#[derive(Debug, Clone)]
pub struct Session {
    source: PathBuf,
    matrix: PixelMatrix,
    edits: EditState,
    ramp: CharacterRamp,
}

impl Session {
    pub fn new(source: impl Into<PathBuf>, matrix: PixelMatrix, ramp: CharacterRamp) -> Self {
        let edits = EditState::new(matrix.width(), matrix.height());
        Self {
            source: source.into(),
            matrix,
            edits,
            ramp,
        }
    }

    /// Load `path` through `loader` and start a session on it.
    pub fn open(
        loader: &dyn ImageLoader,
        path: &Path,
        ramp: CharacterRamp,
    ) -> Result<Self, LoadError> {
        let matrix = loader.load(path)?;
        Ok(Self::new(path, matrix, ramp))
    }

    /// Swap in a new image, discarding all edits.
    pub fn replace_image(&mut self, source: impl Into<PathBuf>, matrix: PixelMatrix) {
        self.source = source.into();
        self.edits = EditState::new(matrix.width(), matrix.height());
        self.matrix = matrix;
        log::debug!("session now editing {}", self.source.display());
    }

    /// Load `path` and swap it in. On failure the current image and edits stay.
    pub fn load_image(&mut self, loader: &dyn ImageLoader, path: &Path) -> Result<(), LoadError> {
        let matrix = loader.load(path)?;
        self.replace_image(path, matrix);
        Ok(())
    }

    /// Render the current image with the current edits.
    pub fn render(&self) -> CharacterGrid {
        render(&self.matrix, &self.edits, &self.ramp)
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn matrix(&self) -> &PixelMatrix {
        &self.matrix
    }

    pub fn edits(&self) -> &EditState {
        &self.edits
    }

    pub fn ramp(&self) -> &CharacterRamp {
        &self.ramp
    }

    pub fn toggle_invert(&mut self) -> bool {
        self.edits.toggle_invert()
    }

    pub fn set_threshold(
        &mut self,
        min: Option<i64>,
        max: Option<i64>,
        fill: Option<i64>,
    ) -> Result<(), EditError> {
        self.edits.set_threshold(min, max, fill)
    }

    pub fn set_crop(&mut self, side: CropSide, amount: i64) -> Result<(), EditError> {
        self.edits.set_crop(side, amount)
    }

    pub fn set_scale(
        &mut self,
        width_percent: Option<i64>,
        height_percent: Option<i64>,
    ) -> Result<(), EditError> {
        self.edits.set_scale(width_percent, height_percent)
    }

    pub fn reset_edits(&mut self) {
        self.edits.reset();
    }
}
