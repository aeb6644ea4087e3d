//! Render pipeline: pixel matrix + edits -> character grid.
//!
//! Stages run in a fixed order, each on the output of the previous one:
//!
//! 1. **Inversion** - `255 - p` when the edit state asks for it
//! 2. **Thresholding** - pixels outside `[min, max]` become the fill value
//! 3. **Cropping** - margins measured against the original image are removed
//! 4. **Scaling** - nearest-neighbor resampling by width/height percentages
//! 5. **Quantization** - each value is replaced by its ramp glyph
//!
//! The source matrix is never modified and nothing is cached, so calling
//! [`render`] twice with the same inputs yields the same grid.

use std::fmt;
use std::io::{self, Write};

use crate::ascii::{map_to_chars, CharacterRamp, PixelMatrix};
use crate::edit::{CropSide, EditState};

/// Rows of glyphs produced by [`render`].
///
/// A zero-sized grid is a valid result (aggressive crop or a 0% scale) and
/// displays as nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharacterGrid {
    width: u32,
    height: u32,
    cells: Vec<char>,
}

impl CharacterGrid {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks_exact(self.width.max(1) as usize)
    }

    /// Glyph at column `x`, row `y`, if in bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<char> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y as usize * self.width as usize + x as usize])
    }

    /// One row as a `String`, without the newline.
    pub fn row_string(&self, y: u32) -> Option<String> {
        self.rows().nth(y as usize).map(|row| row.iter().collect())
    }

    pub fn to_rows(&self) -> Vec<Vec<char>> {
        self.rows().map(<[char]>::to_vec).collect()
    }

    /// Stream every row, newline-terminated.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        let mut line = String::with_capacity(self.width as usize * 4 + 1);
        for row in self.rows() {
            line.clear();
            line.extend(row.iter());
            line.push('\n');
            out.write_all(line.as_bytes())?;
        }
        out.flush()
    }
}

impl fmt::Display for CharacterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &glyph in row {
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Apply every edit in `state` to a copy of `matrix` and quantize the result.
pub fn render(matrix: &PixelMatrix, state: &EditState, ramp: &CharacterRamp) -> CharacterGrid {
    let mut working = if state.inverted() {
        invert(matrix)
    } else {
        matrix.clone()
    };

    if state.has_threshold() {
        working = threshold(
            &working,
            state.min_threshold(),
            state.max_threshold(),
            state.fill(),
        );
    }

    let working = crop(
        &working,
        state.crop(CropSide::Left),
        state.crop(CropSide::Right),
        state.crop(CropSide::Top),
        state.crop(CropSide::Bottom),
    );
    let working = scale(
        &working,
        state.scale_width_percent(),
        state.scale_height_percent(),
    );

    let grid = quantize(&working, ramp);
    log::debug!(
        "rendered {}x{} image to {}x{} grid",
        matrix.width(),
        matrix.height(),
        grid.width(),
        grid.height()
    );
    grid
}

/// Replace every pixel `p` with `255 - p`.
pub fn invert(matrix: &PixelMatrix) -> PixelMatrix {
    let data = matrix.as_slice().iter().map(|&p| 255 - p).collect();
    PixelMatrix::new_unchecked(matrix.width(), matrix.height(), data)
}

/// Replace pixels outside `[min, max]` with `fill`; keep the rest.
pub fn threshold(matrix: &PixelMatrix, min: u8, max: u8, fill: u8) -> PixelMatrix {
    let data = matrix
        .as_slice()
        .iter()
        .map(|&p| if p < min || p > max { fill } else { p })
        .collect();
    PixelMatrix::new_unchecked(matrix.width(), matrix.height(), data)
}

/// Remove margins from each side.
///
/// Margins larger than the matrix collapse it to an empty one instead of
/// panicking.
pub fn crop(matrix: &PixelMatrix, left: u32, right: u32, top: u32, bottom: u32) -> PixelMatrix {
    let width = matrix.width().saturating_sub(left).saturating_sub(right);
    let height = matrix.height().saturating_sub(top).saturating_sub(bottom);
    if width == 0 || height == 0 {
        return PixelMatrix::default();
    }

    let mut data = Vec::with_capacity(width as usize * height as usize);
    for y in top..top + height {
        let row = matrix.row(y);
        data.extend_from_slice(&row[left as usize..(left + width) as usize]);
    }
    PixelMatrix::new_unchecked(width, height, data)
}

/// Target size for scaling a `width x height` matrix by the given percentages.
pub fn scaled_dimensions(width: u32, height: u32, width_percent: u32, height_percent: u32) -> (u32, u32) {
    let scale_axis = |len: u32, percent: u32| {
        let scaled = len as u64 * percent as u64 / 100;
        u32::try_from(scaled).unwrap_or(u32::MAX)
    };
    (scale_axis(width, width_percent), scale_axis(height, height_percent))
}

/// Nearest-neighbor resample by percentages.
///
/// Target cell `(x, y)` takes the source pixel at
/// `(x * width / new_width, y * height / new_height)`. A zero target size
/// yields an empty matrix.
pub fn scale(matrix: &PixelMatrix, width_percent: u32, height_percent: u32) -> PixelMatrix {
    let (src_w, src_h) = (matrix.width(), matrix.height());
    let (new_w, new_h) = scaled_dimensions(src_w, src_h, width_percent, height_percent);
    if new_w == 0 || new_h == 0 {
        return PixelMatrix::default();
    }
    if new_w == src_w && new_h == src_h {
        return matrix.clone();
    }

    // Source column for every target column, shared by all rows.
    let columns: Vec<usize> = (0..new_w as u64)
        .map(|x| (x * src_w as u64 / new_w as u64) as usize)
        .collect();

    let mut data = Vec::with_capacity(new_w as usize * new_h as usize);
    for y in 0..new_h as u64 {
        let src_y = (y * src_h as u64 / new_h as u64) as u32;
        let row = matrix.row(src_y);
        data.extend(columns.iter().map(|&x| row[x]));
    }
    PixelMatrix::new_unchecked(new_w, new_h, data)
}

/// Replace every pixel with its ramp glyph.
pub fn quantize(matrix: &PixelMatrix, ramp: &CharacterRamp) -> CharacterGrid {
    if matrix.is_empty() {
        return CharacterGrid::default();
    }
    CharacterGrid {
        width: matrix.width(),
        height: matrix.height(),
        cells: map_to_chars(matrix.as_slice(), ramp),
    }
}
