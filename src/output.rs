//! Render sinks: terminal display and text files.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::render::CharacterGrid;

/// File the render is saved to when the user does not pick one.
pub const DEFAULT_OUTPUT_PATH: &str = "output.txt";

/// Errors that can occur while writing a render.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to the terminal: {0}")]
    Display(#[from] std::io::Error),
}

/// Stream a grid to a text surface, one newline-terminated row per line.
pub fn display<W: Write>(grid: &CharacterGrid, out: W) -> Result<(), OutputError> {
    grid.write_to(out)?;
    Ok(())
}

/// Save a grid to `path`, creating parent directories as needed.
///
/// An existing file is overwritten.
pub fn save(grid: &CharacterGrid, path: &Path) -> Result<(), OutputError> {
    let wrap = |source: std::io::Error| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(wrap)?;
    }
    let file = std::fs::File::create(path).map_err(wrap)?;
    grid.write_to(std::io::BufWriter::new(file)).map_err(wrap)?;

    log::info!(
        "saved {}x{} render to {}",
        grid.width(),
        grid.height(),
        path.display()
    );
    Ok(())
}
