//! img-to-ascii library crate.
//!
//! Converts raster images to ASCII art and keeps a set of non-destructive
//! edits (inversion, threshold, crop, scale) that are replayed on every render.
//!
//! ```
//! use img_to_ascii::ascii::{CharacterRamp, PixelMatrix};
//! use img_to_ascii::edit::EditState;
//! use img_to_ascii::render::render;
//!
//! let matrix = PixelMatrix::from_rows(vec![vec![0, 128], vec![255, 64]]).unwrap();
//! let ramp: CharacterRamp = " #".parse().unwrap();
//! let grid = render(&matrix, &EditState::new(2, 2), &ramp);
//! assert_eq!(grid.to_string(), "  \n# \n");
//! ```

pub mod ascii;
pub mod cli;
pub mod config;
pub mod edit;
pub mod error;
pub mod loader;
pub mod menu;
pub mod output;
pub mod render;
pub mod session;
