//! Pixel and glyph primitives for ASCII rendering.
//!
//! 1. **Grayscale conversion** - RGB to luminance using BT.601
//! 2. **Pixel matrix** - rectangular grayscale buffer the editor works on
//! 3. **Character mapping** - Map brightness to ramp glyphs
//!
//! # Character Sets
//!
//! Built-in ramps are available via [`CharSet`]:
//! - `Standard` - 10-level ASCII density ramp
//! - `Blocks` - Unicode block characters
//! - `Minimal` - 4-level clean look
//! - `Detailed` - every printable ASCII glyph, ordered by ink density
//!
//! Any other glyph string can be used through [`CharacterRamp`].

mod charset;
mod grayscale;
mod mapping;
mod pixels;

pub use charset::{
    CharSet, CharacterRamp, RampError, BLOCKS_CHARSET, DETAILED_RAMP, MINIMAL_CHARSET,
    STANDARD_CHARSET,
};
pub use grayscale::{luminance, to_grayscale};
pub use mapping::map_to_chars;
pub use pixels::{MatrixError, PixelMatrix};
