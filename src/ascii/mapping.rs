//! Brightness to character mapping.

use super::charset::CharacterRamp;

/// Map brightness values to characters from a ramp.
///
/// Lower brightness maps to earlier glyphs, higher brightness to later ones.
///
/// # Arguments
/// * `brightness` - Brightness values (0-255), one per character cell
/// * `ramp` - Glyphs ordered from the one drawn for 0 to the one drawn for 255
///
/// # Returns
/// A vector of characters, one per input brightness value.
///
/// # Example
/// ```
/// use img_to_ascii::ascii::{map_to_chars, CharSet};
///
/// let chars = map_to_chars(&[0, 127, 255], &CharSet::Standard.ramp());
/// assert_eq!(chars, vec![' ', '=', '@']);
/// ```
pub fn map_to_chars(brightness: &[u8], ramp: &CharacterRamp) -> Vec<char> {
    brightness.iter().map(|&b| ramp.glyph_for(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::CharSet;

    #[test]
    fn test_map_blocks() {
        let ramp = CharSet::Blocks.ramp();
        assert_eq!(map_to_chars(&[0, 64, 128, 192, 255], &ramp), vec![' ', '░', '▒', '▓', '█']);
    }

    #[test]
    fn test_map_empty_input() {
        assert!(map_to_chars(&[], &CharSet::Standard.ramp()).is_empty());
    }
}
