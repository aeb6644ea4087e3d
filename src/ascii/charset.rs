//! Character ramps for ASCII rendering.

use std::fmt;
use std::str::FromStr;

/// Standard ASCII density ramp (10 levels).
/// Characters ordered from darkest (space) to brightest (@).
/// Works well on dark terminals.
pub const STANDARD_CHARSET: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Block character set (5 levels).
/// Uses Unicode block characters for higher perceived resolution.
/// Characters ordered from darkest (space) to brightest (full block).
pub const BLOCKS_CHARSET: &[char] = &[' ', '░', '▒', '▓', '█'];

/// Minimal character set (4 levels).
/// Clean, less noisy look.
pub const MINIMAL_CHARSET: &[char] = &[' ', '.', ':', '#'];

/// Every printable ASCII glyph ordered by how much ink it puts on the cell,
/// from the empty space up to `@`.
pub const DETAILED_RAMP: &str = " `.-':,_\"^~;><!=*\\/+r?cL|)(vT7iJzsl}{xt[Y]Fnu1IfC3jo25eakSyVhPEwZK4XU69pbqdmAHRG#OD%8WNB$M0gQ&@";

/// Errors raised when building a [`CharacterRamp`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RampError {
    #[error("character ramp must contain at least one glyph")]
    Empty,
    #[error("ramp glyph {0:?} is not printable")]
    Unprintable(char),
}

/// Ordered glyph list used to quantize brightness.
///
/// Index 0 is drawn for brightness 0, the last glyph for brightness 255.
/// A ramp always holds at least one glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRamp {
    glyphs: Vec<char>,
}

impl CharacterRamp {
    /// Build a ramp from an ordered glyph list.
    ///
    /// Control characters are rejected since rows are written verbatim and a
    /// stray newline or tab would break the grid.
    pub fn new(glyphs: Vec<char>) -> Result<Self, RampError> {
        if glyphs.is_empty() {
            return Err(RampError::Empty);
        }
        if let Some(&bad) = glyphs.iter().find(|c| c.is_control()) {
            return Err(RampError::Unprintable(bad));
        }
        Ok(Self { glyphs })
    }

    /// Number of quantization levels.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false: a ramp holds at least one glyph.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Ramp index for a brightness value: `floor(p * (N - 1) / 255)`.
    #[inline]
    pub fn index_for(&self, brightness: u8) -> usize {
        let levels = self.glyphs.len();
        let idx = (brightness as usize * (levels - 1)) / 255;
        idx.min(levels - 1)
    }

    /// Glyph drawn for a brightness value.
    #[inline]
    pub fn glyph_for(&self, brightness: u8) -> char {
        self.glyphs[self.index_for(brightness)]
    }
}

impl Default for CharacterRamp {
    fn default() -> Self {
        CharSet::default().ramp()
    }
}

impl FromStr for CharacterRamp {
    type Err = RampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.chars().collect())
    }
}

impl fmt::Display for CharacterRamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for glyph in &self.glyphs {
            write!(f, "{}", glyph)?;
        }
        Ok(())
    }
}

/// Built-in ramp presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Standard ASCII density ramp (10 levels)
    #[default]
    Standard,
    /// Block character set (5 levels) using Unicode blocks
    Blocks,
    /// Minimal character set (4 levels) for a clean look
    Minimal,
    /// Full printable-ASCII density ramp (95 levels)
    Detailed,
}

impl CharSet {
    /// All presets in cycling order.
    pub const ALL: [CharSet; 4] = [
        CharSet::Standard,
        CharSet::Blocks,
        CharSet::Minimal,
        CharSet::Detailed,
    ];

    /// Build the ramp for this preset.
    pub fn ramp(&self) -> CharacterRamp {
        let glyphs = match self {
            CharSet::Standard => STANDARD_CHARSET.to_vec(),
            CharSet::Blocks => BLOCKS_CHARSET.to_vec(),
            CharSet::Minimal => MINIMAL_CHARSET.to_vec(),
            CharSet::Detailed => DETAILED_RAMP.chars().collect(),
        };
        // Presets are non-empty and printable.
        CharacterRamp { glyphs }
    }

    /// Cycle to the next character set.
    ///
    /// Order: Standard -> Blocks -> Minimal -> Detailed -> Standard
    pub fn next(&self) -> Self {
        match self {
            CharSet::Standard => CharSet::Blocks,
            CharSet::Blocks => CharSet::Minimal,
            CharSet::Minimal => CharSet::Detailed,
            CharSet::Detailed => CharSet::Standard,
        }
    }

    /// Get a human-readable name for the charset.
    pub fn name(&self) -> &'static str {
        match self {
            CharSet::Standard => "standard",
            CharSet::Blocks => "blocks",
            CharSet::Minimal => "minimal",
            CharSet::Detailed => "detailed",
        }
    }

    /// Look a preset up by its name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name.trim()))
    }
}
