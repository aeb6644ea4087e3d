//! Edit parameters applied on top of the loaded image.
//!
//! An [`EditState`] never touches pixels. It records what the user asked for
//! (inversion, threshold window and fill, four crop margins, two scale
//! percentages) and the render pipeline applies it to a fresh copy on every
//! display or save. Every setter validates before mutating, so a rejected
//! edit leaves the previous state intact.

use std::fmt;

/// Lowest accepted threshold bound by default.
pub const DEFAULT_MIN_THRESHOLD: u8 = 0;
/// Highest accepted threshold bound by default.
pub const DEFAULT_MAX_THRESHOLD: u8 = 255;
/// Value written over pixels outside the threshold window by default.
pub const DEFAULT_FILL: u8 = 0;
/// Scale percentage that leaves the cropped image untouched.
pub const DEFAULT_SCALE_PERCENT: u32 = 100;
/// Most character cells a scaled render may hold, measured on the uncropped
/// image so that later crop changes can only shrink the result.
pub const MAX_SCALED_CELLS: u64 = 4096 * 4096;

/// Errors raised by edit setters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    InvalidRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
    #[error("scaling to {width}% x {height}% would produce {cells} cells, more than the limit of {limit}")]
    TooLarge {
        width: u32,
        height: u32,
        cells: u64,
        limit: u64,
    },
}

/// Side of the image a crop margin is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CropSide {
    Left,
    Right,
    Top,
    Bottom,
}

impl CropSide {
    /// All sides in menu order.
    pub const ALL: [CropSide; 4] = [
        CropSide::Left,
        CropSide::Right,
        CropSide::Top,
        CropSide::Bottom,
    ];

    /// Side sharing the same axis.
    pub fn opposite(&self) -> Self {
        match self {
            CropSide::Left => CropSide::Right,
            CropSide::Right => CropSide::Left,
            CropSide::Top => CropSide::Bottom,
            CropSide::Bottom => CropSide::Top,
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, CropSide::Left | CropSide::Right)
    }

    pub fn name(&self) -> &'static str {
        match self {
            CropSide::Left => "left",
            CropSide::Right => "right",
            CropSide::Top => "top",
            CropSide::Bottom => "bottom",
        }
    }

    fn field(&self) -> &'static str {
        match self {
            CropSide::Left => "left crop",
            CropSide::Right => "right crop",
            CropSide::Top => "top crop",
            CropSide::Bottom => "bottom crop",
        }
    }
}

impl fmt::Display for CropSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accumulated edit parameters for one loaded image.
///
/// Crop margins are always measured against the original image, so each
/// margin can be changed independently of the others and of the order in
/// which they were set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    image_width: u32,
    image_height: u32,
    inverted: bool,
    min_threshold: u8,
    max_threshold: u8,
    fill: u8,
    crop_left: u32,
    crop_right: u32,
    crop_top: u32,
    crop_bottom: u32,
    scale_width_percent: u32,
    scale_height_percent: u32,
}

impl EditState {
    /// Default edits for an image of the given original dimensions.
    pub fn new(image_width: u32, image_height: u32) -> Self {
        Self {
            image_width,
            image_height,
            inverted: false,
            min_threshold: DEFAULT_MIN_THRESHOLD,
            max_threshold: DEFAULT_MAX_THRESHOLD,
            fill: DEFAULT_FILL,
            crop_left: 0,
            crop_right: 0,
            crop_top: 0,
            crop_bottom: 0,
            scale_width_percent: DEFAULT_SCALE_PERCENT,
            scale_height_percent: DEFAULT_SCALE_PERCENT,
        }
    }

    /// Put every edit back to its default. The image dimensions are kept.
    pub fn reset(&mut self) {
        *self = Self::new(self.image_width, self.image_height);
        log::debug!("edits reset to defaults");
    }

    /// Copy of the current state, to compare against later.
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Whether any edit differs from a previously captured snapshot.
    pub fn has_changed_from(&self, snapshot: &EditState) -> bool {
        self != snapshot
    }

    /// Flip the inversion flag and return its new value.
    pub fn toggle_invert(&mut self) -> bool {
        self.inverted = !self.inverted;
        log::debug!("inversion {}", if self.inverted { "on" } else { "off" });
        self.inverted
    }

    pub fn set_inverted(&mut self, inverted: bool) {
        self.inverted = inverted;
    }

    /// Update any of the threshold window bounds and the fill value.
    ///
    /// Omitted values keep their current setting. The resulting window must
    /// satisfy `0 <= min <= max <= 255`, checked against the merged values.
    pub fn set_threshold(
        &mut self,
        min: Option<i64>,
        max: Option<i64>,
        fill: Option<i64>,
    ) -> Result<(), EditError> {
        let new_min = match min {
            Some(v) => to_level("minimum threshold", v)?,
            None => self.min_threshold,
        };
        let new_max = match max {
            Some(v) => to_level("maximum threshold", v)?,
            None => self.max_threshold,
        };
        let new_fill = match fill {
            Some(v) => to_level("fill value", v)?,
            None => self.fill,
        };

        if new_min > new_max {
            // Blame whichever bound the caller actually moved.
            let err = if min.is_some() {
                EditError::InvalidRange {
                    field: "minimum threshold",
                    value: new_min as i64,
                    min: 0,
                    max: new_max as i64,
                }
            } else {
                EditError::InvalidRange {
                    field: "maximum threshold",
                    value: new_max as i64,
                    min: new_min as i64,
                    max: 255,
                }
            };
            return Err(err);
        }

        self.min_threshold = new_min;
        self.max_threshold = new_max;
        self.fill = new_fill;
        log::debug!(
            "threshold window {}..={} fill {}",
            self.min_threshold,
            self.max_threshold,
            self.fill
        );
        Ok(())
    }

    /// Set the crop margin for one side.
    ///
    /// The margin plus the opposite side's margin may not exceed the original
    /// dimension along that axis.
    pub fn set_crop(&mut self, side: CropSide, amount: i64) -> Result<(), EditError> {
        let max = self.max_crop(side);
        if amount < 0 || amount > max as i64 {
            return Err(EditError::InvalidRange {
                field: side.field(),
                value: amount,
                min: 0,
                max: max as i64,
            });
        }

        let amount = amount as u32;
        match side {
            CropSide::Left => self.crop_left = amount,
            CropSide::Right => self.crop_right = amount,
            CropSide::Top => self.crop_top = amount,
            CropSide::Bottom => self.crop_bottom = amount,
        }
        log::debug!("{} crop set to {}", side, amount);
        Ok(())
    }

    /// Largest margin `side` currently accepts given the opposite margin.
    pub fn max_crop(&self, side: CropSide) -> u32 {
        let axis = if side.is_horizontal() {
            self.image_width
        } else {
            self.image_height
        };
        axis - self.crop(side.opposite())
    }

    /// Update either scale percentage. Zero is accepted and renders nothing.
    ///
    /// Rejects percentages whose render of the full image would exceed
    /// [`MAX_SCALED_CELLS`].
    pub fn set_scale(
        &mut self,
        width_percent: Option<i64>,
        height_percent: Option<i64>,
    ) -> Result<(), EditError> {
        let new_width = match width_percent {
            Some(v) => to_percent("width scale", v)?,
            None => self.scale_width_percent,
        };
        let new_height = match height_percent {
            Some(v) => to_percent("height scale", v)?,
            None => self.scale_height_percent,
        };

        let cells = scaled_len(self.image_width, new_width)
            .saturating_mul(scaled_len(self.image_height, new_height));
        if cells > MAX_SCALED_CELLS {
            return Err(EditError::TooLarge {
                width: new_width,
                height: new_height,
                cells,
                limit: MAX_SCALED_CELLS,
            });
        }

        self.scale_width_percent = new_width;
        self.scale_height_percent = new_height;
        log::debug!("scale set to {}% x {}%", new_width, new_height);
        Ok(())
    }

    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    pub fn inverted(&self) -> bool {
        self.inverted
    }

    pub fn min_threshold(&self) -> u8 {
        self.min_threshold
    }

    pub fn max_threshold(&self) -> u8 {
        self.max_threshold
    }

    pub fn fill(&self) -> u8 {
        self.fill
    }

    /// Current margin for one side.
    pub fn crop(&self, side: CropSide) -> u32 {
        match side {
            CropSide::Left => self.crop_left,
            CropSide::Right => self.crop_right,
            CropSide::Top => self.crop_top,
            CropSide::Bottom => self.crop_bottom,
        }
    }

    pub fn scale_width_percent(&self) -> u32 {
        self.scale_width_percent
    }

    pub fn scale_height_percent(&self) -> u32 {
        self.scale_height_percent
    }

    /// Width and height left after cropping the original image.
    pub fn cropped_dimensions(&self) -> (u32, u32) {
        (
            self.image_width - self.crop_left - self.crop_right,
            self.image_height - self.crop_top - self.crop_bottom,
        )
    }

    /// Whether the threshold stage can change any pixel.
    pub fn has_threshold(&self) -> bool {
        self.min_threshold != DEFAULT_MIN_THRESHOLD || self.max_threshold != DEFAULT_MAX_THRESHOLD
    }
}

impl fmt::Display for EditState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Inverted:  {}", if self.inverted { "yes" } else { "no" })?;
        writeln!(
            f,
            "  Threshold: {}-{} (fill {})",
            self.min_threshold, self.max_threshold, self.fill
        )?;
        writeln!(
            f,
            "  Crop:      left {}, right {}, top {}, bottom {}",
            self.crop_left, self.crop_right, self.crop_top, self.crop_bottom
        )?;
        write!(
            f,
            "  Scale:     {}% x {}%",
            self.scale_width_percent, self.scale_height_percent
        )
    }
}

fn to_level(field: &'static str, value: i64) -> Result<u8, EditError> {
    u8::try_from(value).map_err(|_| EditError::InvalidRange {
        field,
        value,
        min: 0,
        max: 255,
    })
}

fn to_percent(field: &'static str, value: i64) -> Result<u32, EditError> {
    u32::try_from(value).map_err(|_| EditError::InvalidRange {
        field,
        value,
        min: 0,
        max: u32::MAX as i64,
    })
}

fn scaled_len(len: u32, percent: u32) -> u64 {
    len as u64 * percent as u64 / 100
}
