//! Unit tests for the render pipeline.
//!
//! These tests pin down the pipeline's observable rules:
//! - Default edits only quantize
//! - Stage order (invert -> threshold -> crop -> scale -> quantize)
//! - Crop and scale dimension arithmetic
//! - Zero-sized renders are empty, not errors

use img_to_ascii::ascii::{CharSet, CharacterRamp, PixelMatrix};
use img_to_ascii::edit::{CropSide, EditError, EditState, MAX_SCALED_CELLS};
use img_to_ascii::render::{invert, render, scale, threshold, CharacterGrid};

fn matrix(rows: &[&[u8]]) -> PixelMatrix {
    PixelMatrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
}

/// Deterministic pseudo-random matrix (LCG) so tests cover many values.
fn noise(width: u32, height: u32, seed: u32) -> PixelMatrix {
    let mut state = seed;
    let data = (0..width * height)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (state >> 16) as u8
        })
        .collect();
    PixelMatrix::new(width, height, data).unwrap()
}

fn two_level() -> CharacterRamp {
    " #".parse().unwrap()
}

fn grid_rows(grid: &CharacterGrid) -> Vec<String> {
    grid.rows().map(|r| r.iter().collect()).collect()
}

// ==================== Default Edits ====================

#[test]
fn test_example_default_edits() {
    let m = matrix(&[&[0, 128], &[255, 64]]);
    let grid = render(&m, &EditState::new(2, 2), &two_level());
    assert_eq!(grid.to_rows(), vec![vec![' ', ' '], vec!['#', ' ']]);
}

#[test]
fn test_default_edits_only_quantize() {
    let ramp = CharSet::Detailed.ramp();
    let m = noise(17, 9, 7);
    let grid = render(&m, &EditState::new(17, 9), &ramp);

    assert_eq!((grid.width(), grid.height()), (17, 9));
    for y in 0..9 {
        for x in 0..17 {
            let p = m.get(x, y).unwrap() as usize;
            let expected = ramp.glyphs()[p * (ramp.len() - 1) / 255];
            assert_eq!(grid.get(x, y), Some(expected), "cell ({}, {})", x, y);
        }
    }
}

#[test]
fn test_render_is_idempotent() {
    let m = noise(12, 12, 99);
    let mut state = EditState::new(12, 12);
    state.toggle_invert();
    state.set_threshold(Some(30), Some(220), Some(128)).unwrap();
    state.set_crop(CropSide::Top, 2).unwrap();
    state.set_scale(Some(150), Some(75)).unwrap();
    let ramp = CharSet::Standard.ramp();

    let first = render(&m, &state, &ramp);
    let second = render(&m, &state, &ramp);
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

// ==================== Threshold ====================

#[test]
fn test_example_threshold_with_fill() {
    let m = matrix(&[&[0, 128], &[255, 64]]);
    assert_eq!(threshold(&m, 200, 255, 9), matrix(&[&[9, 9], &[255, 9]]));

    let mut state = EditState::new(2, 2);
    state.set_threshold(Some(200), None, Some(9)).unwrap();
    let grid = render(&m, &state, &two_level());
    assert_eq!(grid.to_rows(), vec![vec![' ', ' '], vec!['#', ' ']]);
}

#[test]
fn test_fill_visible_with_larger_ramp() {
    let ramp: CharacterRamp = "0123456789".parse().unwrap();
    let m = matrix(&[&[0, 128], &[255, 64]]);
    let mut state = EditState::new(2, 2);

    let plain = render(&m, &state, &ramp);
    assert_eq!(grid_rows(&plain), vec!["04", "92"]);

    // Everything below 200 becomes 200 -> 200 * 9 / 255 = 7.
    state.set_threshold(Some(200), None, Some(200)).unwrap();
    let filled = render(&m, &state, &ramp);
    assert_eq!(grid_rows(&filled), vec!["77", "97"]);
}

#[test]
fn test_threshold_upper_bound() {
    let m = matrix(&[&[10, 100, 250]]);
    assert_eq!(threshold(&m, 0, 100, 0), matrix(&[&[10, 100, 0]]));
}

#[test]
fn test_raising_minimum_never_keeps_more_pixels() {
    // Odd values below 255 only: the even fill never equals an input pixel.
    let m = PixelMatrix::new(
        32,
        32,
        noise(32, 32, 3).as_slice().iter().map(|p| (p | 1).min(253)).collect(),
    )
    .unwrap();
    let kept = |min: u8| {
        threshold(&m, min, 255, 0)
            .as_slice()
            .iter()
            .zip(m.as_slice())
            .filter(|(after, before)| after == before)
            .count()
    };

    assert_eq!(kept(0), 32 * 32);
    let mut previous = kept(0);
    for min in (8..=255).step_by(8) {
        let now = kept(min as u8);
        assert!(now <= previous, "min {} kept {} > {}", min, now, previous);
        previous = now;
    }
    assert_eq!(kept(255), 0);
}

// ==================== Inversion ====================

#[test]
fn test_example_inversion() {
    assert_eq!(invert(&matrix(&[&[0, 255]])), matrix(&[&[255, 0]]));
}

#[test]
fn test_inversion_is_an_involution() {
    let m = noise(5, 5, 11);
    assert_eq!(invert(&invert(&m)), m);
}

#[test]
fn test_inversion_applies_before_threshold() {
    let m = matrix(&[&[10, 240]]);
    let ramp: CharacterRamp = "0123456789".parse().unwrap();
    let mut state = EditState::new(2, 1);
    state.set_threshold(Some(128), None, Some(0)).unwrap();

    // Without inversion 10 is filled, 240 kept.
    assert_eq!(render(&m, &state, &ramp).to_string(), "08\n");

    // With inversion the pixels are 245, 15: 245 kept, 15 filled.
    state.toggle_invert();
    assert_eq!(render(&m, &state, &ramp).to_string(), "80\n");
}

// ==================== Crop ====================

#[test]
fn test_crop_dimensions() {
    let m = noise(20, 10, 5);
    for (l, r, t, b) in [(0, 0, 0, 0), (3, 4, 1, 2), (19, 0, 0, 9), (10, 10, 5, 5)] {
        let mut state = EditState::new(20, 10);
        state.set_crop(CropSide::Left, l).unwrap();
        state.set_crop(CropSide::Right, r).unwrap();
        state.set_crop(CropSide::Top, t).unwrap();
        state.set_crop(CropSide::Bottom, b).unwrap();

        let grid = render(&m, &state, &two_level());
        let w = 20 - l - r;
        let h = 10 - t - b;
        if w == 0 || h == 0 {
            assert!(grid.is_empty());
        } else {
            assert_eq!((grid.width() as i64, grid.height() as i64), (w, h));
        }
    }
}

#[test]
fn test_crop_is_relative_to_original() {
    let m = matrix(&[&[0, 255, 0, 255, 0]]);
    let mut state = EditState::new(5, 1);
    state.set_crop(CropSide::Left, 2).unwrap();
    state.set_crop(CropSide::Left, 1).unwrap();
    // Second crop replaces the first instead of stacking on it.
    assert_eq!(render(&m, &state, &two_level()).to_string(), "# # \n");
}

#[test]
fn test_crop_order_independent() {
    let m = noise(9, 7, 21);
    let mut a = EditState::new(9, 7);
    a.set_crop(CropSide::Left, 2).unwrap();
    a.set_crop(CropSide::Bottom, 3).unwrap();
    let mut b = EditState::new(9, 7);
    b.set_crop(CropSide::Bottom, 3).unwrap();
    b.set_crop(CropSide::Left, 2).unwrap();

    let ramp = CharSet::Standard.ramp();
    assert_eq!(render(&m, &a, &ramp), render(&m, &b, &ramp));
}

// ==================== Scale ====================

#[test]
fn test_scale_100_is_noop_after_crop() {
    let m = noise(13, 8, 17);
    let mut cropped = EditState::new(13, 8);
    cropped.set_crop(CropSide::Right, 4).unwrap();
    cropped.set_crop(CropSide::Top, 1).unwrap();
    let mut scaled = cropped.clone();
    scaled.set_scale(Some(100), Some(100)).unwrap();

    let ramp = CharSet::Detailed.ramp();
    let a = render(&m, &cropped, &ramp);
    let b = render(&m, &scaled, &ramp);
    assert_eq!((b.width(), b.height()), (9, 7));
    assert_eq!(a, b);
}

#[test]
fn test_scale_zero_width_is_empty() {
    let m = noise(4, 4, 1);
    let mut state = EditState::new(4, 4);
    state.set_scale(Some(0), None).unwrap();
    let grid = render(&m, &state, &two_level());
    assert!(grid.is_empty());
    assert_eq!(grid.to_string(), "");
}

#[test]
fn test_scale_dimensions_floor() {
    let m = noise(7, 5, 2);
    let mut state = EditState::new(7, 5);
    state.set_scale(Some(50), Some(130)).unwrap();
    let grid = render(&m, &state, &two_level());
    // floor(7 * 0.5) = 3, floor(5 * 1.3) = 6
    assert_eq!((grid.width(), grid.height()), (3, 6));
}

#[test]
fn test_scale_nearest_neighbor_sampling() {
    let m = matrix(&[&[0, 50, 100, 150, 200, 250]]);
    // 6 -> 4 columns samples x = 0, 1, 3, 4.
    assert_eq!(scale(&m, 67, 100), matrix(&[&[0, 50, 150, 200]]));
}

#[test]
fn test_crop_then_scale() {
    let m = matrix(&[&[0, 0, 255, 255], &[0, 0, 255, 255]]);
    let mut state = EditState::new(4, 2);
    state.set_crop(CropSide::Left, 2).unwrap();
    state.set_scale(Some(50), Some(50)).unwrap();
    // Cropping first leaves the bright half, so the 1x1 result is bright.
    assert_eq!(render(&m, &state, &two_level()).to_string(), "#\n");
}

#[test]
fn test_oversized_scale_is_rejected_before_render() {
    let m = noise(200, 200, 8);
    let mut state = EditState::new(200, 200);
    let err = state
        .set_scale(Some(u32::MAX as i64), Some(u32::MAX as i64))
        .unwrap_err();
    assert!(matches!(err, EditError::TooLarge { .. }));

    // The rejected edit leaves the identity scale in place.
    let grid = render(&m, &state, &two_level());
    assert_eq!((grid.width(), grid.height()), (200, 200));
}

#[test]
fn test_largest_accepted_scale_renders() {
    let m = matrix(&[&[0, 255], &[255, 0]]);
    let mut state = EditState::new(2, 2);
    // 2 * 204800% = 4096 per side, the largest square render allowed.
    state.set_scale(Some(204_800), Some(204_800)).unwrap();
    let grid = render(&m, &state, &two_level());
    assert_eq!((grid.width(), grid.height()), (4096, 4096));
    assert_eq!(grid.width() as u64 * grid.height() as u64, MAX_SCALED_CELLS);
    assert!(state.set_scale(Some(204_801), None).is_err());
}

// ==================== Degenerate Input ====================

#[test]
fn test_empty_matrix_renders_empty() {
    let m = PixelMatrix::default();
    let grid = render(&m, &EditState::new(0, 0), &two_level());
    assert!(grid.is_empty());
}

#[test]
fn test_full_crop_renders_empty() {
    let m = noise(3, 3, 4);
    let mut state = EditState::new(3, 3);
    state.set_crop(CropSide::Top, 3).unwrap();
    assert!(render(&m, &state, &two_level()).is_empty());
}
