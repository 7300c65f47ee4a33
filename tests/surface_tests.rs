// Tests for the backing-store sizing math.

use field_core::{backing_size, MAX_PIXEL_RATIO};

#[test]
fn pixel_ratio_is_capped() {
    assert_eq!(backing_size(800.0, 600.0, 3.0), (1600, 1200));
    assert_eq!(backing_size(800.0, 600.0, MAX_PIXEL_RATIO), (1600, 1200));
}

#[test]
fn standard_ratios_pass_through() {
    assert_eq!(backing_size(640.0, 480.0, 1.0), (640, 480));
    assert_eq!(backing_size(640.0, 480.0, 1.5), (960, 720));
}

#[test]
fn fractional_sizes_floor() {
    assert_eq!(backing_size(100.7, 50.2, 1.0), (100, 50));
    assert_eq!(backing_size(100.5, 50.5, 1.5), (150, 75));
}

#[test]
fn degenerate_boxes_clamp_to_one_pixel() {
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    assert_eq!(backing_size(0.2, 120.0, 1.0), (1, 120));
}

#[test]
fn zero_pixel_ratio_falls_back_to_one() {
    assert_eq!(backing_size(640.0, 480.0, 0.0), (640, 480));
}

#[test]
fn same_layout_gives_same_size() {
    let a = backing_size(1234.5, 678.9, 1.75);
    let b = backing_size(1234.5, 678.9, 1.75);
    assert_eq!(a, b);
}
