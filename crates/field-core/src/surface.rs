use crate::constants::MAX_PIXEL_RATIO;

/// Backing-store pixel size for a canvas displayed at `css_width` by
/// `css_height` CSS pixels.
///
/// The device pixel ratio is capped to bound fill cost on high-density
/// displays; each axis is floored and clamped to at least one pixel.
pub fn backing_size(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> (u32, u32) {
    let scale = if device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    };
    let width = (css_width * scale).floor().max(1.0) as u32;
    let height = (css_height * scale).floor().max(1.0) as u32;
    (width, height)
}
