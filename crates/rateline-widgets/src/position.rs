//! Pointer position to rating value.
//!
//! The resolver is a pure function of the pointer coordinate, the widget's
//! current bounding box and the configuration. Bounds are read on every call
//! so that scrolling or relayout between events is always honored.

use crate::config::{normalize, RatingConfig};
use rateline_core::Rect;

/// Map a horizontal pointer coordinate to a rating on the half-step grid.
///
/// The pointer fraction across `bounds` is clamped to `[0, 1]`, scaled by
/// `max`, snapped on the half grid with the configured rounding policy and
/// reported with two decimals. Unmeasured bounds resolve to `0`.
///
/// # Examples
///
/// ```
/// use rateline_core::{Rect, Rounding};
/// use rateline_widgets::{resolve_rating, RatingConfig};
///
/// let bounds = Rect::new(0.0, 0.0, 100.0, 20.0);
/// let config = RatingConfig { rounding: Rounding::Floor, ..RatingConfig::default() };
/// assert_eq!(resolve_rating(46.0, bounds, &config), 2.0);
/// ```
#[must_use]
pub fn resolve_rating(pointer_x: f32, bounds: Rect, config: &RatingConfig) -> f32 {
    if !bounds.is_measured() {
        log::warn!("rating bounds not measured ({bounds:?}), resolving to 0");
        return 0.0;
    }
    let max = f64::from(config.max);
    let offset = f64::from(pointer_x) - f64::from(bounds.x);
    let fraction = offset / f64::from(bounds.width);
    if fraction.is_nan() {
        return 0.0;
    }
    let raw = fraction.clamp(0.0, 1.0) * max;
    let snapped = config.rounding.snap(raw * 2.0) / 2.0;
    normalize(snapped.clamp(0.0, max))
}

/// Discrete per-icon resolution: left half of icon `icon_number` (one-based)
/// selects `icon_number - 0.5`, the right half selects `icon_number`.
#[must_use]
pub fn resolve_icon_half(pointer_x: f32, icon_bounds: Rect, icon_number: u32) -> f32 {
    let whole = icon_number as f32;
    if !icon_bounds.is_measured() {
        return whole;
    }
    let midpoint = icon_bounds.width.mul_add(0.5, icon_bounds.x);
    if pointer_x < midpoint {
        (whole - 0.5).max(0.0)
    } else {
        whole
    }
}
