//! Pure decision math for the upscale factor.
//!
//! All functions here are pure and testable without any I/O or images.

/// Frames whose shorter edge is below this are upscaled.
pub const MIN_EDGE: u32 = 250;

/// Decide the integer scale factor for a frame, if any.
///
/// The shorter edge drives the decision:
/// - at or above [`MIN_EDGE`] → `None`, the frame is left alone
/// - below it → `Some(2)`, unless doubling would still fall short of
///   [`MIN_EDGE`], in which case `Some(4)`
///
/// # Examples
/// ```
/// # use batch_upscale::imaging::scale_factor;
/// assert_eq!(scale_factor(800, 600), None);
/// assert_eq!(scale_factor(200, 300), Some(2));
/// assert_eq!(scale_factor(60, 80), Some(4));
/// ```
pub fn scale_factor(width: u32, height: u32) -> Option<u32> {
    let short_edge = width.min(height);
    if short_edge >= MIN_EDGE {
        return None;
    }
    if short_edge * 2 < MIN_EDGE {
        Some(4)
    } else {
        Some(2)
    }
}

/// Multiply both edges by `factor`, or `None` on `u32` overflow.
pub fn scaled_dimensions(width: u32, height: u32, factor: u32) -> Option<(u32, u32)> {
    Some((width.checked_mul(factor)?, height.checked_mul(factor)?))
}
