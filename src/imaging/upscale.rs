//! The frame upscaler: applies the scale-factor decision to pixels.
//!
//! Two entry points, one per decoded shape: [`upscale`] for a whole static
//! image, [`upscale_frames`] for an animation's frame sequence. Both report
//! whether anything was actually resized, which is what decides downstream
//! whether an output file gets written at all.

use super::scaling::{scale_factor, scaled_dimensions};
use image::imageops::FilterType;
use image::{DynamicImage, Frame};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResizeError {
    #[error("scaled dimensions overflow: {width}x{height} at factor {factor}")]
    DimensionOverflow {
        width: u32,
        height: u32,
        factor: u32,
    },
}

/// Upscale a static image if its shorter edge is below the threshold.
///
/// Returns the (possibly resized) image and whether a resize happened.
/// The color type of the input is preserved; interpolation is linear.
pub fn upscale(image: DynamicImage) -> Result<(DynamicImage, bool), ResizeError> {
    let (width, height) = (image.width(), image.height());
    let Some(factor) = scale_factor(width, height) else {
        return Ok((image, false));
    };
    let (new_width, new_height) = scaled_dimensions(width, height, factor).ok_or(
        ResizeError::DimensionOverflow {
            width,
            height,
            factor,
        },
    )?;
    let resized = image.resize_exact(new_width, new_height, FilterType::Triangle);
    Ok((resized, true))
}

/// Run every frame of an animation through the upscaler, in order.
///
/// Each frame decides its own factor, so a mixed-size sequence resizes only
/// its undersized members. The second value is true if any frame was resized.
pub fn upscale_frames(frames: Vec<Frame>) -> Result<(Vec<Frame>, bool), ResizeError> {
    let mut processed = Vec::with_capacity(frames.len());
    let mut any_upscaled = false;

    for frame in frames {
        let (frame, was_upscaled) = upscale_frame(frame)?;
        any_upscaled |= was_upscaled;
        processed.push(frame);
    }

    Ok((processed, any_upscaled))
}

fn upscale_frame(frame: Frame) -> Result<(Frame, bool), ResizeError> {
    let (left, top, delay) = (frame.left(), frame.top(), frame.delay());
    let buffer = frame.into_buffer();
    let (width, height) = buffer.dimensions();

    let Some(factor) = scale_factor(width, height) else {
        return Ok((Frame::from_parts(buffer, left, top, delay), false));
    };
    let (new_width, new_height) = scaled_dimensions(width, height, factor).ok_or(
        ResizeError::DimensionOverflow {
            width,
            height,
            factor,
        },
    )?;

    let resized = image::imageops::resize(&buffer, new_width, new_height, FilterType::Triangle);
    // Offsets move with the pixels; composited frames carry zero offsets anyway.
    let frame = Frame::from_parts(
        resized,
        left.saturating_mul(factor),
        top.saturating_mul(factor),
        delay,
    );
    Ok((frame, true))
}
