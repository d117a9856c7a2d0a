//! File decode and encode, and the static/animated split.
//!
//! Whether an input is an animation is resolved exactly once, here, into
//! [`Decoded`]; nothing downstream inspects formats again. Only GIF can be
//! animated among the handled formats, and a single-frame GIF behaves like
//! any other still image.

use image::codecs::gif::{GifDecoder, GifEncoder, Repeat};
use image::error::{DecodingError, ImageFormatHint};
use image::{AnimationDecoder, DynamicImage, Frame, ImageError, ImageFormat, ImageResult};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// An input image, resolved once at decode time.
pub enum Decoded {
    /// A still image in its native color type.
    Static(DynamicImage),
    /// An animation's composited RGBA frames, in input order.
    Animated(Vec<Frame>),
}

fn is_gif(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gif"))
}

/// Decode the image at `path`.
pub fn decode(path: &Path) -> ImageResult<Decoded> {
    if is_gif(path) {
        return decode_gif(path);
    }
    Ok(Decoded::Static(image::open(path)?))
}

fn decode_gif(path: &Path) -> ImageResult<Decoded> {
    let file = File::open(path).map_err(ImageError::IoError)?;
    let decoder = GifDecoder::new(BufReader::new(file))?;
    let mut frames = decoder.into_frames().collect_frames()?;

    if frames.len() > 1 {
        return Ok(Decoded::Animated(frames));
    }
    match frames.pop() {
        Some(frame) => Ok(Decoded::Static(DynamicImage::ImageRgba8(
            frame.into_buffer(),
        ))),
        None => Err(ImageError::Decoding(DecodingError::new(
            ImageFormatHint::Exact(ImageFormat::Gif),
            "GIF contains no frames",
        ))),
    }
}

/// Write a still image; the format is inferred from the path's extension.
pub fn write_static(image: &DynamicImage, path: &Path) -> ImageResult<()> {
    image.save(path)
}

/// Write a frame sequence as an infinitely looping GIF.
pub fn write_animation(frames: Vec<Frame>, path: &Path) -> ImageResult<()> {
    let file = File::create(path).map_err(ImageError::IoError)?;
    let mut encoder = GifEncoder::new(BufWriter::new(file));
    encoder.set_repeat(Repeat::Infinite)?;
    encoder.encode_frames(frames)
}
