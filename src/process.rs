//! Per-file image processing.
//!
//! One call of [`process`] handles one input file end to end: decode,
//! resolve static vs. animated, upscale every frame, and persist an
//! `_upscaled`-suffixed output — but only when at least one frame actually
//! changed. Errors are consumed here at the per-file boundary: they are
//! printed, handed to the log sink, and folded into [`Outcome::Failed`], so
//! one bad file never disturbs the rest of a batch.
//!
//! Output parent directories are expected to exist already; creating them is
//! the traversal's job ([`crate::walk`]).

use crate::imaging::{self, Decoded, ResizeError};
use crate::logging::LogSink;
use crate::naming::upscaled_path;
use image::ImageError;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
    #[error("failed to resize {}: {source}", path.display())]
    Resize {
        path: PathBuf,
        #[source]
        source: ResizeError,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
}

/// What happened to one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// At least one frame was resized; the output was written here.
    Upscaled(PathBuf),
    /// Every frame was already large enough; nothing was written.
    Unchanged,
    /// The failure was reported; the batch moves on.
    Failed,
}

/// Process one image file, reporting but never propagating failures.
///
/// `output_path` is where the untouched copy would live; the actual file, if
/// any, lands at its `_upscaled`-suffixed sibling.
pub fn process(input_path: &Path, output_path: &Path, sink: &mut dyn LogSink) -> Outcome {
    match run(input_path, output_path) {
        Ok(Some(written)) => {
            let message = format!(
                "Upscaled {} -> {}",
                input_path.display(),
                written.display()
            );
            println!("{message}");
            sink.info(&message);
            Outcome::Upscaled(written)
        }
        Ok(None) => Outcome::Unchanged,
        Err(err) => {
            let message = format!("Error processing {}: {err}", input_path.display());
            eprintln!("{message}");
            sink.error(&message);
            Outcome::Failed
        }
    }
}

/// The fallible pipeline behind [`process`].
///
/// Returns the written path, or `None` when no frame needed upscaling.
fn run(input_path: &Path, output_path: &Path) -> Result<Option<PathBuf>, ProcessError> {
    let decoded = imaging::decode(input_path).map_err(|source| ProcessError::Decode {
        path: input_path.to_path_buf(),
        source,
    })?;

    let resize_err = |source: ResizeError| ProcessError::Resize {
        path: input_path.to_path_buf(),
        source,
    };

    match decoded {
        Decoded::Animated(frames) => {
            let (frames, any_upscaled) = imaging::upscale_frames(frames).map_err(resize_err)?;
            if !any_upscaled {
                return Ok(None);
            }
            let target = upscaled_path(output_path);
            imaging::write_animation(frames, &target).map_err(|source| ProcessError::Write {
                path: target.clone(),
                source,
            })?;
            Ok(Some(target))
        }
        Decoded::Static(image) => {
            let (image, was_upscaled) = imaging::upscale(image).map_err(resize_err)?;
            if !was_upscaled {
                return Ok(None);
            }
            let target = upscaled_path(output_path);
            imaging::write_static(&image, &target).map_err(|source| ProcessError::Write {
                path: target.clone(),
                source,
            })?;
            Ok(Some(target))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::tests::RecordingSink;
    use image::{Delay, Frame, Rgb, RgbImage, Rgba, RgbaImage};
    use tempfile::TempDir;

    fn write_png(path: &Path, width: u32, height: u32) {
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        })
        .save(path)
        .unwrap();
    }

    fn solid_frame(width: u32, height: u32, value: u8) -> Frame {
        Frame::from_parts(
            RgbaImage::from_pixel(width, height, Rgba([value, value, value, 255])),
            0,
            0,
            Delay::from_numer_denom_ms(100, 1),
        )
    }

    #[test]
    fn undersized_static_image_writes_upscaled_file() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("photo.png");
        let output = tmp.path().join("out").join("photo.png");
        std::fs::create_dir_all(output.parent().unwrap()).unwrap();
        write_png(&input, 200, 300);

        let mut sink = RecordingSink::new();
        let outcome = process(&input, &output, &mut sink);

        let expected = tmp.path().join("out").join("photo_upscaled.png");
        assert_eq!(outcome, Outcome::Upscaled(expected.clone()));
        assert_eq!(image::image_dimensions(&expected).unwrap(), (400, 600));
        assert_eq!(sink.infos.len(), 1);
        assert!(sink.infos[0].contains("photo_upscaled.png"));
        assert!(sink.errors.is_empty());
    }

    #[test]
    fn tiny_static_image_quadruples() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("icon.png");
        let output = tmp.path().join("icon.png");
        write_png(&input, 60, 80);

        let mut sink = RecordingSink::new();
        process(&input, &output, &mut sink);

        let expected = tmp.path().join("icon_upscaled.png");
        assert_eq!(image::image_dimensions(&expected).unwrap(), (240, 320));
    }

    #[test]
    fn large_static_image_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("big.png");
        let output = tmp.path().join("big.png");
        write_png(&input, 250, 250);

        let mut sink = RecordingSink::new();
        let outcome = process(&input, &output, &mut sink);

        assert_eq!(outcome, Outcome::Unchanged);
        assert!(!tmp.path().join("big_upscaled.png").exists());
        assert!(sink.infos.is_empty());
    }

    #[test]
    fn jpeg_output_keeps_extension() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("photo.jpg");
        let output = tmp.path().join("photo.jpg");
        RgbImage::from_pixel(100, 80, Rgb([40, 80, 120]))
            .save(&input)
            .unwrap();

        let mut sink = RecordingSink::new();
        let outcome = process(&input, &output, &mut sink);

        let expected = tmp.path().join("photo_upscaled.jpg");
        assert_eq!(outcome, Outcome::Upscaled(expected.clone()));
        assert_eq!(image::image_dimensions(&expected).unwrap(), (400, 320));
    }

    #[test]
    fn animated_gif_is_reassembled_with_all_frames() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("anim.gif");
        let output = tmp.path().join("anim.gif");
        imaging::write_animation(
            vec![
                solid_frame(100, 80, 20),
                solid_frame(100, 80, 120),
                solid_frame(100, 80, 220),
            ],
            &input,
        )
        .unwrap();

        let mut sink = RecordingSink::new();
        let outcome = process(&input, &output, &mut sink);

        let expected = tmp.path().join("anim_upscaled.gif");
        assert_eq!(outcome, Outcome::Upscaled(expected.clone()));

        match imaging::decode(&expected).unwrap() {
            Decoded::Animated(frames) => {
                assert_eq!(frames.len(), 3);
                for frame in &frames {
                    // min edge 80, doubled 160 < 250, so factor 4
                    assert_eq!(frame.buffer().dimensions(), (400, 320));
                }
                let shades: Vec<u8> = frames
                    .iter()
                    .map(|f| f.buffer().get_pixel(0, 0).0[0])
                    .collect();
                assert!(shades[0] < shades[1] && shades[1] < shades[2]);
            }
            Decoded::Static(_) => panic!("expected an animated output"),
        }
    }

    #[test]
    fn large_animated_gif_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("anim.gif");
        let output = tmp.path().join("anim.gif");
        imaging::write_animation(
            vec![solid_frame(260, 300, 20), solid_frame(260, 300, 200)],
            &input,
        )
        .unwrap();

        let mut sink = RecordingSink::new();
        let outcome = process(&input, &output, &mut sink);

        assert_eq!(outcome, Outcome::Unchanged);
        assert!(!tmp.path().join("anim_upscaled.gif").exists());
    }

    #[test]
    fn corrupt_input_is_reported_not_propagated() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("broken.png");
        let output = tmp.path().join("broken.png");
        std::fs::write(&input, b"these are not pixels").unwrap();

        let mut sink = RecordingSink::new();
        let outcome = process(&input, &output, &mut sink);

        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(sink.errors.len(), 1);
        assert!(sink.errors[0].contains("broken.png"));
        assert!(!tmp.path().join("broken_upscaled.png").exists());
    }

    #[test]
    fn missing_output_directory_is_a_write_error() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("photo.png");
        let output = tmp.path().join("does-not-exist").join("photo.png");
        write_png(&input, 100, 100);

        let mut sink = RecordingSink::new();
        let outcome = process(&input, &output, &mut sink);

        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(sink.errors.len(), 1);
    }

    #[test]
    fn reprocessing_a_large_enough_output_is_a_no_op() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("photo.png");
        let output = tmp.path().join("photo.png");
        write_png(&input, 130, 260);

        let mut sink = RecordingSink::new();
        let first = process(&input, &output, &mut sink);
        let written = match first {
            Outcome::Upscaled(path) => path,
            other => panic!("expected an upscale, got {other:?}"),
        };
        assert_eq!(image::image_dimensions(&written).unwrap(), (260, 520));

        // Second pass over the output: both edges are ≥ 250 now
        let outcome = process(&written, &written, &mut sink);
        assert_eq!(outcome, Outcome::Unchanged);
        assert_eq!(sink.infos.len(), 1);
    }
}
