//! Image decode, upscale decision, and re-encode — pure Rust.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode (BMP, PNG, JPEG)** | `image::open` |
//! | **Decode (GIF frames)** | `image::codecs::gif::GifDecoder` |
//! | **Upscale** | linear interpolation (`FilterType::Triangle`) |
//! | **Encode (still)** | `DynamicImage::save`, format by extension |
//! | **Encode (animation)** | `image::codecs::gif::GifEncoder`, infinite loop |
//!
//! The module is split into:
//! - **Scaling**: pure functions for the factor decision (unit testable)
//! - **Upscale**: applies the decision to still images and frame sequences
//! - **Codec**: file I/O and the one-time static/animated resolution

mod codec;
mod scaling;
mod upscale;

pub use codec::{Decoded, decode, write_animation, write_static};
pub use scaling::{MIN_EDGE, scale_factor, scaled_dimensions};
pub use upscale::{ResizeError, upscale, upscale_frames};
