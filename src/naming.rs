//! Centralized output-name construction.
//!
//! Upscaled files are written next to where the untouched copy would have
//! lived, with `_upscaled` inserted between the stem and the extension:
//! `out/pets/cat.gif` → `out/pets/cat_upscaled.gif`. The extension (and its
//! case) is preserved so the encoder picks the same format as the input.

use std::path::{Path, PathBuf};

/// Marker inserted before the extension of every written output file.
pub const UPSCALED_SUFFIX: &str = "_upscaled";

/// Build the `_upscaled`-suffixed sibling of `path`.
///
/// Files without an extension get the bare suffix appended.
pub fn upscaled_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    match path.extension() {
        Some(ext) => path.with_file_name(format!(
            "{stem}{UPSCALED_SUFFIX}.{}",
            ext.to_string_lossy()
        )),
        None => path.with_file_name(format!("{stem}{UPSCALED_SUFFIX}")),
    }
}
