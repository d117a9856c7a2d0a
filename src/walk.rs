//! Directory traversal and batch orchestration.
//!
//! Walks the input tree in filename order, hands every image file to the
//! per-file processor, and mirrors the relative layout under the output
//! root:
//!
//! ```text
//! input/                        output/
//! ├── banner.png  (800x600)     ├── (nothing — already large enough)
//! ├── icons/
//! │   └── save.bmp  (32x32)     ├── icons/
//! │                             │   └── save_upscaled.bmp  (128x128)
//! └── pets/
//!     └── cat.gif  (120x90)     └── pets/
//!                                   └── cat_upscaled.gif   (480x360)
//! ```
//!
//! Output parent directories are created here, before the processor runs.
//! Every per-file problem — unreadable entry, failed mkdir, decode or write
//! error — is reported and counted, and the walk continues; only a missing
//! input root aborts the run.

use crate::logging::LogSink;
use crate::process::{self, Outcome};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum WalkError {
    #[error("input directory not found: {}", .0.display())]
    InputNotFound(PathBuf),
}

/// Extensions handed to the processor, matched case-insensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &["bmp", "png", "gif", "jpg", "jpeg"];

/// Counts for one batch run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub examined: usize,
    pub upscaled: usize,
    pub unchanged: usize,
    pub failed: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} examined, {} upscaled, {} unchanged, {} failed",
            self.examined, self.upscaled, self.unchanged, self.failed
        )
    }
}

fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Walk `input_root` and process every image file into `output_root`.
pub fn run(
    input_root: &Path,
    output_root: &Path,
    sink: &mut dyn LogSink,
) -> Result<Summary, WalkError> {
    if !input_root.is_dir() {
        return Err(WalkError::InputNotFound(input_root.to_path_buf()));
    }

    let mut summary = Summary::default();

    for entry in WalkDir::new(input_root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                report(sink, &mut summary, format!("Error reading entry: {err}"));
                continue;
            }
        };
        if !entry.file_type().is_file() || !is_image_file(entry.path()) {
            continue;
        }

        summary.examined += 1;

        let relative = entry
            .path()
            .strip_prefix(input_root)
            .expect("walked path is under the input root");
        let output_path = output_root.join(relative);
        if let Some(parent) = output_path.parent() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                report(
                    sink,
                    &mut summary,
                    format!("Error processing {}: {err}", entry.path().display()),
                );
                continue;
            }
        }

        match process::process(entry.path(), &output_path, sink) {
            Outcome::Upscaled(_) => summary.upscaled += 1,
            Outcome::Unchanged => summary.unchanged += 1,
            Outcome::Failed => summary.failed += 1,
        }
    }

    Ok(summary)
}

fn report(sink: &mut dyn LogSink, summary: &mut Summary, message: String) {
    eprintln!("{message}");
    sink.error(&message);
    summary.failed += 1;
}
