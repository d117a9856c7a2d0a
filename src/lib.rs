//! # Batch Upscale
//!
//! Batch-upscales a directory tree of raster images. Any image (or animated
//! GIF frame) whose shorter edge is under 250px is enlarged by an integer
//! factor — 2×, or 4× when doubling would still fall short — using linear
//! interpolation, and written to a mirrored output tree as
//! `<stem>_upscaled.<ext>`. Images that are already large enough produce no
//! output at all.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`walk`] | Traversal — walks the input tree, mirrors it under the output root, isolates per-file failures |
//! | [`process`] | Per-file processor — decode, upscale frames, write iff something changed |
//! | [`imaging`] | Pure-Rust image operations: factor decision, resize, GIF reassembly |
//! | [`naming`] | `_upscaled` output-name convention |
//! | [`logging`] | Caller-owned log sink handed through the pipeline |
//!
//! # Design Decisions
//!
//! ## Animation Resolved Once
//!
//! Whether an input is animated is decided a single time, at decode, into a
//! tagged `Static`/`Animated` value. The processor matches on the variant;
//! no format flags are inspected anywhere downstream. Animated outputs keep
//! every frame in input order, preserve frame timing, and loop forever.
//!
//! ## Write Only On Change
//!
//! An output file exists if and only if at least one frame was resized. A
//! tree of already-large images produces an empty output tree, and re-running
//! the tool over its own ≥250px outputs writes nothing further.
//!
//! ## Failures Stay Per-File
//!
//! Decode, resize, and write errors are converted to a printed-and-logged
//! diagnostic at the single-file boundary. Nothing short of a missing input
//! directory stops a batch.
//!
//! ## Explicit Log Sink
//!
//! There is no global logger. The caller builds a [`logging::LogSink`] (the
//! CLI uses a truncate-on-open log file), passes it through the batch, and
//! drops it when the run is done.

pub mod imaging;
pub mod logging;
pub mod naming;
pub mod process;
pub mod walk;
