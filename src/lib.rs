#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod homography;
pub mod image;
pub mod options;
pub mod scanner;
pub mod types;

// Stage modules – still public so the demo binaries and tests can drive
// stages in isolation, but considered unstable internals.
pub mod contours;
pub mod corners;
pub mod draw;
pub mod edges;
pub mod quad;
pub mod resize;
pub mod threshold;
pub mod warp;

// --- High-level re-exports -------------------------------------------------

// Main entry points: scanner + results.
pub use crate::scanner::{DocumentScanner, ScanOutput};
pub use crate::types::{CornerSet, OutlineDetection, Point, QuadCandidate};

pub use crate::error::ScanError;
pub use crate::options::ScanOptions;

// Per-run diagnostics returned with every scan.
pub use crate::diagnostics::{ScanTrace, StageTiming};

// Corner canonicalization is generally useful on its own (e.g. when corners
// come from manual selection instead of detection).
pub use crate::corners::order_corners;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use doc_scanner::prelude::*;
///
/// let photo = RgbImageU8::filled(640, 480, [255, 255, 255]);
/// let scanner = DocumentScanner::new(ScanOptions::default());
///
/// match scanner.scan(&photo.as_view()) {
///     Ok(output) => println!(
///         "document {}x{}",
///         output.document.width(),
///         output.document.height()
///     ),
///     Err(err) => println!("scan failed: {err}"),
/// }
/// ```
pub mod prelude {
    pub use crate::image::{ImageRgb8, RgbImageU8};
    pub use crate::{DocumentScanner, ScanError, ScanOptions, ScanOutput};
}
