//! Failure taxonomy of the scanning pipeline.
//!
//! Every failure is structural: the same input always fails the same way, so
//! nothing here is worth retrying. Stages either return a fully-formed output
//! or one of these variants; there is no partial result.
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The input image has no pixels; rejected before any stage runs.
    #[error("input image is empty ({width}x{height})")]
    EmptyInput { width: usize, height: usize },

    /// None of the area-ranked contours reduced to a 4-vertex polygon.
    #[error("no 4-vertex outline among the {examined} largest contours")]
    QuadNotFound { examined: usize },

    /// The ordered corners collapse to a zero-area target rectangle or an
    /// unsolvable perspective mapping.
    #[error("degenerate corner geometry: target rectangle is {width}x{height}")]
    DegenerateGeometry { width: usize, height: usize },

    /// The rectified page is smaller than the adaptive-threshold neighborhood.
    #[error("image {width}x{height} is smaller than the threshold window {window}")]
    WindowTooLarge {
        width: usize,
        height: usize,
        window: usize,
    },
}
