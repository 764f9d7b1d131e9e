//! Document quad selection.
//!
//! Candidates are the external contours ranked by enclosed area; only the
//! `max_candidates` largest are examined. Each is simplified with a tolerance
//! proportional to its perimeter, and the first one that reduces to exactly
//! four vertices is taken as the sheet outline. Area ties keep extraction
//! order, so the result does not depend on how equal-area contours happen to
//! be sorted.
use crate::contours::{approx_polygon_closed, arc_length_closed, contour_area};
use crate::error::ScanError;
use crate::options::ScanOptions;
use crate::types::{Contour, QuadCandidate};

/// Pick the document outline among `contours` (working-resolution
/// coordinates).
pub fn select_document_quad(
    contours: &[Contour],
    options: &ScanOptions,
) -> Result<QuadCandidate, ScanError> {
    let areas: Vec<f32> = contours.iter().map(|c| contour_area(c)).collect();
    let mut order: Vec<usize> = (0..contours.len()).collect();
    order.sort_by(|&a, &b| areas[b].total_cmp(&areas[a]).then(a.cmp(&b)));

    for &i in order.iter().take(options.max_candidates) {
        let contour = &contours[i];
        let epsilon = arc_length_closed(contour) * options.approx_tolerance_pct / 100.0;
        let polygon = approx_polygon_closed(contour, epsilon);
        if polygon.len() == 4 {
            return Ok(QuadCandidate {
                corners: [polygon[0], polygon[1], polygon[2], polygon[3]],
                area: areas[i],
            });
        }
    }
    Err(ScanError::QuadNotFound {
        examined: contours.len().min(options.max_candidates),
    })
}
