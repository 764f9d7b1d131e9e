//! Contour extraction and polygon simplification on the binary edge map.
//!
//! Design goals
//! - External outlines only: one boundary per connected component, nested
//!   boundaries discarded, so a sheet with printed content still yields a
//!   single candidate for its outline.
//! - Everything stays in working-resolution pixel coordinates; scaling back
//!   to the input image happens after a quad has been chosen.
//! - O(w*h) extraction, O(n log n) expected simplification per contour.
pub mod approx;
pub mod trace;

pub use approx::{approx_polygon_closed, arc_length_closed, contour_area};
pub use trace::find_external_contours;
