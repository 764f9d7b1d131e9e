//! Document scanner facade wiring the pipeline stages together.
//!
//! Overview
//! - Downscales the photo to a working width and keeps the scale ratio.
//! - Converts to luma, extracts a binary edge map (blur, Sobel, non-maximum
//!   suppression, hysteresis).
//! - Traces external contours, ranks them by area, and picks the first that
//!   simplifies to exactly four vertices.
//! - Orders the corners canonically, scales them back to full resolution,
//!   warps the quad onto an axis-aligned rectangle, and binarizes it.
//!
//! Typical usage:
//! ```no_run
//! use doc_scanner::{DocumentScanner, ScanOptions};
//! use doc_scanner::image::ImageRgb8;
//!
//! # fn example(photo: ImageRgb8) {
//! let scanner = DocumentScanner::new(ScanOptions::default());
//! match scanner.scan(&photo) {
//!     Ok(output) => println!(
//!         "document {}x{}",
//!         output.document.width(),
//!         output.document.height()
//!     ),
//!     Err(err) => eprintln!("scan failed: {err}"),
//! }
//! # }
//! ```
use crate::contours::find_external_contours;
use crate::corners::order_corners;
use crate::diagnostics::ScanTrace;
use crate::draw::draw_closed_polyline;
use crate::edges::edge_map;
use crate::error::ScanError;
use crate::image::{GrayImageU8, ImageRgb8, RgbImageU8};
use crate::options::ScanOptions;
use crate::quad::select_document_quad;
use crate::resize::resize_to_width;
use crate::threshold::binarize_document;
use crate::types::{CornerSet, OutlineDetection, QuadCandidate};
use crate::warp;
use log::debug;
use std::time::Instant;

const OUTLINE_COLOR: [u8; 3] = [0, 255, 0];
const OUTLINE_THICKNESS: usize = 2;

/// Everything a full scan produces.
#[derive(Clone, Debug)]
pub struct ScanOutput {
    /// Working-resolution copy of the input with the detected quad drawn in.
    pub outline: RgbImageU8,
    /// Rectified, binarized page.
    pub document: GrayImageU8,
    /// Ordered corners in full-resolution coordinates.
    pub corners: CornerSet,
    /// `original_height / working_height`.
    pub scale_ratio: f32,
    pub trace: ScanTrace,
}

/// Pipeline entry point; carries the options shared by every stage.
#[derive(Clone, Debug)]
pub struct DocumentScanner {
    options: ScanOptions,
}

impl DocumentScanner {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Detection stages only: working-space quad plus the scale ratio.
    pub fn detect_document_outline(
        &self,
        image: &ImageRgb8,
    ) -> Result<OutlineDetection, ScanError> {
        let (detection, _, _) = self.run_detection(image)?;
        Ok(detection)
    }

    /// Order the quad's corners, scale them by `scale_ratio`, and warp the
    /// spanned region of `image` onto an axis-aligned rectangle.
    pub fn rectify(
        &self,
        image: &ImageRgb8,
        quad: &QuadCandidate,
        scale_ratio: f32,
    ) -> Result<RgbImageU8, ScanError> {
        warp::rectify(image, quad, scale_ratio)
    }

    /// Adaptive-threshold a rectified page with the configured window/bias.
    pub fn binarize(&self, rectified: &ImageRgb8) -> Result<GrayImageU8, ScanError> {
        binarize_document(
            rectified,
            self.options.threshold_window,
            self.options.threshold_bias,
        )
    }

    /// Full pipeline: outline overlay, rectified binary document, corners,
    /// scale ratio, and the timing trace.
    pub fn scan(&self, image: &ImageRgb8) -> Result<ScanOutput, ScanError> {
        let total_start = Instant::now();
        let (detection, working, mut trace) = self.run_detection(image)?;

        let overlay_start = Instant::now();
        let mut outline = working;
        draw_closed_polyline(
            &mut outline,
            &detection.quad.corners,
            OUTLINE_COLOR,
            OUTLINE_THICKNESS,
        );
        trace.push("overlay", ms_since(overlay_start));

        let corners = order_corners(&detection.quad.corners).scaled(detection.scale_ratio);
        let warp_start = Instant::now();
        let rectified = warp::warp_to_rectangle(image, &corners)?;
        trace.push("rectify", ms_since(warp_start));

        let threshold_start = Instant::now();
        let document = self.binarize(&rectified.as_view())?;
        trace.push("threshold", ms_since(threshold_start));

        trace.output_width = document.width();
        trace.output_height = document.height();
        trace.total_ms = ms_since(total_start);
        debug!(
            "DocumentScanner::scan {}x{} -> {}x{} in {:.2}ms",
            image.w, image.h, trace.output_width, trace.output_height, trace.total_ms
        );

        Ok(ScanOutput {
            outline,
            document,
            corners,
            scale_ratio: detection.scale_ratio,
            trace,
        })
    }

    /// Shared detection stages; also returns the working image (the overlay
    /// canvas) and the trace accumulated so far.
    fn run_detection(
        &self,
        image: &ImageRgb8,
    ) -> Result<(OutlineDetection, RgbImageU8, ScanTrace), ScanError> {
        if image.w == 0 || image.h == 0 {
            return Err(ScanError::EmptyInput {
                width: image.w,
                height: image.h,
            });
        }
        debug!("DocumentScanner: detect start {}x{}", image.w, image.h);
        let mut trace = ScanTrace {
            input_width: image.w,
            input_height: image.h,
            ..ScanTrace::default()
        };

        let resize_start = Instant::now();
        let (working, scale_ratio) = resize_to_width(image, self.options.working_width);
        trace.working_width = working.width();
        trace.working_height = working.height();
        trace.scale_ratio = scale_ratio;
        trace.push("resize", ms_since(resize_start));

        let edge_start = Instant::now();
        let gray = working.as_view().to_luma_f32();
        let edges = edge_map(
            &gray,
            self.options.blur_kernel_size,
            self.options.edge_low,
            self.options.edge_high,
        );
        trace.edge_pixels = edges.pixels().iter().filter(|&&px| px != 0).count();
        trace.push("edges", ms_since(edge_start));
        debug!(
            "edge map {}x{}: {} edge pixels",
            trace.working_width, trace.working_height, trace.edge_pixels
        );

        let contour_start = Instant::now();
        let contours = find_external_contours(&edges.as_view());
        trace.contour_count = contours.len();
        trace.candidates_examined = contours.len().min(self.options.max_candidates);
        trace.push("contours", ms_since(contour_start));
        debug!("{} external contours", trace.contour_count);

        let select_start = Instant::now();
        let quad = select_document_quad(&contours, &self.options)?;
        trace.quad_area = quad.area;
        trace.push("select", ms_since(select_start));
        debug!("selected quad, area {:.1}", quad.area);

        Ok((OutlineDetection { quad, scale_ratio }, working, trace))
    }
}

impl Default for DocumentScanner {
    fn default() -> Self {
        Self::new(ScanOptions::default())
    }
}

fn ms_since(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
