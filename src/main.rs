use doc_scanner::image::RgbImageU8;
use doc_scanner::{DocumentScanner, ScanOptions};

fn main() {
    // Demo stub: paints a bright sheet on a dark background and scans it.
    let (w, h) = (640usize, 480usize);
    let mut photo = RgbImageU8::filled(w, h, [30, 30, 30]);
    for y in 80..400 {
        for x in 100..540 {
            photo.set(x, y, [235, 235, 235]);
        }
    }

    let scanner = DocumentScanner::new(ScanOptions::default());
    match scanner.scan(&photo.as_view()) {
        Ok(output) => println!(
            "document {}x{} (corners tl=({:.0},{:.0}) br=({:.0},{:.0})) in {:.3}ms",
            output.document.width(),
            output.document.height(),
            output.corners.top_left.x,
            output.corners.top_left.y,
            output.corners.bottom_right.x,
            output.corners.bottom_right.y,
            output.trace.total_ms
        ),
        Err(err) => println!("scan failed: {err}"),
    }
}
