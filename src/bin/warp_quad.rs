use doc_scanner::config::warp;
use doc_scanner::image::io::{load_color_image, save_grayscale_u8, save_rgb_u8};
use doc_scanner::order_corners;
use doc_scanner::threshold::binarize_document;
use doc_scanner::types::Point;
use doc_scanner::warp::warp_to_rectangle;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = warp::load_config(Path::new(&config_path))?;

    let photo = load_color_image(&config.input)?;
    let points = config.corners.map(Point::from);
    let corners = order_corners(&points);

    let rectified = warp_to_rectangle(&photo.as_view(), &corners)
        .map_err(|e| format!("Rectification failed: {e}"))?;
    save_rgb_u8(&rectified, &config.output.rectified_image)?;
    println!(
        "Saved {}x{} rectified image to {}",
        rectified.width(),
        rectified.height(),
        config.output.rectified_image.display()
    );

    if let Some(document_path) = &config.output.document_image {
        let document = binarize_document(
            &rectified.as_view(),
            config.binarize.threshold_window,
            config.binarize.threshold_bias,
        )
        .map_err(|e| format!("Binarization failed: {e}"))?;
        save_grayscale_u8(&document, document_path)?;
        println!("Saved binarized document to {}", document_path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: warp_quad <config.json>".to_string()
}
