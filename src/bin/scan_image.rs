use doc_scanner::config::scan;
use doc_scanner::image::io::{load_color_image, save_grayscale_u8, save_rgb_u8, write_json_file};
use doc_scanner::{CornerSet, DocumentScanner, ScanTrace};
use serde::Serialize;
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
    let config = scan::load_config(Path::new(&config_path))?;

    let photo = load_color_image(&config.input)?;
    let scanner = DocumentScanner::new(config.options);
    let output = scanner
        .scan(&photo.as_view())
        .map_err(|e| format!("Scan of {} failed: {e}", config.input.display()))?;

    save_rgb_u8(&output.outline, &config.output.outline_image)?;
    save_grayscale_u8(&output.document, &config.output.document_image)?;

    if let Some(summary_path) = &config.output.summary_json {
        let summary = ScanSummary {
            corners: output.corners,
            scale_ratio: output.scale_ratio,
            trace: output.trace.clone(),
        };
        write_json_file(summary_path, &summary)?;
        println!("Saved run summary to {}", summary_path.display());
    }

    println!(
        "Saved outline overlay to {}",
        config.output.outline_image.display()
    );
    println!(
        "Saved {}x{} document to {}",
        output.document.width(),
        output.document.height(),
        config.output.document_image.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: scan_image <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScanSummary {
    corners: CornerSet,
    scale_ratio: f32,
    trace: ScanTrace,
}
