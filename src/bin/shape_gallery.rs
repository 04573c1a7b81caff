// ============================================================================
// shape-gallery: render every shape once for the documentation
// ============================================================================
//
//   shape-gallery                    (writes docs/assets/shapes/<shape>.png)
//   shape-gallery out/gallery        (custom directory)
//
// Shapes are independent, so they are rendered and written in parallel.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use rayon::prelude::*;

use shapegen::color::hex_to_rgba;
use shapegen::{ShapeKind, ShapeOptions, io, logger, rasterize};

const TILE_SIZE: u32 = 60;
const DEFAULT_DIR: &str = "docs/assets/shapes";

/// Documentation palette, one colour per shape.
const PALETTE: &[(ShapeKind, &str)] = &[
    (ShapeKind::Rectangle, "#5B8DEE"),
    (ShapeKind::Circle, "#FF6B6B"),
    (ShapeKind::Triangle, "#4ECDC4"),
    (ShapeKind::Oval, "#9F7AEA"),
    (ShapeKind::Diamond, "#F6AD55"),
    (ShapeKind::Pentagon, "#48BB78"),
    (ShapeKind::Hexagon, "#667EEA"),
    (ShapeKind::Octagon, "#ED8936"),
    (ShapeKind::Star, "#ECC94B"),
    (ShapeKind::Heart, "#ED64A6"),
    (ShapeKind::Cross, "#2D3748"),
    (ShapeKind::Arrow, "#38B2AC"),
    (ShapeKind::Donut, "#975A16"),
];

/// Render the documentation image for every shape.
#[derive(Parser, Debug)]
#[command(name = "shape-gallery", version)]
struct GalleryArgs {
    /// Output directory.
    #[arg(value_name = "DIR", default_value = DEFAULT_DIR)]
    dir: PathBuf,
}

fn render_one(kind: ShapeKind, hex: &str, dir: &Path) -> Result<PathBuf, String> {
    let color = hex_to_rgba(hex).map_err(|e| e.to_string())?;
    let canvas = rasterize(kind, TILE_SIZE, TILE_SIZE, color, &ShapeOptions::default())
        .map_err(|e| e.to_string())?;
    let path = dir.join(format!("{}.png", kind.name()));
    io::write_png(&canvas, &path).map_err(|e| e.to_string())?;
    Ok(path)
}

fn main() -> ExitCode {
    logger::init("shape-gallery");
    let args = GalleryArgs::parse();

    if let Err(e) = std::fs::create_dir_all(&args.dir) {
        eprintln!(
            "error: could not create output directory '{}': {}",
            args.dir.display(),
            e
        );
        return ExitCode::from(shapegen::cli::EXIT_IO);
    }

    let start = Instant::now();
    let results: Vec<(ShapeKind, Result<PathBuf, String>)> = PALETTE
        .par_iter()
        .map(|&(kind, hex)| (kind, render_one(kind, hex, &args.dir)))
        .collect();

    let mut failed = 0;
    for (kind, result) in &results {
        match result {
            Ok(path) => println!("Created {}", path.display()),
            Err(e) => {
                shapegen::log_err!("gallery: {} failed: {}", kind, e);
                eprintln!("error: {}: {}", kind, e);
                failed += 1;
            }
        }
    }

    shapegen::log_info!(
        "gallery: {} of {} shapes in {}ms",
        results.len() - failed,
        results.len(),
        start.elapsed().as_millis()
    );

    if failed > 0 {
        ExitCode::from(shapegen::cli::EXIT_IO)
    } else {
        ExitCode::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_covers_every_shape_once() {
        assert_eq!(PALETTE.len(), ShapeKind::all().len());
        for kind in ShapeKind::all() {
            assert_eq!(PALETTE.iter().filter(|(k, _)| k == kind).count(), 1, "{}", kind);
        }
        for (_, hex) in PALETTE {
            assert!(hex_to_rgba(hex).is_ok(), "{}", hex);
        }
    }
}
