//! Closed-form scan fills.
//!
//! Each fill walks the canvas row by row, hoists the row-constant part of its
//! test out of the inner loop, and writes straight into the row slice. The
//! per-pixel comparison is the same expression as the matching predicate in
//! [`super::geometry`], so a fast fill and the generic path produce identical
//! canvases.

use crate::canvas::{Canvas, put};

/// Entire canvas.
pub fn fill_rectangle(canvas: &mut Canvas, rgba: [u8; 4]) {
    canvas.fill(rgba);
}

/// Inclusive disc of `radius` around `(cx, cy)`.
pub fn fill_circle(canvas: &mut Canvas, cx: f64, cy: f64, radius: f64, rgba: [u8; 4]) {
    let width = canvas.width() as usize;
    let radius_sq = radius * radius;

    for (y, row) in canvas.rows_mut() {
        let dy = y as f64 - cy;
        let dy_sq = dy * dy;
        for x in 0..width {
            let dx = x as f64 - cx;
            if dx * dx + dy_sq <= radius_sq {
                put(row, x, rgba);
            }
        }
    }
}

/// Axis-aligned ellipse with semi-axes `rx`, `ry`.
pub fn fill_ellipse(canvas: &mut Canvas, cx: f64, cy: f64, rx: f64, ry: f64, rgba: [u8; 4]) {
    let width = canvas.width() as usize;
    let rx_sq = rx * rx;
    let ry_sq = ry * ry;

    for (y, row) in canvas.rows_mut() {
        let dy = y as f64 - cy;
        let dy_term = (dy * dy) / ry_sq;
        for x in 0..width {
            let dx = x as f64 - cx;
            if (dx * dx) / rx_sq + dy_term <= 1.0 {
                put(row, x, rgba);
            }
        }
    }
}

/// Manhattan ball of radius `size`.
pub fn fill_diamond(canvas: &mut Canvas, cx: f64, cy: f64, size: f64, rgba: [u8; 4]) {
    let width = canvas.width() as usize;

    for (y, row) in canvas.rows_mut() {
        let dy = (y as f64 - cy).abs();
        for x in 0..width {
            let dx = (x as f64 - cx).abs();
            if dx + dy <= size {
                put(row, x, rgba);
            }
        }
    }
}

/// Ring between `radius` and `radius * (1 - thickness)`, both edges inclusive.
pub fn fill_donut(canvas: &mut Canvas, cx: f64, cy: f64, radius: f64, thickness: f64, rgba: [u8; 4]) {
    let width = canvas.width() as usize;
    let outer_sq = radius * radius;
    let inner = radius * (1.0 - thickness);
    let inner_sq = inner * inner;

    for (y, row) in canvas.rows_mut() {
        let dy = y as f64 - cy;
        let dy_sq = dy * dy;
        for x in 0..width {
            let dx = x as f64 - cx;
            let d_sq = dx * dx + dy_sq;
            if d_sq <= outer_sq && d_sq >= inner_sq {
                put(row, x, rgba);
            }
        }
    }
}
