//! Boundary generators: ordered vertex sequences for the polygonal shapes.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::geometry::Point;

/// Default sampling resolution for [`generate_heart_vertices`].
pub const HEART_DEFAULT_RESOLUTION: usize = 100;

/// Rotation that puts the first vertex of a regular polygon straight up.
pub const POINT_UP: f64 = -FRAC_PI_2;

/// Which way an arrow points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ArrowDirection {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl ArrowDirection {
    pub fn all() -> &'static [ArrowDirection] {
        &[
            ArrowDirection::Up,
            ArrowDirection::Down,
            ArrowDirection::Left,
            ArrowDirection::Right,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ArrowDirection::Up => "up",
            ArrowDirection::Down => "down",
            ArrowDirection::Left => "left",
            ArrowDirection::Right => "right",
        }
    }
}

/// Vertices of a regular `sides`-gon; vertex `i` sits at angle
/// `i * 2π / sides + rotation`.
pub fn generate_regular_polygon(center: Point, radius: f64, sides: usize, rotation: f64) -> Vec<Point> {
    let step = TAU / sides as f64;
    (0..sides)
        .map(|i| {
            let angle = i as f64 * step + rotation;
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

/// Star outline with `2 * points` vertices alternating between the outer and
/// inner radius. The first (outer) vertex points straight up.
pub fn generate_star(center: Point, outer_radius: f64, inner_radius: f64, points: usize) -> Vec<Point> {
    let step = PI / points as f64;
    (0..points * 2)
        .map(|i| {
            let angle = i as f64 * step - FRAC_PI_2;
            let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

/// Samples the classic parametric heart
///
/// ```text
/// x = 16 sin³ t
/// y = 13 cos t − 5 cos 2t − 2 cos 3t − cos 4t
/// ```
///
/// at `resolution` evenly spaced `t` in `[0, 2π)`, scaled by `size / 8` and
/// flipped vertically so the lobes end up on top in screen space.
pub fn generate_heart_vertices(center: Point, size: f64, resolution: usize) -> Vec<Point> {
    let scale = size / 8.0;
    (0..resolution)
        .map(|i| {
            let t = (i as f64 / resolution as f64) * 2.0 * PI;
            let x = scale * (16.0 * t.sin().powi(3));
            let y = scale
                * (13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos());
            Point::new(center.x + x, center.y - y)
        })
        .collect()
}

/// Seven-vertex arrow (rectangular shaft + triangular head) filling a
/// `width`×`height` box.
///
/// The outline is laid out pointing right and then remapped for the other
/// directions. Up/down swap the axes around `(width/2, width/2)`; on
/// non-square canvases the rotated arrow is therefore offset vertically.
pub fn generate_arrow_vertices(width: f64, height: f64, direction: ArrowDirection) -> Vec<Point> {
    let shaft_width = width * 0.4;
    let head_width = width * 0.8;
    let head_length = height * 0.3;
    let shaft_length = height - head_length;

    let center_y = height / 2.0;
    let shaft_top = center_y - shaft_width / 2.0;
    let shaft_bottom = center_y + shaft_width / 2.0;
    let head_top = center_y - head_width / 2.0;
    let head_bottom = center_y + head_width / 2.0;

    let right = [
        Point::new(0.0, shaft_top),
        Point::new(shaft_length, shaft_top),
        Point::new(shaft_length, head_top),
        Point::new(width, center_y),
        Point::new(shaft_length, head_bottom),
        Point::new(shaft_length, shaft_bottom),
        Point::new(0.0, shaft_bottom),
    ];

    right
        .iter()
        .map(|&p| orient_arrow_point(p, width, height, direction))
        .collect()
}

fn orient_arrow_point(p: Point, width: f64, height: f64, direction: ArrowDirection) -> Point {
    let cx = width / 2.0;
    let cy = height / 2.0;
    match direction {
        ArrowDirection::Up => Point::new(cx + (p.y - cy), cx - (p.x - cx)),
        ArrowDirection::Down => Point::new(cx - (p.y - cy), cx + (p.x - cx)),
        ArrowDirection::Left => Point::new(width - p.x, p.y),
        ArrowDirection::Right => p,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::geometry::distance;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_regular_polygon_vertices_on_circle() {
        let c = Point::new(50.0, 50.0);
        for sides in [3, 5, 6, 8] {
            let verts = generate_regular_polygon(c, 40.0, sides, POINT_UP);
            assert_eq!(verts.len(), sides);
            for v in &verts {
                assert!((distance(*v, c) - 40.0).abs() < EPS);
            }
            // First vertex straight up
            assert!((verts[0].x - 50.0).abs() < EPS);
            assert!((verts[0].y - 10.0).abs() < EPS);
        }
    }

    #[test]
    fn test_regular_polygon_unrotated_starts_on_x_axis() {
        let verts = generate_regular_polygon(Point::default(), 1.0, 4, 0.0);
        assert!((verts[0].x - 1.0).abs() < EPS);
        assert!(verts[0].y.abs() < EPS);
        assert!(verts[1].x.abs() < EPS);
        assert!((verts[1].y - 1.0).abs() < EPS);
    }

    #[test]
    fn test_star_alternates_radii() {
        let c = Point::new(5.0, 5.0);
        for points in [5, 6, 9] {
            let verts = generate_star(c, 10.0, 4.0, points);
            assert_eq!(verts.len(), points * 2);
            for (i, v) in verts.iter().enumerate() {
                let expected = if i % 2 == 0 { 10.0 } else { 4.0 };
                assert!((distance(*v, c) - expected).abs() < EPS);
            }
        }
    }

    #[test]
    fn test_star_first_spike_points_up() {
        let verts = generate_star(Point::default(), 10.0, 4.0, 5);
        assert!(verts[0].x.abs() < EPS);
        assert!((verts[0].y + 10.0).abs() < EPS);
    }

    #[test]
    fn test_heart_resolution_and_orientation() {
        let c = Point::new(100.0, 100.0);
        let verts = generate_heart_vertices(c, 8.0, HEART_DEFAULT_RESOLUTION);
        assert_eq!(verts.len(), HEART_DEFAULT_RESOLUTION);
        // t = 0 is the notch between the lobes: (0, 5) before the flip.
        assert!((verts[0].x - 100.0).abs() < EPS);
        assert!((verts[0].y - 95.0).abs() < EPS);
        // t = π is the bottom tip: (0, -17) before the flip.
        let tip = verts[HEART_DEFAULT_RESOLUTION / 2];
        assert!((tip.x - 100.0).abs() < 1e-6);
        assert!((tip.y - 117.0).abs() < 1e-6);
    }

    #[test]
    fn test_arrow_right_layout() {
        let verts = generate_arrow_vertices(100.0, 60.0, ArrowDirection::Right);
        assert_eq!(verts.len(), 7);
        assert_eq!(verts[0], Point::new(0.0, 10.0));
        assert_eq!(verts[1], Point::new(42.0, 10.0));
        assert_eq!(verts[2], Point::new(42.0, -10.0));
        assert_eq!(verts[3], Point::new(100.0, 30.0));
        assert_eq!(verts[6], Point::new(0.0, 50.0));
    }

    #[test]
    fn test_arrow_directions_remap_every_vertex() {
        let right = generate_arrow_vertices(100.0, 60.0, ArrowDirection::Right);
        for &dir in &[ArrowDirection::Up, ArrowDirection::Down, ArrowDirection::Left] {
            let verts = generate_arrow_vertices(100.0, 60.0, dir);
            assert_eq!(verts.len(), 7);
            assert!(verts.iter().all(|v| v.x.is_finite() && v.y.is_finite()));
            assert_ne!(verts, right, "{} arrow kept the right-facing outline", dir.name());
        }
    }

    #[test]
    fn test_arrow_up_rotation() {
        let verts = generate_arrow_vertices(100.0, 60.0, ArrowDirection::Up);
        // Tip (100, 30) → (50 + (30 - 30), 50 - (100 - 50))
        assert_eq!(verts[3], Point::new(50.0, 0.0));
    }

    #[test]
    fn test_arrow_left_mirrors() {
        let verts = generate_arrow_vertices(100.0, 60.0, ArrowDirection::Left);
        assert_eq!(verts[3], Point::new(0.0, 30.0));
        assert_eq!(verts[0], Point::new(100.0, 10.0));
    }
}
