//! Point geometry and containment predicates.
//!
//! Everything here is a pure function of its inputs. The inclusive
//! comparisons (`<=`) are shared with the fast-path fills in
//! [`crate::ops::fill`], so both paths classify boundary pixels identically.

use super::generators::generate_heart_vertices;

/// Number of samples used when testing a point against the heart curve.
pub const HEART_CONTAINMENT_RESOLUTION: usize = 200;

/// A real-valued 2-D coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(p1: Point, p2: Point) -> f64 {
    let dx = p1.x - p2.x;
    let dy = p1.y - p2.y;
    (dx * dx + dy * dy).sqrt()
}

#[inline]
pub fn distance_from_origin(point: Point) -> f64 {
    (point.x * point.x + point.y * point.y).sqrt()
}

/// Manhattan (taxicab) distance between two points.
#[inline]
pub fn manhattan_distance(p1: Point, p2: Point) -> f64 {
    (p1.x - p2.x).abs() + (p1.y - p2.y).abs()
}

/// Inclusive circle test. Compares squared distances, which is equivalent to
/// `distance(point, center) <= radius` for non-negative radii.
#[inline]
pub fn is_point_in_circle(point: Point, center: Point, radius: f64) -> bool {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    dx * dx + dy * dy <= radius * radius
}

#[inline]
pub fn is_point_in_ellipse(point: Point, center: Point, radius_x: f64, radius_y: f64) -> bool {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    (dx * dx) / (radius_x * radius_x) + (dy * dy) / (radius_y * radius_y) <= 1.0
}

/// Diamond = all points within Manhattan distance `size` of `center`.
#[inline]
pub fn is_point_in_diamond(point: Point, center: Point, size: f64) -> bool {
    manhattan_distance(point, center) <= size
}

/// Union of a full-width horizontal bar and a full-height vertical bar,
/// both `thickness` pixels across and centred on `center`.
pub fn is_point_in_cross(
    point: Point,
    center: Point,
    width: f64,
    height: f64,
    thickness: f64,
) -> bool {
    let dx = (point.x - center.x).abs();
    let dy = (point.y - center.y).abs();
    let half = thickness / 2.0;

    let in_horizontal_bar = dy <= half && dx <= width / 2.0;
    let in_vertical_bar = dx <= half && dy <= height / 2.0;
    in_horizontal_bar || in_vertical_bar
}

/// Inclusive annulus test on squared distances.
#[inline]
pub fn is_point_in_donut(point: Point, center: Point, outer_radius: f64, thickness: f64) -> bool {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    let d2 = dx * dx + dy * dy;
    let inner_radius = outer_radius * (1.0 - thickness);
    d2 <= outer_radius * outer_radius && d2 >= inner_radius * inner_radius
}

/// Crossing-number point-in-polygon test.
///
/// The vertex list is implicitly closed. A horizontal ray is cast towards +x;
/// an edge counts when its endpoints lie strictly on opposite sides of the
/// ray (`yi > y` differs from `yj > y`) and the crossing lies to the right of
/// the point. Points exactly on an edge are classified by that half-open
/// rule, not by any "on the boundary" check.
pub fn is_point_in_polygon(point: Point, vertices: &[Point]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];

        let crosses_ray = (vi.y > point.y) != (vj.y > point.y);
        if crosses_ray && point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Heart containment: the parametric heart sampled into a dense polygon.
pub fn is_point_in_heart(point: Point, center: Point, size: f64) -> bool {
    let vertices = generate_heart_vertices(center, size, HEART_CONTAINMENT_RESOLUTION);
    is_point_in_polygon(point, &vertices)
}
