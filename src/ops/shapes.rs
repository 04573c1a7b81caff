use std::str::FromStr;

use super::fill;
use super::generators::{
    ArrowDirection, POINT_UP, generate_arrow_vertices, generate_heart_vertices,
    generate_regular_polygon, generate_star,
};
use super::geometry::{
    HEART_CONTAINMENT_RESOLUTION, Point, is_point_in_circle, is_point_in_cross,
    is_point_in_diamond, is_point_in_donut, is_point_in_ellipse, is_point_in_polygon,
};
use crate::canvas::{Canvas, opaque, put};
use crate::color::RgbaColor;

/// Default number of star spikes.
pub const DEFAULT_STAR_POINTS: usize = 5;
/// Default donut ring thickness, as a fraction of the outer radius.
pub const DEFAULT_DONUT_THICKNESS: f64 = 0.4;
/// Star inner radius as a fraction of the outer radius.
pub const STAR_INNER_RATIO: f64 = 0.4;
/// Accepted star spike counts.
pub const STAR_POINTS_RANGE: std::ops::RangeInclusive<usize> = 2..=100;

/// Available shape primitives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Triangle,
    Circle,
    Oval,
    Star,
    Heart,
    Diamond,
    Pentagon,
    Hexagon,
    Octagon,
    Cross,
    Arrow,
    Donut,
}

impl ShapeKind {
    /// Canonical lowercase name, as accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Oval => "oval",
            ShapeKind::Star => "star",
            ShapeKind::Heart => "heart",
            ShapeKind::Diamond => "diamond",
            ShapeKind::Pentagon => "pentagon",
            ShapeKind::Hexagon => "hexagon",
            ShapeKind::Octagon => "octagon",
            ShapeKind::Cross => "cross",
            ShapeKind::Arrow => "arrow",
            ShapeKind::Donut => "donut",
        }
    }

    /// One-line description for help output.
    pub fn description(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Filled rectangle covering entire canvas",
            ShapeKind::Triangle => "Equilateral triangle pointing upward",
            ShapeKind::Circle => "Perfect circle",
            ShapeKind::Oval => "Ellipse fitting width and height",
            ShapeKind::Star => "Five-pointed star",
            ShapeKind::Heart => "Heart shape",
            ShapeKind::Diamond => "Diamond/rhombus shape",
            ShapeKind::Pentagon => "Regular five-sided polygon",
            ShapeKind::Hexagon => "Regular six-sided polygon",
            ShapeKind::Octagon => "Regular eight-sided polygon",
            ShapeKind::Cross => "Plus/cross shape",
            ShapeKind::Arrow => "Arrow pointing right",
            ShapeKind::Donut => "Ring/donut shape",
        }
    }

    /// Every variant, in canonical order.
    pub fn all() -> &'static [ShapeKind] {
        &[
            ShapeKind::Rectangle,
            ShapeKind::Triangle,
            ShapeKind::Circle,
            ShapeKind::Oval,
            ShapeKind::Star,
            ShapeKind::Heart,
            ShapeKind::Diamond,
            ShapeKind::Pentagon,
            ShapeKind::Hexagon,
            ShapeKind::Octagon,
            ShapeKind::Cross,
            ShapeKind::Arrow,
            ShapeKind::Donut,
        ]
    }

    /// `"{shape}_{width}x{height}.png"`
    pub fn default_filename(&self, width: u32, height: u32) -> String {
        format!("{}_{}x{}.png", self.name(), width, height)
    }

    /// The closed-form fill for this kind, if it has one.
    pub fn fast_fill(&self) -> Option<FastFill> {
        match self {
            ShapeKind::Rectangle => Some(FastFill::Rectangle),
            ShapeKind::Circle => Some(FastFill::Circle),
            ShapeKind::Oval => Some(FastFill::Ellipse),
            ShapeKind::Diamond => Some(FastFill::Diamond),
            ShapeKind::Donut => Some(FastFill::Donut),
            ShapeKind::Triangle
            | ShapeKind::Star
            | ShapeKind::Heart
            | ShapeKind::Pentagon
            | ShapeKind::Hexagon
            | ShapeKind::Octagon
            | ShapeKind::Cross
            | ShapeKind::Arrow => None,
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    /// Exact (case-insensitive, trimmed) name lookup. Fuzzy correction lives
    /// in [`crate::validation::ShapeRegistry`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ShapeKind::all()
            .iter()
            .copied()
            .find(|k| k.name() == wanted)
            .ok_or_else(|| ShapeError::UnsupportedShape(s.to_string()))
    }
}

impl FromStr for ArrowDirection {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ArrowDirection::all()
            .iter()
            .copied()
            .find(|d| d.name() == wanted)
            .ok_or_else(|| ShapeError::InvalidArrowDirection(s.to_string()))
    }
}

/// Closed-form fills available to [`rasterize`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FastFill {
    Rectangle,
    Circle,
    Ellipse,
    Diamond,
    Donut,
}

/// Optional per-shape parameters. `None` means "use the default".
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ShapeOptions {
    /// Star spike count (default 5).
    pub star_points: Option<usize>,
    /// Arrow direction (default right).
    pub arrow_direction: Option<ArrowDirection>,
    /// Donut ring thickness as a fraction of the radius, in (0, 1] (default 0.4).
    pub donut_thickness: Option<f64>,
    /// Cross bar thickness in pixels (default `min(width, height) / 6`).
    pub cross_thickness: Option<f64>,
}

/// Errors raised before any pixel is written.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    InvalidDimensions { width: u32, height: u32 },
    InvalidStarPoints(usize),
    InvalidDonutThickness(f64),
    InvalidCrossThickness(f64),
    InvalidArrowDirection(String),
    UnsupportedShape(String),
}

impl std::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeError::InvalidDimensions { width, height } => write!(
                f,
                "Width and height must be positive integers (got {}x{})",
                width, height
            ),
            ShapeError::InvalidStarPoints(n) => write!(
                f,
                "Star points must be between {} and {} (got {})",
                STAR_POINTS_RANGE.start(),
                STAR_POINTS_RANGE.end(),
                n
            ),
            ShapeError::InvalidDonutThickness(t) => {
                write!(f, "Donut thickness must be in (0, 1] (got {})", t)
            }
            ShapeError::InvalidCrossThickness(t) => {
                write!(f, "Cross thickness must be a positive number of pixels (got {})", t)
            }
            ShapeError::InvalidArrowDirection(d) => write!(
                f,
                "Invalid arrow direction '{}'. Use up, down, left or right.",
                d
            ),
            ShapeError::UnsupportedShape(s) => write!(f, "Invalid shape '{}'.", s),
        }
    }
}

impl std::error::Error for ShapeError {}

// ============================================================================
// Resolved geometry
// ============================================================================

/// Canvas-derived geometry with every option defaulted and checked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeParams {
    pub width: f64,
    pub height: f64,
    pub center: Point,
    /// `min(width, height) / 2`
    pub radius: f64,
    pub star_points: usize,
    pub arrow_direction: ArrowDirection,
    pub donut_thickness: f64,
    pub cross_thickness: f64,
}

impl ShapeParams {
    /// Options a `kind` never reads are ignored rather than checked.
    pub fn resolve(
        kind: ShapeKind,
        width: u32,
        height: u32,
        options: &ShapeOptions,
    ) -> Result<Self, ShapeError> {
        if width == 0 || height == 0 {
            return Err(ShapeError::InvalidDimensions { width, height });
        }
        let w = width as f64;
        let h = height as f64;
        let min_side = w.min(h);

        let star_points = match options.star_points {
            Some(n) if kind == ShapeKind::Star && !STAR_POINTS_RANGE.contains(&n) => {
                return Err(ShapeError::InvalidStarPoints(n));
            }
            Some(n) if kind == ShapeKind::Star => n,
            _ => DEFAULT_STAR_POINTS,
        };

        let donut_thickness = match options.donut_thickness {
            Some(t) if kind == ShapeKind::Donut && !(t > 0.0 && t <= 1.0) => {
                return Err(ShapeError::InvalidDonutThickness(t));
            }
            Some(t) if kind == ShapeKind::Donut => t,
            _ => DEFAULT_DONUT_THICKNESS,
        };

        let default_cross = min_side / 6.0;
        let cross_thickness = match options.cross_thickness {
            Some(t) if kind == ShapeKind::Cross && !(t.is_finite() && t > 0.0) => {
                return Err(ShapeError::InvalidCrossThickness(t));
            }
            Some(t) if kind == ShapeKind::Cross => t,
            _ => default_cross,
        };

        Ok(Self {
            width: w,
            height: h,
            center: Point::new(w / 2.0, h / 2.0),
            radius: min_side / 2.0,
            star_points,
            arrow_direction: options.arrow_direction.unwrap_or_default(),
            donut_thickness,
            cross_thickness,
        })
    }
}

// ============================================================================
// Containment boundaries (generic path)
// ============================================================================

/// A shape's inside test, with any vertex set built up front.
#[derive(Clone, Debug, PartialEq)]
pub enum Boundary {
    Rectangle { width: f64, height: f64 },
    Circle { center: Point, radius: f64 },
    Ellipse { center: Point, rx: f64, ry: f64 },
    Diamond { center: Point, size: f64 },
    Donut { center: Point, radius: f64, thickness: f64 },
    Cross { center: Point, width: f64, height: f64, thickness: f64 },
    Polygon(Vec<Point>),
}

impl Boundary {
    pub fn for_shape(kind: ShapeKind, p: &ShapeParams) -> Self {
        match kind {
            ShapeKind::Rectangle => Boundary::Rectangle {
                width: p.width,
                height: p.height,
            },
            ShapeKind::Circle => Boundary::Circle {
                center: p.center,
                radius: p.radius,
            },
            ShapeKind::Oval => Boundary::Ellipse {
                center: p.center,
                rx: p.width / 2.0,
                ry: p.height / 2.0,
            },
            ShapeKind::Diamond => Boundary::Diamond {
                center: p.center,
                size: p.radius,
            },
            ShapeKind::Donut => Boundary::Donut {
                center: p.center,
                radius: p.radius,
                thickness: p.donut_thickness,
            },
            ShapeKind::Cross => Boundary::Cross {
                center: p.center,
                width: p.width,
                height: p.height,
                thickness: p.cross_thickness,
            },
            ShapeKind::Triangle => {
                Boundary::Polygon(generate_regular_polygon(p.center, p.radius, 3, POINT_UP))
            }
            ShapeKind::Pentagon => {
                Boundary::Polygon(generate_regular_polygon(p.center, p.radius, 5, POINT_UP))
            }
            ShapeKind::Hexagon => {
                Boundary::Polygon(generate_regular_polygon(p.center, p.radius, 6, POINT_UP))
            }
            ShapeKind::Octagon => {
                Boundary::Polygon(generate_regular_polygon(p.center, p.radius, 8, POINT_UP))
            }
            ShapeKind::Star => Boundary::Polygon(generate_star(
                p.center,
                p.radius,
                p.radius * STAR_INNER_RATIO,
                p.star_points,
            )),
            // Heart size is a quarter of the short side: the curve spans ±2·size.
            ShapeKind::Heart => Boundary::Polygon(generate_heart_vertices(
                p.center,
                p.radius / 2.0,
                HEART_CONTAINMENT_RESOLUTION,
            )),
            ShapeKind::Arrow => Boundary::Polygon(generate_arrow_vertices(
                p.width,
                p.height,
                p.arrow_direction,
            )),
        }
    }

    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        match self {
            Boundary::Rectangle { width, height } => {
                point.x >= 0.0 && point.x < *width && point.y >= 0.0 && point.y < *height
            }
            Boundary::Circle { center, radius } => is_point_in_circle(point, *center, *radius),
            Boundary::Ellipse { center, rx, ry } => is_point_in_ellipse(point, *center, *rx, *ry),
            Boundary::Diamond { center, size } => is_point_in_diamond(point, *center, *size),
            Boundary::Donut {
                center,
                radius,
                thickness,
            } => is_point_in_donut(point, *center, *radius, *thickness),
            Boundary::Cross {
                center,
                width,
                height,
                thickness,
            } => is_point_in_cross(point, *center, *width, *height, *thickness),
            Boundary::Polygon(vertices) => is_point_in_polygon(point, vertices),
        }
    }
}

/// Single-point containment for a shape drawn on a `width`×`height` canvas.
///
/// Builds the boundary on every call; use [`rasterize`] for whole canvases.
pub fn is_point_in_shape(
    point: Point,
    kind: ShapeKind,
    width: u32,
    height: u32,
    options: &ShapeOptions,
) -> Result<bool, ShapeError> {
    let params = ShapeParams::resolve(kind, width, height, options)?;
    Ok(Boundary::for_shape(kind, &params).contains(point))
}

// ============================================================================
// Dispatch
// ============================================================================

/// Rasterize `kind` into a fresh `width`×`height` canvas.
///
/// Dimensions and options are validated before the buffer is allocated, so a
/// failed call never yields a partial image. Filled pixels get `color` at
/// full opacity regardless of `color.a`.
pub fn rasterize(
    kind: ShapeKind,
    width: u32,
    height: u32,
    color: RgbaColor,
    options: &ShapeOptions,
) -> Result<Canvas, ShapeError> {
    let params = ShapeParams::resolve(kind, width, height, options)?;
    let mut canvas = Canvas::new(width, height);
    let rgba = opaque(color);

    match kind.fast_fill() {
        Some(fast) => fill_fast(fast, &params, &mut canvas, rgba),
        None => fill_generic(&Boundary::for_shape(kind, &params), &mut canvas, rgba),
    }
    Ok(canvas)
}

/// Rasterize through per-pixel containment only, skipping any fast path.
pub fn rasterize_generic(
    kind: ShapeKind,
    width: u32,
    height: u32,
    color: RgbaColor,
    options: &ShapeOptions,
) -> Result<Canvas, ShapeError> {
    let params = ShapeParams::resolve(kind, width, height, options)?;
    let mut canvas = Canvas::new(width, height);
    fill_generic(&Boundary::for_shape(kind, &params), &mut canvas, opaque(color));
    Ok(canvas)
}

fn fill_fast(fast: FastFill, p: &ShapeParams, canvas: &mut Canvas, rgba: [u8; 4]) {
    let (cx, cy) = (p.center.x, p.center.y);
    match fast {
        FastFill::Rectangle => fill::fill_rectangle(canvas, rgba),
        FastFill::Circle => fill::fill_circle(canvas, cx, cy, p.radius, rgba),
        FastFill::Ellipse => {
            fill::fill_ellipse(canvas, cx, cy, p.width / 2.0, p.height / 2.0, rgba)
        }
        FastFill::Diamond => fill::fill_diamond(canvas, cx, cy, p.radius, rgba),
        FastFill::Donut => fill::fill_donut(canvas, cx, cy, p.radius, p.donut_thickness, rgba),
    }
}

fn fill_generic(boundary: &Boundary, canvas: &mut Canvas, rgba: [u8; 4]) {
    let width = canvas.width() as usize;
    for (y, row) in canvas.rows_mut() {
        for x in 0..width {
            if boundary.contains(Point::new(x as f64, y as f64)) {
                put(row, x, rgba);
            }
        }
    }
}
