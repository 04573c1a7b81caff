// ============================================================================
// OPS MODULE: shape geometry and rasterization
// ============================================================================
//
// Layout:
//   geometry.rs    Point, distance metrics, containment predicates
//   generators.rs  vertex sequences for polygon/star/heart/arrow outlines
//   fill.rs        closed-form row scans (rectangle, circle, oval, diamond, donut)
//   shapes.rs      ShapeKind, options, boundaries and the rasterize() dispatch
// ============================================================================

pub mod fill;
pub mod generators;
pub mod geometry;
pub mod shapes;

pub use generators::ArrowDirection;
pub use geometry::Point;
pub use shapes::{ShapeError, ShapeKind, ShapeOptions, rasterize, rasterize_generic};
