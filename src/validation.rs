//! Command-line input validation: shape names, dimensions and per-shape
//! size constraints.

use crate::fuzzy;
use crate::ops::shapes::ShapeKind;

/// Largest accepted width or height, in pixels.
pub const MAX_DIMENSION: u32 = 16384;

/// Edits allowed when silently correcting a shape name.
const NAME_CORRECTION_DISTANCE: usize = 2;
/// Edits allowed for [`ShapeRegistry::looks_like_shape_name`].
const LOOKS_LIKE_DISTANCE: usize = 3;
/// Allowed deviation from a shape's preferred aspect ratio.
const RATIO_TOLERANCE: f64 = 0.5;

// ============================================================================
// Errors
// ============================================================================

/// What to tell the user after an unrecognised shape name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeHint {
    /// Strict mode: no guessing, point at `--help`.
    SeeHelp,
    DidYouMean(&'static str),
    Supported(Vec<&'static str>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidShape { input: String, hint: ShapeHint },
    InvalidDimensions { width: String, height: String },
    DimensionTooLarge { width: u64, height: u64 },
    BelowMinimum {
        shape: ShapeKind,
        min_width: u32,
        min_height: u32,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidShape { input, hint } => match hint {
                ShapeHint::SeeHelp => write!(
                    f,
                    "Invalid shape '{}'. Use --help to see supported shapes.",
                    input
                ),
                ShapeHint::DidYouMean(s) => {
                    write!(f, "Invalid shape '{}'. Did you mean '{}'?", input, s)
                }
                ShapeHint::Supported(names) => write!(
                    f,
                    "Invalid shape '{}'. Supported shapes: {}.",
                    input,
                    names.join(", ")
                ),
            },
            ValidationError::InvalidDimensions { width, height } => write!(
                f,
                "Width and height must be positive integers (got '{}' x '{}')",
                width, height
            ),
            ValidationError::DimensionTooLarge { width, height } => write!(
                f,
                "Dimension too large: {}x{} (maximum {} per side)",
                width, height, MAX_DIMENSION
            ),
            ValidationError::BelowMinimum {
                shape,
                min_width,
                min_height,
            } => write!(
                f,
                "{} requires minimum dimensions of {}x{}",
                shape, min_width, min_height
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// Shape name registry
// ============================================================================

/// The table of accepted shape names, in canonical order.
///
/// Built once by the caller and passed by reference; it never changes after
/// construction.
#[derive(Debug, Clone)]
pub struct ShapeRegistry {
    entries: Vec<(&'static str, ShapeKind)>,
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeRegistry {
    pub fn new() -> Self {
        Self {
            entries: ShapeKind::all().iter().map(|&k| (k.name(), k)).collect(),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    fn exact(&self, normalized: &str) -> Option<ShapeKind> {
        self.entries
            .iter()
            .find(|(name, _)| *name == normalized)
            .map(|(_, kind)| *kind)
    }

    /// Exact match after trimming and lowercasing.
    pub fn is_valid(&self, input: &str) -> bool {
        self.exact(&normalize(input)).is_some()
    }

    /// Resolve user input to a shape.
    ///
    /// Exact (case-insensitive) names always pass. Outside strict mode the
    /// first name within two edits is accepted as a correction.
    pub fn parse(&self, input: &str, strict: bool) -> Result<ShapeKind, ValidationError> {
        let normalized = normalize(input);
        if let Some(kind) = self.exact(&normalized) {
            return Ok(kind);
        }

        if strict {
            return Err(ValidationError::InvalidShape {
                input: input.to_string(),
                hint: ShapeHint::SeeHelp,
            });
        }

        if let Some(name) = fuzzy::first_within(&normalized, self.names(), NAME_CORRECTION_DISTANCE)
            && let Some(kind) = self.exact(name)
        {
            crate::log_info!("shape '{}' corrected to '{}'", input, name);
            return Ok(kind);
        }

        let hint = match fuzzy::suggest(&normalized, self.names()) {
            Some(s) => ShapeHint::DidYouMean(s),
            None => ShapeHint::Supported(self.names().collect()),
        };
        Err(ValidationError::InvalidShape {
            input: input.to_string(),
            hint,
        })
    }

    /// Same as [`parse`](Self::parse) but returns the canonical name.
    pub fn validate_name(&self, input: &str, strict: bool) -> Result<&'static str, ValidationError> {
        self.parse(input, strict).map(|k| k.name())
    }

    /// Whether `input` reads as an attempt at a shape name rather than a
    /// number. Used to tell the legacy `WIDTH HEIGHT COLOR` form apart.
    pub fn looks_like_shape_name(&self, input: &str) -> bool {
        let normalized = normalize(input);
        if self.exact(&normalized).is_some() {
            return true;
        }
        if fuzzy::first_within(&normalized, self.names(), LOOKS_LIKE_DISTANCE).is_some() {
            return true;
        }
        !normalized.is_empty() && normalized.chars().all(|c| c.is_ascii_alphabetic())
    }

    /// `Supported shapes:` followed by one indented line per shape.
    pub fn help_text(&self) -> String {
        let mut text = String::from("Supported shapes:");
        for (_, kind) in &self.entries {
            text.push_str(&format!("\n  {:<10} {}", kind.name(), kind.description()));
        }
        text
    }
}

fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

// ============================================================================
// Dimensions
// ============================================================================

/// Parse a width/height pair of decimal strings.
pub fn parse_dimensions(width: &str, height: &str) -> Result<(u32, u32), ValidationError> {
    let invalid = || ValidationError::InvalidDimensions {
        width: width.to_string(),
        height: height.to_string(),
    };

    let w = parse_side(width).ok_or_else(invalid)?;
    let h = parse_side(height).ok_or_else(invalid)?;
    if w == 0 || h == 0 {
        return Err(invalid());
    }
    if w > MAX_DIMENSION as u64 || h > MAX_DIMENSION as u64 {
        return Err(ValidationError::DimensionTooLarge { width: w, height: h });
    }
    Ok((w as u32, h as u32))
}

/// Digits only. Overlong digit strings saturate so they report as too large.
fn parse_side(s: &str) -> Option<u64> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(s.parse::<u64>().unwrap_or(u64::MAX))
}

/// Size requirements and advice for one shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeConstraints {
    pub min_width: u32,
    pub min_height: u32,
    /// Width / height ratio the shape looks best at.
    pub preferred_ratio: Option<f64>,
    pub notes: Option<&'static str>,
}

pub fn shape_constraints(kind: ShapeKind) -> ShapeConstraints {
    const SQUARE_NOTE: &str = "Square dimensions recommended for best appearance";
    match kind {
        ShapeKind::Rectangle => ShapeConstraints {
            min_width: 1,
            min_height: 1,
            preferred_ratio: None,
            notes: None,
        },
        ShapeKind::Triangle
        | ShapeKind::Circle
        | ShapeKind::Star
        | ShapeKind::Heart
        | ShapeKind::Diamond
        | ShapeKind::Pentagon
        | ShapeKind::Hexagon
        | ShapeKind::Octagon
        | ShapeKind::Donut => ShapeConstraints {
            min_width: 10,
            min_height: 10,
            preferred_ratio: Some(1.0),
            notes: Some(SQUARE_NOTE),
        },
        ShapeKind::Oval => ShapeConstraints {
            min_width: 10,
            min_height: 10,
            preferred_ratio: None,
            notes: Some("Different width/height creates ellipse"),
        },
        ShapeKind::Cross => ShapeConstraints {
            min_width: 20,
            min_height: 20,
            preferred_ratio: Some(1.0),
            notes: Some("Minimum size ensures cross visibility"),
        },
        ShapeKind::Arrow => ShapeConstraints {
            min_width: 30,
            min_height: 20,
            preferred_ratio: Some(1.5),
            notes: Some("Width should be greater than height for clarity"),
        },
    }
}

/// Outcome of [`validate_shape_dimensions`]. `warnings` also carries the
/// shape's general note, so it is rarely empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DimensionReport {
    pub is_valid: bool,
    pub warnings: Vec<String>,
}

pub fn validate_shape_dimensions(kind: ShapeKind, width: u32, height: u32) -> DimensionReport {
    let c = shape_constraints(kind);
    let mut report = DimensionReport {
        is_valid: true,
        warnings: Vec::new(),
    };

    if width < c.min_width || height < c.min_height {
        report.warnings.push(format!(
            "{} requires minimum dimensions of {}x{}",
            kind, c.min_width, c.min_height
        ));
        report.is_valid = false;
    }

    if let Some(ratio) = c.preferred_ratio
        && height > 0
    {
        let actual = width as f64 / height as f64;
        if (actual - ratio).abs() > RATIO_TOLERANCE {
            report.warnings.push(format!(
                "{} looks best with aspect ratio {}:1 (try {}x{})",
                kind,
                ratio,
                (height as f64 * ratio).round() as u64,
                height
            ));
        }
    }

    if let Some(note) = c.notes {
        report.warnings.push(note.to_string());
    }
    report
}

/// [`validate_shape_dimensions`], turning an invalid report into an error.
pub fn require_shape_dimensions(
    kind: ShapeKind,
    width: u32,
    height: u32,
) -> Result<DimensionReport, ValidationError> {
    let report = validate_shape_dimensions(kind, width, height);
    if report.is_valid {
        return Ok(report);
    }
    let c = shape_constraints(kind);
    Err(ValidationError::BelowMinimum {
        shape: kind,
        min_width: c.min_width,
        min_height: c.min_height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_exact_and_case() {
        let reg = ShapeRegistry::new();
        assert_eq!(reg.names().count(), 13);
        assert!(reg.is_valid("  HEXAGON "));
        assert!(!reg.is_valid("hex"));
        assert_eq!(reg.parse("Circle", true), Ok(ShapeKind::Circle));
    }

    #[test]
    fn test_registry_fuzzy_correction() {
        let reg = ShapeRegistry::new();
        assert_eq!(reg.parse("circl", false), Ok(ShapeKind::Circle));
        assert_eq!(reg.parse("reactangle", false), Ok(ShapeKind::Rectangle));
        assert_eq!(reg.validate_name("hexagn", false), Ok("hexagon"));
        // "stat" is one edit from "star"
        assert_eq!(reg.parse("stat", false), Ok(ShapeKind::Star));
    }

    #[test]
    fn test_registry_strict_refuses_corrections() {
        let reg = ShapeRegistry::new();
        let err = reg.parse("circl", true).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid shape 'circl'. Use --help to see supported shapes."
        );
    }

    #[test]
    fn test_registry_error_hints() {
        let reg = ShapeRegistry::new();
        match reg.parse("pentagram", false) {
            Err(ValidationError::InvalidShape {
                hint: ShapeHint::DidYouMean(s),
                ..
            }) => assert_eq!(s, "pentagon"),
            other => panic!("unexpected {:?}", other),
        }

        let err = reg.parse("qqqqqqqqqqqqqqqq", false).unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("Invalid shape 'qqqqqqqqqqqqqqqq'. Supported shapes: rectangle, "));
        assert!(msg.ends_with("donut."));
    }

    #[test]
    fn test_looks_like_shape_name() {
        let reg = ShapeRegistry::new();
        assert!(reg.looks_like_shape_name("circle"));
        assert!(reg.looks_like_shape_name("sta"));
        assert!(reg.looks_like_shape_name("banana"));
        assert!(!reg.looks_like_shape_name("100"));
        assert!(!reg.looks_like_shape_name("3"));
        assert!(!reg.looks_like_shape_name(""));
    }

    #[test]
    fn test_help_text_lists_every_shape() {
        let reg = ShapeRegistry::new();
        let help = reg.help_text();
        assert!(help.starts_with("Supported shapes:"));
        for name in reg.names() {
            assert!(help.contains(name), "{} missing from help", name);
        }
        assert_eq!(help.lines().count(), 14);
    }

    #[test]
    fn test_parse_dimensions() {
        assert_eq!(parse_dimensions("100", "50"), Ok((100, 50)));
        assert_eq!(parse_dimensions(" 7 ", "7"), Ok((7, 7)));
        assert_eq!(parse_dimensions("16384", "1"), Ok((16384, 1)));

        for (w, h) in [("0", "5"), ("-1", "3"), ("abc", "3"), ("3", ""), ("1.5", "2")] {
            assert!(
                matches!(parse_dimensions(w, h), Err(ValidationError::InvalidDimensions { .. })),
                "{} x {}",
                w,
                h
            );
        }

        assert_eq!(
            parse_dimensions("16385", "10"),
            Err(ValidationError::DimensionTooLarge {
                width: 16385,
                height: 10
            })
        );
        assert!(matches!(
            parse_dimensions("99999999999999999999999", "10"),
            Err(ValidationError::DimensionTooLarge { .. })
        ));
    }

    #[test]
    fn test_dimension_error_messages() {
        let err = parse_dimensions("-1", "3").unwrap_err();
        assert!(err.to_string().starts_with("Width and height must be positive integers"));
        let err = parse_dimensions("20000", "3").unwrap_err();
        assert!(err.to_string().starts_with("Dimension too large"));
    }

    #[test]
    fn test_shape_dimension_report() {
        let r = validate_shape_dimensions(ShapeKind::Rectangle, 1, 1);
        assert!(r.is_valid);
        assert!(r.warnings.is_empty());

        let r = validate_shape_dimensions(ShapeKind::Circle, 100, 100);
        assert!(r.is_valid);
        assert_eq!(r.warnings, vec!["Square dimensions recommended for best appearance"]);

        let r = validate_shape_dimensions(ShapeKind::Circle, 200, 100);
        assert!(r.is_valid);
        assert_eq!(r.warnings[0], "circle looks best with aspect ratio 1:1 (try 100x100)");

        let r = validate_shape_dimensions(ShapeKind::Arrow, 30, 20);
        assert!(r.is_valid);
        assert_eq!(r.warnings.len(), 1);

        let r = validate_shape_dimensions(ShapeKind::Cross, 19, 40);
        assert!(!r.is_valid);
        assert_eq!(r.warnings[0], "cross requires minimum dimensions of 20x20");
    }

    #[test]
    fn test_require_shape_dimensions() {
        assert!(require_shape_dimensions(ShapeKind::Oval, 10, 30).is_ok());
        assert_eq!(
            require_shape_dimensions(ShapeKind::Arrow, 29, 20),
            Err(ValidationError::BelowMinimum {
                shape: ShapeKind::Arrow,
                min_width: 30,
                min_height: 20
            })
        );
    }
}
