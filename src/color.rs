//! Colour-string normalisation.
//!
//! Accepts hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`), CSS colour names and
//! `rgb()`/`rgba()`/`hsl()`/`hsla()` functional notation. Alpha is parsed and
//! then dropped, since shapes are always drawn opaque. In non-strict mode common slips are repaired first
//! (`@ff0000`, `0xff0000`, bare `ff0000`) and misspelt names are corrected
//! when they are within two edits of a real CSS name.

use crate::fuzzy;

/// Four 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RgbaColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Colour parsing failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The input is not a colour, even after repair and fuzzy matching.
    Invalid {
        input: String,
        suggestion: Option<String>,
    },
    /// `hex_to_rgba` was handed something other than six hex digits.
    InvalidHex(String),
}

impl std::fmt::Display for ColorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorError::Invalid {
                input,
                suggestion: Some(s),
            } => write!(f, "Invalid colour '{}'. Did you mean '{}'?", input, s),
            ColorError::Invalid {
                input,
                suggestion: None,
            } => write!(f, "Invalid colour '{}'.", input),
            ColorError::InvalidHex(hex) => write!(f, "Invalid hex color: {}", hex),
        }
    }
}

impl std::error::Error for ColorError {}

/// Maximum edit distance for silently correcting a misspelt colour name.
const NAME_CORRECTION_DISTANCE: usize = 2;

// ============================================================================
// Public entry points
// ============================================================================

/// Normalise any accepted colour spelling to lowercase `#rrggbb`.
///
/// With `strict` set, the input must already be valid as given: no trimming,
/// no syntax repair, no name correction.
pub fn normalize_color(input: &str, strict: bool) -> Result<String, ColorError> {
    if strict {
        return parse_css_color(input)
            .map(|c| c.to_hex())
            .ok_or_else(|| ColorError::Invalid {
                input: input.to_string(),
                suggestion: None,
            });
    }

    // Step 1: syntax repair
    let repaired = repair_syntax(input);

    // Step 2: valid after repair?
    if let Some(c) = parse_css_color(&repaired) {
        return Ok(c.to_hex());
    }

    // Step 3: fuzzy name match
    let lower = input.trim().to_lowercase();
    if let Some(name) = closest_color_name(&lower)
        && let Some(c) = named_color(name)
    {
        crate::log_info!("colour '{}' corrected to '{}'", input, name);
        return Ok(c.to_hex());
    }

    // Step 4: give up, with a hint when something is close enough
    let suggestion = fuzzy::suggest(&lower, CSS_COLOR_NAMES.iter().map(|(n, _)| *n));
    Err(ColorError::Invalid {
        input: input.to_string(),
        suggestion: suggestion.map(str::to_string),
    })
}

/// Convert `#rrggbb` (the `#` is optional) to an opaque [`RgbaColor`].
pub fn hex_to_rgba(hex: &str) -> Result<RgbaColor, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(hex.to_string()));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| ColorError::InvalidHex(hex.to_string()))
    };
    Ok(RgbaColor::opaque(channel(0)?, channel(2)?, channel(4)?))
}

/// Normalise then convert in one go. This is the boundary where a bad colour
/// string is rejected, before any canvas is allocated.
pub fn resolve_color(input: &str, strict: bool) -> Result<RgbaColor, ColorError> {
    let hex = normalize_color(input, strict)?;
    hex_to_rgba(&hex)
}

/// Parse one colour exactly as written (case-insensitive).
pub fn parse_css_color(input: &str) -> Option<RgbaColor> {
    let lower = input.to_ascii_lowercase();
    if let Some(digits) = lower.strip_prefix('#') {
        return parse_hex_digits(digits);
    }
    if let Some(args) = strip_function(&lower, "rgba").or_else(|| strip_function(&lower, "rgb")) {
        return parse_rgb_args(args);
    }
    if let Some(args) = strip_function(&lower, "hsla").or_else(|| strip_function(&lower, "hsl")) {
        return parse_hsl_args(args);
    }
    named_color(&lower)
}

// ============================================================================
// Helpers
// ============================================================================

fn repair_syntax(input: &str) -> String {
    let mut color = input.trim().to_string();

    // Leading @ or 0x → #
    if let Some(rest) = color.strip_prefix('@') {
        color = format!("#{}", rest);
    } else if let Some(rest) = color.strip_prefix("0x") {
        color = format!("#{}", rest);
    }

    // Bare six-digit hex
    if color.len() == 6 && color.bytes().all(|b| b.is_ascii_hexdigit()) {
        color = format!("#{}", color);
    }

    // #rgb → #rrggbb
    if color.len() == 4
        && color.starts_with('#')
        && color[1..].bytes().all(|b| b.is_ascii_hexdigit())
    {
        let expanded: String = color[1..].chars().flat_map(|c| [c, c]).collect();
        color = format!("#{}", expanded);
    }

    color
}

fn closest_color_name(lower: &str) -> Option<&'static str> {
    if let Some((name, _)) = CSS_COLOR_NAMES.iter().find(|(n, _)| *n == lower) {
        return Some(name);
    }
    fuzzy::first_within(lower, CSS_COLOR_NAMES.iter().map(|(n, _)| *n), NAME_CORRECTION_DISTANCE)
}

fn named_color(lower: &str) -> Option<RgbaColor> {
    CSS_COLOR_NAMES
        .iter()
        .find(|(n, _)| *n == lower)
        .map(|(_, rgb)| RgbaColor::opaque(rgb[0], rgb[1], rgb[2]))
}

fn parse_hex_digits(digits: &str) -> Option<RgbaColor> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |c: u8| (c as char).to_digit(16).map(|d| d as u8);
    let bytes = digits.as_bytes();
    match bytes.len() {
        3 | 4 => {
            let r = nibble(bytes[0])?;
            let g = nibble(bytes[1])?;
            let b = nibble(bytes[2])?;
            Some(RgbaColor::opaque(r * 17, g * 17, b * 17))
        }
        6 | 8 => {
            let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
            Some(RgbaColor::opaque(byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}

fn strip_function<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.trim()
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_rgb_args(args: &str) -> Option<RgbaColor> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    let r: u8 = parts[0].parse().ok()?;
    let g: u8 = parts[1].parse().ok()?;
    let b: u8 = parts[2].parse().ok()?;
    if let Some(alpha) = parts.get(3) {
        parse_alpha(alpha)?;
    }
    Some(RgbaColor::opaque(r, g, b))
}

/// `hue[deg], saturation%, lightness%[, alpha]`. Any finite hue wraps.
fn parse_hsl_args(args: &str) -> Option<RgbaColor> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    let hue: f64 = parts[0].strip_suffix("deg").unwrap_or(parts[0]).trim_end().parse().ok()?;
    if !hue.is_finite() {
        return None;
    }
    let sat = parse_percent(parts[1])?;
    let light = parse_percent(parts[2])?;
    if let Some(alpha) = parts.get(3) {
        parse_alpha(alpha)?;
    }
    Some(hsl_to_rgb(hue, sat, light))
}

/// `0%..=100%` as a fraction.
fn parse_percent(s: &str) -> Option<f64> {
    let v: f64 = s.strip_suffix('%')?.trim_end().parse().ok()?;
    (0.0..=100.0).contains(&v).then_some(v / 100.0)
}

/// `0..=1` or `0%..=100%`.
fn parse_alpha(s: &str) -> Option<f64> {
    if s.ends_with('%') {
        return parse_percent(s);
    }
    let a: f64 = s.parse().ok()?;
    (0.0..=1.0).contains(&a).then_some(a)
}

fn hsl_to_rgb(hue: f64, sat: f64, light: f64) -> RgbaColor {
    let h = hue.rem_euclid(360.0) / 60.0;
    let c = (1.0 - (2.0 * light - 1.0).abs()) * sat;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = light - c / 2.0;
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    RgbaColor::opaque(channel(r), channel(g), channel(b))
}

/// CSS named colours, alphabetical.
pub const CSS_COLOR_NAMES: &[(&str, [u8; 3])] = &[
    ("aliceblue", [240, 248, 255]),
    ("antiquewhite", [250, 235, 215]),
    ("aqua", [0, 255, 255]),
    ("aquamarine", [127, 255, 212]),
    ("azure", [240, 255, 255]),
    ("beige", [245, 245, 220]),
    ("bisque", [255, 228, 196]),
    ("black", [0, 0, 0]),
    ("blanchedalmond", [255, 235, 205]),
    ("blue", [0, 0, 255]),
    ("blueviolet", [138, 43, 226]),
    ("brown", [165, 42, 42]),
    ("burlywood", [222, 184, 135]),
    ("cadetblue", [95, 158, 160]),
    ("chartreuse", [127, 255, 0]),
    ("chocolate", [210, 105, 30]),
    ("coral", [255, 127, 80]),
    ("cornflowerblue", [100, 149, 237]),
    ("cornsilk", [255, 248, 220]),
    ("crimson", [220, 20, 60]),
    ("cyan", [0, 255, 255]),
    ("darkblue", [0, 0, 139]),
    ("darkcyan", [0, 139, 139]),
    ("darkgoldenrod", [184, 134, 11]),
    ("darkgray", [169, 169, 169]),
    ("darkgreen", [0, 100, 0]),
    ("darkgrey", [169, 169, 169]),
    ("darkkhaki", [189, 183, 107]),
    ("darkmagenta", [139, 0, 139]),
    ("darkolivegreen", [85, 107, 47]),
    ("darkorange", [255, 140, 0]),
    ("darkorchid", [153, 50, 204]),
    ("darkred", [139, 0, 0]),
    ("darksalmon", [233, 150, 122]),
    ("darkseagreen", [143, 188, 143]),
    ("darkslateblue", [72, 61, 139]),
    ("darkslategray", [47, 79, 79]),
    ("darkslategrey", [47, 79, 79]),
    ("darkturquoise", [0, 206, 209]),
    ("darkviolet", [148, 0, 211]),
    ("deeppink", [255, 20, 147]),
    ("deepskyblue", [0, 191, 255]),
    ("dimgray", [105, 105, 105]),
    ("dimgrey", [105, 105, 105]),
    ("dodgerblue", [30, 144, 255]),
    ("firebrick", [178, 34, 34]),
    ("floralwhite", [255, 250, 240]),
    ("forestgreen", [34, 139, 34]),
    ("fuchsia", [255, 0, 255]),
    ("gainsboro", [220, 220, 220]),
    ("ghostwhite", [248, 248, 255]),
    ("gold", [255, 215, 0]),
    ("goldenrod", [218, 165, 32]),
    ("gray", [128, 128, 128]),
    ("green", [0, 128, 0]),
    ("greenyellow", [173, 255, 47]),
    ("grey", [128, 128, 128]),
    ("honeydew", [240, 255, 240]),
    ("hotpink", [255, 105, 180]),
    ("indianred", [205, 92, 92]),
    ("indigo", [75, 0, 130]),
    ("ivory", [255, 255, 240]),
    ("khaki", [240, 230, 140]),
    ("lavender", [230, 230, 250]),
    ("lavenderblush", [255, 240, 245]),
    ("lawngreen", [124, 252, 0]),
    ("lemonchiffon", [255, 250, 205]),
    ("lightblue", [173, 216, 230]),
    ("lightcoral", [240, 128, 128]),
    ("lightcyan", [224, 255, 255]),
    ("lightgoldenrodyellow", [250, 250, 210]),
    ("lightgray", [211, 211, 211]),
    ("lightgreen", [144, 238, 144]),
    ("lightgrey", [211, 211, 211]),
    ("lightpink", [255, 182, 193]),
    ("lightsalmon", [255, 160, 122]),
    ("lightseagreen", [32, 178, 170]),
    ("lightskyblue", [135, 206, 250]),
    ("lightslategray", [119, 136, 153]),
    ("lightslategrey", [119, 136, 153]),
    ("lightsteelblue", [176, 196, 222]),
    ("lightyellow", [255, 255, 224]),
    ("lime", [0, 255, 0]),
    ("limegreen", [50, 205, 50]),
    ("linen", [250, 240, 230]),
    ("magenta", [255, 0, 255]),
    ("maroon", [128, 0, 0]),
    ("mediumaquamarine", [102, 205, 170]),
    ("mediumblue", [0, 0, 205]),
    ("mediumorchid", [186, 85, 211]),
    ("mediumpurple", [147, 112, 219]),
    ("mediumseagreen", [60, 179, 113]),
    ("mediumslateblue", [123, 104, 238]),
    ("mediumspringgreen", [0, 250, 154]),
    ("mediumturquoise", [72, 209, 204]),
    ("mediumvioletred", [199, 21, 133]),
    ("midnightblue", [25, 25, 112]),
    ("mintcream", [245, 255, 250]),
    ("mistyrose", [255, 228, 225]),
    ("moccasin", [255, 228, 181]),
    ("navajowhite", [255, 222, 173]),
    ("navy", [0, 0, 128]),
    ("oldlace", [253, 245, 230]),
    ("olive", [128, 128, 0]),
    ("olivedrab", [107, 142, 35]),
    ("orange", [255, 165, 0]),
    ("orangered", [255, 69, 0]),
    ("orchid", [218, 112, 214]),
    ("palegoldenrod", [238, 232, 170]),
    ("palegreen", [152, 251, 152]),
    ("paleturquoise", [175, 238, 238]),
    ("palevioletred", [219, 112, 147]),
    ("papayawhip", [255, 239, 213]),
    ("peachpuff", [255, 218, 185]),
    ("peru", [205, 133, 63]),
    ("pink", [255, 192, 203]),
    ("plum", [221, 160, 221]),
    ("powderblue", [176, 224, 230]),
    ("purple", [128, 0, 128]),
    ("rebeccapurple", [102, 51, 153]),
    ("red", [255, 0, 0]),
    ("rosybrown", [188, 143, 143]),
    ("royalblue", [65, 105, 225]),
    ("saddlebrown", [139, 69, 19]),
    ("salmon", [250, 128, 114]),
    ("sandybrown", [244, 164, 96]),
    ("seagreen", [46, 139, 87]),
    ("seashell", [255, 245, 238]),
    ("sienna", [160, 82, 45]),
    ("silver", [192, 192, 192]),
    ("skyblue", [135, 206, 235]),
    ("slateblue", [106, 90, 205]),
    ("slategray", [112, 128, 144]),
    ("slategrey", [112, 128, 144]),
    ("snow", [255, 250, 250]),
    ("springgreen", [0, 255, 127]),
    ("steelblue", [70, 130, 180]),
    ("tan", [210, 180, 140]),
    ("teal", [0, 128, 128]),
    ("thistle", [216, 191, 216]),
    ("tomato", [255, 99, 71]),
    ("turquoise", [64, 224, 208]),
    ("violet", [238, 130, 238]),
    ("wheat", [245, 222, 179]),
    ("white", [255, 255, 255]),
    ("whitesmoke", [245, 245, 245]),
    ("yellow", [255, 255, 0]),
    ("yellowgreen", [154, 205, 50]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colours_normalise() {
        assert_eq!(normalize_color(" red ", false).unwrap(), "#ff0000");
        assert_eq!(normalize_color("RebeccaPurple", false).unwrap(), "#663399");
    }

    #[test]
    fn test_misspelt_name_recovered() {
        assert_eq!(normalize_color("bleu", false).unwrap(), "#0000ff");
    }

    #[test]
    fn test_syntax_repair() {
        assert_eq!(normalize_color("@00FF00", false).unwrap(), "#00ff00");
        assert_eq!(normalize_color("0x0000ff", false).unwrap(), "#0000ff");
        assert_eq!(normalize_color("abcdef", false).unwrap(), "#abcdef");
        assert_eq!(normalize_color("#f80", false).unwrap(), "#ff8800");
        assert_eq!(normalize_color("rgb(1, 2, 3)", false).unwrap(), "#010203");
    }

    #[test]
    fn test_strict_mode_rejects_repairs() {
        assert!(normalize_color("blu", true).is_err());
        assert!(normalize_color(" red ", true).is_err());
        assert!(normalize_color("ff0000", true).is_err());
        assert_eq!(normalize_color("#FF0000", true).unwrap(), "#ff0000");
    }

    #[test]
    fn test_invalid_colour_message() {
        let err = normalize_color("notacolourxyz", false).unwrap_err();
        assert!(err.to_string().starts_with("Invalid colour 'notacolourxyz'."));
    }

    #[test]
    fn test_hsl_notation() {
        assert_eq!(normalize_color("hsl(0, 100%, 50%)", false).unwrap(), "#ff0000");
        assert_eq!(normalize_color("hsl(120, 100%, 25%)", false).unwrap(), "#008000");
        assert_eq!(normalize_color("HSL(240deg, 100%, 50%)", true).unwrap(), "#0000ff");
        assert_eq!(normalize_color("hsl(-120, 100%, 50%)", false).unwrap(), "#0000ff");
        assert_eq!(normalize_color("hsl(0, 0%, 100%)", false).unwrap(), "#ffffff");
        assert_eq!(normalize_color("hsla(60, 100%, 50%, 0.5)", false).unwrap(), "#ffff00");
        assert_eq!(normalize_color("hsla(60, 100%, 50%, 50%)", false).unwrap(), "#ffff00");
    }

    #[test]
    fn test_hsl_rejects_malformed() {
        for bad in [
            "hsl(0, 100, 50)",
            "hsl(0, 150%, 50%)",
            "hsl(0, 100%)",
            "hsla(0, 100%, 50%, 2)",
            "hsl(red, 100%, 50%)",
        ] {
            assert!(parse_css_color(bad).is_none(), "{}", bad);
        }
    }

    #[test]
    fn test_hex_with_alpha_drops_alpha() {
        assert_eq!(normalize_color("#ff000080", false).unwrap(), "#ff0000");
        assert_eq!(normalize_color("#f00f", false).unwrap(), "#ff0000");
        assert_eq!(normalize_color("#0A0B0C00", true).unwrap(), "#0a0b0c");
        assert_eq!(parse_css_color("#abcd"), Some(RgbaColor::opaque(0xaa, 0xbb, 0xcc)));
        assert!(parse_css_color("#abcde").is_none());
    }

    #[test]
    fn test_hex_to_rgba() {
        assert_eq!(hex_to_rgba("#ff0000").unwrap(), RgbaColor::new(255, 0, 0, 255));
        assert_eq!(hex_to_rgba("00ff00").unwrap(), RgbaColor::new(0, 255, 0, 255));
        assert_eq!(hex_to_rgba("#FF00FF").unwrap(), RgbaColor::new(255, 0, 255, 255));
    }

    #[test]
    fn test_resolve_color() {
        assert_eq!(resolve_color("tomato", false).unwrap(), RgbaColor::opaque(255, 99, 71));
        assert_eq!(resolve_color("#abc", false).unwrap(), RgbaColor::opaque(0xaa, 0xbb, 0xcc));
        assert!(resolve_color("#abc", true).is_ok());
        assert!(resolve_color("tomatoe", true).is_err());
    }

    #[test]
    fn test_hex_to_rgba_rejects_malformed() {
        for bad in ["invalid", "#ff", "#ff00000", "#gg0000"] {
            let err = hex_to_rgba(bad).unwrap_err();
            assert_eq!(err.to_string(), format!("Invalid hex color: {}", bad));
        }
    }

    #[test]
    fn test_names_are_sorted() {
        assert!(CSS_COLOR_NAMES.windows(2).all(|w| w[0].0 < w[1].0));
        assert_eq!(CSS_COLOR_NAMES.len(), 148);
    }
}
