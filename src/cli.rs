// ============================================================================
// shape CLI: render one filled shape to a PNG file
// ============================================================================
//
// Usage examples:
//   shape circle 256 256 tomato                 (writes circle_256x256.png)
//   shape star 128 128 "#ffcc00" -o star.png --points 7
//   shape arrow 90 60 teal --direction up --force
//   shape 100 50 red out.png                    (legacy form: always a rectangle)
//
// Exit codes follow sysexits: 64 for bad input, 74 for I/O or encoding
// failures.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{CommandFactory, FromArgMatches, Parser};

use crate::color::{self, ColorError, RgbaColor};
use crate::io::{self, OutputError};
use crate::ops::generators::ArrowDirection;
use crate::ops::shapes::{self, ShapeError, ShapeKind, ShapeOptions};
use crate::validation::{self, ShapeRegistry, ValidationError};
use crate::{log_err, log_info, log_warn};

/// Bad arguments, names, colours or dimensions (`EX_USAGE`).
pub const EXIT_USAGE: u8 = 64;
/// Encoding or filesystem failure (`EX_IOERR`).
pub const EXIT_IO: u8 = 74;

// ============================================================================
// CLI argument definition (clap Derive)
// ============================================================================

/// Generate solid colour PNG shapes.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "shape",
    version,
    about = "A command-line tool that generates solid colour PNG shapes.",
    long_about = "Render a filled shape on a transparent canvas and save it as PNG.\n\n\
                  Example:\n  \
                  shape circle 256 256 tomato\n  \
                  shape star 128 128 \"#ffcc00\" -o star.png --points 7",
    allow_negative_numbers = true
)]
pub struct CliArgs {
    /// Shape name (rectangle, circle, triangle, star, ...).
    /// In the legacy form this is the width.
    #[arg(value_name = "SHAPE")]
    pub shape: String,

    /// Width in pixels.
    #[arg(value_name = "WIDTH")]
    pub width: String,

    /// Height in pixels.
    #[arg(value_name = "HEIGHT")]
    pub height: String,

    /// Any CSS colour: name, #rgb[a], #rrggbb[aa], rgb(r, g, b), hsl(h, s%, l%).
    #[arg(value_name = "COLOR")]
    pub color: Option<String>,

    /// Output file. Defaults to "<shape>_<width>x<height>.png".
    #[arg(value_name = "OUTPUT")]
    pub output_file: Option<PathBuf>,

    /// Output file; takes precedence over the positional OUTPUT.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it already exists.
    #[arg(short, long)]
    pub force: bool,

    /// Print what is being generated and any dimension advice.
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colour repair and name correction.
    #[arg(short = 's', long)]
    pub strict_color: bool,

    /// Disable shape name correction.
    #[arg(long)]
    pub strict_shape: bool,

    /// Star: number of spikes (2-100, default 5).
    #[arg(long, value_name = "N")]
    pub points: Option<usize>,

    /// Arrow: up, down, left or right (default right).
    #[arg(long, value_name = "DIR")]
    pub direction: Option<String>,

    /// Donut: ring thickness as a fraction of the radius (0-1, default 0.4).
    #[arg(long, value_name = "FRACTION")]
    pub thickness: Option<f64>,

    /// Cross: bar thickness in pixels (default min(width, height) / 6).
    #[arg(long, value_name = "PIXELS")]
    pub cross_thickness: Option<f64>,
}

impl CliArgs {
    /// The clap command with the supported-shape list appended to `--help`.
    pub fn command_with_shapes(registry: &ShapeRegistry) -> clap::Command {
        <CliArgs as CommandFactory>::command().after_help(registry.help_text())
    }

    pub fn try_parse_with<I, T>(registry: &ShapeRegistry, argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command_with_shapes(registry).try_get_matches_from(argv)?;
        CliArgs::from_arg_matches(&matches)
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug)]
pub enum CliError {
    Usage(String),
    Validation(ValidationError),
    Color(ColorError),
    Shape(ShapeError),
    Output(OutputError),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Output(OutputError::Io(_)) | CliError::Output(OutputError::Encode(_)) => {
                EXIT_IO
            }
            CliError::Output(OutputError::FileExists(_))
            | CliError::Usage(_)
            | CliError::Validation(_)
            | CliError::Color(_)
            | CliError::Shape(_) => EXIT_USAGE,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => f.write_str(msg),
            CliError::Validation(e) => write!(f, "{}", e),
            CliError::Color(e) => write!(f, "{}", e),
            CliError::Shape(e) => write!(f, "{}", e),
            CliError::Output(e @ OutputError::FileExists(_)) => write!(f, "{}", e),
            CliError::Output(e) => write!(f, "Failed to generate PNG: {}", e),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ValidationError> for CliError {
    fn from(e: ValidationError) -> Self {
        CliError::Validation(e)
    }
}

impl From<ColorError> for CliError {
    fn from(e: ColorError) -> Self {
        CliError::Color(e)
    }
}

impl From<ShapeError> for CliError {
    fn from(e: ShapeError) -> Self {
        CliError::Shape(e)
    }
}

impl From<OutputError> for CliError {
    fn from(e: OutputError) -> Self {
        CliError::Output(e)
    }
}

// ============================================================================
// Public entry points
// ============================================================================

/// Parse `argv` and run. Help and version requests exit 0; any other
/// argument error exits with [`EXIT_USAGE`].
pub fn main_with_args<I, T>(argv: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let registry = ShapeRegistry::new();
    match CliArgs::try_parse_with(&registry, argv) {
        Ok(args) => run(&registry, args),
        Err(e) => {
            let _ = e.print();
            match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    ExitCode::SUCCESS
                }
                _ => ExitCode::from(EXIT_USAGE),
            }
        }
    }
}

/// Run one invocation and return an OS exit code.
pub fn run(registry: &ShapeRegistry, args: CliArgs) -> ExitCode {
    let start = Instant::now();
    match execute(registry, &args) {
        Ok(path) => {
            let ms = start.elapsed().as_millis();
            log_info!("created {} in {}ms", path.display(), ms);
            println!("Created {} ({}ms)", path.display(), ms);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log_err!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

// ============================================================================
// Request resolution
// ============================================================================

/// A fully validated render request.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub shape: ShapeKind,
    pub width: u32,
    pub height: u32,
    /// Normalised `#rrggbb`.
    pub hex: String,
    pub color: RgbaColor,
    pub output: PathBuf,
    pub options: ShapeOptions,
    /// Dimension advice; printed only with `--verbose`.
    pub warnings: Vec<String>,
}

/// Positional arguments after telling the legacy form apart.
struct Positionals<'a> {
    shape: Option<&'a str>,
    width: &'a str,
    height: &'a str,
    color: &'a str,
    output: Option<PathBuf>,
}

fn split_positionals<'a>(
    registry: &ShapeRegistry,
    args: &'a CliArgs,
) -> Result<Positionals<'a>, CliError> {
    let numeric = !args.shape.is_empty() && args.shape.bytes().all(|b| b.is_ascii_digit());

    if numeric && !registry.looks_like_shape_name(&args.shape) {
        // Legacy: WIDTH HEIGHT COLOR [OUTPUT]
        if args.output_file.is_some() {
            return Err(CliError::Usage(
                "too many arguments for the legacy form WIDTH HEIGHT COLOR [OUTPUT]".to_string(),
            ));
        }
        eprintln!(
            "warning: deprecated argument order. Use: shape <SHAPE> <WIDTH> <HEIGHT> <COLOR> [OUTPUT]"
        );
        log_warn!("legacy argument form used: {} {} {}", args.shape, args.width, args.height);
        return Ok(Positionals {
            shape: None,
            width: &args.shape,
            height: &args.width,
            color: &args.height,
            output: args.color.as_ref().map(PathBuf::from),
        });
    }

    let color = args
        .color
        .as_deref()
        .ok_or_else(|| CliError::Usage("missing required argument <COLOR>".to_string()))?;
    Ok(Positionals {
        shape: Some(args.shape.as_str()),
        width: &args.width,
        height: &args.height,
        color,
        output: args.output_file.clone(),
    })
}

/// Validate every argument and work out where the file goes. Nothing is
/// rendered or written here.
pub fn resolve_request(registry: &ShapeRegistry, args: &CliArgs) -> Result<Request, CliError> {
    let pos = split_positionals(registry, args)?;

    let shape = match pos.shape {
        Some(name) => registry.parse(name, args.strict_shape)?,
        None => ShapeKind::Rectangle,
    };

    let (width, height) = validation::parse_dimensions(pos.width, pos.height)?;
    let report = validation::require_shape_dimensions(shape, width, height)?;

    let color = color::resolve_color(pos.color, args.strict_color)?;

    let arrow_direction = args
        .direction
        .as_deref()
        .map(str::parse::<ArrowDirection>)
        .transpose()?;
    let options = ShapeOptions {
        star_points: args.points,
        arrow_direction,
        donut_thickness: args.thickness,
        cross_thickness: args.cross_thickness,
    };

    let output = args
        .output
        .clone()
        .or(pos.output)
        .unwrap_or_else(|| PathBuf::from(shape.default_filename(width, height)));

    Ok(Request {
        shape,
        width,
        height,
        hex: color.to_hex(),
        color,
        output,
        options,
        warnings: report.warnings,
    })
}

fn execute(registry: &ShapeRegistry, args: &CliArgs) -> Result<PathBuf, CliError> {
    let req = resolve_request(registry, args)?;

    if args.verbose {
        for warning in &req.warnings {
            eprintln!("warning: {}", warning);
        }
    }

    io::check_overwrite(&req.output, args.force)?;

    if args.verbose {
        println!(
            "Generating {} {}x{} PNG with color {}",
            req.shape, req.width, req.height, req.hex
        );
        println!("Output: {}", req.output.display());
    }

    let canvas = shapes::rasterize(req.shape, req.width, req.height, req.color, &req.options)?;
    io::write_png(&canvas, &req.output)?;
    Ok(req.output)
}
