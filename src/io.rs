use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, ImageError};
use uuid::Uuid;

use crate::canvas::Canvas;

// ============================================================================
// OUTPUT ERRORS
// ============================================================================

/// Error type for encoding and writing output files
#[derive(Debug)]
pub enum OutputError {
    Io(std::io::Error),
    Encode(ImageError),
    FileExists(PathBuf),
}

impl std::fmt::Display for OutputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputError::Io(e) => write!(f, "I/O error: {}", e),
            OutputError::Encode(e) => write!(f, "PNG encoding failed: {}", e),
            OutputError::FileExists(_) => write!(f, "File exists. Use --force to overwrite."),
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutputError::Io(e) => Some(e),
            OutputError::Encode(e) => Some(e),
            OutputError::FileExists(_) => None,
        }
    }
}

impl From<std::io::Error> for OutputError {
    fn from(e: std::io::Error) -> Self {
        OutputError::Io(e)
    }
}

impl From<ImageError> for OutputError {
    fn from(e: ImageError) -> Self {
        OutputError::Encode(e)
    }
}

// ============================================================================
// PNG ENCODING
// ============================================================================

/// Encode a canvas as an 8-bit RGBA PNG in memory.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>, OutputError> {
    let mut bytes = Vec::new();
    let encoder = PngEncoder::new(&mut bytes);
    encoder.write_image(
        canvas.as_raw(),
        canvas.width(),
        canvas.height(),
        ColorType::Rgba8,
    )?;
    Ok(bytes)
}

/// Encode and atomically write a canvas to `path`.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<(), OutputError> {
    let bytes = encode_png(canvas)?;
    atomic_write(path, &bytes)
}

// ============================================================================
// FILE HELPERS
// ============================================================================

/// Write `bytes` to a hidden temp file next to `path`, then rename it into
/// place. Readers never observe a half-written file. The temp file is removed
/// if either step fails.
pub fn atomic_write(path: &Path, bytes: &[u8]) -> Result<(), OutputError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let temp = dir.join(format!(".tmp_{}", Uuid::new_v4().simple()));

    let result = write_temp(&temp, bytes).and_then(|()| fs::rename(&temp, path));
    if let Err(e) = result {
        let _ = fs::remove_file(&temp);
        crate::log_err!("write to {} failed: {}", path.display(), e);
        return Err(e.into());
    }
    Ok(())
}

fn write_temp(temp: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(temp)?;
    file.write_all(bytes)?;
    file.sync_all()
}

pub fn file_exists(path: &Path) -> bool {
    fs::metadata(path).is_ok()
}

/// Refuse to clobber an existing file unless `force` is set.
pub fn check_overwrite(path: &Path, force: bool) -> Result<(), OutputError> {
    if !force && file_exists(path) {
        return Err(OutputError::FileExists(path.to_path_buf()));
    }
    Ok(())
}
