//! Image format detection and upload validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Supported upload image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Tiff,
}

impl ImageKind {
    /// Canonical file extension for the format (lowercase, no dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ImageKind::Png => "png",
            ImageKind::Jpeg => "jpg",
            ImageKind::Gif => "gif",
            ImageKind::Bmp => "bmp",
            ImageKind::Tiff => "tiff",
        }
    }
}

impl std::fmt::Display for ImageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// File extensions accepted by the intake service (lowercase, no dot).
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "tiff"];

/// Detect the image format from a file path.
///
/// # Example
/// ```no_run
/// use mindscan::detect::detect_format_from_path;
///
/// let kind = detect_format_from_path("notes.png").unwrap();
/// println!("format: {}", kind);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<ImageKind> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = [0u8; 8];
    reader.read_exact(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the image format from leading bytes.
///
/// # Arguments
/// * `data` - Byte slice containing at least the first 8 bytes of the file
///
/// # Returns
/// * `Ok(ImageKind)` if the data starts with a known image signature
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_format_from_bytes(data: &[u8]) -> Result<ImageKind> {
    if data.len() >= 8 && data.starts_with(b"\x89PNG\r\n\x1a\n") {
        return Ok(ImageKind::Png);
    }
    if data.len() >= 3 && data.starts_with(b"\xFF\xD8\xFF") {
        return Ok(ImageKind::Jpeg);
    }
    if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        return Ok(ImageKind::Gif);
    }
    if data.len() >= 2 && data.starts_with(b"BM") {
        return Ok(ImageKind::Bmp);
    }
    if data.starts_with(b"II*\x00") || data.starts_with(b"MM\x00*") {
        return Ok(ImageKind::Tiff);
    }
    Err(Error::UnknownFormat)
}

/// Check whether a filename carries an accepted image extension
/// (case-insensitive).
pub fn is_allowed_extension(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| ALLOWED_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Validate an upload filename, returning its lowercase extension.
pub fn validate_extension(filename: &str) -> Result<String> {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    if ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(Error::UnsupportedExtension(ext))
    }
}
