//! Error types for the mindscan library.

use std::io;
use thiserror::Error;

/// Result type alias for mindscan operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while turning an image into an outline.
///
/// The outline core itself never fails (see [`crate::outline`]); these
/// errors all belong to the intake shell around it.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file content is not a recognized image format.
    #[error("Unknown file format: not a supported image")]
    UnknownFormat,

    /// The file extension is not in the accepted set.
    #[error("Invalid file type '{0}'. Allowed types: png, jpg, jpeg, gif, bmp, tiff")]
    UnsupportedExtension(String),

    /// The image bytes could not be decoded.
    #[error("Image decoding error: {0}")]
    ImageDecode(String),

    /// The OCR engine could not be initialized.
    #[error("OCR initialization error: {0}")]
    OcrInit(String),

    /// The OCR engine failed while recognizing text.
    #[error("OCR error: {0}")]
    Ocr(String),

    /// OCR ran successfully but produced no readable text.
    #[error("No text could be extracted from the image")]
    NoTextDetected,

    /// Error serializing output.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::ImageDecode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NoTextDetected;
        assert_eq!(err.to_string(), "No text could be extracted from the image");

        let err = Error::UnsupportedExtension("txt".into());
        assert!(err.to_string().contains("'txt'"));
        assert!(err.to_string().contains("tiff"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
