//! # mindscan
//!
//! Turn photographed notes into mind-map outlines.
//!
//! This library extracts text from images via OCR and derives a simple
//! hierarchical outline (topic, subtopics, related points) from the
//! recognized text using word-frequency heuristics.
//!
//! ## Quick Start
//!
#![cfg_attr(
    feature = "ocr",
    doc = r#"
```no_run
use mindscan::Mindscan;

fn main() -> mindscan::Result<()> {
    let scanner = Mindscan::new();
    let result = scanner.scan_file("whiteboard.png")?;

    println!("{}", result.outline());
    Ok(())
}
```
"#
)]
//! The text-structuring core is usable on its own, without any image or
//! OCR machinery:
//!
//! ```
//! let outline = mindscan::outline_text("Cats are great pets. Cats need water.");
//! assert!(outline.starts_with("- Cats are great pets"));
//! ```
//!
//! ## Features
//!
//! - **Pure outline core**: deterministic, stateless, never fails
//! - **Pluggable OCR**: bring your own engine via [`TextRecognizer`]
//! - **Preprocessing**: grayscale + Otsu threshold + dilation before OCR
//! - **JSON output**: serde-backed mind-map serialization

pub mod detect;
pub mod error;
pub mod model;
pub mod ocr;
pub mod outline;
pub mod preprocess;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, ImageKind};
pub use error::{Error, Result};
pub use model::{Branch, JsonFormat, MindMap};
pub use ocr::TextRecognizer;
#[cfg(feature = "ocr")]
pub use ocr::TesseractRecognizer;
pub use outline::{build_mind_map, build_outline};

use std::io::Cursor;
use std::path::Path;

use image::ImageFormat;
use serde::{Deserialize, Serialize};

/// Build an outline string from raw text.
///
/// The entry point of the text-structuring core. Always returns a value:
/// unreadable input yields the fixed "no readable text" outline, and any
/// internal fault is absorbed into the fixed failure outline.
pub fn outline_text(text: &str) -> String {
    outline::build_outline(text)
}

/// Build a structured [`MindMap`] from raw text.
pub fn mind_map(text: &str) -> MindMap {
    outline::build_mind_map(text)
}

/// Scan an image file with the default pipeline.
///
/// # Example
///
/// ```no_run
/// let result = mindscan::scan_file("notes.jpg").unwrap();
/// println!("{}", result.outline());
/// ```
#[cfg(feature = "ocr")]
pub fn scan_file<P: AsRef<Path>>(path: P) -> Result<ScanResult> {
    Mindscan::new().scan_file(path)
}

/// Scan encoded image bytes with the default pipeline.
#[cfg(feature = "ocr")]
pub fn scan_bytes(data: &[u8]) -> Result<ScanResult> {
    Mindscan::new().scan_bytes(data)
}

/// Image-to-outline pipeline service.
///
/// Holds the recognizer explicitly rather than relying on any ambient
/// global; the service is shareable across threads and each scan operates
/// only on its own local data.
#[cfg_attr(
    feature = "ocr",
    doc = r#"
# Example

```no_run
use mindscan::Mindscan;

let scanner = Mindscan::new().with_language("eng");
let result = scanner.scan_file("whiteboard.png")?;
println!("{}", result.text);
# Ok::<(), mindscan::Error>(())
```
"#
)]
pub struct Mindscan {
    recognizer: Box<dyn TextRecognizer>,
    preprocess: bool,
}

impl Mindscan {
    /// Create a pipeline with the bundled Tesseract recognizer.
    #[cfg(feature = "ocr")]
    pub fn new() -> Self {
        Self {
            recognizer: Box::new(TesseractRecognizer::new()),
            preprocess: true,
        }
    }

    /// Create a pipeline with a custom recognizer.
    pub fn with_recognizer(recognizer: Box<dyn TextRecognizer>) -> Self {
        Self {
            recognizer,
            preprocess: true,
        }
    }

    /// Set the OCR traineddata language (replaces the recognizer).
    #[cfg(feature = "ocr")]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.recognizer = Box::new(TesseractRecognizer::new().with_language(language));
        self
    }

    /// Skip the enhancement pass and feed images to OCR as-is.
    pub fn without_preprocessing(mut self) -> Self {
        self.preprocess = false;
        self
    }

    /// Scan an image file and derive its mind map.
    pub fn scan_file<P: AsRef<Path>>(&self, path: P) -> Result<ScanResult> {
        let data = std::fs::read(path)?;
        self.scan_bytes(&data)
    }

    /// Scan encoded image bytes and derive their mind map.
    ///
    /// The bytes must carry one of the supported image signatures (PNG,
    /// JPEG, GIF, BMP, TIFF). Returns [`Error::NoTextDetected`] when OCR
    /// produces only whitespace.
    pub fn scan_bytes(&self, data: &[u8]) -> Result<ScanResult> {
        let kind = detect::detect_format_from_bytes(data)?;
        log::debug!("Scanning {} image ({} bytes)", kind, data.len());

        let ocr_input = if self.preprocess {
            let decoded = image::load_from_memory(data)?;
            let enhanced = preprocess::enhance(&decoded);

            let mut png = Cursor::new(Vec::new());
            image::DynamicImage::ImageLuma8(enhanced).write_to(&mut png, ImageFormat::Png)?;
            png.into_inner()
        } else {
            data.to_vec()
        };

        let text = self.recognizer.recognize(&ocr_input)?;
        if text.trim().is_empty() {
            return Err(Error::NoTextDetected);
        }

        let map = outline::build_mind_map(&text);
        Ok(ScanResult { text, map })
    }
}

#[cfg(feature = "ocr")]
impl Default for Mindscan {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of scanning an image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// Raw recognized text
    pub text: String,

    /// Mind map derived from the text
    pub map: MindMap,
}

impl ScanResult {
    /// Render the mind map as an indented outline.
    pub fn outline(&self) -> String {
        self.map.render()
    }

    /// Serialize the full result to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        let result = match format {
            JsonFormat::Pretty => serde_json::to_string_pretty(self),
            JsonFormat::Compact => serde_json::to_string(self),
        };

        result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
    }
}
