//! Text recognition boundary.
//!
//! The pipeline treats OCR as an opaque capability behind the
//! [`TextRecognizer`] trait, so tests and embedders can substitute their
//! own engine. The bundled [`TesseractRecognizer`] is only available when
//! compiled with the `ocr` feature (the default).

use crate::error::Result;

/// Recognizes text in an encoded image.
pub trait TextRecognizer: Send + Sync {
    /// Extract text from encoded image bytes (PNG, JPEG, ...).
    fn recognize(&self, image_bytes: &[u8]) -> Result<String>;
}

/// Tesseract-backed recognizer with a fixed English profile.
#[cfg(feature = "ocr")]
pub struct TesseractRecognizer {
    language: String,
}

#[cfg(feature = "ocr")]
impl TesseractRecognizer {
    /// Page segmentation mode 6: assume a single uniform block of text.
    const PAGE_SEG_MODE: &'static str = "6";

    /// Create a recognizer using the default English profile.
    pub fn new() -> Self {
        Self {
            language: "eng".to_string(),
        }
    }

    /// Set the traineddata language (e.g., "eng").
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

#[cfg(feature = "ocr")]
impl Default for TesseractRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "ocr")]
impl TextRecognizer for TesseractRecognizer {
    fn recognize(&self, image_bytes: &[u8]) -> Result<String> {
        use crate::error::Error;

        let tess = tesseract::Tesseract::new(None, Some(&self.language))
            .map_err(|e| Error::OcrInit(format!("{e:?}")))?;

        let tess = tess
            .set_variable("tessedit_pageseg_mode", Self::PAGE_SEG_MODE)
            .map_err(|e| Error::OcrInit(format!("{e:?}")))?;

        let mut tess = tess
            .set_image_from_mem(image_bytes)
            .map_err(|e| Error::Ocr(format!("{e:?}")))?;

        let text = tess.get_text().map_err(|e| Error::Ocr(format!("{e:?}")))?;

        log::debug!("Extracted text length: {}", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedRecognizer(&'static str);

    impl TextRecognizer for CannedRecognizer {
        fn recognize(&self, _image_bytes: &[u8]) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_trait_object_usage() {
        let recognizer: Box<dyn TextRecognizer> = Box::new(CannedRecognizer("hello from a photo"));
        let text = recognizer.recognize(&[0u8; 4]).unwrap();
        assert_eq!(text, "hello from a photo");
    }

    #[cfg(feature = "ocr")]
    #[test]
    fn test_tesseract_builder() {
        let recognizer = TesseractRecognizer::new().with_language("eng");
        assert_eq!(recognizer.language, "eng");
    }
}
