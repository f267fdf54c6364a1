//! Image preprocessing for better OCR accuracy.
//!
//! A fixed enhancement sequence: grayscale conversion, Otsu binarization,
//! then one dilation pass with a 3x3 rectangular structuring element to
//! reconnect broken character strokes.

use image::{DynamicImage, GrayImage};
use imageproc::contrast::{otsu_level, threshold, ThresholdType};
use imageproc::distance_transform::Norm;
use imageproc::morphology::dilate;

/// Enhance an image for text recognition.
///
/// The sequence is fixed and not configurable: luma conversion, Otsu-level
/// thresholding to a binary image, and a single 3x3 dilation (L-infinity
/// norm, radius 1).
pub fn enhance(image: &DynamicImage) -> GrayImage {
    let gray = image.to_luma8();
    let level = otsu_level(&gray);
    let binary = threshold(&gray, level, ThresholdType::Binary);
    dilate(&binary, Norm::LInf, 1)
}
