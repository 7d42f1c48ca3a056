//! Fixed-resolution resampling: force an image to an exact pixel size and
//! overwrite it in place.
//!
//! The resample is deliberately non-aspect-preserving: every output file
//! has exactly the configured dimensions, matching the fixed slot the asset
//! fills. Catmull-Rom filtering is the usual bicubic compromise between
//! sharpness and ringing for photographic content.

use crate::config::ConversionConfig;
use crate::error::Pdf2AssetsError;
use crate::output::ResizeOutput;
use crate::pipeline::encode;
use image::imageops::FilterType;
use image::DynamicImage;
use std::path::Path;
use tracing::debug;

/// Resample `img` to exactly `width × height`, ignoring aspect ratio.
pub fn resize_to_target(img: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    img.resize_exact(width, height, FilterType::CatmullRom)
}

/// Load the image at `path`, resample it to the configured target
/// resolution, and overwrite the file in place as a JPEG.
///
/// No backup of the original is kept. Fails if `path` does not reference a
/// readable image. Idempotent: re-running on an already-resized file yields
/// the same dimensions again.
pub fn resize_file_in_place(
    path: &Path,
    config: &ConversionConfig,
) -> Result<ResizeOutput, Pdf2AssetsError> {
    let img = image::open(path).map_err(|e| Pdf2AssetsError::ImageDecodeFailed {
        path: path.to_path_buf(),
        source: e,
    })?;
    let (original_width, original_height) = (img.width(), img.height());

    let resized = resize_to_target(&img, config.target_width, config.target_height);
    encode::save_jpeg(&resized, path, config.jpeg_quality)?;

    debug!(
        "resized {} from {}x{} to {}x{}",
        path.display(),
        original_width,
        original_height,
        resized.width(),
        resized.height()
    );

    Ok(ResizeOutput {
        path: path.to_path_buf(),
        original_width,
        original_height,
        width: resized.width(),
        height: resized.height(),
    })
}
