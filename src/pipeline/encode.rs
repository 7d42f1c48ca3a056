//! JPEG encoding with atomic writes.
//!
//! Output files are written to a sibling `.tmp` path and renamed into place
//! once fully flushed, so a crash mid-encode never leaves a truncated JPEG
//! where the asset pipeline expects a valid one. The rename also makes the
//! in-place resize safe: the original survives untouched until the new bytes
//! are complete.

use crate::error::Pdf2AssetsError;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Encode `img` as a JPEG at the given quality and atomically write it to `path`.
///
/// Parent directories are created as needed. JPEG has no alpha channel, so
/// the image is flattened to RGB first.
pub fn save_jpeg(img: &DynamicImage, path: &Path, quality: u8) -> Result<(), Pdf2AssetsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Pdf2AssetsError::OutputWriteFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let tmp_path = path.with_extension("jpg.tmp");

    let write_result = (|| -> Result<(), Pdf2AssetsError> {
        let file = fs::File::create(&tmp_path).map_err(|e| Pdf2AssetsError::OutputWriteFailed {
            path: tmp_path.clone(),
            source: e,
        })?;
        let mut writer = BufWriter::new(file);

        let rgb = img.to_rgb8();
        JpegEncoder::new_with_quality(&mut writer, quality)
            .write_image(&rgb, rgb.width(), rgb.height(), ExtendedColorType::Rgb8)
            .map_err(|e| Pdf2AssetsError::ImageEncodeFailed {
                path: path.to_path_buf(),
                source: e,
            })?;

        writer.flush().map_err(|e| Pdf2AssetsError::OutputWriteFailed {
            path: tmp_path.clone(),
            source: e,
        })?;
        Ok(())
    })();

    if let Err(e) = write_result {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        Pdf2AssetsError::OutputWriteFailed {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    debug!("wrote {}", path.display());
    Ok(())
}
