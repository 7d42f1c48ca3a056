//! PDF rasterisation: render selected pages to `DynamicImage` via pdfium.
//!
//! ## DPI → pixels
//!
//! PDF geometry is expressed in points (1/72 inch). Rendering at a given
//! density therefore means scaling each page's point size by `dpi / 72` and
//! asking pdfium for a bitmap of exactly that many pixels per axis. Pages in
//! one document can differ in size, so the render config is computed per
//! page rather than once per document.
//!
//! ## Library binding
//!
//! pdfium is a shared library, not a Rust crate. Binding resolution:
//! `PDFIUM_LIB_PATH` (a directory holding the platform library) first, then
//! the system library. Failures surface as
//! [`Pdf2AssetsError::PdfiumBindingFailed`] with setup hints.

use crate::config::ConversionConfig;
use crate::error::Pdf2AssetsError;
use crate::output::PdfInfo;
use image::DynamicImage;
use pdfium_render::prelude::*;
use std::path::Path;
use tracing::{debug, info, warn};

/// Bind to a pdfium library, preferring `PDFIUM_LIB_PATH` over the system copy.
fn bind_pdfium() -> Result<Pdfium, Pdf2AssetsError> {
    if let Ok(dir) = std::env::var("PDFIUM_LIB_PATH") {
        let lib = Pdfium::pdfium_platform_library_name_at_path(&dir);
        match Pdfium::bind_to_library(&lib) {
            Ok(bindings) => {
                debug!("bound pdfium from PDFIUM_LIB_PATH: {:?}", lib);
                return Ok(Pdfium::new(bindings));
            }
            Err(e) => {
                warn!(
                    "PDFIUM_LIB_PATH set but binding failed ({e}); falling back to system library"
                );
            }
        }
    }

    Pdfium::bind_to_system_library()
        .map(Pdfium::new)
        .map_err(|e| Pdf2AssetsError::PdfiumBindingFailed(e.to_string()))
}

/// Map a pdfium load failure to the password/corrupt taxonomy.
fn map_load_error(e: PdfiumError, path: &Path, password: Option<&str>) -> Pdf2AssetsError {
    let err_str = format!("{:?}", e);
    if err_str.contains("Password") || err_str.contains("password") {
        if password.is_some() {
            Pdf2AssetsError::WrongPassword {
                path: path.to_path_buf(),
            }
        } else {
            Pdf2AssetsError::PasswordRequired {
                path: path.to_path_buf(),
            }
        }
    } else {
        Pdf2AssetsError::CorruptPdf {
            path: path.to_path_buf(),
            detail: err_str,
        }
    }
}

/// Rasterise the given pages (0-indexed) of a PDF into images.
///
/// # Returns
/// A vector of `(page_index_0based, DynamicImage)` tuples in input order.
pub fn render_pages(
    pdf_path: &Path,
    config: &ConversionConfig,
    page_indices: &[usize],
) -> Result<Vec<(usize, DynamicImage)>, Pdf2AssetsError> {
    let pdfium = bind_pdfium()?;
    let password = config.password.as_deref();

    let document = pdfium
        .load_pdf_from_file(pdf_path, password)
        .map_err(|e| map_load_error(e, pdf_path, password))?;

    let pages = document.pages();
    let total_pages = pages.len() as usize;
    info!("PDF loaded: {} pages", total_pages);

    let scale = config.dpi as f32 / 72.0;
    let mut results = Vec::with_capacity(page_indices.len());

    for &idx in page_indices {
        if idx >= total_pages {
            warn!(
                "skipping page {} (out of range, total={})",
                idx + 1,
                total_pages
            );
            continue;
        }

        let page = pages
            .get(idx as u16)
            .map_err(|e| Pdf2AssetsError::RasterisationFailed {
                page: idx + 1,
                detail: format!("{:?}", e),
            })?;

        let target_width = (page.width().value * scale) as i32;
        let target_height = (page.height().value * scale) as i32;
        let render_config = PdfRenderConfig::new()
            .set_target_width(target_width)
            .set_target_height(target_height);

        let bitmap = page.render_with_config(&render_config).map_err(|e| {
            Pdf2AssetsError::RasterisationFailed {
                page: idx + 1,
                detail: format!("{:?}", e),
            }
        })?;

        let image = bitmap.as_image();
        debug!(
            "rendered page {} → {}x{} px @ {} dpi",
            idx + 1,
            image.width(),
            image.height(),
            config.dpi
        );

        results.push((idx, image));
    }

    Ok(results)
}

/// Read document metadata from a PDF without rendering any pages.
pub fn read_info(pdf_path: &Path, password: Option<&str>) -> Result<PdfInfo, Pdf2AssetsError> {
    let pdfium = bind_pdfium()?;

    let document = pdfium
        .load_pdf_from_file(pdf_path, password)
        .map_err(|e| map_load_error(e, pdf_path, password))?;

    let metadata = document.metadata();
    let get_meta = |tag: PdfDocumentMetadataTagType| -> Option<String> {
        metadata.get(tag).and_then(|t| {
            let v = t.value().to_string();
            if v.is_empty() {
                None
            } else {
                Some(v)
            }
        })
    };

    Ok(PdfInfo {
        page_count: document.pages().len() as usize,
        title: get_meta(PdfDocumentMetadataTagType::Title),
        author: get_meta(PdfDocumentMetadataTagType::Author),
        producer: get_meta(PdfDocumentMetadataTagType::Producer),
        pdf_version: format!("{:?}", document.version()),
    })
}
