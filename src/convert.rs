//! Entry points for the three asset operations.
//!
//! Each function is a thin, strictly sequential pipeline over the stages in
//! [`crate::pipeline`]: one file is fully processed and written before the
//! next begins, and the first failure aborts the run. The output directory
//! is always an explicit argument; nothing here reads process-global state.

use crate::config::ConversionConfig;
use crate::error::Pdf2AssetsError;
use crate::output::{BatchOutput, ConversionOutput, ConversionStats, PageOutput, PdfInfo, ResizeOutput};
use crate::pipeline::{encode, input, render, resize, trim};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Convert a PDF into one trimmed JPEG per page (component A).
///
/// Pages are rasterised at `config.dpi`, trimmed to their non-white
/// bounding box (unless `config.trim` is off), and written to
/// `<output_dir>/<basename>_page_<n>.jpg` (1-indexed) at
/// `config.jpeg_quality`. The output directory is created if missing.
///
/// # Errors
/// Fatal on the first failure: invalid input, rasterisation error, or a
/// page that cannot be written. Pages already written stay on disk.
pub fn convert_pdf(
    pdf_path: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Pdf2AssetsError> {
    let total_start = Instant::now();
    let pdf_path = pdf_path.as_ref();
    let output_dir = output_dir.as_ref();
    info!("converting {} → {}", pdf_path.display(), output_dir.display());

    input::validate_pdf(pdf_path)?;

    let pdf_info = render::read_info(pdf_path, config.password.as_deref())?;
    let page_indices = config.pages.to_indices(pdf_info.page_count);
    if page_indices.is_empty() {
        return Err(Pdf2AssetsError::NoPagesSelected {
            total: pdf_info.page_count,
        });
    }
    debug!("selected {} of {} pages", page_indices.len(), pdf_info.page_count);

    std::fs::create_dir_all(output_dir).map_err(|e| Pdf2AssetsError::OutputWriteFailed {
        path: output_dir.to_path_buf(),
        source: e,
    })?;

    if let Some(ref cb) = config.progress {
        cb.on_start(page_indices.len());
    }

    let render_start = Instant::now();
    let rendered = render::render_pages(pdf_path, config, &page_indices)?;
    let render_ms = render_start.elapsed().as_millis() as u64;
    info!("rendered {} pages in {}ms", rendered.len(), render_ms);

    let total_items = rendered.len();
    let mut pages = Vec::with_capacity(total_items);

    for (seq, (idx, image)) in rendered.into_iter().enumerate() {
        let page_num = idx + 1;
        let rendered_dims = (image.width(), image.height());

        let image = if config.trim {
            trim::trim_whitespace(&image)
        } else {
            image
        };
        let trimmed = (image.width(), image.height()) != rendered_dims;

        let path = input::page_output_path(output_dir, pdf_path, page_num);
        encode::save_jpeg(&image, &path, config.jpeg_quality)?;
        info!("saved {}", path.display());

        if let Some(ref cb) = config.progress {
            cb.on_item_done(seq + 1, total_items, &path);
        }

        pages.push(PageOutput {
            page_num,
            path,
            width: image.width(),
            height: image.height(),
            trimmed,
        });
    }

    if let Some(ref cb) = config.progress {
        cb.on_complete(total_items);
    }

    let stats = ConversionStats {
        total_pages: pdf_info.page_count,
        pages_written: pages.len(),
        render_ms,
        total_ms: total_start.elapsed().as_millis() as u64,
    };
    info!(
        "conversion complete: {}/{} pages, {}ms total",
        stats.pages_written, stats.total_pages, stats.total_ms
    );

    Ok(ConversionOutput {
        info: pdf_info,
        pages,
        stats,
    })
}

/// Write the placeholder text file for a PDF (component B).
///
/// Creates `<output_dir>/<basename>.txt` containing exactly
/// `Text extracted from <pdf-path>`, truncating any existing file of that
/// name. No text extraction takes place. Returns the path written.
pub fn write_placeholder(
    pdf_path: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
) -> Result<PathBuf, Pdf2AssetsError> {
    let pdf_path = pdf_path.as_ref();
    let output_dir = output_dir.as_ref();

    std::fs::create_dir_all(output_dir).map_err(|e| Pdf2AssetsError::OutputWriteFailed {
        path: output_dir.to_path_buf(),
        source: e,
    })?;

    let path = input::placeholder_path(output_dir, pdf_path);
    let content = format!("Text extracted from {}", pdf_path.display());
    std::fs::write(&path, content).map_err(|e| Pdf2AssetsError::OutputWriteFailed {
        path: path.clone(),
        source: e,
    })?;

    info!("created {}", path.display());
    Ok(path)
}

/// Resize a single image file to the configured target resolution,
/// overwriting it in place (component C).
pub fn resize_in_place(
    path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ResizeOutput, Pdf2AssetsError> {
    resize::resize_file_in_place(path.as_ref(), config)
}

/// Resize every `.jpg` file in `dir` to the configured target resolution
/// (the driver).
///
/// Files are processed sequentially in sorted order; the extension match is
/// ASCII case-insensitive and non-files are skipped. The first failure
/// aborts the batch; files already resized stay resized.
pub fn resize_directory(
    dir: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<BatchOutput, Pdf2AssetsError> {
    let start = Instant::now();
    let dir = dir.as_ref();

    let files = collect_jpg_files(dir)?;
    info!("resizing {} file(s) in {}", files.len(), dir.display());

    if let Some(ref cb) = config.progress {
        cb.on_start(files.len());
    }

    let mut outputs = Vec::with_capacity(files.len());
    for (seq, file) in files.iter().enumerate() {
        let out = resize::resize_file_in_place(file, config)?;
        info!(
            "resized {} to {}x{}",
            file.display(),
            out.width,
            out.height
        );
        if let Some(ref cb) = config.progress {
            cb.on_item_done(seq + 1, files.len(), file);
        }
        outputs.push(out);
    }

    if let Some(ref cb) = config.progress {
        cb.on_complete(files.len());
    }

    Ok(BatchOutput {
        files: outputs,
        total_ms: start.elapsed().as_millis() as u64,
    })
}

/// Read document metadata from a PDF without rendering any pages.
pub fn inspect(pdf_path: impl AsRef<Path>) -> Result<PdfInfo, Pdf2AssetsError> {
    let pdf_path = pdf_path.as_ref();
    input::validate_pdf(pdf_path)?;
    render::read_info(pdf_path, None)
}

/// Every plain file in `dir` whose extension is `jpg`, sorted for
/// deterministic batch order.
fn collect_jpg_files(dir: &Path) -> Result<Vec<PathBuf>, Pdf2AssetsError> {
    let entries = std::fs::read_dir(dir).map_err(|e| Pdf2AssetsError::DirectoryReadFailed {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .map(|e| e.eq_ignore_ascii_case("jpg"))
                .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}
