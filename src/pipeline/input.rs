//! Input validation and the output-naming contract.
//!
//! pdfium produces an unhelpful crash-adjacent error when handed a non-PDF,
//! so we check the `%PDF` magic bytes up front and hand the caller a
//! meaningful error instead. Output names are derived here too, in one
//! place, because three operations share the same convention:
//! `<basename>_page_<n>.jpg` for converted pages and `<basename>.txt` for
//! placeholder text.

use crate::error::Pdf2AssetsError;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Validate that `path` exists, is readable, and starts with `%PDF`.
pub fn validate_pdf(path: &Path) -> Result<(), Pdf2AssetsError> {
    if !path.exists() {
        return Err(Pdf2AssetsError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    match std::fs::File::open(path) {
        Ok(mut f) => {
            let mut magic = [0u8; 4];
            if f.read_exact(&mut magic).is_ok() && &magic != b"%PDF" {
                return Err(Pdf2AssetsError::NotAPdf {
                    path: path.to_path_buf(),
                    magic,
                });
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(Pdf2AssetsError::PermissionDenied {
                path: path.to_path_buf(),
            });
        }
        Err(_) => {
            return Err(Pdf2AssetsError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
    }

    debug!("validated PDF input: {}", path.display());
    Ok(())
}

/// The source file's name without its extension, used as the output stem.
pub fn basename(path: &Path) -> &str {
    path.file_stem().and_then(|s| s.to_str()).unwrap_or("output")
}

/// Output path for a converted page: `<dir>/<basename>_page_<n>.jpg` (1-indexed).
pub fn page_output_path(output_dir: &Path, pdf_path: &Path, page_num: usize) -> PathBuf {
    output_dir.join(format!("{}_page_{}.jpg", basename(pdf_path), page_num))
}

/// Output path for a placeholder text file: `<dir>/<basename>.txt`.
pub fn placeholder_path(output_dir: &Path, pdf_path: &Path) -> PathBuf {
    output_dir.join(format!("{}.txt", basename(pdf_path)))
}
