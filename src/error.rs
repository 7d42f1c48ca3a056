//! Error types for the pdf2assets library.
//!
//! Every failure here is fatal to the running operation: the batch model is
//! strictly sequential with no partial-failure isolation, so the first page
//! or file that cannot be processed aborts the run and surfaces as an
//! `Err(Pdf2AssetsError)` from the entry point that was called.
//!
//! Messages are written for the terminal: they name the offending path and,
//! where a remedy exists, say what to try next.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the pdf2assets library.
#[derive(Debug, Error)]
pub enum Pdf2AssetsError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists and was read, but is not a PDF.
    #[error("file is not a valid PDF: '{path}'\nFirst bytes: {magic:?}")]
    NotAPdf { path: PathBuf, magic: [u8; 4] },

    // ── PDF errors ────────────────────────────────────────────────────────
    /// PDF header/trailer/xref is corrupt and cannot be parsed.
    #[error("PDF '{path}' is corrupt: {detail}")]
    CorruptPdf { path: PathBuf, detail: String },

    /// PDF requires a password but none was provided.
    #[error("PDF '{path}' is encrypted and requires a password.\nProvide it with --password <PASSWORD>.")]
    PasswordRequired { path: PathBuf },

    /// A password was provided but it is wrong.
    #[error("wrong password for PDF '{path}'")]
    WrongPassword { path: PathBuf },

    /// Selected page numbers all fall outside the actual page count.
    #[error("page selection matches no pages (document has {total} pages)")]
    NoPagesSelected { total: usize },

    /// pdfium returned an error for a specific page.
    #[error("rasterisation failed for page {page}: {detail}")]
    RasterisationFailed { page: usize, detail: String },

    // ── Image errors ──────────────────────────────────────────────────────
    /// A file could not be decoded as an image.
    #[error("failed to decode image '{path}': {source}")]
    ImageDecodeFailed {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// An in-memory bitmap could not be encoded to JPEG.
    #[error("failed to encode JPEG '{path}': {source}")]
    ImageEncodeFailed {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write an output file.
    #[error("failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not read the asset directory for the resize batch.
    #[error("failed to read directory '{path}': {source}")]
    DirectoryReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Pdfium binding errors ─────────────────────────────────────────────
    /// Could not bind to a pdfium library.
    #[error(
        "failed to bind to pdfium library: {0}\n\n\
Rendering PDFs requires the pdfium shared library.\n\
  • Set PDFIUM_LIB_PATH=/dir/containing/libpdfium to use an existing copy.\n\
  • Or install pdfium where the system linker can find it.\n"
    )]
    PdfiumBindingFailed(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_a_pdf_names_path_and_magic() {
        let e = Pdf2AssetsError::NotAPdf {
            path: PathBuf::from("/tmp/x.pdf"),
            magic: *b"PK\x03\x04",
        };
        let msg = e.to_string();
        assert!(msg.contains("/tmp/x.pdf"), "got: {msg}");
        assert!(msg.contains("80"), "magic bytes should be listed: {msg}");
    }

    #[test]
    fn rasterisation_failed_names_page() {
        let e = Pdf2AssetsError::RasterisationFailed {
            page: 7,
            detail: "bitmap allocation failed".into(),
        };
        assert!(e.to_string().contains("page 7"));
    }

    #[test]
    fn output_write_failed_keeps_source() {
        use std::error::Error as _;
        let e = Pdf2AssetsError::OutputWriteFailed {
            path: PathBuf::from("out/a.jpg"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        assert!(e.source().is_some());
        assert!(e.to_string().contains("out/a.jpg"));
    }

    #[test]
    fn password_required_mentions_flag() {
        let e = Pdf2AssetsError::PasswordRequired {
            path: PathBuf::from("secret.pdf"),
        };
        assert!(e.to_string().contains("--password"));
    }
}
