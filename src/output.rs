//! Result types returned by the conversion and resize entry points.
//!
//! Everything here derives `Serialize` so the CLI can emit it verbatim with
//! `--json`; scripts that wrap the tool get the same numbers the terminal
//! summary prints.

use serde::Serialize;
use std::path::PathBuf;

/// Document metadata read from a PDF without rendering any pages.
#[derive(Debug, Clone, Serialize)]
pub struct PdfInfo {
    /// Total number of pages in the document.
    pub page_count: usize,
    pub title: Option<String>,
    pub author: Option<String>,
    pub producer: Option<String>,
    /// PDF specification version as reported by pdfium, e.g. "Pdf17".
    pub pdf_version: String,
}

/// One converted page: where it was written and at what size.
#[derive(Debug, Clone, Serialize)]
pub struct PageOutput {
    /// 1-indexed page number, matching the `_page_<n>` filename suffix.
    pub page_num: usize,
    /// Path of the JPEG written for this page.
    pub path: PathBuf,
    /// Final pixel width after any trimming.
    pub width: u32,
    /// Final pixel height after any trimming.
    pub height: u32,
    /// Whether the whitespace trim changed the page's dimensions.
    pub trimmed: bool,
}

/// Timing and page counts for a PDF conversion run.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionStats {
    /// Pages in the source document.
    pub total_pages: usize,
    /// Pages selected and written as JPEGs.
    pub pages_written: usize,
    /// Wall-clock milliseconds spent inside pdfium.
    pub render_ms: u64,
    /// Wall-clock milliseconds for the whole conversion.
    pub total_ms: u64,
}

/// The result of converting one PDF (component A).
#[derive(Debug, Clone, Serialize)]
pub struct ConversionOutput {
    pub info: PdfInfo,
    pub pages: Vec<PageOutput>,
    pub stats: ConversionStats,
}

/// One file resized in place (component C).
#[derive(Debug, Clone, Serialize)]
pub struct ResizeOutput {
    pub path: PathBuf,
    /// Dimensions before the resample.
    pub original_width: u32,
    pub original_height: u32,
    /// Dimensions after the resample (always the configured target).
    pub width: u32,
    pub height: u32,
}

/// The result of resizing every `.jpg` in a directory (the driver).
#[derive(Debug, Clone, Serialize)]
pub struct BatchOutput {
    /// Per-file results, in the (sorted) order the files were processed.
    pub files: Vec<ResizeOutput>,
    pub total_ms: u64,
}
