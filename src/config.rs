//! Configuration types for the conversion and resize pipelines.
//!
//! All behaviour is controlled through [`ConversionConfig`], built via its
//! [`ConversionConfigBuilder`]. One struct covers both the PDF→JPEG path and
//! the fixed-resolution resize path so the CLI and library callers share a
//! single set of knobs and defaults.

use crate::error::Pdf2AssetsError;
use crate::progress::SharedProgress;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration for PDF→JPEG conversion and JPEG resizing.
///
/// Built via [`ConversionConfig::builder()`] or
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use pdf2assets::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .dpi(300)
///     .jpeg_quality(95)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct ConversionConfig {
    /// Rendering DPI used when rasterising each PDF page. Range: 72–600. Default: 300.
    ///
    /// PDF geometry is specified in points (1/72 inch), so the rendered pixel
    /// size of a page is `points × dpi / 72` per axis. 300 DPI renders an A4
    /// page at roughly 2480 × 3508 px, which survives the trim-and-display
    /// round trip without visible softness.
    pub dpi: u32,

    /// JPEG encoder quality, 1–100. Default: 95.
    ///
    /// Applied to both converted pages and resized files. 95 keeps rendered
    /// text free of visible ringing while still compressing page scans to a
    /// fraction of their raw size.
    pub jpeg_quality: u8,

    /// Trim white borders from rendered pages. Default: true.
    ///
    /// When a page is entirely white there is nothing to anchor a crop to,
    /// so the page is written at its full rendered size regardless.
    pub trim: bool,

    /// Page selection for PDF conversion. Default: all pages.
    pub pages: PageSelection,

    /// PDF user password for encrypted documents.
    pub password: Option<String>,

    /// Target width in pixels for the fixed-resolution resize. Default: 1024.
    pub target_width: u32,

    /// Target height in pixels for the fixed-resolution resize. Default: 768.
    ///
    /// The resample is non-aspect-preserving: every file comes out at exactly
    /// `target_width × target_height`, matching the gallery slot it fills.
    pub target_height: u32,

    /// Optional per-page / per-file progress callback.
    pub progress: Option<SharedProgress>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            dpi: 300,
            jpeg_quality: 95,
            trim: true,
            pages: PageSelection::default(),
            password: None,
            target_width: 1024,
            target_height: 768,
            progress: None,
        }
    }
}

impl fmt::Debug for ConversionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionConfig")
            .field("dpi", &self.dpi)
            .field("jpeg_quality", &self.jpeg_quality)
            .field("trim", &self.trim)
            .field("pages", &self.pages)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("target_width", &self.target_width)
            .field("target_height", &self.target_height)
            .field("progress", &self.progress.as_ref().map(|_| "<dyn ProgressCallback>"))
            .finish()
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn dpi(mut self, dpi: u32) -> Self {
        self.config.dpi = dpi.clamp(72, 600);
        self
    }

    pub fn jpeg_quality(mut self, quality: u8) -> Self {
        self.config.jpeg_quality = quality.clamp(1, 100);
        self
    }

    pub fn trim(mut self, v: bool) -> Self {
        self.config.trim = v;
        self
    }

    pub fn pages(mut self, selection: PageSelection) -> Self {
        self.config.pages = selection;
        self
    }

    pub fn password(mut self, pwd: impl Into<String>) -> Self {
        self.config.password = Some(pwd.into());
        self
    }

    pub fn target_size(mut self, width: u32, height: u32) -> Self {
        self.config.target_width = width;
        self.config.target_height = height;
        self
    }

    pub fn progress(mut self, callback: SharedProgress) -> Self {
        self.config.progress = Some(callback);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Pdf2AssetsError> {
        let c = &self.config;
        if c.dpi < 72 || c.dpi > 600 {
            return Err(Pdf2AssetsError::InvalidConfig(format!(
                "DPI must be 72–600, got {}",
                c.dpi
            )));
        }
        if c.jpeg_quality == 0 || c.jpeg_quality > 100 {
            return Err(Pdf2AssetsError::InvalidConfig(format!(
                "JPEG quality must be 1–100, got {}",
                c.jpeg_quality
            )));
        }
        if c.target_width == 0 || c.target_height == 0 {
            return Err(Pdf2AssetsError::InvalidConfig(
                "target dimensions must be non-zero".into(),
            ));
        }
        Ok(self.config)
    }
}

/// Specifies which pages of the PDF to convert.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub enum PageSelection {
    /// Convert all pages (default).
    #[default]
    All,
    /// Convert a single page (1-indexed).
    Single(usize),
    /// Convert a contiguous range of pages (1-indexed, inclusive).
    Range(usize, usize),
    /// Convert specific pages (1-indexed, deduplicated).
    Set(Vec<usize>),
}

impl PageSelection {
    /// Expand the selection into a sorted, deduplicated list of 0-indexed
    /// page numbers, dropping anything outside `1..=total_pages`.
    pub fn to_indices(&self, total_pages: usize) -> Vec<usize> {
        let in_range = |p: usize| p >= 1 && p <= total_pages;
        let mut indices: Vec<usize> = match self {
            PageSelection::All => return (0..total_pages).collect(),
            PageSelection::Single(p) => in_range(*p).then(|| *p - 1).into_iter().collect(),
            PageSelection::Range(start, end) => ((*start).max(1)..=(*end).min(total_pages))
                .map(|p| p - 1)
                .collect(),
            PageSelection::Set(pages) => pages
                .iter()
                .copied()
                .filter(|&p| in_range(p))
                .map(|p| p - 1)
                .collect(),
        };
        indices.sort_unstable();
        indices.dedup();
        indices
    }
}
