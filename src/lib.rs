//! # pdf2assets
//!
//! Batch-convert PDF pages into trimmed JPEG assets and resize JPEGs to a
//! fixed resolution.
//!
//! ## Why this crate?
//!
//! Static sites and gallery components want flat directories of
//! predictably-named, predictably-sized JPEGs. Getting there from source
//! PDFs means rasterising each page, cropping away the white page margins,
//! and normalising everything to the slot size the front-end expects. This
//! crate does exactly that and no more: three small operations over one
//! asset directory.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF
//!  │
//!  ├─ 1. Input    validate path + %PDF magic bytes
//!  ├─ 2. Render   rasterise pages via pdfium at the requested DPI
//!  ├─ 3. Trim     crop each page to its non-white bounding box
//!  └─ 4. Encode   JPEG quality 95 → <basename>_page_<n>.jpg
//!
//! JPEG assets
//!  │
//!  └─ Resize      exact 1024×768 resample, overwritten in place
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pdf2assets::{convert_pdf, resize_directory, ConversionConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConversionConfig::default();
//!
//!     // One trimmed JPEG per page: public/assets/deck_page_1.jpg, …
//!     let output = convert_pdf("deck.pdf", "public/assets", &config)?;
//!     println!("{} pages written", output.stats.pages_written);
//!
//!     // Normalise every .jpg in the asset directory to 1024×768.
//!     let batch = resize_directory("public/assets", &config)?;
//!     println!("{} files resized", batch.files.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2assets` binary (clap + anyhow + indicatif + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! pdf2assets = { version = "0.1", default-features = false }
//! ```
//!
//! ## pdfium
//!
//! Rendering requires the pdfium shared library at runtime. Set
//! `PDFIUM_LIB_PATH` to a directory containing the platform library, or
//! install pdfium system-wide. The resize and placeholder operations never
//! touch pdfium.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, PageSelection};
pub use convert::{convert_pdf, inspect, resize_directory, resize_in_place, write_placeholder};
pub use error::Pdf2AssetsError;
pub use output::{BatchOutput, ConversionOutput, ConversionStats, PageOutput, PdfInfo, ResizeOutput};
pub use progress::{NoopProgress, ProgressCallback, SharedProgress};
