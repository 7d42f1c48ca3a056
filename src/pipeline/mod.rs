//! Pipeline stages shared by the conversion and resize entry points.
//!
//! Each submodule implements exactly one transformation step. Keeping stages
//! separate makes each independently testable and lets us swap an
//! implementation (e.g. the rendering backend) without touching the others.
//!
//! ## Data Flow
//!
//! ```text
//! PDF→JPEG:   input ──▶ render ──▶ trim ──▶ encode
//!             (path)    (pdfium)   (bbox)   (JPEG q=95, atomic write)
//!
//! Resize:     resize ──▶ encode
//!             (1024×768) (overwrite in place)
//! ```
//!
//! 1. [`input`]  — validate the user-supplied path and derive output names
//! 2. [`render`] — rasterise selected pages via pdfium at the requested DPI
//! 3. [`trim`]   — crop each bitmap to its non-white bounding box
//! 4. [`encode`] — JPEG-encode with an atomic temp-file + rename write
//! 5. [`resize`] — exact (non-aspect) resample to the target resolution

pub mod encode;
pub mod input;
pub mod render;
pub mod resize;
pub mod trim;
