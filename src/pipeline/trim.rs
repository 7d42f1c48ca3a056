//! Whitespace trimming: crop a bitmap to the bounding box of its non-white
//! content.
//!
//! A pixel counts as background when every colour channel sits at the
//! maximum value; alpha is ignored so a fully-white-but-transparent margin
//! still trims away. Grayscale needs no special case: `pixels()` widens
//! luma to RGBA with equal channels, so the same predicate applies.
//!
//! The crop is inclusive on both edges: a lone dark pixel at `(x, y)`
//! produces a 1×1 result, and content spanning `x_min..=x_max` produces a
//! width of `x_max - x_min + 1`.

use image::{DynamicImage, GenericImageView};

/// Bounding box of non-white content as `(x_min, y_min, x_max, y_max)`,
/// inclusive. `None` when the image is entirely white.
pub fn content_bounds(img: &DynamicImage) -> Option<(u32, u32, u32, u32)> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;

    for (x, y, pixel) in img.pixels() {
        let [r, g, b, _a] = pixel.0;
        if r == u8::MAX && g == u8::MAX && b == u8::MAX {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x_min, y_min, x_max, y_max)) => {
                (x_min.min(x), y_min.min(y), x_max.max(x), y_max.max(y))
            }
        });
    }

    bounds
}

/// Remove white borders from an image.
///
/// Returns the image unchanged (same dimensions) when every pixel is white.
pub fn trim_whitespace(img: &DynamicImage) -> DynamicImage {
    match content_bounds(img) {
        Some((x_min, y_min, x_max, y_max)) => {
            img.crop_imm(x_min, y_min, x_max - x_min + 1, y_max - y_min + 1)
        }
        None => img.clone(),
    }
}
