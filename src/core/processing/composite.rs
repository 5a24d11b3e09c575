use image::{GrayImage, RgbImage, Rgba, RgbaImage};
use tracing::debug;

use crate::error::{Error, Result};

/// Stack the color channels of `rgb` with `mask` as the alpha channel.
pub fn apply_alpha_mask(rgb: &RgbImage, mask: &GrayImage) -> Result<RgbaImage> {
    let (width, height) = rgb.dimensions();
    let (mask_width, mask_height) = mask.dimensions();
    if (width, height) != (mask_width, mask_height) {
        return Err(Error::DimensionMismatch {
            width,
            height,
            mask_width,
            mask_height,
        });
    }

    debug!("Flattening alpha image into base layer");
    let mut out = RgbaImage::new(width, height);
    for ((dst, src), alpha) in out.pixels_mut().zip(rgb.pixels()).zip(mask.pixels()) {
        let [r, g, b] = src.0;
        *dst = Rgba([r, g, b, alpha.0[0]]);
    }
    Ok(out)
}
