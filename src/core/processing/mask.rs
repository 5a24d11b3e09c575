use image::{GrayImage, Luma};
use imageproc::drawing::draw_filled_ellipse_mut;
use tracing::{debug, info};

pub const OPAQUE: Luma<u8> = Luma([u8::MAX]);

/// Render the alpha mask for a `width` x `height` crop: a filled circle
/// (an ellipse for non-square sizes) inscribed in the raster at full
/// opacity, with everything outside left transparent.
pub fn draw_circle(width: u32, height: u32) -> GrayImage {
    info!("Drawing circle on image");
    debug!("Creating {} x {} alpha image", width, height);
    let mut mask = GrayImage::new(width, height);
    if width == 0 || height == 0 {
        return mask;
    }

    let center = ((width / 2) as i32, (height / 2) as i32);
    debug!("Drawing circle centered at {:?}", center);
    draw_filled_ellipse_mut(
        &mut mask,
        center,
        (width / 2) as i32,
        (height / 2) as i32,
        OPAQUE,
    );

    mask
}
