use image::{RgbImage, imageops};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::params::CropSpec;
use crate::error::{Error, Result};

/// Square pixel rectangle selected from the source image.
///
/// Bounds are half-open: `x_start..x_end` and `y_start..y_end`, with both
/// spans equal to the crop side. They are signed so a region computed from
/// raw parameters can be checked against the image before it is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRegion {
    pub x_start: i64,
    pub y_start: i64,
    pub x_end: i64,
    pub y_end: i64,
}

impl CropRegion {
    pub fn side(&self) -> u32 {
        (self.x_end - self.x_start).max(0) as u32
    }

    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.x_start >= 0
            && self.y_start >= 0
            && self.x_end <= i64::from(width)
            && self.y_end <= i64::from(height)
            && self.x_end - self.x_start == self.y_end - self.y_start
    }
}

impl std::fmt::Display for CropRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {})-({}, {})",
            self.x_start, self.y_start, self.x_end, self.y_end
        )
    }
}

/// Largest square side an axis allows when the crop is centered at `offset` percent.
///
/// Offsets mirror around 50%, so `o` and `100 - o` give the same extent.
/// Without an offset the whole dimension is available.
pub fn max_extent(dimension: u32, offset: Option<u32>) -> u32 {
    match offset {
        None => dimension,
        Some(o) => {
            let effective = u64::from(o.min(100u32.saturating_sub(o)));
            (effective * u64::from(dimension) * 2 / 100) as u32
        }
    }
}

struct AxisBounds {
    start: i64,
    center: i64,
    end: i64,
}

fn axis_bounds(dimension: u32, offset: Option<u32>, side: u32) -> AxisBounds {
    let dimension = i64::from(dimension);
    let side = i64::from(side);
    let (start, center) = match offset {
        Some(o) => {
            let center = i64::from(o) * dimension / 100;
            (center - side / 2, center)
        }
        None => {
            let start = (dimension - side) / 2;
            (start, start + side / 2)
        }
    };
    AxisBounds {
        start,
        center,
        end: start + side,
    }
}

/// Compute the square crop for a `width` x `height` image.
///
/// A requested diameter larger than the offsets or the image allow is
/// shrunk to fit with a warning. A crop that ends up with no pixels at all
/// is rejected.
pub fn compute_crop_region(width: u32, height: u32, spec: &CropSpec) -> Result<CropRegion> {
    spec.validate()?;

    let max_height = max_extent(height, spec.y_offset);
    let max_width = max_extent(width, spec.x_offset);
    debug!("Maximum extent: {} x {}", max_width, max_height);

    let side = match spec.diameter {
        Some(d) => {
            info!("Requested size is: {}", d);
            d
        }
        None => max_height.min(max_width),
    };
    let final_side = max_height.min(max_width).min(side);

    if final_side < side {
        warn!(
            "Unable to crop to requested size {}, using {} instead",
            side, final_side
        );
    }

    if final_side == 0 {
        return Err(Error::EmptyCrop { width, height });
    }

    let y = axis_bounds(height, spec.y_offset, final_side);
    debug!("Calculated starting y-offset to be: {}", y.start);
    debug!("Calculated center y-offset to be:   {}", y.center);
    debug!("Calculated ending y-offset to be:   {}", y.end);

    let x = axis_bounds(width, spec.x_offset, final_side);
    debug!("Calculated starting x-offset to be: {}", x.start);
    debug!("Calculated center x-offset to be:   {}", x.center);
    debug!("Calculated ending x-offset to be:   {}", x.end);

    info!("Calculated image center at: {} x {}", x.center, y.center);

    Ok(CropRegion {
        x_start: x.start,
        y_start: y.start,
        x_end: x.end,
        y_end: y.end,
    })
}

/// Copy the pixels of `region` out of `image`.
pub fn crop_to_region(image: &RgbImage, region: &CropRegion) -> Result<RgbImage> {
    let (width, height) = image.dimensions();
    if !region.fits_within(width, height) {
        return Err(Error::CropOutOfBounds {
            region: *region,
            width,
            height,
        });
    }

    let side = region.side();
    info!("Cropping image to: {} x {}", side, side);
    let cropped = imageops::crop_imm(
        image,
        region.x_start as u32,
        region.y_start as u32,
        side,
        side,
    )
    .to_image();
    Ok(cropped)
}
