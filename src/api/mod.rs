//! High-level, ergonomic library API: circularize an image file to another
//! file, or work on in-memory images. Prefer these entrypoints over driving
//! [`Circularizer`] by hand when integrating circularize.
use std::path::Path;

use image::{DynamicImage, RgbaImage};
use tracing::info_span;

use crate::core::params::CropSpec;
use crate::core::processing::crop::CropRegion;
use crate::core::processing::pipeline::Circularizer;
use crate::error::Result;

/// Result of in-memory processing
#[derive(Debug, Clone)]
pub struct CircularImage {
    /// Where the crop was taken from in the source image
    pub region: CropRegion,
    /// Square RGBA raster, transparent outside the circle
    pub pixels: RgbaImage,
}

impl CircularImage {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

fn run_masked(mut circle: Circularizer, spec: &CropSpec) -> Result<(Circularizer, CropRegion)> {
    let region = circle.crop(spec)?;
    circle.draw_circle()?;
    Ok((circle, region))
}

/// Circularize an already decoded image (no disk I/O)
pub fn circularize_image(image: DynamicImage, spec: &CropSpec) -> Result<CircularImage> {
    let mut circle = Circularizer::new();
    circle.load(image)?;
    let (circle, region) = run_masked(circle, spec)?;
    Ok(CircularImage {
        region,
        pixels: circle.composite()?,
    })
}

/// Decode `input` and circularize it in memory
pub fn circularize_file(input: &Path, spec: &CropSpec) -> Result<CircularImage> {
    let mut circle = Circularizer::with_span(info_span!("circularize", input = ?input));
    circle.open(input)?;
    let (circle, region) = run_masked(circle, spec)?;
    Ok(CircularImage {
        region,
        pixels: circle.composite()?,
    })
}

/// Decode `input`, circularize it, and write the RGBA result to `output`.
///
/// The output format follows the extension of `output` and must be able to
/// store an alpha channel. `input` and `output` may be the same path.
pub fn circularize_to_path(input: &Path, output: &Path, spec: &CropSpec) -> Result<CropRegion> {
    let mut circle = Circularizer::with_span(info_span!("circularize", input = ?input));
    circle.open(input)?;
    let (mut circle, region) = run_masked(circle, spec)?;
    circle.save(output)?;
    Ok(region)
}
