use std::path::Path;

use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};
use tracing::{Span, debug, info, info_span};

use crate::core::params::CropSpec;
use crate::core::processing::composite::apply_alpha_mask;
use crate::core::processing::crop::{CropRegion, compute_crop_region, crop_to_region};
use crate::core::processing::mask::draw_circle;
use crate::error::{Error, Result};
use crate::io::loader::open_rgb;
use crate::io::writers::rgba::write_rgba;
use crate::types::PipelineStage;

#[derive(Default)]
enum Stage {
    #[default]
    Unopened,
    Opened {
        image: RgbImage,
    },
    Cropped {
        image: RgbImage,
        region: CropRegion,
    },
    Masked {
        image: RgbImage,
        mask: GrayImage,
        region: CropRegion,
    },
    Saved {
        region: CropRegion,
    },
}

impl Stage {
    fn kind(&self) -> PipelineStage {
        match self {
            Stage::Unopened => PipelineStage::Unopened,
            Stage::Opened { .. } => PipelineStage::Opened,
            Stage::Cropped { .. } => PipelineStage::Cropped,
            Stage::Masked { .. } => PipelineStage::Masked,
            Stage::Saved { .. } => PipelineStage::Saved,
        }
    }
}

/// Runs one image through open, crop, draw_circle and save, in that order.
///
/// Each step checks that the previous one has run and fails with
/// [`Error::Precondition`] otherwise. Every step runs inside the span given
/// at construction so its diagnostics stay attached to this pipeline.
pub struct Circularizer {
    stage: Stage,
    span: Span,
}

impl Default for Circularizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Circularizer {
    pub fn new() -> Self {
        Self::with_span(info_span!("circularize"))
    }

    pub fn with_span(span: Span) -> Self {
        Self {
            stage: Stage::Unopened,
            span,
        }
    }

    pub fn stage(&self) -> PipelineStage {
        self.stage.kind()
    }

    /// Region chosen by `crop`, once it has run.
    pub fn region(&self) -> Option<CropRegion> {
        match &self.stage {
            Stage::Cropped { region, .. }
            | Stage::Masked { region, .. }
            | Stage::Saved { region } => Some(*region),
            Stage::Unopened | Stage::Opened { .. } => None,
        }
    }

    fn require_stage(&self, operation: &'static str, expected: PipelineStage) -> Result<()> {
        let found = self.stage.kind();
        if found != expected {
            return Err(Error::Precondition {
                operation,
                expected,
                found,
            });
        }
        Ok(())
    }

    /// Decode `path` into the working RGB image. Returns its dimensions.
    pub fn open(&mut self, path: &Path) -> Result<(u32, u32)> {
        let _guard = self.span.enter();
        self.require_stage("open", PipelineStage::Unopened)?;
        let image = open_rgb(path)?;
        let dimensions = image.dimensions();
        self.stage = Stage::Opened { image };
        Ok(dimensions)
    }

    /// Use an already decoded image instead of opening a file.
    pub fn load(&mut self, image: DynamicImage) -> Result<(u32, u32)> {
        let _guard = self.span.enter();
        self.require_stage("load", PipelineStage::Unopened)?;
        let image = image.into_rgb8();
        info!("Image dimensions: {} x {}", image.width(), image.height());
        let dimensions = image.dimensions();
        self.stage = Stage::Opened { image };
        Ok(dimensions)
    }

    pub fn crop(&mut self, spec: &CropSpec) -> Result<CropRegion> {
        let _guard = self.span.enter();
        let Stage::Opened { image } = &self.stage else {
            return Err(Error::Precondition {
                operation: "crop",
                expected: PipelineStage::Opened,
                found: self.stage.kind(),
            });
        };

        let region = compute_crop_region(image.width(), image.height(), spec)?;
        let cropped = crop_to_region(image, &region)?;
        debug!("Creating base layer from cropped image");
        self.stage = Stage::Cropped {
            image: cropped,
            region,
        };
        Ok(region)
    }

    pub fn draw_circle(&mut self) -> Result<()> {
        let _guard = self.span.enter();
        self.require_stage("draw_circle", PipelineStage::Cropped)?;
        if let Stage::Cropped { image, region } = std::mem::take(&mut self.stage) {
            let mask = draw_circle(image.width(), image.height());
            self.stage = Stage::Masked {
                image,
                mask,
                region,
            };
        }
        Ok(())
    }

    /// The RGBA result, without writing it anywhere.
    pub fn composite(&self) -> Result<RgbaImage> {
        let _guard = self.span.enter();
        match &self.stage {
            Stage::Masked { image, mask, .. } => apply_alpha_mask(image, mask),
            other => Err(Error::Precondition {
                operation: "composite",
                expected: PipelineStage::Masked,
                found: other.kind(),
            }),
        }
    }

    pub fn save(&mut self, path: &Path) -> Result<()> {
        let flattened = match self.composite() {
            Err(Error::Precondition {
                expected, found, ..
            }) => {
                return Err(Error::Precondition {
                    operation: "save",
                    expected,
                    found,
                });
            }
            other => other?,
        };

        let _guard = self.span.enter();
        write_rgba(path, &flattened)?;
        if let Some(region) = self.region() {
            self.stage = Stage::Saved { region };
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn loaded(width: u32, height: u32) -> Circularizer {
        let mut c = Circularizer::new();
        let image = RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 0]));
        c.load(DynamicImage::ImageRgb8(image)).unwrap();
        c
    }

    #[test]
    fn stages_advance_in_order() {
        let mut c = loaded(200, 100);
        assert_eq!(c.stage(), PipelineStage::Opened);
        assert_eq!(c.region(), None);

        let region = c.crop(&CropSpec::default()).unwrap();
        assert_eq!(c.stage(), PipelineStage::Cropped);
        assert_eq!(region.side(), 100);

        c.draw_circle().unwrap();
        assert_eq!(c.stage(), PipelineStage::Masked);

        let out = c.composite().unwrap();
        assert_eq!(out.dimensions(), (100, 100));
        assert_eq!(out.get_pixel(50, 50).0, [100, 50, 0, 255]);
        assert_eq!(out.get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn save_before_anything_is_a_precondition_error() {
        let mut c = Circularizer::new();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");

        match c.save(&path) {
            Err(Error::Precondition {
                operation,
                expected,
                found,
            }) => {
                assert_eq!(operation, "save");
                assert_eq!(expected, PipelineStage::Masked);
                assert_eq!(found, PipelineStage::Unopened);
            }
            other => panic!("expected precondition error, got {:?}", other.err()),
        }
        assert!(!path.exists());
    }

    #[test]
    fn steps_cannot_be_skipped() {
        let mut c = Circularizer::new();
        assert!(matches!(
            c.crop(&CropSpec::default()),
            Err(Error::Precondition {
                operation: "crop",
                ..
            })
        ));
        assert!(matches!(
            c.draw_circle(),
            Err(Error::Precondition {
                operation: "draw_circle",
                ..
            })
        ));

        let mut c = loaded(10, 10);
        assert!(matches!(
            c.draw_circle(),
            Err(Error::Precondition {
                found: PipelineStage::Opened,
                ..
            })
        ));
        assert!(matches!(
            c.composite(),
            Err(Error::Precondition { .. })
        ));
        // A failed step leaves the pipeline where it was.
        assert_eq!(c.stage(), PipelineStage::Opened);
    }

    #[test]
    fn steps_cannot_repeat() {
        let mut c = loaded(10, 10);
        c.crop(&CropSpec::default()).unwrap();
        assert!(matches!(
            c.crop(&CropSpec::default()),
            Err(Error::Precondition {
                expected: PipelineStage::Opened,
                found: PipelineStage::Cropped,
                ..
            })
        ));
        assert!(matches!(
            c.load(DynamicImage::new_rgb8(1, 1)),
            Err(Error::Precondition { .. })
        ));
    }

    #[test]
    fn save_moves_to_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let mut c = loaded(30, 20);
        c.crop(&CropSpec::default()).unwrap();
        c.draw_circle().unwrap();

        c.save(&path).unwrap();
        assert_eq!(c.stage(), PipelineStage::Saved);
        assert_eq!(c.region().map(|r| r.side()), Some(20));
        assert!(matches!(c.save(&path), Err(Error::Precondition { .. })));
    }

    #[test]
    fn failed_save_keeps_masked_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut c = loaded(30, 20);
        c.crop(&CropSpec::default()).unwrap();
        c.draw_circle().unwrap();

        assert!(matches!(
            c.save(&dir.path().join("out.jpeg")),
            Err(Error::AlphaUnsupported { .. })
        ));
        assert_eq!(c.stage(), PipelineStage::Masked);
        c.save(&dir.path().join("out.png")).unwrap();
    }
}
