//! Crate-level error type and `Result` alias for structured error handling.
//! Separates file access, codec, parameter validation, and pipeline ordering
//! failures so callers can match on what actually went wrong.
use std::path::PathBuf;

use thiserror::Error;

use crate::core::processing::crop::CropRegion;
use crate::types::PipelineStage;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode image {path:?}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Output format {format} of {path:?} cannot store an alpha channel")]
    AlphaUnsupported { path: PathBuf, format: String },

    #[error("Cannot {operation}: pipeline must be {expected}, but it is {found}")]
    Precondition {
        operation: &'static str,
        expected: PipelineStage,
        found: PipelineStage,
    },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Crop parameters leave nothing of the {width}x{height} image")]
    EmptyCrop { width: u32, height: u32 },

    #[error("Crop region {region} lies outside the {width}x{height} image")]
    CropOutOfBounds {
        region: CropRegion,
        width: u32,
        height: u32,
    },

    #[error("Mask is {mask_width}x{mask_height} but image is {width}x{height}")]
    DimensionMismatch {
        width: u32,
        height: u32,
        mask_width: u32,
        mask_height: u32,
    },

    #[error("Failed to parse parameters {path:?}: {source}")]
    Params {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
