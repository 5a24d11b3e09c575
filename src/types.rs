//! Shared types used across circularize.
use serde::{Deserialize, Serialize};

/// Position of a [`Circularizer`](crate::Circularizer) in its linear pipeline.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum PipelineStage {
    Unopened,
    Opened,
    Cropped,
    Masked,
    Saved,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PipelineStage::Unopened => "unopened",
            PipelineStage::Opened => "opened",
            PipelineStage::Cropped => "cropped",
            PipelineStage::Masked => "masked",
            PipelineStage::Saved => "saved",
        };
        write!(f, "{}", s)
    }
}
