//! Core processing building blocks: crop parameters, crop arithmetic, the
//! circular mask, compositing, and the staged pipeline. These are the
//! primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
