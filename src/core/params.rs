use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Crop parameters suitable for config files and CLI presets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CropSpec {
    /// Requested side length in pixels; None means the largest square that fits
    pub diameter: Option<u32>,
    /// Horizontal position of the crop center, 0-100 percent of the width
    pub x_offset: Option<u32>,
    /// Vertical position of the crop center, 0-100 percent of the height
    pub y_offset: Option<u32>,
}

impl CropSpec {
    pub fn new(diameter: Option<u32>, x_offset: Option<u32>, y_offset: Option<u32>) -> Self {
        Self {
            diameter,
            x_offset,
            y_offset,
        }
    }

    /// Load a JSON preset such as `{"diameter": 256, "x_offset": 40}`.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| Error::Params {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Values set in `other` replace ours; unset ones keep ours.
    pub fn overridden_by(self, other: CropSpec) -> Self {
        Self {
            diameter: other.diameter.or(self.diameter),
            x_offset: other.x_offset.or(self.x_offset),
            y_offset: other.y_offset.or(self.y_offset),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.diameter == Some(0) {
            return Err(Error::InvalidArgument {
                arg: "diameter",
                value: "0".to_string(),
            });
        }
        for (arg, offset) in [("x_offset", self.x_offset), ("y_offset", self.y_offset)] {
            if let Some(o) = offset {
                if o > 100 {
                    return Err(Error::InvalidArgument {
                        arg,
                        value: o.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}
