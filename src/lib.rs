#![doc = r#"
circularize — crop an image to a square and cut it out with a circular alpha mask.

The pipeline is strictly linear: decode the source as RGB, pick a square crop
from an optional diameter and optional percentage offsets, render a filled
circle into an alpha mask of the same size, and stack both into an RGBA image
that is written with a format chosen from the output extension.

Add dependency
--------------
```toml
[dependencies]
circularize = "0.1"
```

Quick start: circularize a file
-------------------------------
```rust,no_run
use std::path::Path;
use circularize::{circularize_to_path, CropSpec};

fn main() -> circularize::Result<()> {
    // 256 px circle centered at 40% of the width, vertically centered
    let spec = CropSpec::new(Some(256), Some(40), None);
    let region = circularize_to_path(
        Path::new("portrait.jpg"),
        Path::new("avatar.png"),
        &spec,
    )?;
    println!("cropped {region}");
    Ok(())
}
```

Process in memory
-----------------
```rust
use circularize::{circularize_image, CropSpec};
use image::{DynamicImage, RgbImage};

fn main() -> circularize::Result<()> {
    let source = DynamicImage::ImageRgb8(RgbImage::new(200, 100));
    let out = circularize_image(source, &CropSpec::default())?;
    assert_eq!((out.width(), out.height()), (100, 100));
    Ok(())
}
```

Crop rules
----------
- Without offsets the crop is the largest centered square.
- An offset places the crop center at that percentage of the axis. The closer
  it is to an edge, the smaller the square can be; `o` and `100 - o` allow the
  same size. Offsets of 0 or 100 leave nothing and fail with
  [`Error::EmptyCrop`].
- A diameter larger than what fits is shrunk with a warning, never enlarged.

Error handling
--------------
All public functions return `circularize::Result<T>`; match on
`circularize::Error` to tell decode, encode, parameter, and ordering
failures apart.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — crop parameters, crop arithmetic, mask, compositing, and the staged [`Circularizer`].
- [`io`] — decoding and alpha-capable encoding.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::params::CropSpec;
pub use crate::core::processing::crop::{CropRegion, compute_crop_region, max_extent};
pub use crate::core::processing::mask::draw_circle;
pub use crate::core::processing::pipeline::Circularizer;
pub use crate::error::{Error, Result};
pub use crate::types::PipelineStage;

pub use crate::api::{CircularImage, circularize_file, circularize_image, circularize_to_path};
