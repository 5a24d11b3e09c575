use clap::{ArgAction, Parser};
use std::path::PathBuf;

use circularize::CropSpec;

#[derive(Parser, Debug)]
#[command(
    name = "circularize",
    version,
    about = "Crop an image to a square and mask it with a circular alpha channel"
)]
pub struct CliArgs {
    /// Input image file
    pub path: PathBuf,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Output file; the format follows its extension and must support alpha.
    /// Defaults to overwriting the input
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Side length of the square crop in pixels
    #[arg(long)]
    pub diameter: Option<u32>,

    /// Horizontal position of the crop center, 0-100 percent of the width
    #[arg(long)]
    pub x_offset: Option<u32>,

    /// Vertical position of the crop center, 0-100 percent of the height
    #[arg(long)]
    pub y_offset: Option<u32>,

    /// JSON preset with diameter/x_offset/y_offset; explicit flags take precedence
    #[arg(long)]
    pub params: Option<PathBuf>,
}

impl CliArgs {
    pub fn output(&self) -> PathBuf {
        self.out.clone().unwrap_or_else(|| self.path.clone())
    }

    /// Crop parameters given directly on the command line
    pub fn crop_spec(&self) -> CropSpec {
        CropSpec::new(self.diameter, self.x_offset, self.y_offset)
    }
}
