use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};
use tracing::info;

use crate::error::{Error, Result};

/// Whether `format` can carry the RGBA output.
pub fn supports_alpha(format: ImageFormat) -> bool {
    matches!(
        format,
        ImageFormat::Png
            | ImageFormat::WebP
            | ImageFormat::Tiff
            | ImageFormat::Bmp
            | ImageFormat::Ico
            | ImageFormat::Tga
            | ImageFormat::Qoi
            | ImageFormat::Gif
            | ImageFormat::Avif
    )
}

/// Encode `image` to `path`, picking the format from the file extension.
///
/// The image is encoded in memory first, so a codec failure leaves any
/// existing file at `path` untouched.
pub fn write_rgba(path: &Path, image: &RgbaImage) -> Result<()> {
    let format = ImageFormat::from_path(path).map_err(|source| Error::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    if !supports_alpha(format) {
        return Err(Error::AlphaUnsupported {
            path: path.to_path_buf(),
            format: format!("{:?}", format),
        });
    }

    let mut encoded = Cursor::new(Vec::new());
    image
        .write_to(&mut encoded, format)
        .map_err(|source| Error::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Saving circular image to: {:?}", path);
    fs::write(path, encoded.into_inner()).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
