use std::path::Path;

use image::{DynamicImage, ImageReader, RgbImage};
use tracing::info;

use crate::error::{Error, Result};

/// Decode the image at `path`, guessing the format from its contents.
pub fn open_image(path: &Path) -> Result<DynamicImage> {
    info!("Opening: {:?}", path);
    let open_err = |source| Error::Open {
        path: path.to_path_buf(),
        source,
    };
    let reader = ImageReader::open(path)
        .map_err(open_err)?
        .with_guessed_format()
        .map_err(open_err)?;

    reader.decode().map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode the image at `path` and convert it to 8-bit RGB.
pub fn open_rgb(path: &Path) -> Result<RgbImage> {
    let image = open_image(path)?.into_rgb8();
    info!("Image dimensions: {} x {}", image.width(), image.height());
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn opens_and_drops_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.png");
        RgbaImage::from_pixel(6, 4, Rgba([10, 20, 30, 40]))
            .save(&path)
            .unwrap();

        let image = open_rgb(&path).unwrap();
        assert_eq!(image.dimensions(), (6, 4));
        assert_eq!(image.get_pixel(0, 0).0, [10, 20, 30]);
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            open_rgb(&dir.path().join("nope.png")),
            Err(Error::Open { .. })
        ));
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        assert!(matches!(open_rgb(&path), Err(Error::Decode { .. })));
    }
}
