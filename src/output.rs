//! Stage 4 — encode and persist the composited image.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbaImage};

use crate::error::OverlayError;

/// Encode `image` as JPEG at `quality` and write it to `path`, silently
/// overwriting an existing file. The parent directory must already exist;
/// none is created.
pub fn save_jpeg(image: &RgbaImage, path: &Path, quality: u8) -> Result<(), OverlayError> {
    // JPEG has no alpha channel; flatten before encoding.
    let rgb = DynamicImage::ImageRgba8(image.clone()).into_rgb8();

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let encoder = JpegEncoder::new_with_quality(&mut writer, quality);
    rgb.write_with_encoder(encoder).map_err(io_cause)?;
    writer.flush()?;

    log::info!("Image saved as {}", path.display());
    Ok(())
}

/// Encoder failures surface the underlying I/O error when there is one.
fn io_cause(err: image::ImageError) -> OverlayError {
    match err {
        image::ImageError::IoError(io) => OverlayError::Io(io),
        other => OverlayError::Io(std::io::Error::other(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgba};
    use tempfile::TempDir;

    // ── save_jpeg ────────────────────────────────────────────────────

    #[test]
    fn writes_a_decodable_jpeg_with_same_dimensions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.jpg");
        let image = RgbaImage::from_pixel(100, 100, Rgba([40, 80, 120, 255]));

        save_jpeg(&image, &path, 95).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(
            image::guess_format(&bytes).unwrap(),
            image::ImageFormat::Jpeg
        );
        let reopened = image::open(&path).unwrap();
        assert_eq!((reopened.width(), reopened.height()), (100, 100));
    }

    #[test]
    fn overwrites_an_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.jpg");
        std::fs::write(&path, b"stale contents").unwrap();

        let image = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 255]));
        save_jpeg(&image, &path, 95).unwrap();

        let reopened = image::open(&path).unwrap();
        assert_eq!((reopened.width(), reopened.height()), (10, 10));
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no_such_dir").join("out.jpg");
        let image = RgbaImage::new(4, 4);

        let err = save_jpeg(&image, &path, 95).unwrap_err();
        assert!(matches!(err, OverlayError::Io(_)));
    }
}
