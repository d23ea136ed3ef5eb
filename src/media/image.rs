// SPDX-License-Identifier: MPL-2.0
//! Image decoding from raster formats (PNG, JPEG, GIF, WebP, ...) and SVG.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::{DynamicImage, GenericImageView, ImageDecoder, ImageError, ImageReader};
use resvg::usvg;
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// A decoded image ready to be shown on every surface.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Creates a new `ImageData` from already encoded bytes (rasterized SVG).
    #[must_use]
    pub fn from_encoded(encoded_bytes: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            handle: image::Handle::from_bytes(encoded_bytes),
            width,
            height,
        }
    }
}

/// Decode the image at `path` to obtain its pixels and dimensions.
///
/// Raster images are rotated or flipped according to their EXIF orientation.
/// SVG files are rasterized at their intrinsic size with resvg.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The raster data is invalid or unsupported ([`Error::Decode`])
/// - For SVG files: parsing fails or dimensions are zero ([`Error::Svg`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    if extension.eq_ignore_ascii_case("svg") {
        let svg_data = fs::read(path)?;
        let tree = usvg::Tree::from_data(&svg_data, &usvg::Options::default())
            .map_err(|e| Error::Svg(e.to_string()))?;

        let pixmap_size = tree.size().to_int_size();
        let width = pixmap_size.width();
        let height = pixmap_size.height();
        if width == 0 || height == 0 {
            return Err(Error::Svg("SVG has empty dimensions".into()));
        }

        let mut pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;

        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

        let png_data = pixmap.encode_png().map_err(|e| Error::Svg(e.to_string()))?;

        Ok(ImageData::from_encoded(png_data, width, height))
    } else {
        let img_bytes = fs::read(path)?;

        let mut decoder = ImageReader::new(Cursor::new(img_bytes))
            .with_guessed_format()?
            .into_decoder()?;
        // Dimensions must match what the photo looks like, not how it was stored.
        let orientation = decoder.orientation()?;
        let mut img = DynamicImage::from_decoder(decoder)?;
        img.apply_orientation(orientation);

        let (width, height) = img.dimensions();
        let pixels = img.to_rgba8().into_vec();

        Ok(ImageData::from_rgba(width, height, pixels))
    }
}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::IoError(io) => Error::Io(io.to_string()),
            other => Error::Decode(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use std::{fs, io};
    use tempfile::tempdir;

    #[test]
    fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_image(&image_path).expect("png should load successfully");
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
    }

    /// Builds a JPEG whose EXIF block carries the given orientation tag.
    fn jpeg_with_orientation(width: u32, height: u32, orientation: u8) -> Vec<u8> {
        let mut encoded = Vec::new();
        image_rs::DynamicImage::ImageRgb8(image_rs::RgbImage::new(width, height))
            .write_to(&mut io::Cursor::new(&mut encoded), image_rs::ImageFormat::Jpeg)
            .expect("failed to encode jpeg");

        let mut exif = b"Exif\0\0".to_vec();
        // Big-endian TIFF header, one IFD entry: Orientation (0x0112), SHORT, count 1.
        exif.extend_from_slice(&[b'M', b'M', 0x00, 0x2a, 0x00, 0x00, 0x00, 0x08]);
        exif.extend_from_slice(&[0x00, 0x01]);
        exif.extend_from_slice(&[0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01]);
        exif.extend_from_slice(&[0x00, orientation, 0x00, 0x00]);
        exif.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

        let segment_len = u16::try_from(exif.len() + 2).expect("small segment");
        let mut app1 = vec![0xff, 0xe1];
        app1.extend_from_slice(&segment_len.to_be_bytes());
        app1.extend_from_slice(&exif);

        // APP1 goes right after the SOI marker.
        encoded.splice(2..2, app1);
        encoded
    }

    #[test]
    fn load_jpeg_applies_exif_rotation() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("portrait.jpg");
        fs::write(&image_path, jpeg_with_orientation(40, 10, 6)).expect("failed to write jpeg");

        let data = load_image(&image_path).expect("jpeg should load successfully");
        assert_eq!((data.width, data.height), (10, 40));
    }

    #[test]
    fn load_jpeg_without_rotation_keeps_stored_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("landscape.jpg");
        fs::write(&image_path, jpeg_with_orientation(40, 10, 1)).expect("failed to write jpeg");

        let data = load_image(&image_path).expect("jpeg should load successfully");
        assert_eq!((data.width, data.height), (40, 10));
    }

    #[test]
    fn load_svg_image_rasterizes_successfully() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let svg_path = temp_dir.path().join("sample.svg");
        let svg_content = r#"
            <svg xmlns="http://www.w3.org/2000/svg" width="6" height="3">
                <rect width="6" height="3" fill="blue" />
            </svg>
        "#;
        fs::write(&svg_path, svg_content.trim()).expect("failed to write svg");

        let data = load_image(&svg_path).expect("svg should load successfully");
        assert_eq!(data.width, 6);
        assert_eq!(data.height, 3);
    }

    #[test]
    fn load_missing_image_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing_path = temp_dir.path().join("does_not_exist.png");

        match load_image(&missing_path) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_png_bytes_returns_decode_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match load_image(&bad_path) {
            Err(Error::Decode(message)) => assert!(!message.is_empty()),
            other => panic!("expected Decode error for invalid png, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_svg_returns_svg_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_svg_path = temp_dir.path().join("broken.svg");
        fs::write(&bad_svg_path, "<svg>oops").expect("failed to write invalid svg");

        match load_image(&bad_svg_path) {
            Err(Error::Svg(message)) => assert!(!message.is_empty()),
            other => panic!("expected Svg error, got {other:?}"),
        }
    }

    #[test]
    fn image_io_error_conversion_returns_io_variant() {
        let io_err = io::Error::other("read failed");
        let error: Error = ImageError::IoError(io_err).into();
        match error {
            Error::Io(message) => assert!(message.contains("read failed")),
            other => panic!("expected Io variant from ImageError, got {other:?}"),
        }
    }
}
