// SPDX-License-Identifier: MPL-2.0
//! Selected image handling: the transient source handle and decoding.

pub mod image;
pub mod source;

pub use image::{load_image, ImageData};
pub use source::{SourceHandle, SourceId, SourceSlot};

use crate::error::Error;

/// File extensions offered by the open dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff", "ico", "svg",
];

/// Outcome of decoding the file behind a source handle.
#[derive(Debug, Clone)]
pub struct DecodeResult {
    pub source: SourceId,
    pub result: Result<ImageData, Error>,
}

/// Decodes the file behind `handle` off the UI thread, tagging the result
/// with the handle's id.
pub async fn decode(handle: SourceHandle) -> DecodeResult {
    let source = handle.id();
    let path = handle.path().to_path_buf();
    let result = tokio::task::spawn_blocking(move || load_image(path))
        .await
        .map_err(|e| Error::Decode(e.to_string()))
        .and_then(|inner| inner);
    DecodeResult { source, result }
}
