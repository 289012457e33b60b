// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding for the lightbox.
//!
//! The natural dimensions are read at decode time so the geometry model can
//! be seeded before the first frame is rendered.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::fs;
use std::path::{Path, PathBuf};

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
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }
}

/// Load an image from the given path and return its data.
///
/// Supports the common raster formats (PNG, JPEG, GIF, WebP, BMP).
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read and [`Error::Image`]
/// when decoding fails.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let img_bytes = fs::read(path.as_ref()).map_err(|e| Error::Io(e.to_string()))?;

    let img = image_rs::load_from_memory(&img_bytes).map_err(|e| Error::Image(e.to_string()))?;

    let (width, height) = img.dimensions();

    let rgba_img = img.to_rgba8();
    let pixels = rgba_img.into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}

/// Async wrapper used by the application's load task.
pub async fn load_image_async(path: PathBuf) -> Result<ImageData> {
    load_image(&path)
}
