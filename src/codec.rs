//! The codec seam: decoding image files to [`PixelBuffer`]s and back.
//!
//! File access lives behind the codec — a [`Codec`] is addressed by path
//! for both directions, so any image library can slot in without the
//! conversion layer changing.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::PixelBuffer;

/// Decode failure: the path was unreadable or the codec did not
/// recognize the data. Surfaced unmodified, no retries.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file could not be read.
    #[error("failed to read `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The codec rejected the file contents.
    #[error("failed to decode `{}`", .path.display())]
    Codec {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Encode failure: bad array geometry, an unwritable destination, or a
/// format the codec cannot produce.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The destination could not be written.
    #[error("failed to write `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The codec could not encode to the requested format.
    #[error("failed to encode `{}`", .path.display())]
    Codec {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The array does not split into whole rows of the given width.
    ///
    /// Raised before any pixel work happens: a zero width, an empty
    /// array, or a length not evenly divisible by the row size would
    /// otherwise truncate to a wrong-sized image.
    #[error("array of length {len} does not split into whole rows of width {width}")]
    Geometry { len: usize, width: u32 },
}

/// An image codec addressed by file path.
///
/// `decode` reads and decodes a whole file into an RGBA buffer; `encode`
/// consumes a buffer and writes it out, choosing the format from the
/// destination path where the codec supports that.
pub trait Codec {
    fn decode(&self, path: &Path) -> Result<PixelBuffer, DecodeError>;
    fn encode(&self, buffer: PixelBuffer, path: &Path) -> Result<(), EncodeError>;
}

/// Codec backed by the [`image`] crate.
///
/// Reads any format `image` is built with (PNG, JPEG, BMP, ...) and
/// writes the format implied by the destination extension. Sources
/// without an alpha channel decode with alpha 255.
#[cfg(feature = "image")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCodec;

#[cfg(feature = "image")]
impl Codec for ImageCodec {
    fn decode(&self, path: &Path) -> Result<PixelBuffer, DecodeError> {
        let img = image::open(path).map_err(|e| match e {
            image::ImageError::IoError(source) => DecodeError::Io {
                path: path.to_owned(),
                source,
            },
            other => DecodeError::Codec {
                path: path.to_owned(),
                source: Box::new(other),
            },
        })?;
        let rgba = img.into_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(PixelBuffer::from_rgba(width, height, rgba.into_raw())
            .expect("RgbaImage always holds width * height * 4 bytes"))
    }

    fn encode(&self, buffer: PixelBuffer, path: &Path) -> Result<(), EncodeError> {
        let (width, height) = (buffer.width(), buffer.height());
        let img = image::RgbaImage::from_raw(width, height, buffer.into_bytes())
            .expect("PixelBuffer always holds width * height * 4 bytes");
        img.save(path).map_err(|e| match e {
            image::ImageError::IoError(source) => EncodeError::Io {
                path: path.to_owned(),
                source,
            },
            other => EncodeError::Codec {
                path: path.to_owned(),
                source: Box::new(other),
            },
        })
    }
}
