//! Image files ⇄ flat arrays: the four file-level operations.
//!
//! Each operation is a single-shot, stateless transformation scoped to
//! one file: decode (or validate + expand), convert layout, encode.
//! Failures propagate immediately; nothing is retried.

use std::path::Path;

#[cfg(feature = "image")]
use crate::ImageCodec;
use crate::{Codec, DecodeError, EncodeError, PixelBuffer};

/// Converts image files to flat pixel arrays and back through a [`Codec`].
///
/// Holds nothing but the codec; concurrent calls share no mutable state.
#[derive(Debug, Clone)]
pub struct Converter<C> {
    codec: C,
}

#[cfg(feature = "image")]
impl Converter<ImageCodec> {
    /// Converter over the bundled [`ImageCodec`].
    pub fn new() -> Self {
        Self { codec: ImageCodec }
    }
}

#[cfg(feature = "image")]
impl Default for Converter<ImageCodec> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Codec> Converter<C> {
    /// Converter over a custom codec.
    pub fn with_codec(codec: C) -> Self {
        Self { codec }
    }

    /// Decode the image at `path` into a flat `[R, G, B, R, G, B, ...]`
    /// byte array, row-major, alpha dropped.
    ///
    /// Output length is exactly `width * height * 3`. The width is not
    /// embedded — callers that want to re-encode must carry it
    /// separately.
    pub fn decode_to_flat_rgb(&self, path: impl AsRef<Path>) -> Result<Vec<u8>, DecodeError> {
        let path = path.as_ref();
        let buf = self.codec.decode(path)?;
        #[cfg(feature = "log")]
        log::debug!(
            "decoded {}x{} rgba from `{}`",
            buf.width(),
            buf.height(),
            path.display()
        );
        let mut rgb = vec![0u8; buf.pixel_count() * 3];
        if !rgb.is_empty() {
            crate::rgba_to_rgb(buf.as_bytes(), &mut rgb)
                .expect("output sized from the decoded buffer");
        }
        Ok(rgb)
    }

    /// Encode a flat `[R, G, B, ...]` array as an image at `path`, in
    /// rows of `width` pixels. The alpha channel is forced to 255.
    ///
    /// Height is `rgb.len() / (width * 3)`; a length that does not split
    /// into whole rows fails with [`EncodeError::Geometry`] before any
    /// pixel work happens.
    pub fn encode_from_flat_rgb(
        &self,
        rgb: &[u8],
        width: u32,
        path: impl AsRef<Path>,
    ) -> Result<(), EncodeError> {
        let path = path.as_ref();
        let height = rows(rgb.len(), width, 3)?;
        let mut buf = PixelBuffer::new(width, height);
        crate::rgb_to_rgba(rgb, buf.as_bytes_mut()).expect("geometry validated above");
        #[cfg(feature = "log")]
        log::debug!("encoding {width}x{height} rgba to `{}`", path.display());
        self.codec.encode(buf, path)
    }

    /// Decode the image at `path` into packed `(R<<16)|(G<<8)|B` words,
    /// one per pixel, row-major, alpha dropped.
    pub fn decode_to_packed(&self, path: impl AsRef<Path>) -> Result<Vec<u32>, DecodeError> {
        let path = path.as_ref();
        let buf = self.codec.decode(path)?;
        #[cfg(feature = "log")]
        log::debug!(
            "decoded {}x{} rgba from `{}`",
            buf.width(),
            buf.height(),
            path.display()
        );
        let mut packed = vec![0u32; buf.pixel_count()];
        if !packed.is_empty() {
            crate::rgba_to_packed(buf.as_bytes(), &mut packed)
                .expect("output sized from the decoded buffer");
        }
        Ok(packed)
    }

    /// Encode packed `(R<<16)|(G<<8)|B` words as an image at `path`, in
    /// rows of `width` pixels. Alpha is forced to 255; bits above bit 23
    /// are silently discarded.
    pub fn encode_from_packed(
        &self,
        pixels: &[u32],
        width: u32,
        path: impl AsRef<Path>,
    ) -> Result<(), EncodeError> {
        let path = path.as_ref();
        let height = rows(pixels.len(), width, 1)?;
        let mut buf = PixelBuffer::new(width, height);
        crate::packed_to_rgba(pixels, buf.as_bytes_mut()).expect("geometry validated above");
        #[cfg(feature = "log")]
        log::debug!("encoding {width}x{height} rgba to `{}`", path.display());
        self.codec.encode(buf, path)
    }
}

/// Height of an array laid out in rows of `width` pixels, `per_px`
/// values each. Fails instead of truncating.
fn rows(len: usize, width: u32, per_px: usize) -> Result<u32, EncodeError> {
    let geometry = || EncodeError::Geometry { len, width };
    if width == 0 || len == 0 {
        return Err(geometry());
    }
    let row = (width as usize).checked_mul(per_px).ok_or_else(geometry)?;
    if !len.is_multiple_of(row) {
        return Err(geometry());
    }
    u32::try_from(len / row).map_err(|_| geometry())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    /// Codec stub: decodes to a fixed buffer, records what it encodes.
    struct FixedCodec {
        buffer: PixelBuffer,
        written: RefCell<Option<(PixelBuffer, PathBuf)>>,
    }

    impl FixedCodec {
        fn with_rgba(width: u32, height: u32, data: &[u8]) -> Self {
            Self {
                buffer: PixelBuffer::from_rgba(width, height, data.to_vec()).unwrap(),
                written: RefCell::new(None),
            }
        }
    }

    impl Codec for FixedCodec {
        fn decode(&self, _path: &Path) -> Result<PixelBuffer, DecodeError> {
            Ok(self.buffer.clone())
        }

        fn encode(&self, buffer: PixelBuffer, path: &Path) -> Result<(), EncodeError> {
            *self.written.borrow_mut() = Some((buffer, path.to_owned()));
            Ok(())
        }
    }

    #[test]
    fn flat_rgb_drops_alpha_in_order() {
        let codec = FixedCodec::with_rgba(2, 1, &[10, 20, 30, 40, 50, 60, 70, 80]);
        let conv = Converter::with_codec(codec);
        assert_eq!(
            conv.decode_to_flat_rgb("x").unwrap(),
            [10, 20, 30, 50, 60, 70]
        );
    }

    #[test]
    fn packed_matches_flat() {
        let codec = FixedCodec::with_rgba(2, 1, &[10, 20, 30, 40, 50, 60, 70, 80]);
        let conv = Converter::with_codec(codec);
        assert_eq!(conv.decode_to_packed("x").unwrap(), [0x0A141E, 0x323C46]);
        assert_eq!(
            conv.decode_to_packed("x").unwrap().len(),
            conv.decode_to_flat_rgb("x").unwrap().len() / 3
        );
    }

    #[test]
    fn encode_flat_lays_out_rows() {
        let codec = FixedCodec::with_rgba(1, 1, &[0; 4]);
        let conv = Converter::with_codec(codec);
        let flat = [255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255];
        conv.encode_from_flat_rgb(&flat, 2, "out.png").unwrap();

        let (buf, path) = conv.codec.written.borrow_mut().take().unwrap();
        assert_eq!(path, PathBuf::from("out.png"));
        assert_eq!((buf.width(), buf.height()), (2, 2));
        #[rustfmt::skip]
        assert_eq!(
            buf.as_bytes(),
            [
                255, 0, 0, 255,   0, 255, 0, 255,
                0, 0, 255, 255,   255, 255, 255, 255,
            ]
        );
    }

    #[test]
    fn encode_packed_lays_out_rows_and_masks() {
        let codec = FixedCodec::with_rgba(1, 1, &[0; 4]);
        let conv = Converter::with_codec(codec);
        conv.encode_from_packed(&[0xFF0000, 0xAB00_FF00], 1, "out.png")
            .unwrap();

        let (buf, _) = conv.codec.written.borrow_mut().take().unwrap();
        assert_eq!((buf.width(), buf.height()), (1, 2));
        assert_eq!(buf.as_bytes(), [255, 0, 0, 255, 0, 255, 0, 255]);
    }

    #[test]
    fn ragged_arrays_fail_fast() {
        let codec = FixedCodec::with_rgba(1, 1, &[0; 4]);
        let conv = Converter::with_codec(codec);

        let err = conv.encode_from_flat_rgb(&[0; 5], 2, "x").unwrap_err();
        assert!(matches!(err, EncodeError::Geometry { len: 5, width: 2 }));

        let err = conv.encode_from_flat_rgb(&[0; 6], 0, "x").unwrap_err();
        assert!(matches!(err, EncodeError::Geometry { width: 0, .. }));

        let err = conv.encode_from_flat_rgb(&[], 2, "x").unwrap_err();
        assert!(matches!(err, EncodeError::Geometry { len: 0, .. }));

        let err = conv.encode_from_packed(&[0; 3], 2, "x").unwrap_err();
        assert!(matches!(err, EncodeError::Geometry { len: 3, width: 2 }));

        assert!(conv.codec.written.borrow().is_none());
    }

    #[test]
    fn zero_pixel_decode_yields_empty() {
        let codec = FixedCodec::with_rgba(0, 0, &[]);
        let conv = Converter::with_codec(codec);
        assert!(conv.decode_to_flat_rgb("x").unwrap().is_empty());
        assert!(conv.decode_to_packed("x").unwrap().is_empty());
    }
}
