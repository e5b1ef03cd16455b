//! # flatpix
//!
//! *Lay your pixels out flat.*
//!
//! Image files in, flat numeric arrays out — and back again. flatpix
//! decodes any image the bundled codec understands into either a flat
//! `[R, G, B, R, G, B, ...]` byte array or a packed `0x00RRGGBB` word
//! array, and re-encodes such arrays into image files. Alpha is dropped
//! on the way out and forced fully opaque on the way back in.
//!
//! The layout conversions at the core are SIMD-optimized (x86-64 AVX2,
//! ARM NEON, WASM SIMD128) with automatic fallback to scalar code, and
//! are usable on raw slices without touching a file:
//!
//! ```rust
//! let rgba = vec![255u8, 0, 128, 200, 0, 200, 100, 37];
//! let mut rgb = vec![0u8; 6];
//! flatpix::rgba_to_rgb(&rgba, &mut rgb).unwrap();
//! assert_eq!(rgb, [255, 0, 128, 0, 200, 100]);
//!
//! let mut packed = vec![0u32; 2];
//! flatpix::rgba_to_packed(&rgba, &mut packed).unwrap();
//! assert_eq!(packed, [0xFF0080, 0x00C864]);
//! ```
//!
//! File-level conversions go through [`Converter`], which reads and
//! writes whole images via a pluggable [`Codec`]:
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let conv = flatpix::Converter::new();
//! let rgb = conv.decode_to_flat_rgb("photo.png")?;
//! conv.encode_from_flat_rgb(&rgb, 640, "copy.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature flags
//!
//! - **`image`** *(default)* — [`ImageCodec`], a codec backed by the
//!   [`image`] crate. Output format follows the destination extension.
//! - **`tokio`** *(default)* — [`mod@tokio`], the four file operations
//!   as async functions running on the tokio blocking pool.
//! - **`rgb`** *(default)* — [`typed`], zero-copy views of flat arrays
//!   as [`rgb`] crate pixel types.
//! - **`log`** — debug-level records of decoded/encoded dimensions.

#![forbid(unsafe_code)]

use thiserror::Error;

mod repack;
pub use repack::*;

mod buffer;
pub use buffer::PixelBuffer;

mod codec;
#[cfg(feature = "image")]
pub use codec::ImageCodec;
pub use codec::{Codec, DecodeError, EncodeError};

mod convert;
pub use convert::Converter;

#[cfg(feature = "tokio")]
pub mod tokio;

#[cfg(feature = "rgb")]
pub mod typed;

/// Slice geometry rejected by a layout conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SizeError {
    /// Source length is zero or not a whole number of pixels.
    #[error("buffer length is not a whole number of pixels")]
    NotPixelAligned,
    /// Destination cannot hold the source pixel count.
    #[error("destination buffer is smaller than the source pixel count")]
    PixelCountMismatch,
}
