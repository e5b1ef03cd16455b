//! The four conversions as async functions.
//!
//! Decoding and encoding are blocking work — whole-file I/O plus a full
//! pass over the pixels — so each function here hands the complete
//! operation to the tokio blocking pool and awaits it. Concurrent calls
//! are independent units of work over their own buffers and paths; there
//! is no coordination, cancellation, or retry logic.
//!
//! The plain functions use the bundled [`ImageCodec`](crate::ImageCodec);
//! the `*_with` variants accept a [`Converter`] over any codec that can
//! move to the pool.

use std::path::Path;

use tokio::task;

use crate::{Codec, Converter, DecodeError, EncodeError};

async fn run<T, F>(job: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    task::spawn_blocking(job)
        .await
        .expect("conversion task panicked")
}

/// [`Converter::decode_to_flat_rgb`] on the blocking pool.
pub async fn decode_to_flat_rgb_with<C>(
    conv: Converter<C>,
    path: impl AsRef<Path>,
) -> Result<Vec<u8>, DecodeError>
where
    C: Codec + Send + 'static,
{
    let path = path.as_ref().to_owned();
    run(move || conv.decode_to_flat_rgb(path)).await
}

/// [`Converter::encode_from_flat_rgb`] on the blocking pool.
pub async fn encode_from_flat_rgb_with<C>(
    conv: Converter<C>,
    rgb: Vec<u8>,
    width: u32,
    path: impl AsRef<Path>,
) -> Result<(), EncodeError>
where
    C: Codec + Send + 'static,
{
    let path = path.as_ref().to_owned();
    run(move || conv.encode_from_flat_rgb(&rgb, width, path)).await
}

/// [`Converter::decode_to_packed`] on the blocking pool.
pub async fn decode_to_packed_with<C>(
    conv: Converter<C>,
    path: impl AsRef<Path>,
) -> Result<Vec<u32>, DecodeError>
where
    C: Codec + Send + 'static,
{
    let path = path.as_ref().to_owned();
    run(move || conv.decode_to_packed(path)).await
}

/// [`Converter::encode_from_packed`] on the blocking pool.
pub async fn encode_from_packed_with<C>(
    conv: Converter<C>,
    pixels: Vec<u32>,
    width: u32,
    path: impl AsRef<Path>,
) -> Result<(), EncodeError>
where
    C: Codec + Send + 'static,
{
    let path = path.as_ref().to_owned();
    run(move || conv.encode_from_packed(&pixels, width, path)).await
}

/// Decode the image at `path` into a flat RGB byte array.
#[cfg(feature = "image")]
pub async fn decode_to_flat_rgb(path: impl AsRef<Path>) -> Result<Vec<u8>, DecodeError> {
    decode_to_flat_rgb_with(Converter::new(), path).await
}

/// Encode a flat RGB byte array as an image at `path`.
#[cfg(feature = "image")]
pub async fn encode_from_flat_rgb(
    rgb: Vec<u8>,
    width: u32,
    path: impl AsRef<Path>,
) -> Result<(), EncodeError> {
    encode_from_flat_rgb_with(Converter::new(), rgb, width, path).await
}

/// Decode the image at `path` into packed `(R<<16)|(G<<8)|B` words.
#[cfg(feature = "image")]
pub async fn decode_to_packed(path: impl AsRef<Path>) -> Result<Vec<u32>, DecodeError> {
    decode_to_packed_with(Converter::new(), path).await
}

/// Encode packed `(R<<16)|(G<<8)|B` words as an image at `path`.
#[cfg(feature = "image")]
pub async fn encode_from_packed(
    pixels: Vec<u32>,
    width: u32,
    path: impl AsRef<Path>,
) -> Result<(), EncodeError> {
    encode_from_packed_with(Converter::new(), pixels, width, path).await
}
