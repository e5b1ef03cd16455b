//! File-level round-trips through the bundled codec.

use flatpix::{Codec, Converter, DecodeError, EncodeError, ImageCodec};

fn gradient_rgb(pixels: usize) -> Vec<u8> {
    (0..pixels * 3).map(|i| (i * 7 % 256) as u8).collect()
}

#[test]
fn flat_rgb_roundtrip_preserves_channels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gradient.png");
    let conv = Converter::new();

    let flat = gradient_rgb(8 * 5);
    conv.encode_from_flat_rgb(&flat, 8, &path).unwrap();
    assert_eq!(conv.decode_to_flat_rgb(&path).unwrap(), flat);
}

#[test]
fn packed_len_is_third_of_flat_len() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gradient.png");
    let conv = Converter::new();
    conv.encode_from_flat_rgb(&gradient_rgb(21), 7, &path).unwrap();

    let flat = conv.decode_to_flat_rgb(&path).unwrap();
    let packed = conv.decode_to_packed(&path).unwrap();
    assert_eq!(packed.len(), flat.len() / 3);
    for (px, rgb) in packed.iter().zip(flat.chunks_exact(3)) {
        assert_eq!(*px, flatpix::pack_rgb(rgb[0], rgb[1], rgb[2]));
    }
}

#[test]
fn two_by_two_rows_land_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quad.png");
    let conv = Converter::new();

    // red, green / blue, white
    let flat = [255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255];
    conv.encode_from_flat_rgb(&flat, 2, &path).unwrap();

    let buf = ImageCodec.decode(&path).unwrap();
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
fn packed_column_lands_top_to_bottom() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("column.png");
    let conv = Converter::new();

    conv.encode_from_packed(&[0xFF0000, 0x00FF00], 1, &path).unwrap();

    let buf = ImageCodec.decode(&path).unwrap();
    assert_eq!((buf.width(), buf.height()), (1, 2));
    assert_eq!(buf.as_bytes(), [255, 0, 0, 255, 0, 255, 0, 255]);
    assert_eq!(conv.decode_to_packed(&path).unwrap(), [0xFF0000, 0x00FF00]);
}

#[test]
fn encoded_images_are_fully_opaque() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("opaque.png");
    let conv = Converter::new();

    // Garbage above bit 23 is masked away, never an error.
    let pixels: Vec<u32> = (0..12u32).map(|i| i.wrapping_mul(0xDEAD_BEEF)).collect();
    conv.encode_from_packed(&pixels, 4, &path).unwrap();

    let buf = ImageCodec.decode(&path).unwrap();
    assert!(buf.as_bytes().chunks_exact(4).all(|px| px[3] == 255));

    let expected: Vec<u32> = pixels.iter().map(|v| v & 0xFF_FFFF).collect();
    assert_eq!(conv.decode_to_packed(&path).unwrap(), expected);
}

#[test]
fn ragged_arrays_error_before_touching_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("never.png");
    let conv = Converter::new();

    let err = conv.encode_from_flat_rgb(&[0; 10], 2, &path).unwrap_err();
    assert!(matches!(err, EncodeError::Geometry { len: 10, width: 2 }));
    let err = conv.encode_from_packed(&[0; 5], 3, &path).unwrap_err();
    assert!(matches!(err, EncodeError::Geometry { len: 5, width: 3 }));
    assert!(!path.exists());
}

#[test]
fn missing_input_surfaces_io_error() {
    let conv = Converter::new();
    let err = conv.decode_to_flat_rgb("no/such/file.png").unwrap_err();
    assert!(matches!(err, DecodeError::Io { .. }), "{err:?}");
}

#[test]
fn output_format_follows_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("strip.bmp");
    let conv = Converter::new();

    let flat = gradient_rgb(6);
    conv.encode_from_flat_rgb(&flat, 3, &path).unwrap();
    assert_eq!(conv.decode_to_flat_rgb(&path).unwrap(), flat);
}
