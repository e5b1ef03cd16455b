// ---------------------------------------------------------------------------
// Row-level layout conversions between RGBA, flat RGB, and packed-u32 pixels,
// with SIMD dispatch.
//
// Architecture: #[rite] row functions contain the SIMD loops.
// #[arcane] wrappers are the dispatch targets for incant!.
// Packed-u32 buffers are handled as their byte view; the public entry points
// cast via bytemuck so every kernel works on &[u8]/&mut [u8].
// ---------------------------------------------------------------------------

use crate::SizeError;
use archmage::incant;
use archmage::prelude::*;

// ===========================================================================
// Validation helpers
// ===========================================================================

#[inline]
fn check_copy(
    src_len: usize,
    src_bpp: usize,
    dst_len: usize,
    dst_bpp: usize,
) -> Result<(), SizeError> {
    if src_len == 0 || !src_len.is_multiple_of(src_bpp) {
        return Err(SizeError::NotPixelAligned);
    }
    if dst_len < (src_len / src_bpp) * dst_bpp {
        return Err(SizeError::PixelCountMismatch);
    }
    Ok(())
}

// ===========================================================================
// Packed-word primitives
// ===========================================================================

/// Pack R, G, B bytes into a `0x00RRGGBB` word.
#[inline(always)]
pub const fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Split a packed word back into `[R, G, B]`. Bits 24..32 are ignored.
#[inline(always)]
pub const fn unpack_rgb(v: u32) -> [u8; 3] {
    [(v >> 16) as u8, (v >> 8) as u8, v as u8]
}

// ===========================================================================
// SIMD constants
// ===========================================================================

#[cfg(target_arch = "x86_64")]
const ALPHA_FF_MASK_AVX: [i8; 32] = [
    0, 0, 0, -1, 0, 0, 0, -1, 0, 0, 0, -1, 0, 0, 0, -1, 0, 0, 0, -1, 0, 0, 0, -1, 0, 0, 0, -1, 0,
    0, 0, -1,
];

// RGBA→RGB shuffle: extract bytes 0,1,2 from each 4-byte pixel (4 pixels → 12 bytes)
#[cfg(target_arch = "x86_64")]
const RGBA_TO_RGB_SHUF_AVX: [i8; 32] = [
    0, 1, 2, 4, 5, 6, 8, 9, 10, 12, 13, 14, -128, -128, -128, -128, 0, 1, 2, 4, 5, 6, 8, 9, 10, 12,
    13, 14, -128, -128, -128, -128,
];

// Pack permutation: merge 12 bytes from each 16-byte lane into contiguous 24 bytes
#[cfg(target_arch = "x86_64")]
const PACK_3X4_PERM_AVX: [i8; 32] = [
    0, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 4, 0, 0, 0, 5, 0, 0, 0, 6, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

#[cfg(target_arch = "x86_64")]
const RGB_TO_RGBA_SHUF_AVX: [i8; 32] = [
    0, 1, 2, -128, 3, 4, 5, -128, 6, 7, 8, -128, 9, 10, 11, -128, 0, 1, 2, -128, 3, 4, 5, -128, 6,
    7, 8, -128, 9, 10, 11, -128,
];

#[cfg(target_arch = "x86_64")]
const RGB_ALIGN_PERM_AVX: [i8; 32] = [
    0, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0, 3, 0, 0, 0, 4, 0, 0, 0, 5, 0, 0, 0, 6, 0, 0, 0,
];

// Dword repack shuffle: [R,G,B,A] → [B,G,R,0] in each 4-byte group. With the
// zeroed slot left alone this is RGBA→packed; OR-ing alpha back in makes it
// packed→RGBA.
#[cfg(target_arch = "x86_64")]
const SWAP_BR_DROP_HI_SHUF_AVX: [i8; 32] = [
    2, 1, 0, -128, 6, 5, 4, -128, 10, 9, 8, -128, 14, 13, 12, -128, 2, 1, 0, -128, 6, 5, 4, -128,
    10, 9, 8, -128, 14, 13, 12, -128,
];

// ===========================================================================
// Scalar row implementations
// ===========================================================================

fn rgba_to_rgb_row_scalar(_token: ScalarToken, src: &[u8], dst: &mut [u8]) {
    for (s, d) in src.chunks_exact(4).zip(dst.chunks_exact_mut(3)) {
        d[0] = s[0];
        d[1] = s[1];
        d[2] = s[2];
    }
}

fn rgb_to_rgba_row_scalar(_token: ScalarToken, src: &[u8], dst: &mut [u8]) {
    for (s, d) in src.chunks_exact(3).zip(dst.chunks_exact_mut(4)) {
        d[0] = s[0];
        d[1] = s[1];
        d[2] = s[2];
        d[3] = 0xFF;
    }
}

fn rgba_to_packed_row_scalar(_token: ScalarToken, src: &[u8], dst: &mut [u8]) {
    let dst32 = bytemuck::cast_slice_mut::<u8, u32>(dst);
    for (s, d) in src.chunks_exact(4).zip(dst32.iter_mut()) {
        *d = pack_rgb(s[0], s[1], s[2]);
    }
}

fn packed_to_rgba_row_scalar(_token: ScalarToken, src: &[u8], dst: &mut [u8]) {
    let src32 = bytemuck::cast_slice::<u8, u32>(src);
    for (&v, d) in src32.iter().zip(dst.chunks_exact_mut(4)) {
        let [r, g, b] = unpack_rgb(v);
        d[0] = r;
        d[1] = g;
        d[2] = b;
        d[3] = 0xFF;
    }
}

// ===========================================================================
// Scalar contiguous wrappers (dispatch targets for incant!)
// ===========================================================================

fn rgba_to_rgb_impl_scalar(t: ScalarToken, s: &[u8], d: &mut [u8]) {
    rgba_to_rgb_row_scalar(t, s, d);
}
fn rgb_to_rgba_impl_scalar(t: ScalarToken, s: &[u8], d: &mut [u8]) {
    rgb_to_rgba_row_scalar(t, s, d);
}
fn rgba_to_packed_impl_scalar(t: ScalarToken, s: &[u8], d: &mut [u8]) {
    rgba_to_packed_row_scalar(t, s, d);
}
fn packed_to_rgba_impl_scalar(t: ScalarToken, s: &[u8], d: &mut [u8]) {
    packed_to_rgba_row_scalar(t, s, d);
}

// ===========================================================================
// x86-64 AVX2 — rite row implementations
// ===========================================================================

// 4→3 strip alpha: pshufb within lanes, vpermd to pack, tmp store for the
// 24-byte write
#[cfg(target_arch = "x86_64")]
#[rite]
fn rgba_to_rgb_row_v3(_token: X64V3Token, src: &[u8], dst: &mut [u8]) {
    let shuf = safe_unaligned_simd::x86_64::_mm256_loadu_si256(&RGBA_TO_RGB_SHUF_AVX);
    let pack = safe_unaligned_simd::x86_64::_mm256_loadu_si256(&PACK_3X4_PERM_AVX);
    let (slen, dlen) = (src.len(), dst.len());
    let (mut is, mut id) = (0, 0);
    while is + 32 <= slen && id + 24 <= dlen {
        let s: &[u8; 32] = src[is..is + 32].try_into().unwrap();
        let v = safe_unaligned_simd::x86_64::_mm256_loadu_si256(s);
        let stripped = _mm256_shuffle_epi8(v, shuf);
        let packed = _mm256_permutevar8x32_epi32(stripped, pack);
        let mut tmp = [0u8; 32];
        safe_unaligned_simd::x86_64::_mm256_storeu_si256(&mut tmp, packed);
        dst[id..id + 24].copy_from_slice(&tmp[..24]);
        is += 32;
        id += 24;
    }
    for (s, d) in src[is..].chunks_exact(4).zip(dst[id..].chunks_exact_mut(3)) {
        d[0] = s[0];
        d[1] = s[1];
        d[2] = s[2];
    }
}

#[cfg(target_arch = "x86_64")]
#[rite]
fn rgb_to_rgba_row_v3(_token: X64V3Token, src: &[u8], dst: &mut [u8]) {
    let perm = safe_unaligned_simd::x86_64::_mm256_loadu_si256(&RGB_ALIGN_PERM_AVX);
    let shuf = safe_unaligned_simd::x86_64::_mm256_loadu_si256(&RGB_TO_RGBA_SHUF_AVX);
    let alpha = safe_unaligned_simd::x86_64::_mm256_loadu_si256(&ALPHA_FF_MASK_AVX);
    let (slen, dlen) = (src.len(), dst.len());
    let (mut is, mut id) = (0, 0);
    while is + 32 <= slen && id + 32 <= dlen {
        let s: &[u8; 32] = src[is..is + 32].try_into().unwrap();
        let rgb = safe_unaligned_simd::x86_64::_mm256_loadu_si256(s);
        let aligned = _mm256_permutevar8x32_epi32(rgb, perm);
        let rgba0 = _mm256_shuffle_epi8(aligned, shuf);
        let rgba = _mm256_or_si256(rgba0, alpha);
        let d: &mut [u8; 32] = (&mut dst[id..id + 32]).try_into().unwrap();
        safe_unaligned_simd::x86_64::_mm256_storeu_si256(d, rgba);
        is += 24;
        id += 32;
    }
    let dst32 = bytemuck::cast_slice_mut::<u8, u32>(&mut dst[id..]);
    for (s, d) in src[is..].chunks_exact(3).zip(dst32.iter_mut()) {
        *d = s[0] as u32 | ((s[1] as u32) << 8) | ((s[2] as u32) << 16) | 0xFF00_0000;
    }
}

#[cfg(target_arch = "x86_64")]
#[rite]
fn rgba_to_packed_row_v3(_token: X64V3Token, src: &[u8], dst: &mut [u8]) {
    let mask = safe_unaligned_simd::x86_64::_mm256_loadu_si256(&SWAP_BR_DROP_HI_SHUF_AVX);
    let n = src.len().min(dst.len());
    let mut i = 0;
    while i + 32 <= n {
        let s: &[u8; 32] = src[i..i + 32].try_into().unwrap();
        let v = safe_unaligned_simd::x86_64::_mm256_loadu_si256(s);
        let packed = _mm256_shuffle_epi8(v, mask);
        let d: &mut [u8; 32] = (&mut dst[i..i + 32]).try_into().unwrap();
        safe_unaligned_simd::x86_64::_mm256_storeu_si256(d, packed);
        i += 32;
    }
    let dst32 = bytemuck::cast_slice_mut::<u8, u32>(&mut dst[i..]);
    for (s, d) in src[i..].chunks_exact(4).zip(dst32.iter_mut()) {
        *d = pack_rgb(s[0], s[1], s[2]);
    }
}

#[cfg(target_arch = "x86_64")]
#[rite]
fn packed_to_rgba_row_v3(_token: X64V3Token, src: &[u8], dst: &mut [u8]) {
    let mask = safe_unaligned_simd::x86_64::_mm256_loadu_si256(&SWAP_BR_DROP_HI_SHUF_AVX);
    let alpha = safe_unaligned_simd::x86_64::_mm256_loadu_si256(&ALPHA_FF_MASK_AVX);
    let n = src.len().min(dst.len());
    let mut i = 0;
    while i + 32 <= n {
        let s: &[u8; 32] = src[i..i + 32].try_into().unwrap();
        let v = safe_unaligned_simd::x86_64::_mm256_loadu_si256(s);
        let rgba = _mm256_or_si256(_mm256_shuffle_epi8(v, mask), alpha);
        let d: &mut [u8; 32] = (&mut dst[i..i + 32]).try_into().unwrap();
        safe_unaligned_simd::x86_64::_mm256_storeu_si256(d, rgba);
        i += 32;
    }
    let src32 = bytemuck::cast_slice::<u8, u32>(&src[i..]);
    for (&v, d) in src32.iter().zip(dst[i..].chunks_exact_mut(4)) {
        let [r, g, b] = unpack_rgb(v);
        d[0] = r;
        d[1] = g;
        d[2] = b;
        d[3] = 0xFF;
    }
}

// x86-64 arcane contiguous wrappers
#[cfg(target_arch = "x86_64")]
#[arcane]
fn rgba_to_rgb_impl_v3(t: X64V3Token, s: &[u8], d: &mut [u8]) {
    rgba_to_rgb_row_v3(t, s, d);
}
#[cfg(target_arch = "x86_64")]
#[arcane]
fn rgb_to_rgba_impl_v3(t: X64V3Token, s: &[u8], d: &mut [u8]) {
    rgb_to_rgba_row_v3(t, s, d);
}
#[cfg(target_arch = "x86_64")]
#[arcane]
fn rgba_to_packed_impl_v3(t: X64V3Token, s: &[u8], d: &mut [u8]) {
    rgba_to_packed_row_v3(t, s, d);
}
#[cfg(target_arch = "x86_64")]
#[arcane]
fn packed_to_rgba_impl_v3(t: X64V3Token, s: &[u8], d: &mut [u8]) {
    packed_to_rgba_row_v3(t, s, d);
}

// ===========================================================================
// ARM NEON — rite row implementations (dword-granular ops only; the 3-byte
// conversions fall back to scalar on aarch64)
// ===========================================================================

#[cfg(target_arch = "aarch64")]
#[rite]
fn rgba_to_packed_row_arm_v2(_token: Arm64V2Token, src: &[u8], dst: &mut [u8]) {
    use core::arch::aarch64::vqtbl1q_u8;
    let mask_bytes: [u8; 16] = [2, 1, 0, 0x80, 6, 5, 4, 0x80, 10, 9, 8, 0x80, 14, 13, 12, 0x80];
    let mask = safe_unaligned_simd::aarch64::vld1q_u8(&mask_bytes);
    let n = src.len().min(dst.len());
    let mut i = 0;
    while i + 16 <= n {
        let s: &[u8; 16] = src[i..i + 16].try_into().unwrap();
        let v = safe_unaligned_simd::aarch64::vld1q_u8(s);
        let d: &mut [u8; 16] = (&mut dst[i..i + 16]).try_into().unwrap();
        safe_unaligned_simd::aarch64::vst1q_u8(d, vqtbl1q_u8(v, mask));
        i += 16;
    }
    let dst32 = bytemuck::cast_slice_mut::<u8, u32>(&mut dst[i..]);
    for (s, d) in src[i..].chunks_exact(4).zip(dst32.iter_mut()) {
        *d = pack_rgb(s[0], s[1], s[2]);
    }
}

#[cfg(target_arch = "aarch64")]
#[rite]
fn packed_to_rgba_row_arm_v2(_token: Arm64V2Token, src: &[u8], dst: &mut [u8]) {
    use core::arch::aarch64::{vorrq_u8, vqtbl1q_u8};
    let mask_bytes: [u8; 16] = [2, 1, 0, 0x80, 6, 5, 4, 0x80, 10, 9, 8, 0x80, 14, 13, 12, 0x80];
    let mask = safe_unaligned_simd::aarch64::vld1q_u8(&mask_bytes);
    let ab: [u8; 16] = [0, 0, 0, 0xFF, 0, 0, 0, 0xFF, 0, 0, 0, 0xFF, 0, 0, 0, 0xFF];
    let alpha = safe_unaligned_simd::aarch64::vld1q_u8(&ab);
    let n = src.len().min(dst.len());
    let mut i = 0;
    while i + 16 <= n {
        let s: &[u8; 16] = src[i..i + 16].try_into().unwrap();
        let v = safe_unaligned_simd::aarch64::vld1q_u8(s);
        let d: &mut [u8; 16] = (&mut dst[i..i + 16]).try_into().unwrap();
        safe_unaligned_simd::aarch64::vst1q_u8(d, vorrq_u8(vqtbl1q_u8(v, mask), alpha));
        i += 16;
    }
    let src32 = bytemuck::cast_slice::<u8, u32>(&src[i..]);
    for (&v, d) in src32.iter().zip(dst[i..].chunks_exact_mut(4)) {
        let [r, g, b] = unpack_rgb(v);
        d[0] = r;
        d[1] = g;
        d[2] = b;
        d[3] = 0xFF;
    }
}

// ARM arcane contiguous wrappers
#[cfg(target_arch = "aarch64")]
#[arcane]
fn rgba_to_packed_impl_arm_v2(t: Arm64V2Token, s: &[u8], d: &mut [u8]) {
    rgba_to_packed_row_arm_v2(t, s, d);
}
#[cfg(target_arch = "aarch64")]
#[arcane]
fn packed_to_rgba_impl_arm_v2(t: Arm64V2Token, s: &[u8], d: &mut [u8]) {
    packed_to_rgba_row_arm_v2(t, s, d);
}

// ===========================================================================
// WASM SIMD128 — rite row implementations
// ===========================================================================

#[cfg(target_arch = "wasm32")]
#[rite]
fn rgba_to_rgb_row_wasm128(_token: Wasm128Token, src: &[u8], dst: &mut [u8]) {
    use core::arch::wasm32::{i8x16, i8x16_swizzle};
    let shuf = i8x16(
        0, 1, 2, 4, 5, 6, 8, 9, 10, 12, 13, 14, -128, -128, -128, -128,
    );
    let (slen, dlen) = (src.len(), dst.len());
    let (mut is, mut id) = (0, 0);
    while is + 16 <= slen && id + 12 <= dlen {
        let s: &[u8; 16] = src[is..is + 16].try_into().unwrap();
        let v = safe_unaligned_simd::wasm32::v128_load(s);
        let mut tmp = [0u8; 16];
        safe_unaligned_simd::wasm32::v128_store(&mut tmp, i8x16_swizzle(v, shuf));
        dst[id..id + 12].copy_from_slice(&tmp[..12]);
        is += 16;
        id += 12;
    }
    for (s, d) in src[is..].chunks_exact(4).zip(dst[id..].chunks_exact_mut(3)) {
        d[0] = s[0];
        d[1] = s[1];
        d[2] = s[2];
    }
}

#[cfg(target_arch = "wasm32")]
#[rite]
fn rgb_to_rgba_row_wasm128(_token: Wasm128Token, src: &[u8], dst: &mut [u8]) {
    use core::arch::wasm32::{i8x16, i8x16_swizzle, u32x4_splat, v128_or};
    let shuf = i8x16(0, 1, 2, -128, 3, 4, 5, -128, 6, 7, 8, -128, 9, 10, 11, -128);
    let alpha = u32x4_splat(0xFF000000);
    let (slen, dlen) = (src.len(), dst.len());
    let (mut is, mut id) = (0, 0);
    while is + 16 <= slen && id + 16 <= dlen {
        let s: &[u8; 16] = src[is..is + 16].try_into().unwrap();
        let v = safe_unaligned_simd::wasm32::v128_load(s);
        let d: &mut [u8; 16] = (&mut dst[id..id + 16]).try_into().unwrap();
        safe_unaligned_simd::wasm32::v128_store(d, v128_or(i8x16_swizzle(v, shuf), alpha));
        is += 12;
        id += 16;
    }
    let dst32 = bytemuck::cast_slice_mut::<u8, u32>(&mut dst[id..]);
    for (s, d) in src[is..].chunks_exact(3).zip(dst32.iter_mut()) {
        *d = s[0] as u32 | ((s[1] as u32) << 8) | ((s[2] as u32) << 16) | 0xFF00_0000;
    }
}

#[cfg(target_arch = "wasm32")]
#[rite]
fn rgba_to_packed_row_wasm128(_token: Wasm128Token, src: &[u8], dst: &mut [u8]) {
    use core::arch::wasm32::{i8x16, i8x16_swizzle};
    let mask = i8x16(2, 1, 0, -128, 6, 5, 4, -128, 10, 9, 8, -128, 14, 13, 12, -128);
    let n = src.len().min(dst.len());
    let mut i = 0;
    while i + 16 <= n {
        let s: &[u8; 16] = src[i..i + 16].try_into().unwrap();
        let v = safe_unaligned_simd::wasm32::v128_load(s);
        let d: &mut [u8; 16] = (&mut dst[i..i + 16]).try_into().unwrap();
        safe_unaligned_simd::wasm32::v128_store(d, i8x16_swizzle(v, mask));
        i += 16;
    }
    let dst32 = bytemuck::cast_slice_mut::<u8, u32>(&mut dst[i..]);
    for (s, d) in src[i..].chunks_exact(4).zip(dst32.iter_mut()) {
        *d = pack_rgb(s[0], s[1], s[2]);
    }
}

#[cfg(target_arch = "wasm32")]
#[rite]
fn packed_to_rgba_row_wasm128(_token: Wasm128Token, src: &[u8], dst: &mut [u8]) {
    use core::arch::wasm32::{i8x16, i8x16_swizzle, u32x4_splat, v128_or};
    let mask = i8x16(2, 1, 0, -128, 6, 5, 4, -128, 10, 9, 8, -128, 14, 13, 12, -128);
    let alpha = u32x4_splat(0xFF000000);
    let n = src.len().min(dst.len());
    let mut i = 0;
    while i + 16 <= n {
        let s: &[u8; 16] = src[i..i + 16].try_into().unwrap();
        let v = safe_unaligned_simd::wasm32::v128_load(s);
        let d: &mut [u8; 16] = (&mut dst[i..i + 16]).try_into().unwrap();
        safe_unaligned_simd::wasm32::v128_store(d, v128_or(i8x16_swizzle(v, mask), alpha));
        i += 16;
    }
    let src32 = bytemuck::cast_slice::<u8, u32>(&src[i..]);
    for (&v, d) in src32.iter().zip(dst[i..].chunks_exact_mut(4)) {
        let [r, g, b] = unpack_rgb(v);
        d[0] = r;
        d[1] = g;
        d[2] = b;
        d[3] = 0xFF;
    }
}

// WASM arcane contiguous wrappers
#[cfg(target_arch = "wasm32")]
#[arcane]
fn rgba_to_rgb_impl_wasm128(t: Wasm128Token, s: &[u8], d: &mut [u8]) {
    rgba_to_rgb_row_wasm128(t, s, d);
}
#[cfg(target_arch = "wasm32")]
#[arcane]
fn rgb_to_rgba_impl_wasm128(t: Wasm128Token, s: &[u8], d: &mut [u8]) {
    rgb_to_rgba_row_wasm128(t, s, d);
}
#[cfg(target_arch = "wasm32")]
#[arcane]
fn rgba_to_packed_impl_wasm128(t: Wasm128Token, s: &[u8], d: &mut [u8]) {
    rgba_to_packed_row_wasm128(t, s, d);
}
#[cfg(target_arch = "wasm32")]
#[arcane]
fn packed_to_rgba_impl_wasm128(t: Wasm128Token, s: &[u8], d: &mut [u8]) {
    packed_to_rgba_row_wasm128(t, s, d);
}

// ===========================================================================
// Public API
// ===========================================================================

/// RGBA (4 bytes/px) → RGB (3 bytes/px). Drops byte 3 (alpha), keeps order.
///
/// Output bytes are the exact R, G, B bytes of the source in row-major
/// pixel order.
pub fn rgba_to_rgb(src: &[u8], dst: &mut [u8]) -> Result<(), SizeError> {
    check_copy(src.len(), 4, dst.len(), 3)?;
    incant!(rgba_to_rgb_impl(src, dst), [v3, wasm128, scalar]);
    Ok(())
}

/// RGB (3 bytes/px) → RGBA (4 bytes/px). Keeps channel order, alpha=255.
pub fn rgb_to_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), SizeError> {
    check_copy(src.len(), 3, dst.len(), 4)?;
    incant!(rgb_to_rgba_impl(src, dst), [v3, wasm128, scalar]);
    Ok(())
}

/// RGBA (4 bytes/px) → packed `(R<<16)|(G<<8)|B` words. Alpha discarded.
///
/// Every output word is in `0..=0xFFFFFF`.
pub fn rgba_to_packed(src: &[u8], dst: &mut [u32]) -> Result<(), SizeError> {
    let dst = bytemuck::cast_slice_mut::<u32, u8>(dst);
    check_copy(src.len(), 4, dst.len(), 4)?;
    incant!(rgba_to_packed_impl(src, dst), [v3, arm_v2, wasm128, scalar]);
    Ok(())
}

/// Packed `(R<<16)|(G<<8)|B` words → RGBA (4 bytes/px), alpha=255.
///
/// Bits 24..32 of each input word are silently discarded.
pub fn packed_to_rgba(src: &[u32], dst: &mut [u8]) -> Result<(), SizeError> {
    let src = bytemuck::cast_slice::<u32, u8>(src);
    check_copy(src.len(), 4, dst.len(), 4)?;
    incant!(packed_to_rgba_impl(src, dst), [v3, arm_v2, wasm128, scalar]);
    Ok(())
}

// ===========================================================================
// Tests — every kernel against its scalar reference, at every SIMD tier
// ===========================================================================
