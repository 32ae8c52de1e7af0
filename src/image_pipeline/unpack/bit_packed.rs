//! Bit-contiguous MonoXXp unpacking.
//!
//! Successive pixels are packed LSB-first with no padding, so a pixel may
//! straddle a byte boundary. Pixel `p` starts at bit `p * bpp` of the stream
//! and is read from the 16-bit little-endian word at byte `p * bpp / 8`.

use crate::image_pipeline::common::error::{ImageError, Result};
use crate::image_pipeline::unpack::{check_capacity, pixel_count};

const MIN_BITS_PER_PIXEL: u16 = 9;
const MAX_BITS_PER_PIXEL: u16 = 15;

/// Unpacks a bit-contiguous stream with `bits_per_pixel` in `[9, 15]`.
pub fn unpack_bit_packed(
    src: &[u8],
    width: usize,
    height: usize,
    bits_per_pixel: u16,
    dst: &mut [u16],
) -> Result<()> {
    if !(MIN_BITS_PER_PIXEL..=MAX_BITS_PER_PIXEL).contains(&bits_per_pixel) {
        return Err(ImageError::InvalidParameter(format!(
            "bits per pixel must be in [{}, {}], got {}",
            MIN_BITS_PER_PIXEL, MAX_BITS_PER_PIXEL, bits_per_pixel
        )));
    }

    let pixels = pixel_count(width, height)?;
    let bpp = bits_per_pixel as usize;
    let packed_bits = pixels.checked_mul(bpp).ok_or_else(|| {
        ImageError::InvalidParameter(format!(
            "{} pixels at {} bits overflow the packed length",
            pixels, bpp
        ))
    })?;
    check_capacity(src, packed_bits.div_ceil(8), dst, pixels)?;

    let mask: u16 = 0xFFFF >> (16 - bits_per_pixel);
    for (p, sample) in dst.iter_mut().take(pixels).enumerate() {
        let bit_offset = p * bpp;
        let byte = bit_offset / 8;
        // 16-bit read window: when shift + bpp > 16 the high bits of the
        // field are not read and come out as zero.
        let window = u16::from_le_bytes([src[byte], src.get(byte + 1).copied().unwrap_or(0)]);
        *sample = (window >> (bit_offset % 8)) & mask;
    }

    Ok(())
}

/// Mono10p: 10-bit pixels, bit-contiguous.
pub fn unpack_mono10p(src: &[u8], width: usize, height: usize, dst: &mut [u16]) -> Result<()> {
    unpack_bit_packed(src, width, height, 10, dst)
}

/// Mono12p: 12-bit pixels, bit-contiguous.
pub fn unpack_mono12p(src: &[u8], width: usize, height: usize, dst: &mut [u16]) -> Result<()> {
    unpack_bit_packed(src, width, height, 12, dst)
}
