use tracing::debug;

use crate::image_pipeline::common::error::{ImageError, Result};
use crate::image_pipeline::unpack::{check_capacity, pixel_count};

/// Unpacks MONO12PACKED data: every 3 bytes carry 2 pixels.
///
/// For the byte triplet `(b0, b1, b2)` the pixels are
/// `(b0 << 4) | (b1 & 0xF)` and `(b2 << 4) | (b1 >> 4)`.
///
/// Pixels are consumed in pairs while `px + 1 < width * height`, so when the
/// pixel count is odd the last sample of `dst` is left untouched.
pub fn unpack_mono12_packed(src: &[u8], width: usize, height: usize, dst: &mut [u16]) -> Result<()> {
    let pixels = pixel_count(width, height)?;
    let required = (pixels / 2).checked_mul(3).ok_or_else(|| {
        ImageError::InvalidParameter(format!("{} pixels overflow the packed length", pixels))
    })?;
    check_capacity(src, required, dst, pixels)?;

    if pixels % 2 == 1 {
        debug!("MONO12PACKED frame has an odd pixel count ({}), last pixel not unpacked", pixels);
    }

    let mut px = 0;
    let mut idx = 0;
    while px + 1 < pixels {
        let b0 = src[idx] as u16;
        let b1 = src[idx + 1] as u16;
        let b2 = src[idx + 2] as u16;
        dst[px] = (b0 << 4) | (b1 & 0xF);
        dst[px + 1] = (b2 << 4) | (b1 >> 4);
        px += 2;
        idx += 3;
    }

    Ok(())
}
