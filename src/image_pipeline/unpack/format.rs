use tracing::debug;

use crate::image_pipeline::common::error::{ImageError, Result};
use crate::image_pipeline::metadata::{Encoding, ImageMetadata, PixelBuffer};
use crate::image_pipeline::unpack::{
    pixel_count, unpack_bit_packed, unpack_mono10p, unpack_mono12_packed, unpack_mono12p,
};

/// Packed pixel formats emitted by the supported sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackedFormat {
    /// 3 bytes per 2 pixels, middle byte shared between both.
    Mono12Packed,
    Mono10p,
    Mono12p,
    /// Generic bit-contiguous packing, 9 to 15 bits per pixel.
    MonoXXp(u16),
}

impl PackedFormat {
    pub fn bits_per_pixel(self) -> u16 {
        match self {
            PackedFormat::Mono12Packed | PackedFormat::Mono12p => 12,
            PackedFormat::Mono10p => 10,
            PackedFormat::MonoXXp(bpp) => bpp,
        }
    }

    /// Size in bytes of a packed frame holding `pixels` pixels.
    ///
    /// Saturates at `usize::MAX` for pixel counts no source could hold.
    pub fn packed_len(self, pixels: usize) -> usize {
        pixels
            .saturating_mul(self.bits_per_pixel() as usize)
            .div_ceil(8)
    }

    pub fn unpack_into(self, src: &[u8], width: usize, height: usize, dst: &mut [u16]) -> Result<()> {
        match self {
            PackedFormat::Mono12Packed => unpack_mono12_packed(src, width, height, dst),
            PackedFormat::Mono10p => unpack_mono10p(src, width, height, dst),
            PackedFormat::Mono12p => unpack_mono12p(src, width, height, dst),
            PackedFormat::MonoXXp(bpp) => unpack_bit_packed(src, width, height, bpp, dst),
        }
    }
}

/// Unpacks a whole frame into a `(height, width)` 16-bit grayscale buffer.
///
/// On success the metadata is marked as `Gray` with the format's sample depth.
pub fn unpack_frame(
    src: &[u8],
    width: usize,
    height: usize,
    format: PackedFormat,
    metadata: &mut ImageMetadata,
) -> Result<PixelBuffer> {
    if width == 0 || height == 0 {
        return Err(ImageError::InvalidDimensions(width, height));
    }

    debug!("Unpacking {:?} frame: {}x{}, {} bytes", format, width, height, src.len());

    let mut samples = vec![0u16; pixel_count(width, height)?];
    format.unpack_into(src, width, height, &mut samples)?;
    let buffer = PixelBuffer::from_u16(&samples, [height, width])?;

    metadata.encoding = Encoding::Gray;
    metadata.bits_per_pixel = format.bits_per_pixel();

    Ok(buffer)
}
