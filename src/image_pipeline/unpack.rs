//! Packed pixel unpacking module
//!
//! Expands vendor bit-packed sensor formats into one 16-bit sample per pixel.

mod bit_packed;
mod format;
mod packed12;


pub use bit_packed::{unpack_bit_packed, unpack_mono10p, unpack_mono12p};
pub use format::{unpack_frame, PackedFormat};
pub use packed12::unpack_mono12_packed;

use crate::image_pipeline::common::error::{ImageError, Result};

/// `width * height`, rejecting dimensions whose product does not fit in `usize`.
fn pixel_count(width: usize, height: usize) -> Result<usize> {
    width.checked_mul(height).ok_or_else(|| {
        ImageError::InvalidParameter(format!("frame of {}x{} pixels is too large", width, height))
    })
}

/// Checks the caller-supplied slices before any sample is written.
fn check_capacity(src: &[u8], required_src: usize, dst: &[u16], pixels: usize) -> Result<()> {
    if dst.len() < pixels {
        return Err(ImageError::InvalidParameter(format!(
            "destination holds {} samples, {} required",
            dst.len(),
            pixels
        )));
    }
    if src.len() < required_src {
        return Err(ImageError::InvalidParameter(format!(
            "packed source holds {} bytes, {} required",
            src.len(),
            required_src
        )));
    }
    Ok(())
}
