use tracing::debug;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::geometry::transform::{check_scratch, check_transformable, permute};
use crate::image_pipeline::metadata::{ImageMetadata, PixelBuffer};

/// Mirrors a 2-D buffer in place.
///
/// `flip_x` mirrors columns, `flip_y` mirrors rows. Each requested axis
/// toggles the matching metadata flag; dimensions never change.
pub fn flip(
    buffer: &mut PixelBuffer,
    metadata: &mut ImageMetadata,
    flip_x: bool,
    flip_y: bool,
    scratch: Option<&mut [u8]>,
) -> Result<()> {
    let (height, width) = check_transformable(buffer)?;
    check_scratch(scratch.as_deref(), buffer.byte_len())?;

    if !flip_x && !flip_y {
        return Ok(());
    }

    debug!("Flipping {}x{} buffer (x: {}, y: {})", width, height, flip_x, flip_y);

    permute(buffer, scratch, |i| {
        let (r, c) = (i / width, i % width);
        let r = if flip_y { height - 1 - r } else { r };
        let c = if flip_x { width - 1 - c } else { c };
        r * width + c
    })?;

    metadata.flip_x ^= flip_x;
    metadata.flip_y ^= flip_y;

    Ok(())
}
