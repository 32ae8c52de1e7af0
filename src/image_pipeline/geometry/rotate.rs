use tracing::debug;

use crate::image_pipeline::common::error::{ImageError, Result};
use crate::image_pipeline::geometry::transform::{check_scratch, check_transformable, permute};
use crate::image_pipeline::metadata::{ImageMetadata, PixelBuffer, Rotation};

/// Rotates a 2-D buffer clockwise by `angle` degrees (0, 90, 180 or 270).
///
/// For 90 and 270 degrees width and height are swapped, the ROI offset and
/// binning axes are reversed and the flip flags are exchanged. The tracked
/// rotation advances modulo 360 unless it is [`Rotation::Undefined`], which
/// stays undefined while the samples are still rotated.
///
/// `scratch`, when given, must hold at least `buffer.byte_len()` bytes;
/// otherwise a temporary copy is allocated for the duration of the call.
/// Buffer and metadata are left untouched when an error is returned.
pub fn rotate(
    buffer: &mut PixelBuffer,
    metadata: &mut ImageMetadata,
    angle: u32,
    scratch: Option<&mut [u8]>,
) -> Result<()> {
    let rotation = Rotation::from_degrees(angle).ok_or_else(|| {
        ImageError::InvalidParameter(format!(
            "rotation angle must be 0, 90, 180 or 270, got {}",
            angle
        ))
    })?;
    let (height, width) = check_transformable(buffer)?;
    check_scratch(scratch.as_deref(), buffer.byte_len())?;

    if rotation == Rotation::Rot0 {
        return Ok(());
    }

    debug!("Rotating {}x{} buffer by {} degrees", width, height, angle);

    match rotation {
        Rotation::Rot90 => permute(buffer, scratch, |i| {
            let (r, c) = (i / height, i % height);
            (height - 1 - c) * width + r
        })?,
        Rotation::Rot180 => permute(buffer, scratch, |i| height * width - 1 - i)?,
        Rotation::Rot270 => permute(buffer, scratch, |i| {
            let (r, c) = (i / height, i % height);
            c * width + (width - 1 - r)
        })?,
        Rotation::Rot0 | Rotation::Undefined => {}
    }

    if rotation.swaps_dimensions() {
        let mut shape = buffer.shape().clone();
        shape.reverse();
        buffer.set_shape(shape);
        metadata.roi_offset.reverse();
        metadata.binning.reverse();
        std::mem::swap(&mut metadata.flip_x, &mut metadata.flip_y);
    }
    metadata.rotation = metadata.rotation.rotated_by(rotation);

    Ok(())
}
