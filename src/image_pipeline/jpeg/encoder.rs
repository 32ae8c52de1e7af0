use std::borrow::Cow;

use image::ExtendedColorType;
use image::codecs::jpeg::JpegEncoder;
use tracing::debug;

use crate::image_pipeline::common::error::{ImageError, Result};
use crate::image_pipeline::jpeg::comment::{insert_comment, MAX_COMMENT_LEN};
use crate::image_pipeline::jpeg::types::JpegConfig;
use crate::image_pipeline::metadata::{ByteOrder, Encoding, ImageMetadata, PixelBuffer, SampleType};

/// Baseline JPEG limits each dimension to 16 bits.
const MAX_JPEG_DIMENSION: usize = u16::MAX as usize;

/// Keeps the most significant byte of every 16-bit sample.
///
/// Big-endian storage has the MSB first, little-endian has it second.
fn most_significant_bytes(data: &[u8], byte_order: ByteOrder) -> Vec<u8> {
    let msb = match byte_order {
        ByteOrder::Big => 0,
        ByteOrder::Little => 1,
    };
    data.chunks_exact(2).map(|sample| sample[msb]).collect()
}

/// Encodes an indexable GRAY or RGB buffer into an opaque JPEG buffer.
///
/// 16-bit samples are reduced to their upper 8 bits. The returned buffer keeps
/// the logical shape of the source; on success `metadata.encoding` becomes
/// [`Encoding::Jpeg`]. Nothing is modified when an error is returned.
pub fn encode_jpeg(
    buffer: &PixelBuffer,
    metadata: &mut ImageMetadata,
    config: &JpegConfig,
) -> Result<PixelBuffer> {
    if config.quality > 100 {
        return Err(ImageError::InvalidParameter(format!(
            "JPEG quality must be in [0, 100], got {}",
            config.quality
        )));
    }
    if !buffer.is_indexable() {
        return Err(ImageError::UnsupportedFormat(
            "cannot encode a non-indexable buffer".to_string(),
        ));
    }

    let (color_type, channels) = match metadata.encoding {
        Encoding::Gray => (ExtendedColorType::L8, 1),
        Encoding::Rgb => (ExtendedColorType::Rgb8, 3),
        other => {
            return Err(ImageError::UnsupportedFormat(format!(
                "JPEG encoding requires GRAY or RGB data, got {:?}",
                other
            )));
        }
    };

    let sample_type = buffer.sample_type();
    if !matches!(sample_type, SampleType::U8 | SampleType::U16) {
        return Err(ImageError::UnsupportedFormat(format!(
            "JPEG encoding requires 8 or 16 bit samples, got {:?}",
            sample_type
        )));
    }

    let shape = buffer.shape();
    let layout_ok = match shape.rank() {
        2 => channels == 1,
        3 => shape[2] == channels,
        _ => false,
    };
    if !layout_ok {
        return Err(ImageError::UnsupportedFormat(format!(
            "shape {} does not match {:?} encoding",
            shape, metadata.encoding
        )));
    }

    let (height, width) = (shape[0], shape[1]);
    if width == 0 || height == 0 || width > MAX_JPEG_DIMENSION || height > MAX_JPEG_DIMENSION {
        return Err(ImageError::InvalidDimensions(width, height));
    }

    debug!(
        "Encoding JPEG image: {}x{} {:?} {:?}, quality {}",
        width, height, metadata.encoding, sample_type, config.quality
    );

    let samples: Cow<[u8]> = match sample_type {
        SampleType::U16 => Cow::Owned(most_significant_bytes(buffer.as_bytes(), buffer.byte_order())),
        _ => Cow::Borrowed(buffer.as_bytes()),
    };

    let mut jpeg = Vec::new();
    {
        // The encoder's lowest supported quality is 1.
        let mut encoder = JpegEncoder::new_with_quality(&mut jpeg, config.quality.max(1));
        encoder
            .encode(&samples, width as u32, height as u32, color_type)
            .map_err(|e| ImageError::EncodeError(e.to_string()))?;
    }

    if !config.comment.is_empty() {
        if config.comment.len() > MAX_COMMENT_LEN {
            debug!("JPEG comment truncated from {} to {} bytes", config.comment.len(), MAX_COMMENT_LEN);
        }
        jpeg = insert_comment(&jpeg, config.comment.as_bytes())?;
    }

    debug!("JPEG encoding complete, {} bytes", jpeg.len());

    metadata.encoding = Encoding::Jpeg;
    metadata.bits_per_pixel = 8;

    Ok(PixelBuffer::opaque(jpeg, shape.clone()))
}
