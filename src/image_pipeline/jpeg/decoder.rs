use std::io::Cursor;

use image::ImageDecoder;
use image::codecs::jpeg::JpegDecoder;
use tracing::debug;

use crate::image_pipeline::common::error::{ImageError, Result};
use crate::image_pipeline::jpeg::comment::has_soi;
use crate::image_pipeline::metadata::{Dims, Encoding, ImageMetadata, PixelBuffer};

/// Decodes an opaque JPEG buffer into an indexable 8-bit buffer.
///
/// Single-component streams give a `(height, width)` buffer, streams with
/// `c` components a `(height, width, c)` buffer; either way the metadata
/// reports `Gray`. The metadata is only updated once decoding has succeeded.
pub fn decode_jpeg(buffer: &PixelBuffer, metadata: &mut ImageMetadata) -> Result<PixelBuffer> {
    if buffer.is_indexable() && metadata.encoding != Encoding::Jpeg {
        return Err(ImageError::UnsupportedFormat(format!(
            "expected a JPEG payload, got {:?} samples",
            metadata.encoding
        )));
    }

    let payload = buffer.as_bytes();
    debug!("Decoding JPEG image, {} bytes", payload.len());

    if !has_soi(payload) {
        return Err(ImageError::FormatError("missing SOI marker".to_string()));
    }

    let decoder =
        JpegDecoder::new(Cursor::new(payload)).map_err(|e| ImageError::FormatError(e.to_string()))?;

    let (width, height) = decoder.dimensions();
    let color_type = decoder.color_type();
    let channels = color_type.channel_count() as usize;
    if color_type.bytes_per_pixel() as usize != channels {
        return Err(ImageError::UnsupportedFormat(format!(
            "JPEG decodes to {:?}, only 8-bit components are supported",
            color_type
        )));
    }

    let mut samples = vec![0u8; decoder.total_bytes() as usize];
    decoder
        .read_image(&mut samples)
        .map_err(|e| ImageError::FormatError(e.to_string()))?;

    let (width, height) = (width as usize, height as usize);
    let shape = if channels == 1 {
        Dims::from([height, width])
    } else {
        Dims::from([height, width, channels])
    };
    let decoded = PixelBuffer::from_u8(samples, shape)?;

    debug!("Decoded JPEG image: {}x{}, {} components", width, height, channels);

    // Multi-component streams keep their interleaved bytes but are not
    // promoted to a color encoding.
    metadata.encoding = Encoding::Gray;
    metadata.bits_per_pixel = 8;

    Ok(decoded)
}
