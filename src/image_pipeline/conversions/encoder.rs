use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::jpeg::{encode_jpeg, JpegConfig};
use crate::image_pipeline::metadata::{ImageMetadata, PixelBuffer};

pub trait FrameEncoder {
    fn encode(
        &self,
        buffer: &PixelBuffer,
        metadata: &mut ImageMetadata,
        config: &JpegConfig,
    ) -> Result<PixelBuffer>;
}

/// Encoder backed by [`encode_jpeg`].
pub struct JpegFrameEncoder;

impl FrameEncoder for JpegFrameEncoder {
    fn encode(
        &self,
        buffer: &PixelBuffer,
        metadata: &mut ImageMetadata,
        config: &JpegConfig,
    ) -> Result<PixelBuffer> {
        encode_jpeg(buffer, metadata, config)
    }
}
