use tracing::{debug, info, instrument, warn};

use crate::image_pipeline::common::error::{ImageError, Result};
use crate::image_pipeline::conversions::encoder::{FrameEncoder, JpegFrameEncoder};
use crate::image_pipeline::conversions::timing::{PipelineTimings, Stage};
use crate::image_pipeline::conversions::types::{Frame, PipelineConfig};
use crate::image_pipeline::geometry::{flip, rotate};
use crate::image_pipeline::metadata::{ImageMetadata, PixelBuffer};
use crate::image_pipeline::unpack::unpack_frame;

/// Runs sensor frames through unpack, flip, rotate and compression.
///
/// Every step works on the frame's own buffer, so a pipeline can be shared
/// between threads as long as each thread owns the frames it processes.
pub struct FramePipeline<E: FrameEncoder = JpegFrameEncoder> {
    encoder: E,
    config: PipelineConfig,
}

impl FramePipeline<JpegFrameEncoder> {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            encoder: JpegFrameEncoder,
            config,
        }
    }
}

impl<E: FrameEncoder> FramePipeline<E> {
    pub fn with_custom(encoder: E, config: PipelineConfig) -> Self {
        Self { encoder, config }
    }

    fn validate_dimensions(&self, buffer: &PixelBuffer) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        let shape = buffer.shape();
        let height = shape.get(0).unwrap_or(0);
        let width = shape.get(1).unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(ImageError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!("Frame dimensions {}x{} exceed maximum {}", width, height, max);
                return Err(ImageError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Unpacks raw sensor bytes using the configured packed format.
    #[instrument(skip(self, packed), fields(bytes = packed.len()))]
    pub fn unpack(&self, packed: &[u8], width: usize, height: usize) -> Result<Frame> {
        let format = self.config.packed_format.ok_or_else(|| {
            ImageError::InvalidParameter("no packed format configured".to_string())
        })?;

        let mut metadata = ImageMetadata::default();
        let buffer = unpack_frame(packed, width, height, format, &mut metadata)?;
        Ok(Frame::new(buffer, metadata))
    }

    pub fn process(&self, frame: Frame) -> Result<Frame> {
        let (frame, timings) = self.process_timed(frame)?;
        debug!("Frame done in {:.3}ms", timings.total().as_secs_f64() * 1000.0);
        Ok(frame)
    }

    #[instrument(skip_all, fields(shape = %frame.buffer.shape()))]
    pub fn process_timed(&self, frame: Frame) -> Result<(Frame, PipelineTimings)> {
        let mut timings = PipelineTimings::new();
        let frame = self.process_into(frame, &mut timings)?;
        Ok((frame, timings))
    }

    /// Unpacks and processes a raw sensor frame in one call.
    pub fn run(&self, packed: &[u8], width: usize, height: usize) -> Result<(Frame, PipelineTimings)> {
        let mut timings = PipelineTimings::new();
        let frame = timings.time(Stage::Unpack, || self.unpack(packed, width, height))?;
        let frame = self.process_into(frame, &mut timings)?;
        Ok((frame, timings))
    }

    fn process_into(&self, frame: Frame, timings: &mut PipelineTimings) -> Result<Frame> {
        let Frame {
            mut buffer,
            mut metadata,
        } = frame;
        let config = &self.config;

        timings.time(Stage::ValidateDimensions, || self.validate_dimensions(&buffer))?;

        if config.flip_x || config.flip_y {
            timings.time(Stage::Flip, || {
                flip(&mut buffer, &mut metadata, config.flip_x, config.flip_y, None)
            })?;
        }

        if config.rotation != 0 {
            timings.time(Stage::Rotate, || {
                rotate(&mut buffer, &mut metadata, config.rotation, None)
            })?;
        }

        if let Some(jpeg) = &config.jpeg {
            buffer = timings.time(Stage::EncodeJpeg, || {
                self.encoder.encode(&buffer, &mut metadata, jpeg)
            })?;
        }

        info!(
            "Frame processed: {} -> {} bytes in {:.3}ms",
            buffer.shape(),
            buffer.byte_len(),
            timings.total().as_secs_f64() * 1000.0
        );
        Ok(Frame::new(buffer, metadata))
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PipelineConfig) {
        self.config = config;
    }
}
