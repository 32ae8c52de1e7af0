use crate::image_pipeline::jpeg::JpegConfig;
use crate::image_pipeline::metadata::{ImageMetadata, PixelBuffer};
use crate::image_pipeline::unpack::PackedFormat;

/// A pixel buffer together with the metadata describing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub buffer: PixelBuffer,
    pub metadata: ImageMetadata,
}

impl Frame {
    pub fn new(buffer: PixelBuffer, metadata: ImageMetadata) -> Self {
        Self { buffer, metadata }
    }
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Packed layout of the incoming sensor data, `None` when frames arrive unpacked
    pub packed_format: Option<PackedFormat>,
    /// Clockwise rotation applied after flipping, in degrees
    pub rotation: u32,
    pub flip_x: bool,
    pub flip_y: bool,
    /// Compress the frame as the last step when set
    pub jpeg: Option<JpegConfig>,
    pub validate_dimensions: bool,
    pub max_dimension: Option<usize>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            packed_format: None,
            rotation: 0,
            flip_x: false,
            flip_y: false,
            jpeg: None,
            validate_dimensions: true,
            max_dimension: Some(65535),
        }
    }
}

impl PipelineConfig {
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct PipelineConfigBuilder {
    packed_format: Option<Option<PackedFormat>>,
    rotation: Option<u32>,
    flip_x: Option<bool>,
    flip_y: Option<bool>,
    jpeg: Option<Option<JpegConfig>>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
}

impl PipelineConfigBuilder {
    pub fn packed_format(mut self, format: Option<PackedFormat>) -> Self {
        self.packed_format = Some(format);
        self
    }

    pub fn rotation(mut self, degrees: u32) -> Self {
        self.rotation = Some(degrees);
        self
    }

    pub fn flip(mut self, flip_x: bool, flip_y: bool) -> Self {
        self.flip_x = Some(flip_x);
        self.flip_y = Some(flip_y);
        self
    }

    pub fn jpeg(mut self, jpeg: Option<JpegConfig>) -> Self {
        self.jpeg = Some(jpeg);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> PipelineConfig {
        let default = PipelineConfig::default();
        PipelineConfig {
            packed_format: self.packed_format.unwrap_or(default.packed_format),
            rotation: self.rotation.unwrap_or(default.rotation),
            flip_x: self.flip_x.unwrap_or(default.flip_x),
            flip_y: self.flip_y.unwrap_or(default.flip_y),
            jpeg: self.jpeg.unwrap_or(default.jpeg),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
