//! Image processing pipeline module
//!
//! Sensor frames move through this module in stages: packed data is
//! unpacked into 16-bit samples, oriented by the geometry transforms and
//! optionally compressed to JPEG. Each stage lives in its own submodule and
//! the `conversions` module chains them together.

pub mod common;
pub mod conversions;
pub mod geometry;
pub mod jpeg;
pub mod metadata;
pub mod unpack;

pub use common::{ImageError, Result};

pub use metadata::{ByteOrder, Dims, Encoding, ImageMetadata, PixelBuffer, Rotation, SampleType};

pub use unpack::{
    unpack_bit_packed, unpack_frame, unpack_mono10p, unpack_mono12_packed, unpack_mono12p,
    PackedFormat,
};

pub use jpeg::{decode_jpeg, encode_jpeg, jpeg_comment, JpegConfig, JpegConfigBuilder};

pub use geometry::{flip, rotate};

pub use conversions::{
    Frame, FrameEncoder, FramePipeline, JpegFrameEncoder, PipelineConfig, PipelineConfigBuilder,
    PipelineTimings, Stage,
};
