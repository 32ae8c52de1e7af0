//! Pipeline conversions module
//!
//! Orchestrates the unpack, orientation and compression stages for one
//! frame at a time.

mod encoder;
mod frame_pipeline;
mod timing;
pub mod types;


pub use encoder::{FrameEncoder, JpegFrameEncoder};
pub use frame_pipeline::FramePipeline;
pub use timing::{PipelineTimings, Stage};
pub use types::{Frame, PipelineConfig, PipelineConfigBuilder};
