//! Pixel metadata model
//!
//! Value types describing one frame: the sample buffer with its shape and
//! storage layout, and the descriptive metadata (encoding, depth, binning,
//! ROI and orientation) travelling alongside it.

mod buffer;
mod dims;
mod image_metadata;

#[cfg(test)]
mod tests;

pub use buffer::{ByteOrder, PixelBuffer, SampleType};
pub use dims::Dims;
pub use image_metadata::{Encoding, ImageMetadata, Rotation};
