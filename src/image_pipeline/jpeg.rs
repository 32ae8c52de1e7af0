//! JPEG bridge module
//!
//! Converts between indexable sample buffers and opaque baseline JPEG
//! payloads, with optional comment segments.

mod comment;
mod decoder;
mod encoder;
pub mod types;


pub use comment::{insert_comment, jpeg_comment, MAX_COMMENT_LEN};
pub use decoder::decode_jpeg;
pub use encoder::encode_jpeg;
pub use types::{JpegConfig, JpegConfigBuilder};
