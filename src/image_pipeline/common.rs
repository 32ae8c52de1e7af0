//! Common utilities module
//!
//! This module contains the error type shared by every stage of the frame pipeline.

pub mod error;

pub use error::{ImageError, Result};
