//! Geometry transform module
//!
//! Lossless rotation and mirroring of single-channel 2-D buffers. Every
//! transform keeps the orientation state of the attached metadata
//! (`rotation`, `flip_x`, `flip_y`, ROI and binning axis order) consistent
//! with the new sample layout.

mod flip;
mod rotate;
mod transform;

#[cfg(test)]
mod tests;

pub use flip::flip;
pub use rotate::rotate;
