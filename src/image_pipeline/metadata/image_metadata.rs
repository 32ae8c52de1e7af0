//! Descriptive per-frame state attached to a [`PixelBuffer`](super::PixelBuffer).

use std::collections::BTreeMap;

use crate::image_pipeline::metadata::dims::Dims;

/// Layout of the payload described by the metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    #[default]
    Undefined,
    Gray,
    Rgb,
    /// Opaque JPEG stream, not sample-addressable.
    Jpeg,
}

/// Rotation of the buffer relative to the native sensor orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    Rot0,
    Rot90,
    Rot180,
    Rot270,
    /// Orientation is unknown. Stays unknown through any rotation.
    Undefined,
}

impl Rotation {
    /// Maps an angle in degrees to a rotation; only multiples of 90 below 360 are valid.
    pub fn from_degrees(degrees: u32) -> Option<Self> {
        match degrees {
            0 => Some(Rotation::Rot0),
            90 => Some(Rotation::Rot90),
            180 => Some(Rotation::Rot180),
            270 => Some(Rotation::Rot270),
            _ => None,
        }
    }

    pub fn degrees(self) -> Option<u32> {
        match self {
            Rotation::Rot0 => Some(0),
            Rotation::Rot90 => Some(90),
            Rotation::Rot180 => Some(180),
            Rotation::Rot270 => Some(270),
            Rotation::Undefined => None,
        }
    }

    /// Composes a further rotation by `angle` degrees, modulo 360.
    pub fn rotated_by(self, angle: Rotation) -> Self {
        match (self.degrees(), angle.degrees()) {
            (Some(current), Some(delta)) => {
                Rotation::from_degrees((current + delta) % 360).unwrap_or(Rotation::Undefined)
            }
            _ => Rotation::Undefined,
        }
    }

    /// Whether applying this rotation exchanges width and height.
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Rotation::Rot90 | Rotation::Rot270)
    }
}

/// Metadata describing exactly one pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMetadata {
    pub encoding: Encoding,
    /// Declared sample depth, independent of the physical item size.
    pub bits_per_pixel: u16,
    /// Per-axis binning factors, same axis order as the buffer shape.
    pub binning: Dims,
    /// Per-axis offset of the captured region within the full sensor.
    pub roi_offset: Dims,
    pub rotation: Rotation,
    pub flip_x: bool,
    pub flip_y: bool,
    /// Side-channel key/value data, passed through untouched.
    pub header: BTreeMap<String, String>,
}

impl Default for ImageMetadata {
    fn default() -> Self {
        Self {
            encoding: Encoding::Undefined,
            bits_per_pixel: 0,
            binning: Dims::from([1, 1]),
            roi_offset: Dims::from([0, 0]),
            rotation: Rotation::Rot0,
            flip_x: false,
            flip_y: false,
            header: BTreeMap::new(),
        }
    }
}

impl ImageMetadata {
    pub fn new(encoding: Encoding, bits_per_pixel: u16) -> Self {
        Self {
            encoding,
            bits_per_pixel,
            ..Self::default()
        }
    }
}
