//! Owned sample storage for a single frame.

use crate::image_pipeline::common::error::{ImageError, Result};
use crate::image_pipeline::metadata::dims::Dims;

/// Unsigned sample type stored in a [`PixelBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleType {
    U8,
    U16,
    U32,
    /// Representable in a buffer, but rejected by the geometry transforms.
    U64,
}

impl SampleType {
    /// Physical width of one sample in bytes.
    pub fn item_size(self) -> usize {
        match self {
            SampleType::U8 => 1,
            SampleType::U16 => 2,
            SampleType::U32 => 4,
            SampleType::U64 => 8,
        }
    }
}

/// Storage order of multi-byte samples inside the byte region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ByteOrder {
    #[default]
    Little,
    Big,
}

/// Contiguous byte region holding one frame.
///
/// While the buffer is indexable the byte length always equals
/// `shape.size() * item_size`. A non-indexable buffer carries an opaque
/// compressed payload; its shape still records the logical image
/// dimensions so that consumers can size a display before decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    shape: Dims,
    sample_type: SampleType,
    byte_order: ByteOrder,
    indexable: bool,
}

impl PixelBuffer {
    /// Wraps raw sample bytes, checking them against the shape.
    pub fn new(data: Vec<u8>, shape: impl Into<Dims>, sample_type: SampleType) -> Result<Self> {
        let shape = shape.into();
        let expected = shape.size() * sample_type.item_size();
        if shape.rank() == 0 || data.len() != expected {
            let (height, width) = (shape.get(0).unwrap_or(0), shape.get(1).unwrap_or(0));
            return Err(ImageError::InvalidDimensions(width, height));
        }
        Ok(Self {
            data,
            shape,
            sample_type,
            byte_order: ByteOrder::default(),
            indexable: true,
        })
    }

    pub fn from_u8(samples: Vec<u8>, shape: impl Into<Dims>) -> Result<Self> {
        Self::new(samples, shape, SampleType::U8)
    }

    /// Stores the samples little-endian.
    pub fn from_u16(samples: &[u16], shape: impl Into<Dims>) -> Result<Self> {
        let data = samples.iter().flat_map(|s| s.to_le_bytes()).collect();
        Self::new(data, shape, SampleType::U16)
    }

    /// Stores the samples little-endian.
    pub fn from_u32(samples: &[u32], shape: impl Into<Dims>) -> Result<Self> {
        let data = samples.iter().flat_map(|s| s.to_le_bytes()).collect();
        Self::new(data, shape, SampleType::U32)
    }

    /// Wraps a compressed payload. `shape` is the logical image shape.
    pub fn opaque(payload: Vec<u8>, shape: impl Into<Dims>) -> Self {
        Self {
            data: payload,
            shape: shape.into(),
            sample_type: SampleType::U8,
            byte_order: ByteOrder::default(),
            indexable: false,
        }
    }

    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    pub fn shape(&self) -> &Dims {
        &self.shape
    }

    pub fn sample_type(&self) -> SampleType {
        self.sample_type
    }

    pub fn item_size(&self) -> usize {
        self.sample_type.item_size()
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    pub fn is_indexable(&self) -> bool {
        self.indexable
    }

    pub fn byte_len(&self) -> usize {
        self.data.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Decodes the stored bytes as 16-bit samples, honouring the byte order.
    ///
    /// Returns `None` unless the buffer is an indexable `U16` buffer.
    pub fn samples_u16(&self) -> Option<Vec<u16>> {
        if !self.indexable || self.sample_type != SampleType::U16 {
            return None;
        }
        let samples = self
            .data
            .chunks_exact(2)
            .map(|b| match self.byte_order {
                ByteOrder::Little => u16::from_le_bytes([b[0], b[1]]),
                ByteOrder::Big => u16::from_be_bytes([b[0], b[1]]),
            })
            .collect();
        Some(samples)
    }

    /// Decodes the stored bytes as 32-bit samples, honouring the byte order.
    pub fn samples_u32(&self) -> Option<Vec<u32>> {
        if !self.indexable || self.sample_type != SampleType::U32 {
            return None;
        }
        let samples = self
            .data
            .chunks_exact(4)
            .map(|b| {
                let word = [b[0], b[1], b[2], b[3]];
                match self.byte_order {
                    ByteOrder::Little => u32::from_le_bytes(word),
                    ByteOrder::Big => u32::from_be_bytes(word),
                }
            })
            .collect();
        Some(samples)
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub(crate) fn set_shape(&mut self, shape: Dims) {
        debug_assert_eq!(shape.size(), self.shape.size());
        self.shape = shape;
    }
}
