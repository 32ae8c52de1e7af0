use crate::image_pipeline::common::error::ImageError;
use crate::image_pipeline::metadata::{ByteOrder, Dims, ImageMetadata, PixelBuffer, Rotation, SampleType};

#[test]
fn test_buffer_rejects_mismatched_length() {
    let result = PixelBuffer::new(vec![0u8; 11], [3, 4], SampleType::U8);
    assert!(matches!(result, Err(ImageError::InvalidDimensions(4, 3))));

    let result = PixelBuffer::from_u16(&[0u16; 12], [3, 4]);
    assert!(result.is_ok());
    assert_eq!(result.unwrap().byte_len(), 24);
}

#[test]
fn test_opaque_buffer_keeps_logical_shape() {
    let buffer = PixelBuffer::opaque(vec![0xFF, 0xD8, 0xFF, 0xD9], [512, 512]);
    assert!(!buffer.is_indexable());
    assert_eq!(buffer.shape(), &Dims::from([512, 512]));
    assert_eq!(buffer.byte_len(), 4);
    assert_eq!(buffer.samples_u16(), None);
}

#[test]
fn test_samples_honour_byte_order() {
    let little = PixelBuffer::new(vec![0x34, 0x12], [1, 1], SampleType::U16).unwrap();
    assert_eq!(little.samples_u16(), Some(vec![0x1234]));

    let big = little.with_byte_order(ByteOrder::Big);
    assert_eq!(big.samples_u16(), Some(vec![0x3412]));

    let words = PixelBuffer::from_u32(&[0xDEADBEEF], [1, 1]).unwrap();
    assert_eq!(words.samples_u32(), Some(vec![0xDEADBEEF]));
}

#[test]
fn test_rotation_arithmetic() {
    assert_eq!(Rotation::Rot90.rotated_by(Rotation::Rot180), Rotation::Rot270);
    assert_eq!(Rotation::Rot180.rotated_by(Rotation::Rot270), Rotation::Rot90);
    assert_eq!(Rotation::Rot270.rotated_by(Rotation::Rot90), Rotation::Rot0);
    assert_eq!(Rotation::Undefined.rotated_by(Rotation::Rot90), Rotation::Undefined);
    assert_eq!(Rotation::from_degrees(45), None);
    assert!(Rotation::Rot270.swaps_dimensions());
    assert!(!Rotation::Rot180.swaps_dimensions());
}

#[test]
fn test_dims() {
    let mut dims = Dims::from([3, 4, 3]);
    assert_eq!(dims.rank(), 3);
    assert_eq!(dims.size(), 36);
    dims.reverse();
    assert_eq!(dims.as_slice(), &[3, 4, 3]);
    assert_eq!(Dims::default().size(), 0);
    assert_eq!(Dims::from([512, 256]).to_string(), "(512, 256)");
}

#[test]
fn test_metadata_defaults() {
    let metadata = ImageMetadata::default();
    assert_eq!(metadata.rotation, Rotation::Rot0);
    assert_eq!(metadata.binning, Dims::from([1, 1]));
    assert_eq!(metadata.roi_offset, Dims::from([0, 0]));
    assert!(!metadata.flip_x && !metadata.flip_y);
    assert!(metadata.header.is_empty());
}
