use crate::image_pipeline::common::error::ImageError;
use crate::image_pipeline::geometry::{flip, rotate};
use crate::image_pipeline::metadata::{
    Dims, Encoding, ImageMetadata, PixelBuffer, Rotation, SampleType,
};

const SAMPLES: [u8; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

fn u8_frame() -> (PixelBuffer, ImageMetadata) {
    let buffer = PixelBuffer::from_u8(SAMPLES.to_vec(), [3, 4]).unwrap();
    (buffer, ImageMetadata::new(Encoding::Gray, 8))
}

fn u16_samples() -> Vec<u16> {
    SAMPLES.iter().map(|&s| s as u16 * 0x0101).collect()
}

fn u32_samples() -> Vec<u32> {
    SAMPLES.iter().map(|&s| s as u32 * 0x0100_0001).collect()
}

#[test]
fn test_rotate_90_u8() {
    let (mut buffer, mut metadata) = u8_frame();
    rotate(&mut buffer, &mut metadata, 90, None).unwrap();

    assert_eq!(buffer.shape(), &Dims::from([4, 3]));
    assert_eq!(buffer.as_bytes(), &[9, 5, 1, 10, 6, 2, 11, 7, 3, 12, 8, 4]);
    assert_eq!(metadata.rotation, Rotation::Rot90);
}

#[test]
fn test_rotate_180_u16() {
    let mut buffer = PixelBuffer::from_u16(&u16_samples(), [3, 4]).unwrap();
    let mut metadata = ImageMetadata::new(Encoding::Gray, 16);
    metadata.rotation = Rotation::Rot90;

    rotate(&mut buffer, &mut metadata, 180, None).unwrap();

    let expected: Vec<u16> = [12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1]
        .iter()
        .map(|&s| s * 0x0101)
        .collect();
    assert_eq!(buffer.shape(), &Dims::from([3, 4]));
    assert_eq!(buffer.samples_u16(), Some(expected));
    assert_eq!(metadata.rotation, Rotation::Rot270);
}

#[test]
fn test_rotate_270_u32_with_scratch() {
    let mut buffer = PixelBuffer::from_u32(&u32_samples(), [3, 4]).unwrap();
    let mut metadata = ImageMetadata::new(Encoding::Gray, 32);
    metadata.rotation = Rotation::Rot180;
    let mut scratch = vec![0u8; buffer.byte_len()];

    rotate(&mut buffer, &mut metadata, 270, Some(&mut scratch[..])).unwrap();

    let expected: Vec<u32> = [4, 8, 12, 3, 7, 11, 2, 6, 10, 1, 5, 9]
        .iter()
        .map(|&s| s * 0x0100_0001)
        .collect();
    assert_eq!(buffer.shape(), &Dims::from([4, 3]));
    assert_eq!(buffer.samples_u32(), Some(expected));
    assert_eq!(metadata.rotation, Rotation::Rot90);
}

#[test]
fn test_rotate_updates_axis_metadata() {
    let (mut buffer, mut metadata) = u8_frame();
    metadata.binning = Dims::from([1, 2]);
    metadata.roi_offset = Dims::from([10, 20]);
    metadata.flip_x = true;
    metadata.header.insert("sensor".to_string(), "front".to_string());

    rotate(&mut buffer, &mut metadata, 270, None).unwrap();

    assert_eq!(metadata.binning, Dims::from([2, 1]));
    assert_eq!(metadata.roi_offset, Dims::from([20, 10]));
    assert!(!metadata.flip_x);
    assert!(metadata.flip_y);
    assert_eq!(metadata.header.get("sensor").map(String::as_str), Some("front"));

    rotate(&mut buffer, &mut metadata, 180, None).unwrap();
    assert_eq!(metadata.binning, Dims::from([2, 1]));
    assert!(metadata.flip_y);
}

#[test]
fn test_rotate_four_times_is_identity() {
    let (mut buffer, mut metadata) = u8_frame();
    for _ in 0..4 {
        rotate(&mut buffer, &mut metadata, 90, None).unwrap();
    }
    assert_eq!(buffer.shape(), &Dims::from([3, 4]));
    assert_eq!(buffer.as_bytes(), &SAMPLES);
    assert_eq!(metadata.rotation, Rotation::Rot0);
}

#[test]
fn test_rotate_zero_is_noop() {
    let (mut buffer, mut metadata) = u8_frame();
    rotate(&mut buffer, &mut metadata, 0, None).unwrap();
    assert_eq!(buffer.as_bytes(), &SAMPLES);
    assert_eq!(metadata, ImageMetadata::new(Encoding::Gray, 8));
}

#[test]
fn test_rotate_undefined_rotation_stays_undefined() {
    let (mut buffer, mut metadata) = u8_frame();
    metadata.rotation = Rotation::Undefined;
    rotate(&mut buffer, &mut metadata, 90, None).unwrap();
    assert_eq!(metadata.rotation, Rotation::Undefined);
    assert_eq!(buffer.as_bytes(), &[9, 5, 1, 10, 6, 2, 11, 7, 3, 12, 8, 4]);
}

#[test]
fn test_rotate_rejects_invalid_angle() {
    let (mut buffer, mut metadata) = u8_frame();
    for angle in [1, 45, 360, 450] {
        let result = rotate(&mut buffer, &mut metadata, angle, None);
        assert!(matches!(result, Err(ImageError::InvalidParameter(_))), "angle {}", angle);
    }
    assert_eq!(buffer.as_bytes(), &SAMPLES);
}

#[test]
fn test_transforms_reject_unsupported_buffers() {
    let mut metadata = ImageMetadata::default();

    let mut rgb = PixelBuffer::from_u8(vec![0; 36], [3, 4, 3]).unwrap();
    let result = rotate(&mut rgb, &mut metadata, 90, None);
    assert!(matches!(result, Err(ImageError::UnsupportedFormat(_))));

    let mut jpeg = PixelBuffer::opaque(vec![0xFF, 0xD8, 0xFF, 0xD9], [3, 4]);
    let result = flip(&mut jpeg, &mut metadata, true, false, None);
    assert!(matches!(result, Err(ImageError::UnsupportedFormat(_))));

    let mut wide = PixelBuffer::new(vec![0; 96], [3, 4], SampleType::U64).unwrap();
    let result = rotate(&mut wide, &mut metadata, 180, None);
    assert!(matches!(result, Err(ImageError::UnsupportedFormat(_))));
    let result = flip(&mut wide, &mut metadata, false, true, None);
    assert!(matches!(result, Err(ImageError::UnsupportedFormat(_))));

    assert_eq!(metadata, ImageMetadata::default());
}

#[test]
fn test_small_scratch_is_rejected_before_mutation() {
    let (mut buffer, mut metadata) = u8_frame();
    let mut scratch = vec![0u8; 11];

    let result = rotate(&mut buffer, &mut metadata, 90, Some(&mut scratch[..]));
    assert!(matches!(result, Err(ImageError::InvalidParameter(_))));
    let result = flip(&mut buffer, &mut metadata, true, true, Some(&mut scratch[..]));
    assert!(matches!(result, Err(ImageError::InvalidParameter(_))));

    assert_eq!(buffer.as_bytes(), &SAMPLES);
    assert_eq!(buffer.shape(), &Dims::from([3, 4]));
    assert_eq!(metadata, ImageMetadata::new(Encoding::Gray, 8));
}

#[test]
fn test_larger_scratch_is_accepted() {
    let (mut buffer, mut metadata) = u8_frame();
    let mut scratch = vec![0u8; 64];
    flip(&mut buffer, &mut metadata, true, false, Some(&mut scratch[..])).unwrap();
    assert_eq!(buffer.as_bytes(), &[4, 3, 2, 1, 8, 7, 6, 5, 12, 11, 10, 9]);
}

#[test]
fn test_flip_horizontal_u8() {
    let (mut buffer, mut metadata) = u8_frame();
    flip(&mut buffer, &mut metadata, true, false, None).unwrap();

    assert_eq!(buffer.shape(), &Dims::from([3, 4]));
    assert_eq!(buffer.as_bytes(), &[4, 3, 2, 1, 8, 7, 6, 5, 12, 11, 10, 9]);
    assert!(metadata.flip_x);
    assert!(!metadata.flip_y);
}

#[test]
fn test_flip_vertical_u16() {
    let mut buffer = PixelBuffer::from_u16(&u16_samples(), [3, 4]).unwrap();
    let mut metadata = ImageMetadata::new(Encoding::Gray, 16);
    flip(&mut buffer, &mut metadata, false, true, None).unwrap();

    let expected: Vec<u16> = [9, 10, 11, 12, 5, 6, 7, 8, 1, 2, 3, 4]
        .iter()
        .map(|&s| s * 0x0101)
        .collect();
    assert_eq!(buffer.samples_u16(), Some(expected));
    assert!(!metadata.flip_x);
    assert!(metadata.flip_y);
}

#[test]
fn test_flip_both_u32() {
    let mut buffer = PixelBuffer::from_u32(&u32_samples(), [3, 4]).unwrap();
    let mut metadata = ImageMetadata::new(Encoding::Gray, 32);
    flip(&mut buffer, &mut metadata, true, true, None).unwrap();

    let expected: Vec<u32> = [12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1]
        .iter()
        .map(|&s| s * 0x0100_0001)
        .collect();
    assert_eq!(buffer.samples_u32(), Some(expected));
    assert!(metadata.flip_x);
    assert!(metadata.flip_y);
}

#[test]
fn test_flip_twice_restores_samples_and_flag() {
    let (mut buffer, mut metadata) = u8_frame();
    flip(&mut buffer, &mut metadata, true, false, None).unwrap();
    flip(&mut buffer, &mut metadata, true, false, None).unwrap();
    assert_eq!(buffer.as_bytes(), &SAMPLES);
    assert!(!metadata.flip_x);
}

#[test]
fn test_flip_neither_axis_is_noop() {
    let (mut buffer, mut metadata) = u8_frame();
    flip(&mut buffer, &mut metadata, false, false, None).unwrap();
    assert_eq!(buffer.as_bytes(), &SAMPLES);
    assert_eq!(metadata, ImageMetadata::new(Encoding::Gray, 8));
}
