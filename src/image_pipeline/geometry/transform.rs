use crate::image_pipeline::common::error::{ImageError, Result};
use crate::image_pipeline::metadata::PixelBuffer;

/// Checks that `buffer` can be permuted in place, returning `(height, width)`.
pub(crate) fn check_transformable(buffer: &PixelBuffer) -> Result<(usize, usize)> {
    if !buffer.is_indexable() {
        return Err(ImageError::UnsupportedFormat(
            "cannot transform a non-indexable buffer".to_string(),
        ));
    }
    let shape = buffer.shape();
    if shape.rank() != 2 {
        return Err(ImageError::UnsupportedFormat(format!(
            "only single-channel 2-D buffers can be transformed, got shape {}",
            shape
        )));
    }
    match buffer.item_size() {
        1 | 2 | 4 => Ok((shape[0], shape[1])),
        size => Err(ImageError::UnsupportedFormat(format!(
            "unsupported item size: {} bytes",
            size
        ))),
    }
}

pub(crate) fn check_scratch(scratch: Option<&[u8]>, required: usize) -> Result<()> {
    match scratch {
        Some(s) if s.len() < required => Err(ImageError::InvalidParameter(format!(
            "scratch buffer holds {} bytes, {} required",
            s.len(),
            required
        ))),
        _ => Ok(()),
    }
}

fn permute_items<const N: usize>(src: &[u8], dst: &mut [u8], source_index: &impl Fn(usize) -> usize) {
    for (i, item) in dst.chunks_exact_mut(N).enumerate() {
        let j = source_index(i) * N;
        item.copy_from_slice(&src[j..j + N]);
    }
}

/// Copies the samples to scratch, then writes `dst[i] = src[source_index(i)]` back.
///
/// Callers validate the buffer and scratch size first.
pub(crate) fn permute(
    buffer: &mut PixelBuffer,
    scratch: Option<&mut [u8]>,
    source_index: impl Fn(usize) -> usize,
) -> Result<()> {
    let len = buffer.byte_len();
    let mut owned: Vec<u8>;
    let scratch: &mut [u8] = match scratch {
        Some(s) => &mut s[..len],
        None => {
            owned = vec![0u8; len];
            owned.as_mut_slice()
        }
    };
    scratch.copy_from_slice(buffer.as_bytes());

    match buffer.item_size() {
        1 => permute_items::<1>(scratch, buffer.bytes_mut(), &source_index),
        2 => permute_items::<2>(scratch, buffer.bytes_mut(), &source_index),
        4 => permute_items::<4>(scratch, buffer.bytes_mut(), &source_index),
        size => {
            return Err(ImageError::UnsupportedFormat(format!(
                "unsupported item size: {} bytes",
                size
            )));
        }
    }
    Ok(())
}
