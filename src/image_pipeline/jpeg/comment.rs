//! COM segment handling on encoded JPEG streams.

use crate::image_pipeline::common::error::{ImageError, Result};

/// Largest comment payload: the 16-bit segment length includes its own two bytes.
pub const MAX_COMMENT_LEN: usize = 65533;

const MARKER_PREFIX: u8 = 0xFF;
const SOI: u8 = 0xD8;
const EOI: u8 = 0xD9;
const SOS: u8 = 0xDA;
const COM: u8 = 0xFE;
const APP0: u8 = 0xE0;
const APP15: u8 = 0xEF;

pub(crate) fn has_soi(jpeg: &[u8]) -> bool {
    jpeg.len() >= 2 && jpeg[0] == MARKER_PREFIX && jpeg[1] == SOI
}

fn segment_len(jpeg: &[u8], pos: usize) -> Option<usize> {
    let hi = *jpeg.get(pos + 2)?;
    let lo = *jpeg.get(pos + 3)?;
    let len = u16::from_be_bytes([hi, lo]) as usize;
    if len < 2 || pos + 2 + len > jpeg.len() {
        return None;
    }
    Some(len)
}

/// Inserts a COM segment after the leading APPn segments of `jpeg`.
///
/// The comment is truncated to [`MAX_COMMENT_LEN`] bytes. An empty comment
/// returns the stream unchanged.
pub fn insert_comment(jpeg: &[u8], comment: &[u8]) -> Result<Vec<u8>> {
    if !has_soi(jpeg) {
        return Err(ImageError::FormatError("missing SOI marker".to_string()));
    }
    if comment.is_empty() {
        return Ok(jpeg.to_vec());
    }

    let mut pos = 2;
    while pos + 1 < jpeg.len()
        && jpeg[pos] == MARKER_PREFIX
        && (APP0..=APP15).contains(&jpeg[pos + 1])
    {
        let len = segment_len(jpeg, pos).ok_or_else(|| {
            ImageError::FormatError(format!("truncated APP segment at offset {}", pos))
        })?;
        pos += 2 + len;
    }

    let comment = &comment[..comment.len().min(MAX_COMMENT_LEN)];
    let len = (comment.len() + 2) as u16;

    let mut out = Vec::with_capacity(jpeg.len() + comment.len() + 4);
    out.extend_from_slice(&jpeg[..pos]);
    out.extend_from_slice(&[MARKER_PREFIX, COM]);
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(comment);
    out.extend_from_slice(&jpeg[pos..]);
    Ok(out)
}

/// Returns the payload of the first COM segment before the scan data.
pub fn jpeg_comment(jpeg: &[u8]) -> Option<Vec<u8>> {
    if !has_soi(jpeg) {
        return None;
    }

    let mut pos = 2;
    while pos + 1 < jpeg.len() {
        if jpeg[pos] != MARKER_PREFIX {
            return None;
        }
        match jpeg[pos + 1] {
            MARKER_PREFIX => pos += 1,
            SOS | EOI => return None,
            marker => {
                let len = segment_len(jpeg, pos)?;
                if marker == COM {
                    return Some(jpeg[pos + 4..pos + 2 + len].to_vec());
                }
                pos += 2 + len;
            }
        }
    }
    None
}
