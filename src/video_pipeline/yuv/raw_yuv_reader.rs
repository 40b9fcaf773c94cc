//! Reader for raw planar YUV field streams.
//!
//! The input is a plain concatenation of fields, each one stored as its
//! planes in order with visible rows packed back to back and no padding.
//! This is what `ffmpeg -f rawvideo` produces for a half-height stream.

use std::time::Duration;

use tracing::debug;

use crate::video_pipeline::common::error::{FilterError, Result};
use crate::video_pipeline::picture::{Picture, VideoFormat};
use crate::video_pipeline::yuv::reader::FieldReader;

/// 50 fields per second, the field rate of 576-line broadcast sources.
pub const DEFAULT_FIELD_DURATION: Duration = Duration::from_millis(20);

/// Splits a packed raw YUV byte stream into single-field pictures.
#[derive(Debug, Clone, Copy)]
pub struct RawYuvReader {
    /// Timestamp step between consecutive fields
    pub field_duration: Duration,
}

impl Default for RawYuvReader {
    fn default() -> Self {
        Self {
            field_duration: DEFAULT_FIELD_DURATION,
        }
    }
}

impl FieldReader for RawYuvReader {
    /// Yields every complete field in `data`, unpacking each on demand.
    ///
    /// Fields are delivered as single fields (`nb_fields == 1`) so that a
    /// weaver pairs them by arrival order. Field `n` is stamped
    /// `n * field_duration`.
    ///
    /// # Errors
    ///
    /// * `InvalidDimensions` - `format` is empty or its visible area exceeds the stored one
    /// * `DecodeError` - `data` ends in the middle of a field
    ///
    /// An item is `DecodeError` when its timestamp does not fit a `Duration`.
    fn read_fields<'a>(
        &'a self,
        data: &'a [u8],
        format: &'a VideoFormat,
    ) -> Result<impl Iterator<Item = Result<Picture>> + 'a> {
        let field_size = format.visible_size();
        if field_size == 0
            || format.visible_width > format.width
            || format.visible_height > format.height
        {
            return Err(FilterError::InvalidDimensions(
                format.visible_width,
                format.visible_height,
            ));
        }

        let trailing = data.len() % field_size;
        if trailing != 0 {
            return Err(FilterError::DecodeError(format!(
                "{} trailing bytes after {} complete fields of {} bytes",
                trailing,
                data.len() / field_size,
                field_size
            )));
        }

        debug!(
            fields = data.len() / field_size,
            field_size, "Reading raw YUV fields"
        );

        let field_duration = self.field_duration;
        Ok(data
            .chunks_exact(field_size)
            .enumerate()
            .map(move |(index, field)| {
                let date = field_date(field_duration, index)?;
                unpack_field(field, format).map(|p| p.with_date(date))
            }))
    }
}

fn field_date(field_duration: Duration, index: usize) -> Result<Duration> {
    u32::try_from(index)
        .ok()
        .and_then(|n| field_duration.checked_mul(n))
        .ok_or_else(|| FilterError::DecodeError(format!("timestamp of field {index} overflows")))
}

/// Copies packed visible rows into the padded planes of a new picture.
fn unpack_field(packed: &[u8], format: &VideoFormat) -> Result<Picture> {
    let mut picture = Picture::new(format.clone())?;
    let mut offset = 0;
    for plane in picture.planes_mut() {
        let width = plane.visible_pitch();
        for row in 0..plane.visible_lines() {
            plane.row_mut(row)[..width].copy_from_slice(&packed[offset..offset + width]);
            offset += width;
        }
    }
    Ok(picture)
}
