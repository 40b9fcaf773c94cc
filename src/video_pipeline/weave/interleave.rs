use crate::video_pipeline::common::error::{FilterError, Result};
use crate::video_pipeline::picture::PixelPlane;

/// Weaves one plane of a field pair into `out`.
///
/// Output row `2k` is row `k` of `first`, output row `2k + 1` is row `k` of
/// `second`, for `k` below `second.lines() - trim`. Each copy moves one input
/// pitch worth of bytes, padding included. `first` must be laid out with the
/// same pitch as `second`. Returns the number of rows taken from each field.
pub fn weave_plane(
    plane: usize,
    first: &[u8],
    second: &PixelPlane,
    out: &mut PixelPlane,
    trim: usize,
) -> Result<usize> {
    let pitch = second.pitch();
    let source_lines = second.lines().saturating_sub(trim);
    if pitch == 0 || source_lines == 0 {
        return Ok(0);
    }

    let out_pitch = out.pitch();
    if out_pitch < pitch || out.lines() < source_lines * 2 || first.len() < pitch * source_lines {
        return Err(FilterError::OutputTooSmall {
            plane,
            required_pitch: pitch,
            required_lines: source_lines * 2,
        });
    }

    let rows = out
        .as_mut_slice()
        .chunks_exact_mut(out_pitch * 2)
        .zip(first.chunks_exact(pitch).zip(second.as_slice().chunks_exact(pitch)))
        .take(source_lines);

    for (pair, (top, bottom)) in rows {
        let (even, odd) = pair.split_at_mut(out_pitch);
        even[..pitch].copy_from_slice(top);
        odd[..pitch].copy_from_slice(bottom);
    }

    Ok(source_lines)
}
