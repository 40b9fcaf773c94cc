use crate::video_pipeline::common::error::Result;
use crate::video_pipeline::picture::frame::Picture;
use crate::video_pipeline::picture::plane::try_zeroed;
use crate::video_pipeline::picture::types::VideoFormat;

/// Source of output pictures and scratch buffers for a filter. Allocation may fail.
pub trait PictureAllocator {
    fn new_picture(&self, format: &VideoFormat) -> Result<Picture>;

    /// Zero-filled buffer of `size` bytes for state a filter keeps between pictures.
    fn new_buffer(&self, size: usize) -> Result<Vec<u8>> {
        try_zeroed(size)
    }
}
