use tracing::trace;

use crate::video_pipeline::common::error::Result;
use crate::video_pipeline::picture::allocator::PictureAllocator;
use crate::video_pipeline::picture::frame::Picture;
use crate::video_pipeline::picture::types::VideoFormat;

/// Allocates every picture fresh on the heap.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeapAllocator;

impl PictureAllocator for HeapAllocator {
    fn new_picture(&self, format: &VideoFormat) -> Result<Picture> {
        trace!(
            width = format.width,
            height = format.height,
            chroma = ?format.chroma,
            "Allocating picture"
        );
        Picture::new(format.clone())
    }
}
