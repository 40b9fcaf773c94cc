use crate::video_pipeline::common::error::Result;
use crate::video_pipeline::picture::{Picture, VideoFormat};

pub trait FieldReader {
    /// Checks `data` against `format` and yields its fields one at a time, in
    /// stream order. Decoding happens as the iterator is advanced.
    fn read_fields<'a>(
        &'a self,
        data: &'a [u8],
        format: &'a VideoFormat,
    ) -> Result<impl Iterator<Item = Result<Picture>> + 'a>;
}
