use std::io::Write;
use crate::video_pipeline::common::error::Result;
use crate::video_pipeline::picture::Picture;

pub trait FrameWriter {
    fn write_frame(&self, picture: &Picture, output: &mut dyn Write) -> Result<()>;
}
