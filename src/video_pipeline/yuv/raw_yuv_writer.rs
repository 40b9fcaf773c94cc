use std::io::Write;

use tracing::debug;

use crate::video_pipeline::common::error::Result;
use crate::video_pipeline::picture::Picture;
use crate::video_pipeline::yuv::writer::FrameWriter;

/// Writes the visible rows of every plane, tightly packed, plane after plane.
pub struct RawYuvWriter;

impl FrameWriter for RawYuvWriter {
    fn write_frame(&self, picture: &Picture, output: &mut dyn Write) -> Result<()> {
        debug!(
            width = picture.format().visible_width,
            height = picture.format().visible_height,
            "Writing raw YUV frame"
        );

        for plane in picture.planes() {
            for row in plane.visible_rows() {
                output.write_all(row)?;
            }
        }

        Ok(())
    }
}
