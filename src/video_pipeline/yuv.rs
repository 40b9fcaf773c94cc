//! Raw YUV module
//!
//! This module reads half-height field streams and writes combined frames
//! as headerless planar YUV.

mod raw_yuv_reader;
mod raw_yuv_writer;
mod reader;
mod writer;

pub use raw_yuv_reader::{DEFAULT_FIELD_DURATION, RawYuvReader};
pub use raw_yuv_writer::RawYuvWriter;
pub use reader::FieldReader;
pub use writer::FrameWriter;
