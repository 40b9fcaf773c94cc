use std::time::Duration;

use arrayvec::ArrayVec;

use crate::video_pipeline::common::error::Result;
use crate::video_pipeline::picture::plane::PixelPlane;
use crate::video_pipeline::picture::types::{MAX_PLANES, VideoFormat};

/// One decoded video image: either a single field or a full frame.
///
/// Owning a `Picture` is holding a reference to it; dropping it releases it.
#[derive(Debug, Clone)]
pub struct Picture {
    format: VideoFormat,
    planes: ArrayVec<PixelPlane, MAX_PLANES>,
    /// Presentation timestamp
    pub date: Duration,
    pub top_field_first: bool,
    /// 1 when a single field is delivered, 2 for a complete interlaced frame
    pub nb_fields: u8,
    pub progressive: bool,
    pub force: bool,
}

impl Picture {
    /// Allocates a zero-filled picture laid out as `format` describes.
    pub fn new(format: VideoFormat) -> Result<Self> {
        let planes = format
            .plane_layouts()
            .into_iter()
            .map(PixelPlane::zeroed)
            .collect::<Result<ArrayVec<_, MAX_PLANES>>>()?;
        Ok(Self {
            format,
            planes,
            date: Duration::ZERO,
            top_field_first: false,
            nb_fields: 1,
            progressive: false,
            force: false,
        })
    }

    pub fn with_date(mut self, date: Duration) -> Self {
        self.date = date;
        self
    }

    pub fn with_fields(mut self, nb_fields: u8, top_field_first: bool) -> Self {
        self.nb_fields = nb_fields;
        self.top_field_first = top_field_first;
        self
    }

    pub fn format(&self) -> &VideoFormat {
        &self.format
    }

    pub fn planes(&self) -> &[PixelPlane] {
        &self.planes
    }

    pub fn planes_mut(&mut self) -> &mut [PixelPlane] {
        &mut self.planes
    }

    /// Copies timing and field metadata from `other`; pixel data is untouched.
    pub fn copy_properties_from(&mut self, other: &Picture) {
        self.date = other.date;
        self.top_field_first = other.top_field_first;
        self.nb_fields = other.nb_fields;
        self.progressive = other.progressive;
        self.force = other.force;
    }
}
