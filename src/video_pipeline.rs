//! Video processing pipeline module
//!
//! This module provides the field weaver that rebuilds interlaced frames from
//! single-field pictures, along with the picture model it operates on and a
//! raw YUV stream adapter for running it over files.

pub mod common;
pub mod conversions;
pub mod picture;
pub mod weave;
pub mod yuv;

pub use common::{
    FilterError,
    Result,
};

pub use picture::{
    ChromaFormat,
    HeapAllocator,
    Interlacing,
    Picture,
    PictureAllocator,
    PixelPlane,
    PlaneLayout,
    VideoFormat,
};

pub use weave::{
    FieldSlot,
    FieldWeaver,
    WeaverConfig,
    WeaverConfigBuilder,
};

pub use yuv::{
    FieldReader,
    FrameWriter,
    RawYuvReader,
    RawYuvWriter,
};

pub use conversions::{
    FieldsToFramesPipeline,
};
