//! Picture module
//!
//! This module provides the in-memory representation of decoded video
//! pictures and the allocation seam used by filters to obtain new ones.

mod allocator;
mod frame;
mod heap_allocator;
mod plane;
pub mod types;

pub use allocator::PictureAllocator;
pub use frame::Picture;
pub use heap_allocator::HeapAllocator;
pub use plane::PixelPlane;
pub use types::{ChromaFormat, Interlacing, MAX_PLANES, PITCH_ALIGNMENT, PlaneLayout, VideoFormat};
