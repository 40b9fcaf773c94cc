use arrayvec::ArrayVec;
use tracing::debug;

use crate::video_pipeline::common::error::Result;
use crate::video_pipeline::picture::{MAX_PLANES, Picture, PictureAllocator};

/// Retained copy of one plane of a first field.
#[derive(Debug)]
pub(crate) struct StoredPlane {
    data: Vec<u8>,
}

impl StoredPlane {
    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

/// Holds the first field of the pair being assembled.
///
/// Buffers are sized from the first picture captured and are never resized.
/// Callers only hand it pictures of the geometry the weaver was configured for.
#[derive(Debug, Default)]
pub(crate) struct FieldStore {
    planes: ArrayVec<StoredPlane, MAX_PLANES>,
}

impl FieldStore {
    pub(crate) fn is_allocated(&self) -> bool {
        !self.planes.is_empty()
    }

    pub(crate) fn plane(&self, index: usize) -> Option<&StoredPlane> {
        self.planes.get(index)
    }

    /// Sizes one buffer per plane of `picture` on first use. On failure the
    /// store stays unallocated.
    pub(crate) fn ensure_allocated<A: PictureAllocator>(
        &mut self,
        picture: &Picture,
        allocator: &A,
    ) -> Result<()> {
        if self.is_allocated() {
            return Ok(());
        }

        let mut planes = ArrayVec::new();
        for (i, plane) in picture.planes().iter().enumerate() {
            debug!(
                plane = i,
                pitch = plane.pitch(),
                lines = plane.lines(),
                "Allocating field storage"
            );
            planes.push(StoredPlane {
                data: allocator.new_buffer(plane.pitch() * plane.lines())?,
            });
        }
        self.planes = planes;
        Ok(())
    }

    /// Copies every stored row of every plane of `picture`.
    pub(crate) fn capture(&mut self, picture: &Picture) {
        for (stored, plane) in self.planes.iter_mut().zip(picture.planes()) {
            stored.data.copy_from_slice(plane.as_slice());
        }
    }

    /// Frees the buffers.
    pub(crate) fn release(&mut self) {
        self.planes.clear();
    }
}
