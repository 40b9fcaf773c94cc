use crate::video_pipeline::common::error::{FilterError, Result};
use crate::video_pipeline::picture::types::PlaneLayout;

/// Zero-filled buffer of `size` bytes, reporting exhaustion instead of aborting.
pub(crate) fn try_zeroed(size: usize) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    data.try_reserve_exact(size)
        .map_err(|_| FilterError::AllocationFailed(size))?;
    data.resize(size, 0);
    Ok(data)
}

/// One component plane of a picture.
///
/// Holds exactly `pitch * lines` bytes; only the visible sub-rectangle
/// carries picture content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelPlane {
    data: Vec<u8>,
    layout: PlaneLayout,
}

impl PixelPlane {
    pub fn zeroed(layout: PlaneLayout) -> Result<Self> {
        Ok(Self {
            data: try_zeroed(layout.size())?,
            layout,
        })
    }

    pub fn from_vec(data: Vec<u8>, layout: PlaneLayout) -> Result<Self> {
        if data.len() != layout.size() {
            return Err(FilterError::InvalidDimensions(layout.pitch, layout.lines));
        }
        Ok(Self { data, layout })
    }

    pub fn pitch(&self) -> usize {
        self.layout.pitch
    }

    pub fn lines(&self) -> usize {
        self.layout.lines
    }

    pub fn visible_pitch(&self) -> usize {
        self.layout.visible_pitch
    }

    pub fn visible_lines(&self) -> usize {
        self.layout.visible_lines
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Stored row `index`, padding included. Panics if out of range.
    pub fn row(&self, index: usize) -> &[u8] {
        let start = index * self.layout.pitch;
        &self.data[start..start + self.layout.pitch]
    }

    pub fn row_mut(&mut self, index: usize) -> &mut [u8] {
        let start = index * self.layout.pitch;
        &mut self.data[start..start + self.layout.pitch]
    }

    /// Visible bytes of every visible row, top to bottom.
    pub fn visible_rows(&self) -> impl Iterator<Item = &[u8]> {
        let visible = self.layout.visible_pitch.min(self.layout.pitch);
        self.data
            .chunks_exact(self.layout.pitch.max(1))
            .take(self.layout.visible_lines)
            .map(move |row| &row[..visible])
    }
}
