//! Video format description types

use arrayvec::ArrayVec;

/// Maximum number of planes any supported chroma layout uses.
pub const MAX_PLANES: usize = 3;

/// Row byte counts are rounded up to this alignment when deriving a pitch.
pub const PITCH_ALIGNMENT: usize = 16;

/// Chroma / pixel layout of a picture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChromaFormat {
    /// Planar 8-bit 4:2:0: Y, U, V in three planes
    I420,
    /// Semi-planar 8-bit 4:2:0: Y plane plus interleaved UV plane
    Nv12,
    /// Packed 8-bit 4:2:2 (YUYV) in a single plane
    Yuy2,
}

impl ChromaFormat {
    pub fn plane_count(&self) -> usize {
        match self {
            Self::I420 => 3,
            Self::Nv12 => 2,
            Self::Yuy2 => 1,
        }
    }

    /// Bytes per row and row count of plane `index` for a `width`x`height` image.
    fn plane_extent(&self, index: usize, width: usize, height: usize) -> (usize, usize) {
        match (self, index) {
            (Self::I420, 0) | (Self::Nv12, 0) => (width, height),
            (Self::I420, _) => (width.div_ceil(2), height.div_ceil(2)),
            (Self::Nv12, _) => (width.div_ceil(2) * 2, height.div_ceil(2)),
            (Self::Yuy2, _) => (width.div_ceil(2) * 4, height),
        }
    }
}

/// Field ordering / scan type declared by a format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interlacing {
    Progressive,
    TopFieldFirst,
    BottomFieldFirst,
}

/// Storage geometry of one plane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaneLayout {
    /// Stored bytes per row, including alignment padding
    pub pitch: usize,
    /// Stored row count
    pub lines: usize,
    /// Bytes per row that carry picture content
    pub visible_pitch: usize,
    /// Rows that carry picture content
    pub visible_lines: usize,
}

impl PlaneLayout {
    pub fn size(&self) -> usize {
        self.pitch * self.lines
    }
}

/// Describes the pictures flowing through one side of a filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFormat {
    pub chroma: ChromaFormat,
    /// Stored width in pixels
    pub width: usize,
    /// Stored height in pixels
    pub height: usize,
    pub visible_width: usize,
    pub visible_height: usize,
    pub interlacing: Interlacing,
}

impl VideoFormat {
    /// A progressive format whose visible area covers the whole stored area.
    pub fn new(chroma: ChromaFormat, width: usize, height: usize) -> Self {
        Self {
            chroma,
            width,
            height,
            visible_width: width,
            visible_height: height,
            interlacing: Interlacing::Progressive,
        }
    }

    pub fn with_visible(mut self, visible_width: usize, visible_height: usize) -> Self {
        self.visible_width = visible_width;
        self.visible_height = visible_height;
        self
    }

    /// Per-plane storage geometry, in plane order.
    pub fn plane_layouts(&self) -> ArrayVec<PlaneLayout, MAX_PLANES> {
        (0..self.chroma.plane_count())
            .map(|i| {
                let (row_bytes, lines) = self.chroma.plane_extent(i, self.width, self.height);
                let (visible_pitch, visible_lines) =
                    self.chroma
                        .plane_extent(i, self.visible_width, self.visible_height);
                PlaneLayout {
                    pitch: row_bytes.next_multiple_of(PITCH_ALIGNMENT),
                    lines,
                    visible_pitch,
                    visible_lines,
                }
            })
            .collect()
    }

    /// Total bytes of tightly packed visible content across all planes.
    pub fn visible_size(&self) -> usize {
        self.plane_layouts()
            .iter()
            .map(|p| p.visible_pitch * p.visible_lines)
            .sum()
    }
}
