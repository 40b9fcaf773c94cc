use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Unsupported field height: {0} visible lines")]
    UnsupportedFieldHeight(usize),

    #[error("Invalid picture dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Failed to allocate {0} bytes")]
    AllocationFailed(usize),

    #[error("Plane count mismatch: expected {expected}, found {found}")]
    PlaneCountMismatch { expected: usize, found: usize },

    #[error("Plane {plane} geometry changed mid-stream: expected pitch/lines {expected:?}, found {found:?}")]
    GeometryMismatch {
        plane: usize,
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("Output plane {plane} too small: needs pitch >= {required_pitch} and lines >= {required_lines}")]
    OutputTooSmall {
        plane: usize,
        required_pitch: usize,
        required_lines: usize,
    },

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode field stream: {0}")]
    DecodeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FilterError>;
