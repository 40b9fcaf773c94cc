//! Field weaving module
//!
//! This module reconstructs interlaced frames from streams that deliver one
//! field per picture, by storing the first field of each pair and
//! interleaving its rows with those of the second.

mod field_weaver;
mod interleave;
mod storage;
pub mod types;


pub use field_weaver::FieldWeaver;
pub use interleave::weave_plane;
pub use types::{
    DEFAULT_TRAILING_TRIM, FIELD_LINES_480, FIELD_LINES_576, FIELD_LINES_1080, FieldSlot,
    WeaverConfig, WeaverConfigBuilder,
};
