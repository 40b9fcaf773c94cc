//! Pipeline conversions module
//!
//! This module contains orchestration logic that runs filters over whole streams.

mod fields_to_frames;

#[cfg(test)]
mod tests;

pub use fields_to_frames::FieldsToFramesPipeline;
