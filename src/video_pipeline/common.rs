//! Common utilities module
//!
//! This module contains the error type shared across the video pipeline.

pub mod error;

pub use error::{FilterError, Result};
