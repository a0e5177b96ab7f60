//! Grid layout planning for panel figures
//!
//! This module computes the row/column arrangement used to tile a set of
//! panels into a single figure, biased towards a requested aspect ratio.

mod arrange;
mod types;

pub use arrange::arrange;
pub use types::{AspectRatio, GridShape};
