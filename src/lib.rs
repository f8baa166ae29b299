//! Deduplicated cut lists for the solid bodies of a CAD assembly.
//!
//! Bodies are measured in a canonical orientation derived from their
//! largest planar face bounded by convex edges, so that identical parts
//! placed at different rotations land on the same cut list item.

pub mod assembly;
pub mod cutlist;
pub mod error;
pub mod export;
pub mod format;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod orientation;
pub mod tessellation;
pub mod topology;

pub use error::{CutlistError, Result};
pub use export::{export, ExportOptions};
