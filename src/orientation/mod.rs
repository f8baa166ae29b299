//! Orientation-independent sizing of solids.
//!
//! A solid is turned so that a stable reference face lies flat and its
//! longest straight edge runs along X; the bounding box of the turned solid
//! is then the same however the solid was placed.

mod canonical;
mod edge;
mod face;

pub use canonical::{CanonicalBoundingBox, CanonicalFrame, PlacedBoundingBox};
pub use edge::EdgeOrientation;
pub use face::{FindLargestPlanarConvexFace, FindLongestOrientableEdge};
