mod area;
mod bounding_box;
mod convex;
mod is_valid;
mod length;

pub use area::{FaceArea, FaceCentroid, FaceNormal};
pub use bounding_box::{Aabb, BoundingBox};
pub use convex::ConvexEdges;
pub use is_valid::IsValid;
pub use length::Length;
