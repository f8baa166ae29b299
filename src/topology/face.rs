use crate::error::Result;
use crate::geometry::surface::{Cylinder, Plane, Surface};
use crate::math::{Isometry3, Point3, Vector3};

use super::wire::WireId;

slotmap::new_key_type! {
    /// Unique identifier for a face in the topology store.
    pub struct FaceId;
}

/// The geometric surface associated with a face.
#[derive(Debug, Clone)]
pub enum FaceSurface {
    /// A planar surface.
    Plane(Plane),
    /// A cylindrical surface.
    Cylinder(Cylinder),
}

impl FaceSurface {
    /// Returns `true` if the surface is a plane.
    #[must_use]
    pub fn is_planar(&self) -> bool {
        matches!(self, Self::Plane(_))
    }

    /// Evaluates the surface normal at the parameters of `point`.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal is degenerate at that point.
    pub fn normal_at(&self, point: &Point3) -> Result<Vector3> {
        match self {
            Self::Plane(plane) => {
                let (u, v) = plane.inverse(point);
                plane.normal(u, v)
            }
            Self::Cylinder(cylinder) => {
                let (u, v) = cylinder.inverse(point);
                cylinder.normal(u, v)
            }
        }
    }

    /// Returns this surface moved by a rigid motion.
    #[must_use]
    pub fn transformed(&self, iso: &Isometry3) -> Self {
        match self {
            Self::Plane(plane) => Self::Plane(plane.transformed(iso)),
            Self::Cylinder(cylinder) => Self::Cylinder(cylinder.transformed(iso)),
        }
    }
}

/// Data associated with a topological face.
///
/// A face is a bounded region on a surface, defined by an outer wire
/// and optionally inner wires (holes). Wires run counter-clockwise when
/// seen from outside the solid, i.e. around the face normal.
#[derive(Debug, Clone)]
pub struct FaceData {
    /// The geometric surface on which this face lies.
    pub surface: FaceSurface,
    /// The outer boundary wire.
    pub outer_wire: WireId,
    /// Inner boundary wires (holes).
    pub inner_wires: Vec<WireId>,
    /// If `true`, the face normal agrees with the surface normal.
    pub same_sense: bool,
}
