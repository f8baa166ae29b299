use std::f64::consts::TAU;

use crate::error::{OperationError, Result};
use crate::geometry::curve::{Circle, Line};
use crate::geometry::surface::{Cylinder, Plane};
use crate::math::{construct_perpendicular, Point3, Vector3, TOLERANCE};
use crate::topology::{
    EdgeCurve, EdgeData, FaceData, FaceSurface, OrientedEdge, ShellData, SolidData, SolidId,
    TopologyStore, VertexData, WireData,
};

/// Creates a cylinder solid from center, radius, axis, and height.
///
/// The solid has three faces: two planar caps bounded by full circles and
/// a cylindrical side closed by a straight seam edge. A negative height
/// extends the cylinder against the axis.
pub struct MakeCylinder {
    center: Point3,
    radius: f64,
    axis: Vector3,
    height: f64,
}

impl MakeCylinder {
    /// Creates a new `MakeCylinder` operation.
    #[must_use]
    pub fn new(center: Point3, radius: f64, axis: Vector3, height: f64) -> Self {
        Self {
            center,
            radius,
            axis,
            height,
        }
    }

    /// Executes the operation, creating the cylinder in the topology store.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius or height is near zero, or the axis
    /// direction is degenerate.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId> {
        if self.radius < TOLERANCE {
            return Err(
                OperationError::InvalidInput("cylinder radius must be positive".into()).into(),
            );
        }
        if self.height.abs() < TOLERANCE {
            return Err(
                OperationError::InvalidInput("cylinder height must be non-zero".into()).into(),
            );
        }
        let axis_len = self.axis.norm();
        if axis_len < TOLERANCE {
            return Err(
                OperationError::InvalidInput("cylinder axis must be non-zero".into()).into(),
            );
        }
        let axis = self.axis / axis_len * self.height.signum();
        let height = self.height.abs();
        let ref_dir = construct_perpendicular(&axis)?;

        let bottom_center = self.center;
        let top_center = self.center + axis * height;
        let bottom_point = bottom_center + ref_dir * self.radius;
        let top_point = top_center + ref_dir * self.radius;

        let v_bottom = store.add_vertex(VertexData::new(bottom_point));
        let v_top = store.add_vertex(VertexData::new(top_point));

        let bottom_circle = store.add_edge(EdgeData {
            start: v_bottom,
            end: v_bottom,
            curve: EdgeCurve::Circle(Circle::new(bottom_center, self.radius, axis, ref_dir)?),
            t_start: 0.0,
            t_end: TAU,
        });
        let top_circle = store.add_edge(EdgeData {
            start: v_top,
            end: v_top,
            curve: EdgeCurve::Circle(Circle::new(top_center, self.radius, axis, ref_dir)?),
            t_start: 0.0,
            t_end: TAU,
        });
        let seam = store.add_edge(EdgeData {
            start: v_bottom,
            end: v_top,
            curve: EdgeCurve::Line(Line::new(bottom_point, axis)?),
            t_start: 0.0,
            t_end: height,
        });

        // Circles run counter-clockwise around the axis, so the bottom cap
        // (facing -axis) walks its circle backwards.
        let bottom_wire = store.add_wire(WireData::closed(vec![OrientedEdge::new(
            bottom_circle,
            false,
        )]));
        let top_wire = store.add_wire(WireData::closed(vec![OrientedEdge::new(top_circle, true)]));
        let side_wire = store.add_wire(WireData::closed(vec![
            OrientedEdge::new(bottom_circle, true),
            OrientedEdge::new(seam, true),
            OrientedEdge::new(top_circle, false),
            OrientedEdge::new(seam, false),
        ]));

        let bottom = store.add_face(FaceData {
            surface: FaceSurface::Plane(Plane::from_normal(bottom_center, -axis)?),
            outer_wire: bottom_wire,
            inner_wires: Vec::new(),
            same_sense: true,
        });
        let top = store.add_face(FaceData {
            surface: FaceSurface::Plane(Plane::from_normal(top_center, axis)?),
            outer_wire: top_wire,
            inner_wires: Vec::new(),
            same_sense: true,
        });
        let side = store.add_face(FaceData {
            surface: FaceSurface::Cylinder(Cylinder::new(
                bottom_center,
                self.radius,
                axis,
                ref_dir,
            )?),
            outer_wire: side_wire,
            inner_wires: Vec::new(),
            same_sense: true,
        });

        let shell = store.add_shell(ShellData::new(vec![bottom, top, side], true));
        Ok(store.add_solid(SolidData::new(shell)))
    }
}
