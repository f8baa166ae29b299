use crate::error::{GeometryError, Result};
use std::f64::consts::TAU;

use crate::geometry::curve::{Circle, Curve, Ellipse, Line};
use crate::math::{Isometry3, Point3, Vector3, TOLERANCE};

use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for an edge in the topology store.
    ///
    /// Faces that share an edge reference the same `EdgeId`, so the id is the
    /// stable identity used for edge set membership.
    pub struct EdgeId;
}

/// Classification of an edge's underlying curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveType {
    Line,
    InfiniteLine,
    Arc,
    Circle,
    Ellipse,
    EllipticalArc,
    /// Any curve without a dedicated classification.
    Other,
}

impl CurveType {
    /// Returns `true` for straight curve types.
    #[must_use]
    pub fn is_linear(self) -> bool {
        match self {
            Self::Line | Self::InfiniteLine => true,
            Self::Arc | Self::Circle | Self::Ellipse | Self::EllipticalArc | Self::Other => false,
        }
    }

    /// Returns `true` if a direction can be estimated for edges of this type.
    #[must_use]
    pub fn is_orientable(self) -> bool {
        match self {
            Self::Line
            | Self::InfiniteLine
            | Self::Arc
            | Self::Circle
            | Self::Ellipse
            | Self::EllipticalArc => true,
            Self::Other => false,
        }
    }
}

/// The geometric curve associated with an edge.
#[derive(Debug, Clone)]
pub enum EdgeCurve {
    /// A line segment.
    Line(Line),
    /// An edge lying on an unbounded construction line.
    InfiniteLine(Line),
    /// A circular arc, the part of its circle inside the edge's range.
    Arc(Circle),
    /// A full circle.
    Circle(Circle),
    /// An ellipse or elliptical arc, told apart by the edge's range.
    Ellipse(Ellipse),
    /// A free-form curve known only by its sample points.
    Freeform(Vec<Point3>),
}

impl EdgeCurve {
    /// Evaluates the curve at parameter `t`. Free-form curves interpolate
    /// linearly, `t` being a fractional index into the sample list.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation fails or a free-form curve has no samples.
    pub fn point_at(&self, t: f64) -> Result<Point3> {
        match self {
            Self::Line(line) | Self::InfiniteLine(line) => line.evaluate(t),
            Self::Arc(circle) | Self::Circle(circle) => circle.evaluate(t),
            Self::Ellipse(ellipse) => ellipse.evaluate(t),
            Self::Freeform(points) => {
                let (a, b, s) = freeform_segment(points, t)?;
                Ok(a + (b - a) * s)
            }
        }
    }

    /// Computes the unit tangent at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tangent is degenerate.
    pub fn tangent_at(&self, t: f64) -> Result<Vector3> {
        match self {
            Self::Line(line) | Self::InfiniteLine(line) => line.tangent(t),
            Self::Arc(circle) | Self::Circle(circle) => circle.tangent(t),
            Self::Ellipse(ellipse) => ellipse.tangent(t),
            Self::Freeform(points) => {
                let (a, b, _) = freeform_segment(points, t)?;
                let d = b - a;
                let len = d.norm();
                if len < TOLERANCE {
                    return Err(GeometryError::ZeroVector.into());
                }
                Ok(d / len)
            }
        }
    }

    /// Returns this curve moved by a rigid motion.
    #[must_use]
    pub fn transformed(&self, iso: &Isometry3) -> Self {
        match self {
            Self::Line(line) => Self::Line(line.transformed(iso)),
            Self::InfiniteLine(line) => Self::InfiniteLine(line.transformed(iso)),
            Self::Arc(circle) => Self::Arc(circle.transformed(iso)),
            Self::Circle(circle) => Self::Circle(circle.transformed(iso)),
            Self::Ellipse(ellipse) => Self::Ellipse(ellipse.transformed(iso)),
            Self::Freeform(points) => Self::Freeform(points.iter().map(|p| iso * p).collect()),
        }
    }
}

/// Finds the sample segment containing `t` and the local fraction along it.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn freeform_segment(points: &[Point3], t: f64) -> Result<(Point3, Point3, f64)> {
    match points {
        [] => Err(GeometryError::Degenerate("free-form curve has no samples".into()).into()),
        [only] => Ok((*only, *only, 0.0)),
        _ => {
            let last_segment = points.len() - 2;
            let t = t.clamp(0.0, (points.len() - 1) as f64);
            let i = (t.floor() as usize).min(last_segment);
            Ok((points[i], points[i + 1], t - i as f64))
        }
    }
}

/// Data associated with a topological edge.
///
/// An edge connects two vertices and carries a geometric curve
/// that defines the shape of the edge between them. Closed curves
/// (circles, full ellipses) start and end on the same vertex.
#[derive(Debug, Clone)]
pub struct EdgeData {
    /// Start vertex of the edge.
    pub start: VertexId,
    /// End vertex of the edge.
    pub end: VertexId,
    /// The geometric curve defining this edge's shape.
    pub curve: EdgeCurve,
    /// Parameter on the curve corresponding to the start vertex.
    pub t_start: f64,
    /// Parameter on the curve corresponding to the end vertex.
    pub t_end: f64,
}

impl EdgeData {
    /// Returns the curve type tag.
    ///
    /// An ellipse edge is a full `Ellipse` when its parameter range covers
    /// a whole turn and an `EllipticalArc` otherwise, whatever the range of
    /// the underlying curve.
    #[must_use]
    pub fn curve_type(&self) -> CurveType {
        match &self.curve {
            EdgeCurve::Line(_) => CurveType::Line,
            EdgeCurve::InfiniteLine(_) => CurveType::InfiniteLine,
            EdgeCurve::Arc(_) => CurveType::Arc,
            EdgeCurve::Circle(_) => CurveType::Circle,
            EdgeCurve::Ellipse(_) if self.is_full_turn() => CurveType::Ellipse,
            EdgeCurve::Ellipse(_) => CurveType::EllipticalArc,
            EdgeCurve::Freeform(_) => CurveType::Other,
        }
    }

    fn is_full_turn(&self) -> bool {
        (self.t_end - self.t_start).abs() >= TAU - TOLERANCE
    }
}
