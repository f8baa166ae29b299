use std::f64::consts::{PI, TAU};

use crate::error::{Result, TopologyError};
use crate::math::{Isometry3, Point3, Vector3};
use crate::topology::{EdgeCurve, EdgeData, SolidId, TopologyStore};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Creates the smallest box containing all `points`, or `None` if there
    /// are none.
    #[must_use]
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let mut aabb = Self {
            min: first,
            max: first,
        };
        for p in iter {
            aabb.include(p);
        }
        Some(aabb)
    }

    /// Grows the box to contain `p`.
    pub fn include(&mut self, p: &Point3) {
        self.min = self.min.inf(p);
        self.max = self.max.sup(p);
    }

    /// Size of the box along each world axis.
    #[must_use]
    pub fn extents(&self) -> Vector3 {
        self.max - self.min
    }

    /// The eight corner points.
    #[must_use]
    pub fn corners(&self) -> [Point3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Point3::new(lo.x, lo.y, lo.z),
            Point3::new(hi.x, lo.y, lo.z),
            Point3::new(hi.x, hi.y, lo.z),
            Point3::new(lo.x, hi.y, lo.z),
            Point3::new(lo.x, lo.y, hi.z),
            Point3::new(hi.x, lo.y, hi.z),
            Point3::new(hi.x, hi.y, hi.z),
            Point3::new(lo.x, hi.y, hi.z),
        ]
    }

    /// Box around the transformed corners.
    ///
    /// Exact when the rotation part maps coordinate axes onto coordinate
    /// axes; a conservative bound otherwise.
    #[must_use]
    pub fn transformed(&self, iso: &Isometry3) -> Self {
        let corners = self.corners().map(|c| iso * c);
        let mut aabb = Self {
            min: corners[0],
            max: corners[0],
        };
        for c in &corners[1..] {
            aabb.include(c);
        }
        aabb
    }
}

/// Computes the axis-aligned bounding box of a solid.
///
/// The box is computed from the boundary edges. Conics contribute their
/// coordinate extrema within the edge's parameter range, so curved solids
/// get a tight box rather than a vertex hull.
pub struct BoundingBox {
    solid: SolidId,
}

impl BoundingBox {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the query, returning the AABB.
    ///
    /// # Errors
    ///
    /// Returns an error if an entity is missing or the solid has no edges.
    pub fn execute(&self, store: &TopologyStore) -> Result<Aabb> {
        let mut points = Vec::new();
        for edge_id in store.solid_edges(self.solid)? {
            let edge = store.edge(edge_id)?;
            points.push(store.vertex(edge.start)?.point);
            points.push(store.vertex(edge.end)?.point);
            extreme_points(edge, &mut points)?;
        }
        Aabb::from_points(&points).ok_or_else(|| {
            TopologyError::InvalidTopology("solid has no edges to bound".into()).into()
        })
    }
}

/// Pushes the points of `edge` where a coordinate reaches an extremum.
fn extreme_points(edge: &EdgeData, out: &mut Vec<Point3>) -> Result<()> {
    let (u, v) = match &edge.curve {
        EdgeCurve::Line(_) | EdgeCurve::InfiniteLine(_) => return Ok(()),
        EdgeCurve::Freeform(samples) => {
            out.extend_from_slice(samples);
            return Ok(());
        }
        EdgeCurve::Arc(circle) | EdgeCurve::Circle(circle) => circle.axes(),
        EdgeCurve::Ellipse(ellipse) => ellipse.axes(),
    };

    // c + u cos t + v sin t has d/dt = 0 on axis i at atan2(v_i, u_i) and
    // half a turn later.
    let (lo, hi) = if edge.t_start <= edge.t_end {
        (edge.t_start, edge.t_end)
    } else {
        (edge.t_end, edge.t_start)
    };
    for i in 0..3 {
        let base = v[i].atan2(u[i]);
        for critical in [base, base + PI] {
            let mut t = critical + ((lo - critical) / TAU).ceil() * TAU;
            while t <= hi {
                out.push(edge.curve.point_at(t)?);
                t += TAU;
            }
        }
    }
    Ok(())
}
