use std::f64::consts::{PI, TAU};

use crate::error::{OperationError, Result};
use crate::geometry::surface::{Cylinder, Surface};
use crate::math::polygon::{polygon_area, polygon_centroid};
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::tessellation::{TessellateWire, TessellationParams};
use crate::topology::{FaceId, FaceSurface, TopologyStore, WireId};

/// Computes the area of a face.
///
/// Planar faces sample their boundary wires into polygons and subtract the
/// holes. Cylindrical faces unroll the boundary into `(angle, height)`
/// parameter space.
pub struct FaceArea {
    face: FaceId,
    params: TessellationParams,
}

impl FaceArea {
    /// Creates a new `FaceArea` query with default sampling parameters.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self {
            face,
            params: TessellationParams::default(),
        }
    }

    /// Sets custom sampling parameters for higher accuracy.
    #[must_use]
    pub fn with_params(mut self, params: TessellationParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query, returning the face area.
    ///
    /// # Errors
    ///
    /// Returns an error if the face or one of its wires is missing.
    pub fn execute(&self, store: &TopologyStore) -> Result<f64> {
        let face = store.face(self.face)?;
        match &face.surface {
            FaceSurface::Plane(_) => {
                let mut area = polygon_area(&self.sample(store, face.outer_wire)?);
                for &hole in &face.inner_wires {
                    area -= polygon_area(&self.sample(store, hole)?);
                }
                Ok(area.max(0.0))
            }
            FaceSurface::Cylinder(cylinder) => {
                let mut area = unrolled_area(cylinder, &self.sample(store, face.outer_wire)?);
                for &hole in &face.inner_wires {
                    area -= unrolled_area(cylinder, &self.sample(store, hole)?);
                }
                Ok(area.max(0.0))
            }
        }
    }

    fn sample(&self, store: &TopologyStore, wire: WireId) -> Result<Vec<Point3>> {
        TessellateWire::new(wire, self.params).execute(store)
    }
}

/// Shoelace area of the boundary mapped to `(r * angle, height)`, with the
/// angle unwrapped so the loop stays continuous across the seam.
fn unrolled_area(cylinder: &Cylinder, points: &[Point3]) -> f64 {
    let mut uv = Vec::with_capacity(points.len());
    let mut prev_u: Option<f64> = None;
    for p in points {
        let (mut u, v) = cylinder.inverse(p);
        if let Some(prev) = prev_u {
            while u - prev > PI {
                u -= TAU;
            }
            while prev - u > PI {
                u += TAU;
            }
        }
        prev_u = Some(u);
        uv.push((u * cylinder.radius(), v));
    }

    let n = uv.len();
    let twice: f64 = (0..n)
        .map(|i| {
            let (x0, y0) = uv[i];
            let (x1, y1) = uv[(i + 1) % n];
            x0 * y1 - x1 * y0
        })
        .sum();
    twice.abs() * 0.5
}

/// Computes the area-weighted centroid of a planar face, holes excluded.
pub struct FaceCentroid {
    face: FaceId,
    params: TessellationParams,
}

impl FaceCentroid {
    /// Creates a new `FaceCentroid` query.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self {
            face,
            params: TessellationParams::default(),
        }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] for non-planar faces or an
    /// empty boundary.
    pub fn execute(&self, store: &TopologyStore) -> Result<Point3> {
        let face = store.face(self.face)?;
        if !face.surface.is_planar() {
            return Err(OperationError::InvalidInput(
                "centroid is only computed for planar faces".into(),
            )
            .into());
        }

        let mut weighted = Vector3::zeros();
        let mut total = 0.0;
        let wires = std::iter::once((face.outer_wire, 1.0))
            .chain(face.inner_wires.iter().map(|&w| (w, -1.0)));
        for (wire, sign) in wires {
            let polygon = TessellateWire::new(wire, self.params).execute(store)?;
            let centroid = polygon_centroid(&polygon)
                .ok_or_else(|| OperationError::InvalidInput("face boundary is empty".into()))?;
            let area = polygon_area(&polygon) * sign;
            weighted += centroid.coords * area;
            total += area;
        }

        if total.abs() < TOLERANCE {
            let outer = TessellateWire::new(face.outer_wire, self.params).execute(store)?;
            return polygon_centroid(&outer).ok_or_else(|| {
                OperationError::InvalidInput("face boundary is empty".into()).into()
            });
        }
        Ok(Point3::from(weighted / total))
    }
}

/// Evaluates the outward normal of a face at a point on it.
pub struct FaceNormal {
    face: FaceId,
    point: Point3,
}

impl FaceNormal {
    /// Creates a new `FaceNormal` query.
    #[must_use]
    pub fn new(face: FaceId, point: Point3) -> Self {
        Self { face, point }
    }

    /// Executes the query, returning a unit vector pointing out of the solid.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is missing or the normal is degenerate.
    pub fn execute(&self, store: &TopologyStore) -> Result<Vector3> {
        let face = store.face(self.face)?;
        let normal = face.surface.normal_at(&self.point)?;
        Ok(if face.same_sense { normal } else { -normal })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::{MakeBox, MakeCylinder, MakeFace, MakeWire};

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn box_face_areas_sum_to_surface_area() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(p(0.0, 0.0, 0.0), p(2.0, 3.0, 4.0))
            .execute(&mut store)
            .unwrap();
        let total: f64 = store
            .solid_faces(solid)
            .unwrap()
            .into_iter()
            .map(|f| FaceArea::new(f).execute(&store).unwrap())
            .sum();
        // 2*(2*3 + 2*4 + 3*4)
        assert!((total - 52.0).abs() < 1e-9, "expected 52.0, got {total}");
    }

    #[test]
    fn cylinder_area() {
        let mut store = TopologyStore::new();
        let solid = MakeCylinder::new(p(0.0, 0.0, 0.0), 2.0, Vector3::z(), 5.0)
            .execute(&mut store)
            .unwrap();
        let total: f64 = store
            .solid_faces(solid)
            .unwrap()
            .into_iter()
            .map(|f| FaceArea::new(f).execute(&store).unwrap())
            .sum();
        // lateral 2*pi*r*h plus two caps pi*r^2
        let expected = 28.0 * PI;
        assert!(
            (total - expected).abs() < expected * 1e-3,
            "expected ~{expected:.3}, got {total:.3}"
        );
    }

    #[test]
    fn face_with_hole() {
        let mut store = TopologyStore::new();
        let outer = MakeWire::new(
            vec![p(0.0, 0.0, 0.0), p(10.0, 0.0, 0.0), p(10.0, 10.0, 0.0), p(0.0, 10.0, 0.0)],
            true,
        )
        .execute(&mut store)
        .unwrap();
        let inner = MakeWire::new(
            vec![p(6.0, 6.0, 0.0), p(6.0, 8.0, 0.0), p(8.0, 8.0, 0.0), p(8.0, 6.0, 0.0)],
            true,
        )
        .execute(&mut store)
        .unwrap();
        let face = MakeFace::new(outer, vec![inner]).execute(&mut store).unwrap();

        let area = FaceArea::new(face).execute(&store).unwrap();
        assert!((area - 96.0).abs() < 1e-9);

        // (100 * (5, 5) - 4 * (7, 7)) / 96
        let c = FaceCentroid::new(face).execute(&store).unwrap();
        let expected = (500.0 - 28.0) / 96.0;
        assert!((c - p(expected, expected, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn box_normals_point_away_from_center() {
        let mut store = TopologyStore::new();
        let solid = MakeBox::new(p(0.0, 0.0, 0.0), p(2.0, 2.0, 2.0))
            .execute(&mut store)
            .unwrap();
        let center = p(1.0, 1.0, 1.0);
        for face in store.solid_faces(solid).unwrap() {
            let c = FaceCentroid::new(face).execute(&store).unwrap();
            let n = FaceNormal::new(face, c).execute(&store).unwrap();
            assert!((n - (c - center)).norm() < 1e-9);
        }
    }

    #[test]
    fn centroid_of_cylindrical_face_fails() {
        let mut store = TopologyStore::new();
        let solid = MakeCylinder::new(p(0.0, 0.0, 0.0), 1.0, Vector3::z(), 1.0)
            .execute(&mut store)
            .unwrap();
        let side = store
            .solid_faces(solid)
            .unwrap()
            .into_iter()
            .find(|&f| !store.face(f).unwrap().surface.is_planar())
            .unwrap();
        assert!(FaceCentroid::new(side).execute(&store).is_err());
    }
}
