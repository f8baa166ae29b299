use super::{Point3, Vector3, TOLERANCE};

/// Computes the area vector of a closed polygon using Newell's method.
///
/// The result points along the polygon normal (right-hand rule on the
/// vertex order) and its length is twice the polygon area.
#[must_use]
pub fn newell_normal(points: &[Point3]) -> Vector3 {
    let n = points.len();
    let mut normal = Vector3::zeros();
    for i in 0..n {
        let curr = &points[i];
        let next = &points[(i + 1) % n];
        normal.x += (curr.y - next.y) * (curr.z + next.z);
        normal.y += (curr.z - next.z) * (curr.x + next.x);
        normal.z += (curr.x - next.x) * (curr.y + next.y);
    }
    normal
}

/// Area of a planar polygon.
#[must_use]
pub fn polygon_area(points: &[Point3]) -> f64 {
    newell_normal(points).norm() * 0.5
}

/// Area-weighted centroid of a planar polygon.
///
/// Falls back to the vertex average when the polygon has no area.
#[must_use]
pub fn polygon_centroid(points: &[Point3]) -> Option<Point3> {
    let first = points.first()?;
    let normal = newell_normal(points);
    let len = normal.norm();

    if len >= TOLERANCE {
        let unit = normal / len;
        let mut weighted = Vector3::zeros();
        let mut total = 0.0;
        for pair in points[1..].windows(2) {
            let a = pair[0] - first;
            let b = pair[1] - first;
            let area = unit.dot(&a.cross(&b)) * 0.5;
            weighted += (a + b) / 3.0 * area;
            total += area;
        }
        if total.abs() >= TOLERANCE {
            return Some(first + weighted / total);
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let inv_n = 1.0 / points.len() as f64;
    let sum = points.iter().fold(Vector3::zeros(), |acc, p| acc + p.coords);
    Some(Point3::from(sum * inv_n))
}
