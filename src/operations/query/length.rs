use crate::error::Result;
use crate::topology::{EdgeCurve, EdgeId, TopologyStore};

/// Simpson intervals used for elliptical arc length.
const ELLIPSE_INTERVALS: usize = 256;

/// Computes the length of a curve (edge).
pub struct Length {
    edge: EdgeId,
}

impl Length {
    /// Creates a new `Length` query.
    #[must_use]
    pub fn new(edge: EdgeId) -> Self {
        Self { edge }
    }

    /// Executes the query, returning the curve length.
    ///
    /// Lines are parameterized by arc length, circles and arcs use
    /// `radius * |sweep|`. Ellipses have no closed form and are integrated
    /// numerically. Free-form curves sum their sample segments.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not found.
    pub fn execute(&self, store: &TopologyStore) -> Result<f64> {
        let edge = store.edge(self.edge)?;
        let sweep = (edge.t_end - edge.t_start).abs();
        let length = match &edge.curve {
            EdgeCurve::Line(_) | EdgeCurve::InfiniteLine(_) => sweep,
            EdgeCurve::Arc(circle) | EdgeCurve::Circle(circle) => circle.radius() * sweep,
            EdgeCurve::Ellipse(ellipse) => ellipse_length(
                ellipse.semi_major(),
                ellipse.semi_minor(),
                edge.t_start,
                edge.t_end,
            ),
            EdgeCurve::Freeform(points) => points.windows(2).map(|w| (w[1] - w[0]).norm()).sum(),
        };
        Ok(length)
    }
}

/// Composite Simpson's rule over `|P'(t)| = sqrt(a^2 sin^2 t + b^2 cos^2 t)`.
#[allow(clippy::cast_precision_loss)]
fn ellipse_length(a: f64, b: f64, t0: f64, t1: f64) -> f64 {
    let speed = |t: f64| (a * a * t.sin().powi(2) + b * b * t.cos().powi(2)).sqrt();
    let n = ELLIPSE_INTERVALS;
    let h = (t1 - t0) / n as f64;
    let mut sum = speed(t0) + speed(t1);
    for i in 1..n {
        let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
        sum += weight * speed(t0 + h * i as f64);
    }
    (sum * h / 3.0).abs()
}
