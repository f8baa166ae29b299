mod tessellate_curve;
mod tessellate_wire;

pub use tessellate_curve::TessellateCurve;
pub use tessellate_wire::TessellateWire;

use crate::math::Point3;

/// Parameters controlling boundary sampling quality.
#[derive(Debug, Clone, Copy)]
pub struct TessellationParams {
    /// Maximum allowed deviation from the true geometry.
    pub tolerance: f64,
    /// Minimum number of segments for curves.
    pub min_segments: usize,
    /// Maximum number of segments for curves.
    pub max_segments: usize,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            tolerance: 0.001,
            min_segments: 4,
            max_segments: 512,
        }
    }
}

impl TessellationParams {
    /// Computes the number of segments for an angular sweep based on chord error.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn angular_segments(&self, radius: f64, sweep: f64) -> usize {
        if radius > self.tolerance {
            let half_angle = (1.0 - self.tolerance / radius).acos();
            let computed = (sweep.abs() / (2.0 * half_angle)).ceil() as usize;
            computed.clamp(self.min_segments, self.max_segments)
        } else {
            self.min_segments
        }
    }
}

/// A polyline approximation of a curve.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point3>,
}

impl Polyline {
    /// Returns the summed length of the segments.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
    }
}
