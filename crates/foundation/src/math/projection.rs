use crate::geo::GeoPoint;

use super::vec::Vec2;

use std::f64::consts::PI;

/// Kavrayskiy VII map projection fixed to a drawing viewport.
///
/// Built once per map dataset; the mapping is pure, so one value can be
/// shared read-only by every layer that needs lon/lat -> pixel coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projection {
    scale: f64,
    translate: Vec2,
}

impl Projection {
    pub fn new(scale: f64, translate: Vec2) -> Self {
        Self { scale, translate }
    }

    /// Projection centered in a `width` x `height` viewport.
    pub fn fit(scale: f64, width: f64, height: f64) -> Self {
        Self::new(scale, Vec2::new(width / 2.0, height / 2.0))
    }

    /// Projects geographic coordinates into drawing space.
    ///
    /// Kavrayskiy VII raw form:
    /// `x = (3*lam / 2*pi) * sqrt(pi^2/3 - phi^2)`, `y = phi`.
    /// The y axis is flipped because drawing space grows downward.
    pub fn project(&self, point: GeoPoint) -> Vec2 {
        let lam = point.lon_rad();
        let phi = point.lat_rad();

        let x = 3.0 * lam / (2.0 * PI) * (PI * PI / 3.0 - phi * phi).sqrt();
        let y = phi;

        Vec2::new(
            self.translate.x + self.scale * x,
            self.translate.y - self.scale * y,
        )
    }

    /// Projects a ring or polyline vertex-by-vertex for path drawing.
    pub fn project_path(&self, points: &[GeoPoint]) -> Vec<Vec2> {
        points.iter().map(|p| self.project(*p)).collect()
    }
}
