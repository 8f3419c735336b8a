use foundation::math::projection::Projection;
use render::command::{Color, DrawCommand, rgba};
use render::surface::Surface;
use scene::boundary::BoundaryGeometry;

use crate::graticule::Graticule;
use crate::layer::{Layer, LayerId};

/// Fixed colors of the static base layer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BasemapStyle {
    pub land_fill: Color,
    pub land_stroke: Color,
    pub land_stroke_width_px: f32,
    pub grid_color: Color,
    pub grid_width_px: f32,
    pub outline_width_px: f32,
}

impl Default for BasemapStyle {
    fn default() -> Self {
        Self {
            // Land #B3DDEF / black border, both at 0.7 alpha.
            land_fill: rgba(0.702, 0.867, 0.937, 0.7),
            land_stroke: rgba(0.0, 0.0, 0.0, 0.7),
            land_stroke_width_px: 1.0,
            grid_color: rgba(0.863, 0.863, 0.863, 0.1),
            grid_width_px: 0.1,
            outline_width_px: 0.5,
        }
    }
}

/// Draws the static base layer: land polygons, graticule, outline.
///
/// Executes exactly once per map load. The base surface is never touched
/// again while the dynamic layer repaints at 1 Hz.
#[derive(Debug)]
pub struct BasemapLayer {
    id: LayerId,
    geometry: BoundaryGeometry,
    graticule: Graticule,
    style: BasemapStyle,
}

impl BasemapLayer {
    pub fn new(id: u64, geometry: BoundaryGeometry) -> Self {
        Self {
            id: LayerId(id),
            geometry,
            graticule: Graticule::default(),
            style: BasemapStyle::default(),
        }
    }

    pub fn with_style(mut self, style: BasemapStyle) -> Self {
        self.style = style;
        self
    }

    pub fn geometry(&self) -> &BoundaryGeometry {
        &self.geometry
    }

    pub fn render(&self, projection: &Projection, surface: &mut Surface) {
        for region in &self.geometry.regions {
            let rings: Vec<_> = region
                .rings
                .iter()
                .map(|ring| projection.project_path(ring))
                .collect();
            if rings.is_empty() {
                continue;
            }

            surface.push(DrawCommand::FillPolygon {
                rings: rings.clone(),
                color: self.style.land_fill,
            });
            for ring in rings {
                surface.push(DrawCommand::StrokePath {
                    points: ring,
                    width_px: self.style.land_stroke_width_px,
                    color: self.style.land_stroke,
                    closed: true,
                });
            }
        }

        for line in self.graticule.lines() {
            surface.push(DrawCommand::StrokePath {
                points: projection.project_path(&line),
                width_px: self.style.grid_width_px,
                color: self.style.grid_color,
                closed: false,
            });
        }

        surface.push(DrawCommand::StrokePath {
            points: projection.project_path(&self.graticule.outline()),
            width_px: self.style.outline_width_px,
            color: self.style.grid_color,
            closed: true,
        });
    }
}

impl Layer for BasemapLayer {
    fn id(&self) -> LayerId {
        self.id
    }

    fn name(&self) -> &'static str {
        "basemap"
    }
}

#[cfg(test)]
mod tests {
    use super::BasemapLayer;
    use foundation::geo::GeoPoint;
    use foundation::math::projection::Projection;
    use render::command::DrawCommand;
    use render::surface::Surface;
    use scene::boundary::{BoundaryGeometry, RegionPolygon};

    fn triangle_region(offset: f64) -> RegionPolygon {
        RegionPolygon::new(vec![vec![
            GeoPoint::new(offset, 0.0),
            GeoPoint::new(offset + 5.0, 0.0),
            GeoPoint::new(offset + 5.0, 5.0),
        ]])
    }

    #[test]
    fn one_fill_and_stroke_per_region_plus_grid_and_outline() {
        let geometry = BoundaryGeometry::new(vec![triangle_region(0.0), triangle_region(20.0)]);
        let layer = BasemapLayer::new(1, geometry);
        let projection = Projection::fit(170.0, 960.0, 600.0);

        let mut surface = Surface::new();
        layer.render(&projection, &mut surface);

        let fills = surface
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillPolygon { .. }))
            .count();
        let strokes = surface
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokePath { .. }))
            .count();
        let grid_lines = 37 + 17;
        assert_eq!(fills, 2);
        // One border stroke per region, the grid lines, and the outline.
        assert_eq!(strokes, 2 + grid_lines + 1);
    }

    #[test]
    fn rendering_is_repeatable() {
        // The layer is only invoked once per map load; nothing about it is
        // order- or state-dependent.
        let layer = BasemapLayer::new(1, BoundaryGeometry::new(vec![triangle_region(0.0)]));
        let projection = Projection::fit(170.0, 960.0, 600.0);

        let mut a = Surface::new();
        let mut b = Surface::new();
        layer.render(&projection, &mut a);
        layer.render(&projection, &mut b);
        assert_eq!(a.commands(), b.commands());
    }
}
