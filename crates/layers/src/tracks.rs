use foundation::geo::GeoPoint;
use foundation::math::Vec2;
use foundation::math::projection::Projection;
use render::command::{Color, DrawCommand, rgba};
use render::surface::MapCanvas;
use scene::track::TrackSet;

use crate::layer::{Layer, LayerId};
use crate::symbology::{CategoricalScale, label_token};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TrackStyle {
    pub marker_radius_px: f32,
    pub label_font_px: f32,
    /// Label baseline offset below the marker center.
    pub label_offset_px: f64,
    pub clock_font_px: f32,
    pub clock_color: Color,
}

impl Default for TrackStyle {
    fn default() -> Self {
        Self {
            marker_radius_px: 4.0,
            label_font_px: 11.0,
            label_offset_px: 14.0,
            clock_font_px: 14.0,
            clock_color: rgba(0.2, 0.2, 0.2, 1.0),
        }
    }
}

/// Repaints the dynamic surface for one tick: the simulated clock plus one
/// marker + label per tracked object at the shared sample index.
///
/// The base surface is never touched here. Color assignment is keyed on the
/// object's label token and is stable for the lifetime of the layer, so a
/// marker keeps its color from tick to tick.
#[derive(Debug)]
pub struct TrackLayer {
    id: LayerId,
    style: TrackStyle,
    scale: CategoricalScale,
}

impl TrackLayer {
    pub fn new(id: u64) -> Self {
        Self {
            id: LayerId(id),
            style: TrackStyle::default(),
            scale: CategoricalScale::new(),
        }
    }

    pub fn with_style(mut self, style: TrackStyle) -> Self {
        self.style = style;
        self
    }

    pub fn render(
        &mut self,
        tracks: &TrackSet,
        index: usize,
        clock_label: &str,
        projection: &Projection,
        canvas: &mut MapCanvas,
    ) {
        let width = canvas.width;
        let surface = canvas.track_mut();
        surface.clear();

        surface.push(DrawCommand::Text {
            text: clock_label.to_string(),
            position: Vec2::new(width / 2.0, 10.0),
            font_size_px: self.style.clock_font_px,
            color: self.style.clock_color,
        });

        for track in tracks.iter() {
            let Some(sample) = track.sample_at(index) else {
                // This track is shorter than the shared index; others may
                // still be drawing.
                continue;
            };
            if sample.is_no_reading() {
                continue;
            }

            let token = label_token(&track.object.display_name);
            let color = self.scale.color(&token);
            let center = projection.project(GeoPoint::new(sample.longitude, sample.latitude));

            surface.push(DrawCommand::FillCircle {
                center,
                radius_px: self.style.marker_radius_px,
                color,
            });
            surface.push(DrawCommand::Text {
                text: token,
                position: Vec2::new(center.x, center.y + self.style.label_offset_px),
                font_size_px: self.style.label_font_px,
                color,
            });
        }
    }
}

impl Layer for TrackLayer {
    fn id(&self) -> LayerId {
        self.id
    }

    fn name(&self) -> &'static str {
        "tracks"
    }
}
