use kiss3d::camera::Camera;
use kiss3d::renderer::{LineRenderer, Renderer};
use nalgebra::{Point3, Vector3};

use crate::math::geometry::{helix_point, sample_unit_interval};
use crate::model::Color;

// Segments per turn of a helix. Any fewer and the coils look like polygons.
const HELIX_SEGMENTS_PER_COIL: usize = 24;

/// Draws everything that isn't a solid primitive: helices and trails, as line strips.
/// Lines only last for one frame.
pub struct CompoundRenderer {
    line_renderer: LineRenderer,
}

impl CompoundRenderer {
    pub fn new() -> Self {
        CompoundRenderer {
            line_renderer: LineRenderer::new(),
        }
    }

    pub fn draw_path<'a, I>(&mut self, points: I, color: Color)
    where
        I: IntoIterator<Item = &'a Point3<f64>>,
    {
        let color = color.to_point();
        let mut prev_pt: Option<Point3<f32>> = None;
        for pt in points {
            let pt: Point3<f32> = nalgebra::convert(*pt);
            if let Some(prev_pt) = prev_pt {
                self.line_renderer.draw_line(prev_pt, pt, color);
            }
            prev_pt = Some(pt);
        }
    }

    pub fn draw_helix(
        &mut self,
        base: &Point3<f64>,
        axis: &Vector3<f64>,
        radius: f64,
        coils: u32,
        color: Color,
    ) {
        let num_segments = HELIX_SEGMENTS_PER_COIL * (coils.max(1) as usize);
        let points: Vec<_> = sample_unit_interval(
            |u| helix_point(base, axis, radius, coils as f64, u),
            num_segments,
        )
        .collect();
        self.draw_path(points.iter(), color);
    }
}

impl Renderer for CompoundRenderer {
    fn render(&mut self, pass: usize, camera: &mut dyn Camera) {
        self.line_renderer.render(pass, camera);
    }
}
