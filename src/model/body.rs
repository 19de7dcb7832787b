use std::collections::VecDeque;

use log::warn;
use nalgebra::{Point3, Vector3};

use super::Color;

/// Trails drop their oldest points past this many.
pub const DEFAULT_TRAIL_RETAIN: usize = 10_000;

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Centered on the body position.
    Sphere { radius: f64 },
    /// Centered on the body position.
    Cuboid { size: Vector3<f64> },
    /// Base disc is centered on the body position.
    Cylinder { axis: Vector3<f64>, radius: f64 },
    /// Base is centered on the body position, apex at `position + axis`.
    Cone { axis: Vector3<f64>, radius: f64 },
    /// Tail at the body position.
    Arrow { axis: Vector3<f64>, shaft_width: f64 },
    /// Starts at the body position.
    Helix {
        axis: Vector3<f64>,
        radius: f64,
        coils: u32,
    },
}

impl Shape {
    pub fn axis(&self) -> Option<Vector3<f64>> {
        match self {
            Shape::Sphere { .. } | Shape::Cuboid { .. } => None,
            Shape::Cylinder { axis, .. }
            | Shape::Cone { axis, .. }
            | Shape::Arrow { axis, .. }
            | Shape::Helix { axis, .. } => Some(*axis),
        }
    }

    fn axis_mut(&mut self) -> Option<&mut Vector3<f64>> {
        match self {
            Shape::Sphere { .. } | Shape::Cuboid { .. } => None,
            Shape::Cylinder { axis, .. }
            | Shape::Cone { axis, .. }
            | Shape::Arrow { axis, .. }
            | Shape::Helix { axis, .. } => Some(axis),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<Point3<f64>>,
    color: Option<Color>,
    retain: usize,
}

impl Trail {
    pub fn new(retain: usize) -> Self {
        Trail {
            points: VecDeque::new(),
            color: None,
            retain: retain.max(1),
        }
    }

    pub fn push(&mut self, point: Point3<f64>) {
        if self.points.len() == self.retain {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn points(&self) -> impl Iterator<Item = &Point3<f64>> + '_ {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    position: Point3<f64>,
    shape: Shape,
    color: Color,
    trail: Option<Trail>,
}

impl Body {
    pub fn new(position: Point3<f64>, shape: Shape, color: Color) -> Self {
        Body {
            position,
            shape,
            color,
            trail: None,
        }
    }

    pub fn sphere(position: Point3<f64>, radius: f64, color: Color) -> Self {
        Body::new(position, Shape::Sphere { radius }, color)
    }

    pub fn cuboid(position: Point3<f64>, size: Vector3<f64>, color: Color) -> Self {
        Body::new(position, Shape::Cuboid { size }, color)
    }

    pub fn cylinder(position: Point3<f64>, axis: Vector3<f64>, radius: f64, color: Color) -> Self {
        Body::new(position, Shape::Cylinder { axis, radius }, color)
    }

    pub fn cone(position: Point3<f64>, axis: Vector3<f64>, radius: f64, color: Color) -> Self {
        Body::new(position, Shape::Cone { axis, radius }, color)
    }

    /// Arrow with the default shaft width, a tenth of its length.
    pub fn arrow(position: Point3<f64>, axis: Vector3<f64>, color: Color) -> Self {
        let shaft_width = 0.1 * axis.norm();
        Body::new(position, Shape::Arrow { axis, shaft_width }, color)
    }

    pub fn helix(
        position: Point3<f64>,
        axis: Vector3<f64>,
        radius: f64,
        coils: u32,
        color: Color,
    ) -> Self {
        Body::new(
            position,
            Shape::Helix {
                axis,
                radius,
                coils,
            },
            color,
        )
    }

    /// Starts recording a trail, beginning at the current position.
    pub fn with_trail(mut self) -> Self {
        let mut trail = Trail::new(DEFAULT_TRAIL_RETAIN);
        trail.push(self.position);
        self.trail = Some(trail);
        self
    }

    pub fn with_trail_color(mut self, color: Color) -> Self {
        if self.trail.is_none() {
            self = self.with_trail();
        }
        if let Some(trail) = self.trail.as_mut() {
            trail.color = Some(color);
        }
        self
    }

    pub fn position(&self) -> Point3<f64> {
        self.position
    }

    /// Moves the body, leaving a trail point behind if it has a trail.
    pub fn set_position(&mut self, position: Point3<f64>) {
        self.position = position;
        if let Some(trail) = self.trail.as_mut() {
            trail.push(position);
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn set_axis(&mut self, axis: Vector3<f64>) {
        if let Some(a) = self.shape.axis_mut() {
            *a = axis;
            return;
        }
        warn!("Ignoring axis update on a shape without one: {:?}", self.shape);
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn trail(&self) -> Option<&Trail> {
        self.trail.as_ref()
    }

    /// Color the trail is drawn in; the body's own color unless overridden.
    pub fn trail_color(&self) -> Color {
        self.trail
            .as_ref()
            .and_then(|t| t.color())
            .unwrap_or(self.color)
    }

    pub fn clear_trail(&mut self) {
        if let Some(trail) = self.trail.as_mut() {
            trail.clear();
            trail.push(self.position);
        }
    }
}
