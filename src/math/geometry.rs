use nalgebra::{Point3, UnitQuaternion, Vector3};

use std::f64::consts::PI;

/// Where to put a unit primitive so it matches some body.
///
/// The primitives are assumed to be centered on the origin, extending one unit along
/// each axis, with their long axis along y. `scale` is the full extent along (x, y, z).
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub center: Point3<f64>,
    pub rotation: UnitQuaternion<f64>,
    pub scale: Vector3<f64>,
}

/// Returns a rotation that sends the y-axis to point along `axis`.
///
/// The only tricky case is when `axis` points straight down, since then there's no
/// unique shortest rotation; we flip around x. A zero axis gives the identity.
pub fn rotation_onto(axis: &Vector3<f64>) -> UnitQuaternion<f64> {
    match UnitQuaternion::rotation_between(&Vector3::y(), axis) {
        Some(rotation) => rotation,
        None => UnitQuaternion::from_axis_angle(&Vector3::x_axis(), PI),
    }
}

/// Placement for a primitive that starts at `base` and extends along `axis`, like a
/// cylinder or a cone.
pub fn axial_placement(base: &Point3<f64>, axis: &Vector3<f64>, radius: f64) -> Placement {
    Placement {
        center: *base + *axis / 2.0,
        rotation: rotation_onto(axis),
        scale: Vector3::new(2.0 * radius, axis.norm(), 2.0 * radius),
    }
}

/// Placement for a primitive described by its center and its extents, like a sphere or a box.
pub fn centered_placement(center: &Point3<f64>, size: &Vector3<f64>) -> Placement {
    Placement {
        center: *center,
        rotation: UnitQuaternion::identity(),
        scale: *size,
    }
}

/// Dimensions of the two pieces of an arrow: a cylindrical shaft, and a cone on top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowParts {
    pub shaft_length: f64,
    pub shaft_radius: f64,
    pub head_length: f64,
    pub head_radius: f64,
}

impl ArrowParts {
    /// Head is twice as wide and three times as long as the shaft is wide. On short arrows
    /// the head would swallow the shaft, so it's capped at half the length.
    pub fn new(length: f64, shaft_width: f64) -> Self {
        let head_length = f64::min(3.0 * shaft_width, length / 2.0);
        ArrowParts {
            shaft_length: length - head_length,
            shaft_radius: shaft_width / 2.0,
            head_length,
            head_radius: shaft_width,
        }
    }
}

/// Evaluates `f` at `num_segments + 1` evenly spaced points between 0 and 1, inclusive.
pub fn sample_unit_interval<F, T>(f: F, num_segments: usize) -> impl Iterator<Item = T>
where
    F: Fn(f64) -> T,
{
    assert!(
        num_segments >= 1,
        "Must have at least one segment, num_segments was {}",
        num_segments
    );
    (0..=num_segments)
        .map(move |i| i as f64 / num_segments as f64)
        .map(f)
}

/// Point on a helix that starts at `base` and winds `coils` times around `axis`.
/// `u` goes from 0 (base) to 1 (tip).
pub fn helix_point(
    base: &Point3<f64>,
    axis: &Vector3<f64>,
    radius: f64,
    coils: f64,
    u: f64,
) -> Point3<f64> {
    // Any two directions perpendicular to the axis will do
    let rotation = rotation_onto(axis);
    let e1 = rotation * Vector3::x();
    let e2 = rotation * Vector3::z();

    let angle = 2.0 * PI * coils * u;
    *base + u * *axis + radius * (angle.cos() * e1 + angle.sin() * e2)
}
