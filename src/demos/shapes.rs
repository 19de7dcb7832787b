use nalgebra::{Point3, Vector3};

use super::{Demo, Framing, Progress};
use crate::model::{Body, Color, Scene};

/// One of each primitive, standing still.
pub struct Shapes;

impl Shapes {
    pub fn new(scene: &mut Scene) -> Self {
        scene.add(Body::sphere(Point3::origin(), 1.0, Color::RED));
        scene.add(Body::cuboid(
            Point3::new(3.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 1.0),
            Color::BLUE,
        ));
        scene.add(Body::cylinder(
            Point3::new(-3.0, 0.0, 0.0),
            Vector3::new(0.0, 2.0, 0.0),
            0.5,
            Color::GREEN,
        ));
        scene.add(Body::cone(
            Point3::new(0.0, 3.0, 0.0),
            Vector3::new(0.0, -1.5, 0.0),
            0.7,
            Color::YELLOW,
        ));
        scene.add(Body::arrow(
            Point3::new(0.0, -2.0, 0.0),
            Vector3::new(2.0, 0.0, 0.0),
            Color::CYAN,
        ));
        Shapes
    }
}

impl Demo for Shapes {
    fn name(&self) -> &'static str {
        "basic shapes"
    }

    // Nothing moves, so this only paces redraws
    fn rate(&self) -> u32 {
        30
    }

    fn framing(&self) -> Framing {
        Framing {
            target: Point3::new(0.0, 0.5, 0.0),
            distance: 12.0,
            elevation: 0.0,
        }
    }

    fn step(&mut self, _scene: &mut Scene) -> Progress {
        Progress::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Shape;

    #[test]
    fn test_scene_contents() {
        let mut scene = Scene::new();
        let mut demo = Shapes::new(&mut scene);
        assert_eq!(scene.len(), 5);

        let cone = scene
            .bodies()
            .map(|(_, b)| b)
            .find(|b| matches!(b.shape(), Shape::Cone { .. }))
            .unwrap();
        assert_eq!(cone.shape().axis(), Some(Vector3::new(0.0, -1.5, 0.0)));

        // Stepping changes nothing
        let before: Vec<_> = scene.bodies().map(|(_, b)| b.position()).collect();
        assert_eq!(demo.step(&mut scene), Progress::Running);
        let after: Vec<_> = scene.bodies().map(|(_, b)| b.position()).collect();
        assert_eq!(before, after);
    }
}
