mod body;
mod color;

pub use body::{Body, Shape, Trail, DEFAULT_TRAIL_RETAIN};
pub use color::Color;

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct BodyID(pub usize);

/// Everything that gets drawn. Bodies are never removed, so IDs stay valid for the
/// lifetime of the scene.
#[derive(Debug, Clone)]
pub struct Scene {
    background: Color,
    bodies: Vec<Body>,
}

impl Scene {
    pub fn new() -> Self {
        Scene {
            background: Color::BLACK,
            bodies: vec![],
        }
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    pub fn add(&mut self, body: Body) -> BodyID {
        self.bodies.push(body);
        BodyID(self.bodies.len() - 1)
    }

    pub fn get_body(&self, id: BodyID) -> &Body {
        &self.bodies[id.0]
    }

    pub fn get_body_mut(&mut self, id: BodyID) -> &mut Body {
        &mut self.bodies[id.0]
    }

    pub fn bodies(&self) -> impl Iterator<Item = (BodyID, &Body)> + '_ {
        self.bodies.iter().enumerate().map(|(i, b)| (BodyID(i), b))
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn clear_trails(&mut self) {
        for body in self.bodies.iter_mut() {
            body.clear_trail();
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Scene::new()
    }
}
