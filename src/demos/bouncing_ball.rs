use nalgebra::{Point3, Vector3};

use super::{Demo, Framing, Progress};
use crate::consts::{DEFAULT_DT, DEFAULT_RATE, STANDARD_GRAVITY};
use crate::math::KinematicState;
use crate::model::{Body, BodyID, Color, Scene};

#[derive(Debug, Clone)]
pub struct BouncingBallParams {
    pub start: Point3<f64>,
    pub velocity: Vector3<f64>,
    pub gravity: f64,
    pub radius: f64,
    /// Fraction of vertical speed kept after hitting the floor.
    pub restitution: f64,
    /// Lowest height the ball's center can reach; the floor's top plus the ball's radius.
    pub floor_offset: f64,
    pub wall_x: f64,
    pub wall_z: f64,
    pub dt: f64,
    pub rate: u32,
}

impl Default for BouncingBallParams {
    fn default() -> Self {
        BouncingBallParams {
            start: Point3::new(0.0, 5.0, 0.0),
            velocity: Vector3::new(2.0, 0.0, 1.0),
            gravity: STANDARD_GRAVITY,
            radius: 0.5,
            restitution: 0.9,
            floor_offset: -0.5,
            wall_x: 4.5,
            wall_z: 4.5,
            dt: DEFAULT_DT,
            rate: DEFAULT_RATE,
        }
    }
}

impl BouncingBallParams {
    /// Bounces off the floor, then off the walls. The three checks are independent, so a
    /// ball in a corner can bounce off all of them in the same frame.
    ///
    /// Only the floor loses energy, and only the floor clamps the position back into
    /// the box.
    pub fn apply_bounds(&self, position: &mut Point3<f64>, velocity: &mut Vector3<f64>) {
        if position.y < self.floor_offset {
            velocity.y = -velocity.y * self.restitution;
            position.y = self.floor_offset;
        }

        if position.x.abs() > self.wall_x {
            velocity.x = -velocity.x;
        }
        if position.z.abs() > self.wall_z {
            velocity.z = -velocity.z;
        }
    }
}

pub struct BouncingBall {
    params: BouncingBallParams,
    ball: BodyID,
    state: KinematicState,
}

impl BouncingBall {
    pub fn new(params: BouncingBallParams, scene: &mut Scene) -> Self {
        scene.set_background(Color::gray(0.2));

        scene.add(Body::cuboid(
            Point3::new(0.0, -1.0, 0.0),
            Vector3::new(10.0, 0.2, 10.0),
            Color::GREEN,
        ));
        let ball = scene.add(Body::sphere(params.start, params.radius, Color::RED).with_trail());
        let state = KinematicState::new(params.velocity);

        BouncingBall {
            params,
            ball,
            state,
        }
    }

    pub fn ball(&self) -> BodyID {
        self.ball
    }

    pub fn velocity(&self) -> Vector3<f64> {
        self.state.velocity
    }
}

impl Demo for BouncingBall {
    fn name(&self) -> &'static str {
        "bouncing ball"
    }

    fn rate(&self) -> u32 {
        self.params.rate
    }

    fn dt(&self) -> f64 {
        self.params.dt
    }

    fn framing(&self) -> Framing {
        Framing {
            target: Point3::new(0.0, 1.5, 0.0),
            distance: 16.0,
            elevation: 0.2,
        }
    }

    fn step(&mut self, scene: &mut Scene) -> Progress {
        let gravity = Vector3::new(0.0, -self.params.gravity, 0.0);
        let ball = scene.get_body_mut(self.ball);

        let mut position = self.state.advance(ball.position(), gravity, self.params.dt);
        self.params.apply_bounds(&mut position, &mut self.state.velocity);
        ball.set_position(position);

        Progress::Running
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_floor_bounce() {
        let params = BouncingBallParams::default();
        let mut position = Point3::new(1.0, -0.6, 1.0);
        let mut velocity = Vector3::new(2.0, -3.0, 1.0);

        params.apply_bounds(&mut position, &mut velocity);
        assert_relative_eq!(velocity, Vector3::new(2.0, 2.7, 1.0), epsilon = 1e-12);
        assert_relative_eq!(position, Point3::new(1.0, -0.5, 1.0));
    }

    #[test]
    fn test_wall_bounce() {
        let params = BouncingBallParams::default();
        let mut position = Point3::new(4.6, 2.0, 0.0);
        let mut velocity = Vector3::new(2.0, -1.0, 1.0);

        params.apply_bounds(&mut position, &mut velocity);
        assert_relative_eq!(velocity, Vector3::new(-2.0, -1.0, 1.0));
        assert_relative_eq!(position, Point3::new(4.6, 2.0, 0.0));

        // Other side, other wall
        let mut position = Point3::new(0.0, 2.0, -4.7);
        let mut velocity = Vector3::new(2.0, -1.0, -1.0);
        params.apply_bounds(&mut position, &mut velocity);
        assert_relative_eq!(velocity, Vector3::new(2.0, -1.0, 1.0));
    }

    #[test]
    fn test_corner_bounce() {
        let params = BouncingBallParams::default();
        let mut position = Point3::new(-4.6, -0.7, 4.6);
        let mut velocity = Vector3::new(-1.0, -2.0, 1.0);

        params.apply_bounds(&mut position, &mut velocity);
        assert_relative_eq!(velocity, Vector3::new(1.0, 1.8, -1.0), epsilon = 1e-12);
        assert_relative_eq!(position, Point3::new(-4.6, -0.5, 4.6));
    }

    #[test]
    fn test_inside_box_is_untouched() {
        let params = BouncingBallParams::default();
        let mut position = Point3::new(1.0, 0.0, -1.0);
        let mut velocity = Vector3::new(2.0, -3.0, 1.0);

        params.apply_bounds(&mut position, &mut velocity);
        assert_eq!(position, Point3::new(1.0, 0.0, -1.0));
        assert_eq!(velocity, Vector3::new(2.0, -3.0, 1.0));
    }

    #[test]
    fn test_first_step() {
        let mut scene = Scene::new();
        let mut demo = BouncingBall::new(BouncingBallParams::default(), &mut scene);
        assert_eq!(scene.background(), Color::gray(0.2));

        demo.step(&mut scene);
        assert_relative_eq!(demo.velocity(), Vector3::new(2.0, -0.098, 1.0), epsilon = 1e-12);
        assert_relative_eq!(
            scene.get_body(demo.ball()).position(),
            Point3::new(0.02, 4.99902, 0.01),
            epsilon = 1e-12
        );
        assert_eq!(scene.get_body(demo.ball()).trail().unwrap().len(), 2);
    }
}
