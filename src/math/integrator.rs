use nalgebra::{Point3, Vector3};

/// Velocity attached to a single moving body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicState {
    pub velocity: Vector3<f64>,
}

impl KinematicState {
    pub fn new(velocity: Vector3<f64>) -> Self {
        KinematicState { velocity }
    }

    pub fn at_rest() -> Self {
        KinematicState {
            velocity: Vector3::zeros(),
        }
    }

    /// Advances this state and the given position by one step, returning the new position.
    pub fn advance(
        &mut self,
        position: Point3<f64>,
        acceleration: Vector3<f64>,
        dt: f64,
    ) -> Point3<f64> {
        let (position, velocity) = euler_step(position, self.velocity, acceleration, dt);
        self.velocity = velocity;
        position
    }
}

/// One step of semi-implicit (symplectic) Euler.
///
/// The velocity is updated first, and the *new* velocity is used to move the position.
pub fn euler_step(
    position: Point3<f64>,
    velocity: Vector3<f64>,
    acceleration: Vector3<f64>,
    dt: f64,
) -> (Point3<f64>, Vector3<f64>) {
    let velocity = velocity + acceleration * dt;
    let position = position + velocity * dt;
    (position, velocity)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_single_step() {
        let position = Point3::new(0.0, 5.0, 0.0);
        let velocity = Vector3::new(2.0, 0.0, 1.0);
        let gravity = Vector3::new(0.0, -9.8, 0.0);

        let (new_position, new_velocity) = euler_step(position, velocity, gravity, 0.01);
        assert_relative_eq!(new_velocity, Vector3::new(2.0, -0.098, 1.0), epsilon = 1e-12);
        assert_relative_eq!(new_position, position + new_velocity * 0.01);
        assert_relative_eq!(new_position, Point3::new(0.02, 4.99902, 0.01), epsilon = 1e-12);
    }

    #[test]
    fn test_velocity_before_position() {
        // Starting from rest, explicit Euler wouldn't move on the first step
        let (position, _) = euler_step(Point3::origin(), Vector3::zeros(), Vector3::x(), 0.5);
        assert_relative_eq!(position, Point3::new(0.25, 0.0, 0.0));
    }

    #[test]
    fn test_state_advance() {
        let mut state = KinematicState::new(Vector3::new(1.0, 1.0, 0.0));
        let mut position = Point3::origin();
        for _ in 0..10 {
            position = state.advance(position, Vector3::new(0.0, -1.0, 0.0), 0.1);
        }
        assert_relative_eq!(state.velocity, Vector3::new(1.0, 0.0, 0.0), epsilon = 1e-12);
        // sum of (1 - 0.1k) * 0.1 for k = 1..10
        assert_relative_eq!(position, Point3::new(1.0, 0.45, 0.0), epsilon = 1e-12);
    }
}
