use log::info;
use nalgebra::{Point3, Vector3};

use super::{Demo, Framing, Progress};
use crate::consts::{DEFAULT_DT, DEFAULT_RATE, STANDARD_GRAVITY};
use crate::math::KinematicState;
use crate::model::{Body, BodyID, Color, Scene};

#[derive(Debug, Clone)]
pub struct ProjectileParams {
    /// Launch speed, in m/s.
    pub speed: f64,
    /// Launch angle above the horizontal, in degrees.
    pub angle: f64,
    /// Coefficient of the quadratic drag force, per unit mass.
    pub drag: f64,
    pub gravity: f64,
    pub dt: f64,
    pub rate: u32,
}

impl Default for ProjectileParams {
    fn default() -> Self {
        ProjectileParams {
            speed: 20.0,
            angle: 45.0,
            drag: 0.02,
            gravity: STANDARD_GRAVITY,
            dt: DEFAULT_DT,
            rate: DEFAULT_RATE,
        }
    }
}

impl ProjectileParams {
    pub fn without_drag(&self) -> Self {
        ProjectileParams {
            drag: 0.0,
            ..self.clone()
        }
    }

    pub fn launch_velocity(&self) -> Vector3<f64> {
        let angle = self.angle.to_radians();
        self.speed * Vector3::new(angle.cos(), angle.sin(), 0.0)
    }

    /// Range on flat ground with no air, v^2 sin(2θ) / g.
    pub fn vacuum_range(&self) -> f64 {
        self.speed.powi(2) * (2.0 * self.angle.to_radians()).sin() / self.gravity
    }
}

/// Air resistance, always pointing against the velocity, growing with the square of speed.
pub fn drag_force(drag: f64, velocity: &Vector3<f64>) -> Vector3<f64> {
    -drag * velocity.norm() * *velocity
}

pub struct Projectile {
    params: ProjectileParams,
    ball: BodyID,
    state: KinematicState,
}

impl Projectile {
    pub fn new(params: ProjectileParams, scene: &mut Scene) -> Self {
        scene.set_background(Color::gray(0.2));

        scene.add(Body::cuboid(
            Point3::new(25.0, -0.5, 0.0),
            Vector3::new(60.0, 1.0, 10.0),
            Color::GREEN,
        ));
        let ball = scene.add(Body::sphere(Point3::origin(), 0.5, Color::RED).with_trail());
        let state = KinematicState::new(params.launch_velocity());

        for line in launch_report(&params) {
            info!("{}", line);
        }

        Projectile {
            params,
            ball,
            state,
        }
    }

    pub fn ball(&self) -> BodyID {
        self.ball
    }

    /// Horizontal distance from the launch point.
    pub fn range(&self, scene: &Scene) -> f64 {
        scene.get_body(self.ball).position().x
    }
}

impl Demo for Projectile {
    fn name(&self) -> &'static str {
        "projectile"
    }

    fn rate(&self) -> u32 {
        self.params.rate
    }

    fn dt(&self) -> f64 {
        self.params.dt
    }

    fn framing(&self) -> Framing {
        Framing {
            target: Point3::new(20.0, 5.0, 0.0),
            distance: 45.0,
            elevation: 0.1,
        }
    }

    fn step(&mut self, scene: &mut Scene) -> Progress {
        let ball = scene.get_body_mut(self.ball);
        if ball.position().y < 0.0 {
            return Progress::Finished;
        }

        // Drag uses the velocity from before this step's gravity kick
        let acceleration = Vector3::new(0.0, -self.params.gravity, 0.0)
            + drag_force(self.params.drag, &self.state.velocity);
        let position = self.state.advance(ball.position(), acceleration, self.params.dt);
        ball.set_position(position);

        if position.y < 0.0 {
            Progress::Finished
        } else {
            Progress::Running
        }
    }

    fn finish(&mut self, scene: &Scene) {
        info!("{}", range_report(self.range(scene)));
        info!("Simulation complete!");
    }
}

fn launch_report(params: &ProjectileParams) -> [String; 2] {
    [
        format!("Projectile launched at {} degrees", params.angle),
        format!("Initial velocity: {} m/s", params.speed),
    ]
}

fn range_report(range: f64) -> String {
    format!("Range: {:.2} meters", range)
}

/// Result of flying a projectile until it lands.
#[derive(Debug, Clone)]
pub struct Flight {
    pub range: f64,
    pub steps: usize,
    pub path: Vec<Point3<f64>>,
}

impl Flight {
    pub fn duration(&self, dt: f64) -> f64 {
        self.steps as f64 * dt
    }
}

/// Runs the projectile demo start to finish as fast as possible, off screen.
pub fn fly(params: &ProjectileParams) -> Flight {
    let mut scene = Scene::new();
    let mut projectile = Projectile::new(params.clone(), &mut scene);

    let mut steps = 1;
    while projectile.step(&mut scene) == Progress::Running {
        steps += 1;
    }

    let ball = scene.get_body(projectile.ball());
    Flight {
        range: projectile.range(&scene),
        steps,
        path: ball
            .trail()
            .map(|t| t.points().copied().collect())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn test_launch_velocity() {
        let params = ProjectileParams::default();
        let v = params.launch_velocity();
        assert_relative_eq!(v.x, 20.0 / 2.0_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(v.y, 20.0 / 2.0_f64.sqrt(), epsilon = 1e-12);
        assert_eq!(v.z, 0.0);
    }

    #[test]
    fn test_drag_opposes_motion() {
        let v = Vector3::new(3.0, 4.0, 0.0);
        let f = drag_force(0.02, &v);
        assert_relative_eq!(f, Vector3::new(-0.3, -0.4, 0.0), epsilon = 1e-12);
        assert_eq!(drag_force(0.0, &v), Vector3::zeros());
    }

    #[test]
    fn test_vacuum_range() {
        let params = ProjectileParams::default().without_drag();
        assert_abs_diff_eq!(params.vacuum_range(), 40.816, epsilon = 1e-3);

        let flight = fly(&params);
        assert_abs_diff_eq!(flight.range, params.vacuum_range(), epsilon = 0.2);
        // 2 v sin(θ) / g, give or take a step
        assert_abs_diff_eq!(flight.duration(params.dt), 2.886, epsilon = 0.02);
    }

    #[test]
    fn test_drag_shortens_range() {
        let with_drag = fly(&ProjectileParams::default());
        let without_drag = fly(&ProjectileParams::default().without_drag());
        assert!(with_drag.range < without_drag.range);
        assert!(with_drag.range > 0.0);
    }

    #[test]
    fn test_lands_below_ground() {
        let flight = fly(&ProjectileParams::default());
        let last = flight.path.last().unwrap();
        assert!(last.y < 0.0);
        // Everything before landing is above ground
        for pt in flight.path[..flight.path.len() - 1].iter() {
            assert!(pt.y >= 0.0);
        }
        assert_eq!(flight.path.len(), flight.steps + 1);
        assert_eq!(flight.path[0], Point3::origin());
    }

    #[test]
    fn test_no_steps_after_landing() {
        let mut scene = Scene::new();
        let mut projectile = Projectile::new(ProjectileParams::default(), &mut scene);
        while projectile.step(&mut scene) == Progress::Running {}

        let landed = scene.get_body(projectile.ball()).position();
        assert_eq!(projectile.step(&mut scene), Progress::Finished);
        assert_eq!(scene.get_body(projectile.ball()).position(), landed);
    }

    #[test]
    fn test_reports() {
        let [angle, speed] = launch_report(&ProjectileParams::default());
        assert_eq!(angle, "Projectile launched at 45 degrees");
        assert_eq!(speed, "Initial velocity: 20 m/s");

        assert_eq!(range_report(40.8123), "Range: 40.81 meters");
        assert_eq!(range_report(7.0), "Range: 7.00 meters");
    }
}
