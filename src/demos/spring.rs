use log::info;
use nalgebra::{Point3, Vector3};

use super::{Demo, Framing, Progress};
use crate::consts::{DEFAULT_DT, DEFAULT_RATE, STANDARD_GRAVITY};
use crate::math::KinematicState;
use crate::model::{Body, BodyID, Color, Scene};

#[derive(Debug, Clone)]
pub struct SpringParams {
    /// Spring constant k, in N/m.
    pub stiffness: f64,
    pub mass: f64,
    /// Length at which the spring exerts no force.
    pub natural_length: f64,
    /// Linear damping coefficient, in N s/m.
    pub damping: f64,
    pub gravity: f64,
    /// Height of the ceiling the spring hangs from.
    pub anchor_y: f64,
    /// Starting height of the mass, which starts at rest.
    pub start_y: f64,
    pub dt: f64,
    pub rate: u32,
}

impl Default for SpringParams {
    fn default() -> Self {
        SpringParams {
            stiffness: 10.0,
            mass: 1.0,
            natural_length: 3.0,
            damping: 0.1,
            gravity: STANDARD_GRAVITY,
            anchor_y: 5.0,
            start_y: 2.0,
            dt: DEFAULT_DT,
            rate: DEFAULT_RATE,
        }
    }
}

impl SpringParams {
    pub fn anchor(&self) -> Point3<f64> {
        Point3::new(0.0, self.anchor_y, 0.0)
    }

    /// How much longer than its natural length the spring is, with the mass at `y`.
    pub fn stretch(&self, y: f64) -> f64 {
        self.anchor_y - y - self.natural_length
    }

    /// Spring plus damping, without gravity. Positive is up.
    pub fn spring_force(&self, y: f64, vy: f64) -> f64 {
        self.stiffness * self.stretch(y) - self.damping * vy
    }

    /// Vertical acceleration of the mass. Gravity always applies, even at the natural length.
    pub fn acceleration(&self, y: f64, vy: f64) -> f64 {
        (self.spring_force(y, vy) - self.mass * self.gravity) / self.mass
    }

    /// Height where the spring holds the mass up against gravity.
    pub fn equilibrium_y(&self) -> f64 {
        self.anchor_y - self.natural_length - self.mass * self.gravity / self.stiffness
    }
}

const INTRO: [&str; 2] = [
    "Watch the spring oscillate!",
    "Drag the view to rotate the scene.",
];

/// A mass bobbing on a damped spring. Motion is purely vertical.
pub struct Spring {
    params: SpringParams,
    mass: BodyID,
    coil: BodyID,
    state: KinematicState,
}

impl Spring {
    pub fn new(params: SpringParams, scene: &mut Scene) -> Self {
        scene.set_background(Color::gray(0.2));

        let anchor = params.anchor();
        scene.add(Body::cuboid(
            anchor,
            Vector3::new(2.0, 0.1, 2.0),
            Color::gray(0.5),
        ));

        let start = Point3::new(0.0, params.start_y, 0.0);
        let mass = scene.add(Body::sphere(start, 0.3, Color::RED));
        let coil = scene.add(Body::helix(anchor, start - anchor, 0.2, 10, Color::WHITE));

        for line in INTRO {
            info!("{}", line);
        }

        Spring {
            params,
            mass,
            coil,
            state: KinematicState::at_rest(),
        }
    }

    pub fn mass(&self) -> BodyID {
        self.mass
    }

    pub fn coil(&self) -> BodyID {
        self.coil
    }

    pub fn velocity(&self) -> Vector3<f64> {
        self.state.velocity
    }
}

impl Demo for Spring {
    fn name(&self) -> &'static str {
        "spring"
    }

    fn rate(&self) -> u32 {
        self.params.rate
    }

    fn dt(&self) -> f64 {
        self.params.dt
    }

    fn framing(&self) -> Framing {
        Framing {
            target: Point3::new(0.0, 3.0, 0.0),
            distance: 10.0,
            elevation: 0.15,
        }
    }

    fn step(&mut self, scene: &mut Scene) -> Progress {
        let mass = scene.get_body_mut(self.mass);
        let position = mass.position();

        let ay = self.params.acceleration(position.y, self.state.velocity.y);
        let position = self.state.advance(position, Vector3::new(0.0, ay, 0.0), self.params.dt);
        mass.set_position(position);

        // Coil stretches from the ceiling down to the mass
        scene
            .get_body_mut(self.coil)
            .set_axis(position - self.params.anchor());

        Progress::Running
    }
}
