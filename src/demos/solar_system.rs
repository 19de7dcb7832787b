use nalgebra::Point3;

use super::{Demo, Framing, Progress};
use crate::model::{Body, BodyID, Color, Scene};

/// A circular orbit in the xz-plane, centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularOrbit {
    pub radius: f64,
    /// Angular speed, in radians per second.
    pub omega: f64,
}

impl CircularOrbit {
    pub fn position_at(&self, t: f64) -> Point3<f64> {
        let angle = self.omega * t;
        Point3::new(self.radius * angle.cos(), 0.0, self.radius * angle.sin())
    }

    pub fn period(&self) -> f64 {
        2.0 * std::f64::consts::PI / self.omega
    }
}

#[derive(Debug, Clone)]
pub struct SolarSystemParams {
    pub earth: CircularOrbit,
    pub mars: CircularOrbit,
    pub dt: f64,
    pub rate: u32,
}

impl Default for SolarSystemParams {
    fn default() -> Self {
        // Not to scale, obviously
        SolarSystemParams {
            earth: CircularOrbit {
                radius: 3.0,
                omega: 1.0,
            },
            mars: CircularOrbit {
                radius: 4.5,
                omega: 0.5,
            },
            dt: 0.02,
            rate: 50,
        }
    }
}

/// Two planets going around a sun. Nothing pulls on anything; the orbits are just
/// evaluated at the current time.
pub struct SolarSystem {
    params: SolarSystemParams,
    earth: BodyID,
    mars: BodyID,
    time: f64,
}

impl SolarSystem {
    pub fn new(params: SolarSystemParams, scene: &mut Scene) -> Self {
        scene.set_background(Color::BLACK);

        scene.add(Body::sphere(Point3::origin(), 0.5, Color::YELLOW));
        let earth = scene.add(
            Body::sphere(params.earth.position_at(0.0), 0.15, Color::BLUE)
                .with_trail_color(Color::BLUE),
        );
        let mars = scene.add(
            Body::sphere(params.mars.position_at(0.0), 0.1, Color::RED)
                .with_trail_color(Color::RED),
        );

        SolarSystem {
            params,
            earth,
            mars,
            time: 0.0,
        }
    }

    pub fn earth(&self) -> BodyID {
        self.earth
    }

    pub fn mars(&self) -> BodyID {
        self.mars
    }

    pub fn time(&self) -> f64 {
        self.time
    }
}

impl Demo for SolarSystem {
    fn name(&self) -> &'static str {
        "solar system"
    }

    fn rate(&self) -> u32 {
        self.params.rate
    }

    fn dt(&self) -> f64 {
        self.params.dt
    }

    fn framing(&self) -> Framing {
        Framing {
            target: Point3::origin(),
            distance: 14.0,
            elevation: 0.6,
        }
    }

    fn step(&mut self, scene: &mut Scene) -> Progress {
        self.time += self.params.dt;

        scene
            .get_body_mut(self.earth)
            .set_position(self.params.earth.position_at(self.time));
        scene
            .get_body_mut(self.mars)
            .set_position(self.params.mars.position_at(self.time));

        Progress::Running
    }
}
