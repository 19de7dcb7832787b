use nalgebra::Point3;

use crate::config::DemoConfig;
use crate::error::ConfigError;
use crate::model::Scene;

pub mod bouncing_ball;
pub mod projectile;
pub mod shapes;
pub mod solar_system;
pub mod spring;

pub use bouncing_ball::{BouncingBall, BouncingBallParams};
pub use projectile::{Projectile, ProjectileParams};
pub use shapes::Shapes;
pub use solar_system::{SolarSystem, SolarSystemParams};
pub use spring::{Spring, SpringParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Running,
    Finished,
}

/// Where the camera should start out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Framing {
    pub target: Point3<f64>,
    pub distance: f64,
    /// Angle above the horizontal plane, in radians.
    pub elevation: f64,
}

impl Default for Framing {
    fn default() -> Self {
        Framing {
            target: Point3::origin(),
            distance: 10.0,
            elevation: 0.0,
        }
    }
}

/// A demo owns the IDs of the bodies it made and whatever state it needs to move them.
/// The scene itself is owned by whoever drives the demo.
pub trait Demo {
    fn name(&self) -> &'static str;

    /// Target number of steps per second of wall time.
    fn rate(&self) -> u32;

    /// Simulated seconds per step.
    fn dt(&self) -> f64 {
        1.0 / self.rate() as f64
    }

    fn framing(&self) -> Framing {
        Framing::default()
    }

    /// Advances one timestep and writes the results back onto the scene.
    fn step(&mut self, scene: &mut Scene) -> Progress;

    /// Called once, right after `step` first reports `Finished`.
    fn finish(&mut self, _scene: &Scene) {}
}

/// Validates the config, then builds the demo's bodies into `scene`.
pub fn build(config: &DemoConfig, scene: &mut Scene) -> Result<Box<dyn Demo>, ConfigError> {
    let demo: Box<dyn Demo> = match config {
        DemoConfig::Shapes => Box::new(Shapes::new(scene)),
        DemoConfig::BouncingBall => {
            Box::new(BouncingBall::new(BouncingBallParams::default(), scene))
        }
        DemoConfig::Projectile(args) => Box::new(Projectile::new(args.to_params()?, scene)),
        DemoConfig::SolarSystem => Box::new(SolarSystem::new(SolarSystemParams::default(), scene)),
        DemoConfig::Spring(args) => Box::new(Spring::new(args.to_params()?, scene)),
    };
    Ok(demo)
}
