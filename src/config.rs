use clap::{Args, Parser, Subcommand};

use crate::demos::{ProjectileParams, SpringParams};
use crate::error::{require_finite, require_non_negative, require_positive, ConfigError};

#[derive(Debug, Parser)]
#[command(name = "physics-demos", about = "Small physics demos, rendered in 3D")]
pub struct Cli {
    /// Run without opening a window
    #[arg(long)]
    pub headless: bool,

    /// With --headless, don't wait between steps
    #[arg(long, requires = "headless")]
    pub fast: bool,

    /// Stop after this many frames
    #[arg(long)]
    pub max_frames: Option<u64>,

    #[command(subcommand)]
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, Subcommand)]
pub enum DemoConfig {
    /// A sphere, a box, a cylinder, a cone and an arrow
    Shapes,
    /// A ball bouncing around a box, losing some energy on every bounce
    BouncingBall,
    /// A ball launched into the air, slowed down by air resistance
    Projectile(ProjectileArgs),
    /// Two planets orbiting a sun
    SolarSystem,
    /// A mass hanging from a damped spring
    Spring(SpringArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ProjectileArgs {
    /// Launch speed, in m/s
    #[arg(long, default_value_t = 20.0)]
    pub speed: f64,

    /// Launch angle above the horizontal, in degrees
    #[arg(long, default_value_t = 45.0)]
    pub angle: f64,

    /// Air resistance coefficient
    #[arg(long, default_value_t = 0.02)]
    pub drag: f64,
}

impl ProjectileArgs {
    pub fn to_params(&self) -> Result<ProjectileParams, ConfigError> {
        let angle = require_finite("angle", self.angle)?;
        if !(angle > 0.0 && angle <= 90.0) {
            return Err(ConfigError::LaunchAngle(angle));
        }

        Ok(ProjectileParams {
            speed: require_positive("speed", self.speed)?,
            angle,
            drag: require_non_negative("drag", self.drag)?,
            ..ProjectileParams::default()
        })
    }
}

#[derive(Debug, Clone, Args)]
pub struct SpringArgs {
    /// Spring constant, in N/m
    #[arg(long, default_value_t = 10.0)]
    pub stiffness: f64,

    /// Mass of the weight, in kg
    #[arg(long, default_value_t = 1.0)]
    pub mass: f64,

    /// Unstretched length of the spring, in m
    #[arg(long, default_value_t = 3.0)]
    pub natural_length: f64,

    /// Damping coefficient, in N s/m
    #[arg(long, default_value_t = 0.1)]
    pub damping: f64,
}

impl SpringArgs {
    pub fn to_params(&self) -> Result<SpringParams, ConfigError> {
        Ok(SpringParams {
            stiffness: require_non_negative("stiffness", self.stiffness)?,
            mass: require_positive("mass", self.mass)?,
            natural_length: require_non_negative("natural length", self.natural_length)?,
            damping: require_non_negative("damping", self.damping)?,
            ..SpringParams::default()
        })
    }
}
