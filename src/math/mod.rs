pub mod geometry;
pub mod integrator;

pub use integrator::{euler_step, KinematicState};
