// Shared by every demo that has gravity in it
pub const STANDARD_GRAVITY: f64 = 9.8;

// Default frame rate and timestep. At these values one second of simulated time
// takes one second of wall time.
pub const DEFAULT_RATE: u32 = 100;
pub const DEFAULT_DT: f64 = 0.01;
