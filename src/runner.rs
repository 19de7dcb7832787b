use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::config::DemoConfig;
use crate::demos::{self, Demo, Progress};
use crate::error::ConfigError;
use crate::model::Scene;

/// Paces a loop to a fixed number of iterations per second.
///
/// Ticks are scheduled one period apart. If the caller falls behind, the schedule restarts
/// from the current time instead of trying to catch up with a burst of short waits.
pub struct Throttle {
    period: Duration,
    next_tick: Option<Instant>,
}

impl Throttle {
    pub fn new(rate: u32) -> Self {
        Throttle {
            period: Duration::from_secs(1) / rate.max(1),
            next_tick: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Blocks until the next tick. The first call returns immediately.
    pub fn wait(&mut self) {
        let now = Instant::now();
        self.next_tick = match self.next_tick {
            Some(tick) if tick > now => {
                thread::sleep(tick - now);
                Some(tick + self.period)
            }
            _ => Some(now + self.period),
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// One step per tick of the demo's frame rate.
    RealTime,
    /// As fast as the CPU allows.
    Unthrottled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub sim_time: f64,
    pub finished: bool,
}

/// Owns a demo and the scene it draws into, and steps them forward.
pub struct Runner {
    demo: Box<dyn Demo>,
    scene: Scene,
    frames: u64,
    sim_time: f64,
    finished: bool,
}

impl Runner {
    pub fn new(config: &DemoConfig) -> Result<Self, ConfigError> {
        let mut scene = Scene::new();
        let demo = demos::build(config, &mut scene)?;
        Ok(Runner::from_demo(demo, scene))
    }

    pub fn from_demo(demo: Box<dyn Demo>, scene: Scene) -> Self {
        info!(
            "Starting {} ({} bodies) at {} fps, dt = {} s",
            demo.name(),
            scene.len(),
            demo.rate(),
            demo.dt()
        );
        Runner {
            demo,
            scene,
            frames: 0,
            sim_time: 0.0,
            finished: false,
        }
    }

    pub fn demo(&self) -> &dyn Demo {
        self.demo.as_ref()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances the demo by one step. Once the demo has finished, this does nothing.
    pub fn step(&mut self) -> Progress {
        if self.finished {
            return Progress::Finished;
        }

        let progress = self.demo.step(&mut self.scene);
        self.frames += 1;
        self.sim_time += self.demo.dt();

        if progress == Progress::Finished {
            self.finished = true;
            debug!(
                "{} finished after {} frames ({:.2} s simulated)",
                self.demo.name(),
                self.frames,
                self.sim_time
            );
            self.demo.finish(&self.scene);
        }
        progress
    }

    /// Steps until the demo finishes or `max_frames` more frames have gone by. Without a
    /// frame limit, endless demos run until the process is killed.
    pub fn run(&mut self, pacing: Pacing, max_frames: Option<u64>) -> RunSummary {
        let mut throttle = Throttle::new(self.demo.rate());
        let start_frame = self.frames;

        while !self.finished {
            if let Some(max_frames) = max_frames {
                if self.frames - start_frame >= max_frames {
                    break;
                }
            }
            if pacing == Pacing::RealTime {
                throttle.wait();
            }
            self.step();
        }

        RunSummary {
            frames: self.frames - start_frame,
            sim_time: self.sim_time,
            finished: self.finished,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_throttle_paces() {
        let mut throttle = Throttle::new(200);
        assert_eq!(throttle.period(), Duration::from_millis(5));

        let start = Instant::now();
        for _ in 0..11 {
            throttle.wait();
        }
        // First wait is free, the next ten are one period each
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn test_throttle_does_not_catch_up() {
        let mut throttle = Throttle::new(100);
        throttle.wait();
        thread::sleep(Duration::from_millis(50));

        // We're five periods late; the next wait shouldn't be a no-op burst
        let start = Instant::now();
        throttle.wait();
        throttle.wait();
        assert!(start.elapsed() >= Duration::from_millis(9));
    }

    #[test]
    fn test_frame_limit() {
        let mut runner = Runner::new(&DemoConfig::SolarSystem).unwrap();
        let summary = runner.run(Pacing::Unthrottled, Some(50));
        assert_eq!(summary.frames, 50);
        assert!(!summary.finished);
        assert_relative_eq!(summary.sim_time, 1.0, epsilon = 1e-9);

        // Picks up where it left off
        let summary = runner.run(Pacing::Unthrottled, Some(50));
        assert_eq!(summary.frames, 50);
        assert_eq!(runner.frames(), 100);
    }

    #[test]
    fn test_step_after_finish() {
        let config = DemoConfig::Projectile(crate::config::ProjectileArgs {
            speed: 5.0,
            angle: 45.0,
            drag: 0.0,
        });
        let mut runner = Runner::new(&config).unwrap();
        let summary = runner.run(Pacing::Unthrottled, None);
        assert!(summary.finished);

        let frames = runner.frames();
        assert_eq!(runner.step(), Progress::Finished);
        assert_eq!(runner.frames(), frames);
    }

    #[test]
    fn test_bad_config() {
        let config = DemoConfig::Spring(crate::config::SpringArgs {
            stiffness: 10.0,
            mass: -1.0,
            natural_length: 3.0,
            damping: 0.1,
        });
        assert!(Runner::new(&config).is_err());
    }
}
