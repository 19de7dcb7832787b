use std::time::Instant;

use kiss3d::event::{Action, Event, Key, WindowEvent};
use log::debug;

use crate::model::Scene;

// Key config, all in one place
const KEY_TOGGLE_PAUSE: Key = Key::Space;
const KEY_SINGLE_STEP: Key = Key::N;
const KEY_SPEED_UP: Key = Key::Period;
const KEY_SLOW_DOWN: Key = Key::Comma;
const KEY_CLEAR_TRAILS: Key = Key::T;

const MAX_STEPS_PER_FRAME: u32 = 64;

pub struct Controller {
    steps_per_frame: u32,
    paused: bool,
    single_step_requested: bool,
    fps_counter: FpsCounter,
}

pub struct FpsCounter {
    instant: Instant,
    counter: usize,
    window_size_millis: usize,
    previous_fps: f64,
}

impl FpsCounter {
    pub fn new(window_size_millis: usize) -> Self {
        FpsCounter {
            instant: Instant::now(),
            counter: 0,
            previous_fps: 0.0,
            window_size_millis,
        }
    }

    pub fn reset(&mut self) {
        self.instant = Instant::now();
        self.counter = 0;
    }

    pub fn value(&self) -> f64 {
        self.previous_fps
    }

    pub fn increment(&mut self) {
        self.counter += 1;

        let elapsed = self.instant.elapsed();
        if elapsed.as_millis() > self.window_size_millis as u128 {
            self.previous_fps = (1000 * self.counter) as f64 / elapsed.as_millis() as f64;
            self.reset();
        }
    }
}

impl Controller {
    pub fn new() -> Self {
        Controller {
            steps_per_frame: 1,
            paused: false,
            single_step_requested: false,
            fps_counter: FpsCounter::new(1000),
        }
    }

    pub fn process_event(&mut self, event: Event, scene: &mut Scene) {
        match event.value {
            WindowEvent::Key(KEY_TOGGLE_PAUSE, Action::Press, _) => self.toggle_pause(),
            WindowEvent::Key(KEY_SINGLE_STEP, Action::Press, _) => self.request_single_step(),
            WindowEvent::Key(KEY_SPEED_UP, Action::Press, _) => self.speed_up(),
            WindowEvent::Key(KEY_SLOW_DOWN, Action::Press, _) => self.slow_down(),
            WindowEvent::Key(KEY_CLEAR_TRAILS, Action::Press, _) => scene.clear_trails(),
            _ => {}
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Only does anything while paused.
    pub fn request_single_step(&mut self) {
        if self.paused {
            self.single_step_requested = true;
        }
    }

    pub fn speed_up(&mut self) {
        self.steps_per_frame = (self.steps_per_frame * 2).min(MAX_STEPS_PER_FRAME);
        debug!("Running {} steps per frame", self.steps_per_frame);
    }

    pub fn slow_down(&mut self) {
        self.steps_per_frame = (self.steps_per_frame / 2).max(1);
        debug!("Running {} steps per frame", self.steps_per_frame);
    }

    /// How many physics steps to take this frame. Consumes a pending single-step request.
    pub fn take_steps(&mut self) -> u32 {
        if !self.paused {
            return self.steps_per_frame;
        }
        if std::mem::take(&mut self.single_step_requested) {
            1
        } else {
            0
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn steps_per_frame(&self) -> u32 {
        self.steps_per_frame
    }

    pub fn fps(&self) -> f64 {
        self.fps_counter.value()
    }

    pub fn increment_frame_counter(&mut self) {
        self.fps_counter.increment()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_limits() {
        let mut controller = Controller::new();
        assert_eq!(controller.take_steps(), 1);

        controller.slow_down();
        assert_eq!(controller.steps_per_frame(), 1);

        for _ in 0..10 {
            controller.speed_up();
        }
        assert_eq!(controller.steps_per_frame(), MAX_STEPS_PER_FRAME);
        assert_eq!(controller.take_steps(), MAX_STEPS_PER_FRAME);
    }

    #[test]
    fn test_single_step_while_paused() {
        let mut controller = Controller::new();

        // Ignored when running
        controller.request_single_step();
        controller.toggle_pause();
        assert_eq!(controller.take_steps(), 0);

        controller.request_single_step();
        assert_eq!(controller.take_steps(), 1);
        assert_eq!(controller.take_steps(), 0);

        controller.toggle_pause();
        assert!(!controller.is_paused());
        assert_eq!(controller.take_steps(), 1);
    }
}
