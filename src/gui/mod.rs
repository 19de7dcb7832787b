use kiss3d::camera::Camera;
use kiss3d::event::EventManager;
use kiss3d::planar_camera::PlanarCamera;
use kiss3d::post_processing::PostProcessingEffect;
use kiss3d::renderer::Renderer;
use kiss3d::window::{State, Window};
use log::info;

use self::controller::Controller;
use self::view::View;
use crate::demos::Progress;
use crate::runner::Runner;

mod camera;
mod controller;
mod renderer;
mod view;

/// Windowed front-end for a demo. The window's frame-rate limit does the pacing, so call
/// `Window::set_framerate_limit` with the demo's rate before starting the render loop.
pub struct Simulation {
    runner: Runner,
    view: View,
    controller: Controller,
    max_frames: Option<u64>,
}

impl Simulation {
    pub fn new(runner: Runner, window: &mut Window, max_frames: Option<u64>) -> Self {
        Self {
            view: View::new(&runner, window),
            runner,
            controller: Controller::new(),
            max_frames,
        }
    }

    fn process_user_input(&mut self, mut events: EventManager) {
        // Process events
        for event in events.iter() {
            self.controller.process_event(event, self.runner.scene_mut());
        }
    }

    fn advance(&mut self) {
        for _ in 0..self.controller.take_steps() {
            if self.frame_budget_spent() || self.runner.step() == Progress::Finished {
                break;
            }
        }
    }

    fn frame_budget_spent(&self) -> bool {
        match self.max_frames {
            Some(max_frames) => self.runner.frames() >= max_frames,
            None => false,
        }
    }
}

impl State for Simulation {
    fn cameras_and_effect_and_renderer(
        &mut self,
    ) -> (
        Option<&mut dyn Camera>,
        Option<&mut dyn PlanarCamera>,
        Option<&mut dyn Renderer>,
        Option<&mut dyn PostProcessingEffect>,
    ) {
        self.view.cameras_and_effect_and_renderer()
    }

    fn step(&mut self, window: &mut Window) {
        self.process_user_input(window.events());
        self.advance();

        if self.frame_budget_spent() {
            info!("Reached {} frames, closing", self.runner.frames());
            window.close();
        }

        self.view.update_scene_objects(self.runner.scene());
        self.view.prerender_scene(window, &self.runner, &self.controller);
        self.controller.increment_frame_counter();
    }
}
