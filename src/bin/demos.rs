use clap::Parser;
use env_logger::Env;
use kiss3d::light::Light;
use kiss3d::window::Window;
use log::info;

use physics_demos::config::Cli;
use physics_demos::gui::Simulation;
use physics_demos::runner::{Pacing, Runner};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut runner = Runner::new(&cli.demo)?;

    if cli.headless {
        let pacing = if cli.fast {
            Pacing::Unthrottled
        } else {
            Pacing::RealTime
        };
        if cli.max_frames.is_none() {
            info!("No frame limit given, running until the demo ends or the process is killed");
        }

        let summary = runner.run(pacing, cli.max_frames);
        info!(
            "Stopped after {} frames, {:.2} s simulated",
            summary.frames, summary.sim_time
        );
        return Ok(());
    }

    let mut window = Window::new(&format!("Physics demos: {}", runner.demo().name()));
    window.set_light(Light::StickToCamera);
    window.set_framerate_limit(Some(runner.demo().rate() as u64));

    let simulation = Simulation::new(runner, &mut window, cli.max_frames);
    window.render_loop(simulation);
    Ok(())
}
