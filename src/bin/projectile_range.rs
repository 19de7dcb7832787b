use std::path::{Path, PathBuf};

use clap::Parser;
use env_logger::Env;
use plotters::prelude::*;

use physics_demos::config::ProjectileArgs;
use physics_demos::demos::projectile::{fly, Flight};

/// Flies a projectile with and without air resistance, and compares how far it gets.
#[derive(Debug, Parser)]
struct Args {
    #[command(flatten)]
    projectile: ProjectileArgs,

    /// Also plot both trajectories to this PNG file
    #[arg(long)]
    plot: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Launch chatter from the demo itself is noise here
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let params = args.projectile.to_params()?;
    let with_drag = fly(&params);
    let without_drag = fly(&params.without_drag());

    println!(
        "Launch: {} m/s at {} degrees, drag coefficient {}",
        params.speed, params.angle, params.drag
    );
    println!("- Range with drag: {:.2} m", with_drag.range);
    println!("- Flight time with drag: {:.2} s", with_drag.duration(params.dt));
    println!("- Range without drag: {:.2} m", without_drag.range);
    println!("- Vacuum range, analytic: {:.2} m", params.vacuum_range());

    if let Some(path) = args.plot {
        draw_plot(&path, &with_drag, &without_drag)
            .map_err(|e| anyhow::anyhow!("Couldn't plot to {}: {}", path.display(), e))?;
        println!("Wrote trajectories to {}", path.display());
    }

    Ok(())
}

fn draw_plot(
    path: &Path,
    with_drag: &Flight,
    without_drag: &Flight,
) -> Result<(), Box<dyn std::error::Error>> {
    let x_max = without_drag.range.max(with_drag.range) * 1.05;
    let y_max = without_drag
        .path
        .iter()
        .chain(with_drag.path.iter())
        .map(|pt| pt.y)
        .fold(0.0, f64::max)
        * 1.1;

    let root = BitMapBackend::new(path, (960, 480)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(5)
        .caption("Projectile trajectory", ("sans-serif", 24))
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)?;

    chart.configure_mesh().x_desc("x (m)").y_desc("y (m)").draw()?;

    chart
        .draw_series(LineSeries::new(
            without_drag.path.iter().map(|pt| (pt.x, pt.y.max(0.0))),
            &BLUE,
        ))?
        .label("without drag")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));
    chart
        .draw_series(LineSeries::new(
            with_drag.path.iter().map(|pt| (pt.x, pt.y.max(0.0))),
            &RED,
        ))?
        .label("with drag")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;

    Ok(())
}
