//! Terminal driver for the rocket flight core: reads launch parameters, paces the
//! simulation against the wall clock and prints frames while the rocket flies.
use std::time::Duration;

use rsim_physics::Simulation;
use tracing::info;

pub mod cli;
pub mod driver;
pub mod error;
pub mod params;
pub mod render;
pub mod report;

use cli::Args;
use driver::{render_frames, DriverSettings, SimulationDriver};
use error::DriverError;
use report::{Printer, RunReport};

/// Fly one rocket as described by `args` and return the finished report.
pub async fn run(args: &Args) -> Result<RunReport, DriverError> {
    //! one full flight: launch, tick until rest or the step limit, then report.
    let config = params::clamp_to_sliders(args.resolve_config()?)?;
    let sim = match args.seed {
        Some(seed) => Simulation::seeded(seed),
        None => Simulation::from_entropy(),
    };
    let settings = DriverSettings {
        dt: args.dt,
        frame_delay: Duration::from_millis(args.frame_delay_ms),
        max_steps: args.max_steps,
    };

    let (mut driver, frames) = SimulationDriver::new(sim, settings);
    let renderer = render_frames(frames, Printer::new(args.print_type, args.print_interval));

    // the driver is moved in so its sender drops when the flight ends, which stops the renderer.
    let flight = async move {
        driver.launch(config)?;
        let state = driver.run().await?;
        Ok::<_, DriverError>((state, driver.simulation().trajectory_snapshot().to_vec()))
    };
    let (flight, ()) = tokio::join!(flight, renderer);
    let (final_state, trajectory) = flight?;

    let report = RunReport::new(config, args.dt, final_state, &trajectory);
    if let Some(path) = &args.output {
        report.write_json(path)?;
        info!(path = %path.display(), "report written");
    }
    Ok(report)
}
