//! Launches one rocket from the command line and prints its flight. Set RUST_LOG to see the physics.
use anyhow::Context;
use clap::Parser;
use rsim_rocket::cli::Args;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    // one thread is enough: the driver and the printer take turns.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to start runtime")?;
    let report = runtime.block_on(rsim_rocket::run(&args))?;

    if !report.landed {
        tracing::warn!(steps = report.final_state.steps, "rocket still airborne at the step limit");
    }
    Ok(())
}
