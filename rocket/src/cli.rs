//! Command line interface for the driver.
use std::path::{Path, PathBuf};

use clap::Parser;
use rsim_physics::{SimulationConfig, FRAME_DELAY_MS, TIME_STEP};
use rsim_utils::PrintType;

use crate::error::DriverError;

/// Everything `rsim` takes on the command line.
#[derive(Parser, Debug, Clone)]
#[command(name = "rsim")]
#[command(about = "Fixed time-step rocket flight simulator")]
#[command(version)]
pub struct Args {
    /// YAML file with launch parameters; missing keys use the panel defaults
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    // ── Launch panel ──────────────────────────────────────────
    /// Downward acceleration
    #[arg(long)]
    pub gravity: Option<f64>,

    /// Engine thrust while fuel remains
    #[arg(long)]
    pub thrust: Option<f64>,

    /// Rocket mass; must be positive, values below the slider minimum are raised to it
    #[arg(long)]
    pub mass: Option<f64>,

    /// Linear air resistance coefficient
    #[arg(long)]
    pub drag: Option<f64>,

    /// Base wind speed; 0 switches the run to random gusts
    #[arg(long, allow_hyphen_values = true)]
    pub wind: Option<f64>,

    /// Initial fuel load
    #[arg(long)]
    pub fuel: Option<f64>,

    /// Fuel burned per unit time
    #[arg(long)]
    pub burn_rate: Option<f64>,

    /// Fraction of vertical speed kept on each ground contact
    #[arg(long)]
    pub bounce: Option<f64>,

    /// Constant torque on the rocket body
    #[arg(long, allow_hyphen_values = true)]
    pub torque: Option<f64>,

    /// Moment of inertia; must be positive
    #[arg(long)]
    pub inertia: Option<f64>,

    /// Random gusts every step regardless of the base wind speed
    #[arg(long)]
    pub dynamic_wind: bool,

    // ── Scheduling ────────────────────────────────────────────
    /// Simulated time per step
    #[arg(long, default_value_t = TIME_STEP)]
    pub dt: f64,

    /// Wall-clock milliseconds between steps; 0 runs flat out
    #[arg(long, default_value_t = FRAME_DELAY_MS)]
    pub frame_delay_ms: u64,

    /// Give up after this many steps if the rocket is still flying
    #[arg(long, default_value_t = 100_000)]
    pub max_steps: u64,

    /// Seed for the wind; omit for a different flight every time
    #[arg(long)]
    pub seed: Option<u64>,

    // ── Output ────────────────────────────────────────────────
    /// Stdout format: status or csv
    #[arg(long, default_value_t = PrintType::Status)]
    pub print_type: PrintType,

    /// Print every N-th step
    #[arg(long, default_value_t = 20)]
    pub print_interval: u64,

    /// Write the finished run as JSON
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Read a YAML launch config from `path`.
pub fn load_config(path: &Path) -> Result<SimulationConfig, DriverError> {
    let text = std::fs::read_to_string(path).map_err(|source| DriverError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&text).map_err(|source| DriverError::ParseConfig {
        path: path.to_path_buf(),
        source,
    })
}

impl Args {
    pub fn apply_overrides(&self, mut config: SimulationConfig) -> SimulationConfig {
        //! command line values win over the config file.
        let overrides = [
            (self.gravity, &mut config.gravity),
            (self.thrust, &mut config.thrust_magnitude),
            (self.mass, &mut config.mass),
            (self.drag, &mut config.drag_coefficient),
            (self.wind, &mut config.base_wind_speed),
            (self.fuel, &mut config.fuel),
            (self.burn_rate, &mut config.fuel_burn_rate),
            (self.bounce, &mut config.ground_bounce_coefficient),
            (self.torque, &mut config.torque),
            (self.inertia, &mut config.moment_of_inertia),
        ];
        for (value, field) in overrides {
            if let Some(value) = value {
                *field = value;
            }
        }
        config.dynamic_wind |= self.dynamic_wind;
        config
    }

    /// The config file, or the panel defaults, with command line overrides applied.
    pub fn resolve_config(&self) -> Result<SimulationConfig, DriverError> {
        let base = match &self.config {
            Some(path) => load_config(path)?,
            None => SimulationConfig::default(),
        };
        Ok(self.apply_overrides(base))
    }
}
