//! One simulation run: the state, its height history and the wind source that drives it.
//!
//! Instances share nothing, so several runs can live side by side as long as each is
//! stepped from one place at a time.
use rand::rngs::StdRng;
use tracing::{info, warn};

use crate::{
    config::SimulationConfig,
    error::ConfigurationError,
    integrator,
    site::LaunchSite,
    state::RocketState,
    trajectory::TrajectoryRecorder,
    wind::{RandomWind, WindModel},
};

#[derive(Debug, Clone)]
pub struct Simulation<W = RandomWind<StdRng>> {
    config: SimulationConfig,
    site: LaunchSite,
    state: RocketState,
    recorder: TrajectoryRecorder,
    wind: W,
}

impl Simulation {
    pub fn seeded(seed: u64) -> Self {
        //! reproducible dynamic wind.
        Self::with_wind(RandomWind::seeded(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_wind(RandomWind::from_entropy())
    }
}

impl<W: WindModel> Simulation<W> {
    pub fn with_wind(wind: W) -> Self {
        Self::with_site(wind, LaunchSite::default())
    }

    pub fn with_site(wind: W, site: LaunchSite) -> Self {
        Self {
            config: SimulationConfig::default(),
            site,
            state: RocketState::dormant(&site),
            recorder: TrajectoryRecorder::new(),
            wind,
        }
    }

    pub fn start(&mut self, config: SimulationConfig) -> Result<RocketState, ConfigurationError> {
        //! resets the rocket to launch conditions and clears the height history.
        //! a rejected config leaves the previous run exactly as it was.
        if let Err(err) = config.validate() {
            warn!(%err, "launch refused");
            return Err(err);
        }

        self.config = config;
        self.state = RocketState::launch(&config, &self.site);
        self.recorder.clear();

        info!(
            thrust = config.thrust_magnitude,
            mass = config.mass,
            fuel = self.state.fuel,
            dynamic_wind = self.state.dynamic_wind,
            omega = self.state.omega,
            "launch"
        );
        Ok(self.state)
    }

    pub fn step(&mut self, dt: f64) -> Result<RocketState, ConfigurationError> {
        //! one tick with the config the run was started with.
        integrator::step(
            &mut self.state,
            &self.config,
            dt,
            &self.site,
            &mut self.wind,
            &mut self.recorder,
        )?;
        Ok(self.state)
    }

    pub fn run_to_rest(&mut self, dt: f64, max_steps: u64) -> Result<RocketState, ConfigurationError> {
        //! steps until the rocket lands for good or `max_steps` ticks have passed.
        for _ in 0..max_steps {
            if !self.state.flying {
                break;
            }
            self.step(dt)?;
        }
        if self.state.flying {
            warn!(max_steps, "step limit reached while still flying");
        }
        Ok(self.state)
    }

    pub fn trajectory_snapshot(&self) -> &[f64] {
        self.recorder.snapshot()
    }

    pub fn recorder(&self) -> &TrajectoryRecorder {
        &self.recorder
    }

    pub fn state(&self) -> &RocketState {
        &self.state
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn site(&self) -> &LaunchSite {
        &self.site
    }

    pub fn is_flying(&self) -> bool {
        self.state.flying
    }
}
