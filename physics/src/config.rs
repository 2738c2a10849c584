//! Per-run parameters for the rocket. Immutable once a run has started.
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Scalar parameters for one flight.
///
/// Missing keys in a serialized config fall back to the launch-panel defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub gravity: f64,                   // downward acceleration, screen-down positive
    pub thrust_magnitude: f64,          // force along the nose axis while fuel remains
    pub mass: f64,                      // must be > 0
    pub drag_coefficient: f64,          // linear in velocity
    pub base_wind_speed: f64,           // lateral acceleration when wind is fixed; also seeds omega
    pub fuel: f64,                      // propellant loaded at launch
    pub fuel_burn_rate: f64,            // fuel spent per unit time while thrusting
    pub ground_bounce_coefficient: f64, // fraction of vertical speed kept on contact, normally [0, 1]
    pub moment_of_inertia: f64,         // must be > 0
    pub torque: f64,                    // constant for the whole run
    pub dynamic_wind: bool,             // randomise wind every step
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: 9.8,
            thrust_magnitude: 150.0,
            mass: 10.0,
            drag_coefficient: 0.3,
            base_wind_speed: 0.0,
            fuel: 100.0,
            fuel_burn_rate: 1.0,
            ground_bounce_coefficient: 0.2,
            moment_of_inertia: 20.0,
            torque: 0.0,
            dynamic_wind: false,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        //! rejects the values the integrator would divide by.
        if self.mass.is_nan() || self.mass <= 0.0 {
            return Err(ConfigurationError::NonPositiveMass(self.mass));
        }
        if self.moment_of_inertia.is_nan() || self.moment_of_inertia <= 0.0 {
            return Err(ConfigurationError::NonPositiveInertia(self.moment_of_inertia));
        }
        Ok(())
    }

    pub fn wind_is_dynamic(&self) -> bool {
        //! a zero base wind speed at launch is read as a request for random wind, on top of the explicit flag.
        self.dynamic_wind || self.base_wind_speed == 0.0
    }
}

pub fn check_time_step(dt: f64) -> Result<(), ConfigurationError> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(ConfigurationError::BadTimeStep(dt));
    }
    Ok(())
}
