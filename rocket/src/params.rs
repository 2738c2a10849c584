//! Launch-panel slider ranges.
//!
//! The core accepts any values it can divide by; keeping inputs inside the ranges a
//! user could reach with the sliders is the driver's job.
use rsim_physics::{ConfigurationError, SimulationConfig};
use tracing::warn;

/// Parameter specification with bounds and step size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    /// Human-readable label.
    pub label: &'static str,
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
    /// Slider resolution.
    pub step: f64,
}

impl ParamSpec {
    /// Create a slider spec.
    pub const fn new(label: &'static str, min: f64, max: f64, step: f64) -> Self {
        Self {
            label,
            min,
            max,
            step,
        }
    }

    /// Pull `value` into `[min, max]`.
    pub fn clamp(&self, value: f64) -> f64 {
        //! NaN is passed through untouched so the core can reject it.
        if value.is_nan() {
            value
        } else {
            value.clamp(self.min, self.max)
        }
    }
}

/// Gravity slider.
pub const GRAVITY: ParamSpec = ParamSpec::new("Gravity", 0.0, 20.0, 0.1);
/// Thrust slider.
pub const THRUST: ParamSpec = ParamSpec::new("Thrust", 0.0, 300.0, 0.1);
/// Mass slider.
pub const MASS: ParamSpec = ParamSpec::new("Mass", 1.0, 100.0, 0.1);
/// Linear drag slider.
pub const AIR_RESISTANCE: ParamSpec = ParamSpec::new("Air Resistance", 0.0, 2.0, 0.1);
/// Base wind speed slider.
pub const WIND_SPEED: ParamSpec = ParamSpec::new("Wind Speed", -10.0, 10.0, 0.1);
/// Initial fuel slider.
pub const FUEL: ParamSpec = ParamSpec::new("Fuel", 0.0, 500.0, 0.1);
/// Fuel burn rate slider.
pub const BURN_RATE: ParamSpec = ParamSpec::new("Burn Rate", 0.0, 10.0, 0.1);
/// Ground bounce coefficient slider.
pub const GROUND_BOUNCE: ParamSpec = ParamSpec::new("Ground Bounce", 0.0, 1.0, 0.1);

/// Every slider on the launch panel, in panel order.
pub const SLIDERS: [ParamSpec; 8] = [
    GRAVITY,
    THRUST,
    MASS,
    AIR_RESISTANCE,
    WIND_SPEED,
    FUEL,
    BURN_RATE,
    GROUND_BOUNCE,
];

fn clamp_field(spec: &ParamSpec, value: &mut f64) {
    let clamped = spec.clamp(*value);
    if clamped != *value {
        warn!(
            param = spec.label,
            requested = *value,
            used = clamped,
            "parameter outside slider range, clamped"
        );
        *value = clamped;
    }
}

/// Pull every slider-backed field into its range. Inertia and torque have no slider and
/// pass through.
///
/// A mass or inertia the core would refuse is an error here too, not something to clamp
/// into a flyable value.
pub fn clamp_to_sliders(mut config: SimulationConfig) -> Result<SimulationConfig, ConfigurationError> {
    config.validate()?;
    clamp_field(&GRAVITY, &mut config.gravity);
    clamp_field(&THRUST, &mut config.thrust_magnitude);
    clamp_field(&MASS, &mut config.mass);
    clamp_field(&AIR_RESISTANCE, &mut config.drag_coefficient);
    clamp_field(&WIND_SPEED, &mut config.base_wind_speed);
    clamp_field(&FUEL, &mut config.fuel);
    clamp_field(&BURN_RATE, &mut config.fuel_burn_rate);
    clamp_field(&GROUND_BOUNCE, &mut config.ground_bounce_coefficient);
    Ok(config)
}
