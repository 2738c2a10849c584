//! Kinematic state of the rocket. Owned by a single run and mutated once per step.
use rsim_utils::Vec2D;
use serde::{Deserialize, Serialize};

use crate::{config::SimulationConfig, site::LaunchSite};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RocketState {
    pub position: Vec2D,       // screen space, y grows downward
    pub velocity: Vec2D,       // physical units; scaled to screen units when integrated
    pub theta: f64,            // radians from vertical, kept in [0, 2π)
    pub omega: f64,            // radians per unit time
    pub fuel: f64,             // never negative
    pub flying: bool,          // false once the rocket has come to rest
    pub dynamic_wind: bool,    // wind mode chosen at launch
    pub steps: u64,            // steps applied since launch
}

impl RocketState {
    pub fn launch(config: &SimulationConfig, site: &LaunchSite) -> Self {
        //! fresh state for a new run: at rest on the pad, pointing straight up.
        //! omega is seeded from the base wind speed, so a non-zero wind starts the rocket spinning.
        Self {
            position: site.launch_point(),
            velocity: Vec2D::new(),
            theta: 0.0,
            omega: config.base_wind_speed,
            fuel: config.fuel.max(0.0),
            flying: true,
            dynamic_wind: config.wind_is_dynamic(),
            steps: 0,
        }
    }

    pub fn dormant(site: &LaunchSite) -> Self {
        //! a parked rocket that has not been launched. Stepping it is a no-op.
        Self {
            position: site.launch_point(),
            velocity: Vec2D::new(),
            theta: 0.0,
            omega: 0.0,
            fuel: 0.0,
            flying: false,
            dynamic_wind: false,
            steps: 0,
        }
    }

    pub fn has_fuel(&self) -> bool {
        self.fuel > 0.0
    }
}
