//! This file is responsible for the fixed time-step advance of a single rocket.
//!
//! Order within a step matters and is kept stable so that runs with fixed wind are
//! reproducible to the bit: thrust is decided from the fuel left *before* this step's
//! burn, rotation is advanced before forces are resolved along the new heading, and
//! ground contact is resolved after the tentative position update.
use tracing::{debug, info, trace};

use crate::{
    collision,
    config::{check_time_step, SimulationConfig},
    error::ConfigurationError,
    forces, rotation,
    site::LaunchSite,
    state::RocketState,
    trajectory::TrajectoryRecorder,
    wind::WindModel,
};

pub const TIME_STEP: f64 = 0.05; // simulated time per tick
pub const FRAME_DELAY_MS: u64 = 20; // wall-clock cadence the driver ticks at
pub const SCALE: f64 = 20.0; // physical velocity units -> screen units per unit time

pub fn effective_thrust(state: &RocketState, config: &SimulationConfig) -> f64 {
    //! full thrust while any fuel remains, nothing after.
    if state.has_fuel() {
        config.thrust_magnitude
    } else {
        0.0
    }
}

pub fn step<W: WindModel>(
    state: &mut RocketState,
    config: &SimulationConfig,
    dt: f64,
    site: &LaunchSite,
    wind: &mut W,
    recorder: &mut TrajectoryRecorder,
) -> Result<(), ConfigurationError> {
    //! advances `state` by one tick of `dt` and records the resulting height.
    //! configuration is checked before anything is touched; a landed rocket is left as is.
    config.validate()?;
    check_time_step(dt)?;

    if !state.flying {
        return Ok(());
    }

    let thrust = effective_thrust(state, config);
    let wind_accel = wind.sample(state.dynamic_wind, config.base_wind_speed);

    if state.has_fuel() {
        state.fuel = (state.fuel - config.fuel_burn_rate * dt).max(0.0);
        if !state.has_fuel() {
            debug!(step = state.steps, "fuel depleted, engine cut off");
        }
    }

    // torque is constant; nothing feeds back into it.
    (state.theta, state.omega) = rotation::advance(
        state.theta,
        state.omega,
        config.torque,
        config.moment_of_inertia,
        dt,
    );

    let accel = forces::compose(state.theta, thrust, wind_accel, &state.velocity, config);
    state.velocity = state.velocity.add(&accel.scale(dt));

    // written out per axis: (v * dt) * SCALE, not v * (dt * SCALE).
    state.position.0 += state.velocity.0 * dt * SCALE;
    state.position.1 += state.velocity.1 * dt * SCALE;

    let ground = collision::resolve(
        state.position.1,
        state.velocity.1,
        site.ground_level(),
        config.ground_bounce_coefficient,
    );
    state.position.1 = ground.y_position;
    state.velocity.1 = ground.y_velocity;
    state.flying = ground.still_flying;
    state.steps += 1;

    let height = site.height_of(state.position.1);
    recorder.record(height);

    if ground.contact {
        debug!(
            step = state.steps,
            rebound = ground.y_velocity,
            "ground contact"
        );
    }
    if !state.flying {
        info!(
            steps = state.steps,
            x = state.position.0,
            max_height = recorder.max_height().unwrap_or(0.0),
            "rocket came to rest"
        );
    }

    trace!(
        step = state.steps,
        height,
        vx = state.velocity.0,
        vy = state.velocity.1,
        theta = state.theta,
        fuel = state.fuel,
        wind = wind_accel,
        "step"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wind::RandomWind;
    use approx::assert_relative_eq;
    use rsim_utils::Vec2D;

    struct CalmAir;

    impl WindModel for CalmAir {
        fn sample(&mut self, _dynamic: bool, _base_speed: f64) -> f64 {
            0.0
        }
    }

    fn launched(config: &SimulationConfig) -> (RocketState, LaunchSite, TrajectoryRecorder) {
        let site = LaunchSite::default();
        (RocketState::launch(config, &site), site, TrajectoryRecorder::new())
    }

    #[test]
    fn first_step_matches_hand_calculation() {
        let config = SimulationConfig::default();
        let (mut state, site, mut rec) = launched(&config);

        step(&mut state, &config, TIME_STEP, &site, &mut CalmAir, &mut rec).unwrap();

        // vy = (-150/10 - 0 + 9.8) * 0.05 = -0.26, dy = -0.26 * 0.05 * 20
        assert_relative_eq!(state.velocity.1, -0.26, epsilon = 1e-12);
        assert_relative_eq!(state.position.1, 790.0 - 0.26, epsilon = 1e-9);
        assert_eq!(state.position.0, 500.0);
        assert_relative_eq!(state.fuel, 100.0 - 0.05, epsilon = 1e-12);
        assert_eq!(rec.len(), 1);
        assert_relative_eq!(rec.snapshot()[0], 10.26, epsilon = 1e-9);
        assert_eq!(state.steps, 1);
    }

    #[test]
    fn no_thrust_settles_on_first_step() {
        let config = SimulationConfig {
            thrust_magnitude: 0.0,
            fuel: 0.0,
            ..Default::default()
        };
        let (mut state, site, mut rec) = launched(&config);

        step(&mut state, &config, TIME_STEP, &site, &mut CalmAir, &mut rec).unwrap();

        assert!(!state.flying);
        assert_eq!(state.position.1, site.ground_level());
        assert_eq!(state.velocity.1, 0.0);
        assert_eq!(rec.snapshot(), &[10.0]);
    }

    #[test]
    fn landed_rocket_is_left_alone() {
        let config = SimulationConfig::default();
        let site = LaunchSite::default();
        let mut state = RocketState::dormant(&site);
        let before = state;
        let mut rec = TrajectoryRecorder::new();

        step(&mut state, &config, TIME_STEP, &site, &mut CalmAir, &mut rec).unwrap();

        assert_eq!(state, before);
        assert!(rec.is_empty());
    }

    #[test]
    fn bad_mass_leaves_state_untouched() {
        let good = SimulationConfig::default();
        let (mut state, site, mut rec) = launched(&good);
        let before = state;
        let bad = SimulationConfig {
            mass: 0.0,
            ..good
        };

        let result = step(&mut state, &bad, TIME_STEP, &site, &mut CalmAir, &mut rec);

        assert_eq!(result, Err(ConfigurationError::NonPositiveMass(0.0)));
        assert_eq!(state, before);
        assert!(rec.is_empty());
    }

    #[test]
    fn bad_time_step_rejected() {
        let config = SimulationConfig::default();
        let (mut state, site, mut rec) = launched(&config);
        let result = step(&mut state, &config, -0.05, &site, &mut CalmAir, &mut rec);
        assert_eq!(result, Err(ConfigurationError::BadTimeStep(-0.05)));
    }

    #[test]
    fn thrust_uses_fuel_before_burn() {
        // a single step's worth of fuel still fires the engine on that step.
        let config = SimulationConfig {
            fuel: 0.01,
            ..Default::default()
        };
        let (mut state, site, mut rec) = launched(&config);

        step(&mut state, &config, TIME_STEP, &site, &mut CalmAir, &mut rec).unwrap();
        assert_eq!(state.fuel, 0.0);
        assert!(state.velocity.1 < 0.0, "engine should have fired");
        assert_eq!(effective_thrust(&state, &config), 0.0);
    }

    #[test]
    fn fixed_wind_pushes_sideways() {
        let config = SimulationConfig {
            base_wind_speed: 2.0,
            torque: 0.0,
            ..Default::default()
        };
        let (mut state, site, mut rec) = launched(&config);
        let mut wind = RandomWind::seeded(0);

        step(&mut state, &config, TIME_STEP, &site, &mut wind, &mut rec).unwrap();

        // omega seeded at 2.0 turns the nose right, and the wind adds 2.0 laterally.
        assert!(state.theta > 0.0);
        assert!(state.velocity.0 > 0.0);
        assert!(state.position.0 > 500.0);
    }

    #[test]
    fn position_uses_display_scale() {
        let config = SimulationConfig {
            thrust_magnitude: 0.0,
            fuel: 0.0,
            gravity: 0.0,
            drag_coefficient: 0.0,
            ..Default::default()
        };
        let site = LaunchSite::default();
        let mut state = RocketState::launch(&config, &site);
        state.position = Vec2D(100.0, 100.0);
        state.velocity = Vec2D(1.0, -1.0);
        let mut rec = TrajectoryRecorder::new();

        step(&mut state, &config, TIME_STEP, &site, &mut CalmAir, &mut rec).unwrap();

        assert_relative_eq!(state.position.0, 100.0 + 1.0 * TIME_STEP * SCALE);
        assert_relative_eq!(state.position.1, 100.0 - 1.0 * TIME_STEP * SCALE);
    }
}
