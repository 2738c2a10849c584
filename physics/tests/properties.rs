//! Property-based checks of the per-step pieces.
//!
//! Run with: cargo test -p rsim-physics --test properties

use approx::relative_eq;
use proptest::prelude::*;
use rsim_physics::{collision, rotation, LaunchSite, Simulation, SimulationConfig, TIME_STEP};

fn arb_config() -> impl Strategy<Value = SimulationConfig> {
    (
        0.0..20.0f64,   // gravity
        0.0..300.0f64,  // thrust
        1.0..100.0f64,  // mass
        0.0..2.0f64,    // drag
        -10.0..10.0f64, // wind
        0.0..500.0f64,  // fuel
        0.0..10.0f64,   // burn rate
        0.0..1.0f64,    // bounce
    )
        .prop_map(
            |(gravity, thrust, mass, drag, wind, fuel, burn, bounce)| SimulationConfig {
                gravity,
                thrust_magnitude: thrust,
                mass,
                drag_coefficient: drag,
                base_wind_speed: wind,
                fuel,
                fuel_burn_rate: burn,
                ground_bounce_coefficient: bounce,
                ..Default::default()
            },
        )
}

proptest! {
    #[test]
    fn rotation_always_lands_in_range(
        theta in 0.0..std::f64::consts::TAU,
        omega in -50.0..50.0f64,
        torque in -100.0..100.0f64,
        inertia in 0.1..100.0f64,
    ) {
        let (theta, _) = rotation::advance(theta, omega, torque, inertia, TIME_STEP);
        prop_assert!((0.0..std::f64::consts::TAU).contains(&theta));
    }

    #[test]
    fn contact_clamps_and_damps(
        overshoot in 0.0..500.0f64,
        vy in -200.0..200.0f64,
        bounce in 0.0..1.0f64,
    ) {
        let ground = 790.0;
        let r = collision::resolve(ground + overshoot, vy, ground, bounce);
        prop_assert_eq!(r.y_position, ground);
        prop_assert!(r.contact);
        if r.still_flying {
            prop_assert!(relative_eq!(r.y_velocity, -vy * bounce));
            prop_assert!(r.y_velocity.abs() >= collision::REST_SPEED_THRESHOLD);
        } else {
            prop_assert_eq!(r.y_velocity, 0.0);
            prop_assert!((vy * bounce).abs() < collision::REST_SPEED_THRESHOLD);
        }
    }

    #[test]
    fn airborne_is_untouched(height in 0.001..1000.0f64, vy in -200.0..200.0f64) {
        let ground = 790.0;
        let r = collision::resolve(ground - height, vy, ground, 0.5);
        prop_assert_eq!(r.y_position, ground - height);
        prop_assert_eq!(r.y_velocity, vy);
        prop_assert!(r.still_flying);
    }

    #[test]
    fn slider_configs_respect_invariants(config in arb_config(), seed in any::<u64>()) {
        let ground = LaunchSite::default().ground_level();
        let mut sim = Simulation::seeded(seed);
        sim.start(config).unwrap();

        for _ in 0..400 {
            let before = *sim.state();
            let after = sim.step(TIME_STEP).unwrap();
            prop_assert!(after.fuel >= 0.0);
            prop_assert!(after.fuel <= before.fuel);
            prop_assert!((0.0..std::f64::consts::TAU).contains(&after.theta));
            prop_assert!(after.position.1 <= ground);
            if !before.flying {
                prop_assert_eq!(after, before);
            }
        }
        prop_assert_eq!(sim.trajectory_snapshot().len() as u64, sim.state().steps);
    }
}
