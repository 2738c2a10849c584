//! Linear accelerations acting on the rocket.
//!
//! Thrust follows the nose, which is `theta` away from straight up. Drag is linear in
//! velocity and wind is added straight onto the horizontal acceleration without going
//! through the mass.
use rsim_utils::Vec2D;

use crate::config::SimulationConfig;

pub fn thrust_vector(theta: f64, thrust: f64) -> Vec2D {
    //! (Fx, Fy) with Fy measured upward along the launch axis.
    let (sin, cos) = theta.sin_cos();
    Vec2D(thrust * sin, thrust * cos)
}

pub fn compose(theta: f64, thrust: f64, wind: f64, velocity: &Vec2D, config: &SimulationConfig) -> Vec2D {
    //! acceleration in screen axes, ready to be multiplied by dt.
    let Vec2D(fx, fy) = thrust_vector(theta, thrust);
    let mass = config.mass;
    let drag = config.drag_coefficient;

    let ax = (fx / mass) - drag * velocity.0 + wind;
    let ay = (-fy / mass) - drag * velocity.1 + config.gravity; // screen y is down, so thrust subtracts
    Vec2D(ax, ay)
}
