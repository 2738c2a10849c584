//! Rotational dynamics about the rocket's centre.
use rsim_utils::wrap_angle;

pub fn advance(theta: f64, omega: f64, torque: f64, moment_of_inertia: f64, dt: f64) -> (f64, f64) {
    //! one explicit-Euler step of angular motion. Returns (theta', omega').
    //! omega is updated first and the new value drives theta. moment_of_inertia must be > 0.
    let alpha = torque / moment_of_inertia;
    let omega = omega + alpha * dt;
    let theta = wrap_angle(theta + omega * dt);
    (theta, omega)
}
