//! angle helpers. All angles are radians.
use std::f64::consts::TAU;

pub fn wrap_angle(theta: f64) -> f64 {
    //! wraps any finite angle into [0, 2π).
    //! rem_euclid can round up to exactly TAU for tiny negative inputs, which is folded back to 0.
    let wrapped = theta.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}
