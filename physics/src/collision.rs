//! Ground contact. Runs after the tentative position update of every step.

/// Vertical speed below which a bounce is absorbed and the flight ends.
pub const REST_SPEED_THRESHOLD: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundResolution {
    pub y_position: f64,
    pub y_velocity: f64,
    pub still_flying: bool,
    pub contact: bool, // the ground was reached this step
}

pub fn resolve(y_position: f64, y_velocity: f64, ground_level: f64, bounce_coefficient: f64) -> GroundResolution {
    //! clamps onto the ground and reflects the vertical velocity, damped by `bounce_coefficient`.
    //! a coefficient above 1 amplifies bounces; that is the caller's choice.
    if y_position < ground_level {
        return GroundResolution {
            y_position,
            y_velocity,
            still_flying: true,
            contact: false,
        };
    }

    let reflected = -y_velocity * bounce_coefficient;
    if reflected.abs() < REST_SPEED_THRESHOLD {
        GroundResolution {
            y_position: ground_level,
            y_velocity: 0.0,
            still_flying: false,
            contact: true,
        }
    } else {
        GroundResolution {
            y_position: ground_level,
            y_velocity: reflected,
            still_flying: true,
            contact: true,
        }
    }
}
