//! Fixed time-step physics for a single rigid rocket: thrust, gravity, linear drag and
//! wind acting on a rotating body, with fuel burn and damped ground bounces.
//!
//! The crate only advances state. Drawing, input and scheduling live with the caller,
//! which drives a [`Simulation`] one [`step`](Simulation::step) per tick and reads
//! [`RocketState`] snapshots and the height history back out.
pub mod collision;
pub mod config;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod rotation;
pub mod simulation;
pub mod site;
pub mod state;
pub mod trajectory;
pub mod wind;

pub use config::SimulationConfig;
pub use error::ConfigurationError;
pub use integrator::{step, FRAME_DELAY_MS, SCALE, TIME_STEP};
pub use simulation::Simulation;
pub use site::LaunchSite;
pub use state::RocketState;
pub use trajectory::TrajectoryRecorder;
pub use wind::{RandomWind, WindModel};
