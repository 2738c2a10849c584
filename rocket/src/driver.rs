//! The tick loop. Steps a [`Simulation`] at a fixed cadence and publishes each
//! resulting [`Frame`] on a watch channel.
//!
//! Everything runs on one current-thread runtime, so at most one step is ever in
//! flight. The renderer only ever sees the latest frame and can never hold up the
//! integrator.
use std::time::Duration;

use rsim_physics::{RocketState, Simulation, SimulationConfig, WindModel};
use tokio::{
    sync::watch,
    time::{interval, MissedTickBehavior},
};
use tracing::{info, warn};

use crate::{error::DriverError, render::Frame, report::Printer};

/// How the driver paces a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriverSettings {
    /// Simulated time per tick.
    pub dt: f64,
    /// Wall-clock time per tick, zero for no pacing.
    pub frame_delay: Duration,
    /// Safety stop for flights that never settle.
    pub max_steps: u64,
}

/// Owns one [`Simulation`] and the sending half of its frame channel.
pub struct SimulationDriver<W> {
    sim: Simulation<W>,
    settings: DriverSettings,
    frames: watch::Sender<Frame>,
}

impl<W: WindModel> SimulationDriver<W> {
    pub fn new(sim: Simulation<W>, settings: DriverSettings) -> (Self, watch::Receiver<Frame>) {
        //! the receiver starts out holding the parked rocket, already marked as seen.
        let first = Frame::capture(sim.state(), sim.site());
        let (frames, receiver) = watch::channel(first);
        (
            Self {
                sim,
                settings,
                frames,
            },
            receiver,
        )
    }

    pub fn launch(&mut self, config: SimulationConfig) -> Result<RocketState, DriverError> {
        //! a refused config is fatal: nothing is published and the error goes back to the caller.
        let state = self.sim.start(config)?;
        self.publish();
        Ok(state)
    }

    pub fn tick(&mut self) -> Result<bool, DriverError> {
        //! one step plus publish. Returns whether another tick should be scheduled.
        let state = self.sim.step(self.settings.dt)?;
        self.publish();
        Ok(state.flying)
    }

    pub async fn run(&mut self) -> Result<RocketState, DriverError> {
        //! ticks until the rocket lands or the step limit is hit.
        let paced = !self.settings.frame_delay.is_zero();
        let mut ticker = interval(self.settings.frame_delay.max(Duration::from_millis(1)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut ticks = 0;
        while self.sim.is_flying() {
            if ticks >= self.settings.max_steps {
                warn!(ticks, "step limit reached, abandoning flight");
                break;
            }
            if paced {
                ticker.tick().await;
            } else {
                // let the renderer catch up between unpaced steps.
                tokio::task::yield_now().await;
            }
            self.tick()?;
            ticks += 1;
        }

        let state = *self.sim.state();
        info!(
            steps = state.steps,
            landed = !state.flying,
            "simulation loop finished"
        );
        Ok(state)
    }

    /// The simulation being driven.
    pub fn simulation(&self) -> &Simulation<W> {
        &self.sim
    }

    fn publish(&self) {
        // no receivers left just means nobody is drawing.
        self.frames
            .send_replace(Frame::capture(self.sim.state(), self.sim.site()));
    }
}

pub async fn render_frames(mut frames: watch::Receiver<Frame>, mut printer: Printer) {
    //! prints due frames until the driver is dropped.
    if let Some(header) = printer.header() {
        println!("{header}");
    }
    while frames.changed().await.is_ok() {
        let frame = *frames.borrow_and_update();
        if let Some(line) = printer.line_for(&frame) {
            println!("{line}");
        }
    }
}
