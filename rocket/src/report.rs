//! Reporting a run: periodic stdout lines while it flies, and a JSON export once it lands.
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use rsim_physics::{RocketState, SimulationConfig};
use rsim_utils::{PrintType, Vec2D};
use serde::Serialize;

use crate::{
    error::DriverError,
    render::{height_graph, Frame, GRAPH_HEIGHT, GRAPH_WIDTH},
};

/// Column names for [`PrintType::Csv`] rows.
pub const CSV_HEADER: &str = "step,x,y,height,vx,vy,theta,omega,fuel,flying";

/// Prints every `interval`-th step plus the final one. Frames arrive latest-wins, so
/// "every interval" means "the first frame at least `interval` steps after the last print".
#[derive(Debug, Clone)]
pub struct Printer {
    print_type: PrintType,
    interval: u64,
    last_printed: Option<u64>,
}

impl Printer {
    /// An interval of 0 is treated as 1.
    pub fn new(print_type: PrintType, interval: u64) -> Self {
        Self {
            print_type,
            interval: interval.max(1),
            last_printed: None,
        }
    }

    /// Printed once before the first line, if the format has one.
    pub fn header(&self) -> Option<&'static str> {
        match self.print_type {
            PrintType::Csv => Some(CSV_HEADER),
            PrintType::Status => None,
        }
    }

    pub fn line_for(&mut self, frame: &Frame) -> Option<String> {
        //! the line to print for this frame, if it is due.
        let step = frame.state.steps;
        let due = match self.last_printed {
            None => true,
            Some(last) => step >= last.saturating_add(self.interval) || !frame.state.flying,
        };
        if !due || self.last_printed == Some(step) {
            return None;
        }
        self.last_printed = Some(step);
        Some(format_line(self.print_type, frame))
    }
}

/// One stdout line for `frame`.
pub fn format_line(print_type: PrintType, frame: &Frame) -> String {
    let s = &frame.state;
    match print_type {
        PrintType::Csv => format!(
            "{},{},{},{},{},{},{},{},{},{}",
            s.steps,
            s.position.0,
            s.position.1,
            frame.height,
            s.velocity.0,
            s.velocity.1,
            s.theta,
            s.omega,
            s.fuel,
            s.flying
        ),
        PrintType::Status => format!(
            "step {:>6}  height {:>10.2}  x {:>9.2}  v ({:+8.3}, {:+8.3})  theta {:.3}  fuel {:>7.2}{}",
            s.steps,
            frame.height,
            s.position.0,
            s.velocity.0,
            s.velocity.1,
            s.theta,
            s.fuel,
            if s.flying { "" } else { "  [landed]" }
        ),
    }
}

/// Everything worth keeping about a finished run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Parameters the run was launched with, after clamping.
    pub config: SimulationConfig,
    /// Simulated time per step.
    pub dt: f64,
    /// State when the loop stopped.
    pub final_state: RocketState,
    /// False if the step limit ended the run.
    pub landed: bool,
    /// Highest recorded height, `None` for a run with no steps.
    pub max_height: Option<f64>,
    /// Height after every step.
    pub trajectory: Vec<f64>,
    /// The trajectory as a [`GRAPH_WIDTH`] by [`GRAPH_HEIGHT`] polyline.
    pub graph: Vec<Vec2D>,
}

impl RunReport {
    /// Summarise a run from its config, final state and height history.
    pub fn new(config: SimulationConfig, dt: f64, final_state: RocketState, trajectory: &[f64]) -> Self {
        Self {
            config,
            dt,
            final_state,
            landed: !final_state.flying,
            max_height: trajectory.iter().copied().reduce(f64::max),
            trajectory: trajectory.to_vec(),
            graph: height_graph(trajectory, GRAPH_WIDTH, GRAPH_HEIGHT),
        }
    }

    pub fn write_json(&self, path: &Path) -> Result<(), DriverError> {
        //! pretty-printed JSON. Disk errors, including those hit mid-serialization, are `WriteReport`.
        let write_failed = |source: io::Error| DriverError::WriteReport {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(write_failed)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self).map_err(|err| {
            if err.is_io() {
                write_failed(err.into())
            } else {
                DriverError::EncodeReport(err)
            }
        })?;
        // small reports only reach the disk here.
        writer.flush().map_err(write_failed)
    }
}
