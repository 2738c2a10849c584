//! Geometry for renderers: the rocket silhouette on the launch canvas and the
//! height-vs-time polyline. Everything is plain screen coordinates; drawing is left to
//! whatever consumes the frames.
use rsim_physics::{LaunchSite, RocketState};
use rsim_utils::Vec2D;
use serde::Serialize;

/// Silhouette base width at full size.
pub const ROCKET_WIDTH: f64 = 20.0;
/// Silhouette length at full size.
pub const ROCKET_LENGTH: f64 = 40.0;
/// Smallest the silhouette shrinks to at altitude.
pub const MIN_ROCKET_SCALE: f64 = 0.2;
/// Scale on the launch pad.
pub const MAX_ROCKET_SCALE: f64 = 1.0;

/// Graph width used for the JSON report.
pub const GRAPH_WIDTH: f64 = 800.0;
/// Graph height used for the JSON report.
pub const GRAPH_HEIGHT: f64 = 800.0;
/// The time axis sits this far above the bottom edge.
pub const GRAPH_MARGIN: f64 = 20.0;

/// One renderer-facing snapshot of the run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frame {
    /// State after the step this frame shows.
    pub state: RocketState,
    /// Height above the canvas bottom.
    pub height: f64,
    /// Triangle corners in screen coordinates.
    pub silhouette: [Vec2D; 3],
}

impl Frame {
    /// Snapshot `state` with its derived geometry.
    pub fn capture(state: &RocketState, site: &LaunchSite) -> Self {
        Self {
            state: *state,
            height: site.height_of(state.position.1),
            silhouette: silhouette(state, site),
        }
    }
}

pub fn rocket_scale(y_position: f64, site: &LaunchSite) -> f64 {
    //! the silhouette shrinks as the rocket climbs, never below MIN_ROCKET_SCALE.
    let normalized_height = (site.canvas_height - y_position).max(0.0) / site.canvas_height;
    (MAX_ROCKET_SCALE - normalized_height).max(MIN_ROCKET_SCALE)
}

pub fn silhouette(state: &RocketState, site: &LaunchSite) -> [Vec2D; 3] {
    //! triangle around the rocket position, turned by theta.
    let scale = rocket_scale(state.position.1, site);
    let (w, h) = (ROCKET_WIDTH * scale, ROCKET_LENGTH * scale);
    let local = [
        Vec2D(-w / 2.0, h / 2.0),
        Vec2D(-w / 2.0, -h / 2.0),
        Vec2D(0.0, h / 2.0),
    ];
    local.map(|p| state.position.add(&p.rotated(state.theta)))
}

pub fn height_graph(trajectory: &[f64], width: f64, height: f64) -> Vec<Vec2D> {
    //! polyline through every recorded height, stretched to fill the graph.
    //! fewer than two samples give nothing to draw.
    if trajectory.len() < 2 {
        return Vec::new();
    }

    let max_height = trajectory.iter().copied().fold(f64::MIN, f64::max);
    let scale_y = (height - 2.0 * GRAPH_MARGIN) / max_height.max(1.0);
    #[allow(clippy::as_conversions)] // sample counts are far below f64's exact integer range.
    let scale_x = width / trajectory.len() as f64;

    trajectory
        .iter()
        .enumerate()
        .map(|(i, h)| {
            #[allow(clippy::as_conversions)]
            let x = i as f64 * scale_x;
            Vec2D(x, height - GRAPH_MARGIN - h * scale_y)
        })
        .collect()
}
