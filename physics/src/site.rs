//! Launch geometry. Positions live in screen space: x to the right, y downward,
//! with the ground a fixed margin above the bottom edge of the canvas.
use rsim_utils::Vec2D;

pub const CANVAS_WIDTH: f64 = 1000.0;
pub const CANVAS_HEIGHT: f64 = 800.0;
pub const GROUND_MARGIN: f64 = 10.0; // ground sits this far above the canvas bottom

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchSite {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub ground_margin: f64,
}

impl Default for LaunchSite {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            ground_margin: GROUND_MARGIN,
        }
    }
}

impl LaunchSite {
    pub fn ground_level(&self) -> f64 {
        //! y coordinate of the ground. The rocket never ends a step below it.
        self.canvas_height - self.ground_margin
    }

    pub fn launch_point(&self) -> Vec2D {
        //! horizontally centred, resting on the ground.
        Vec2D(self.canvas_width / 2.0, self.ground_level())
    }

    pub fn height_of(&self, y_position: f64) -> f64 {
        //! height above the canvas bottom; the plotted quantity.
        self.canvas_height - y_position
    }
}
