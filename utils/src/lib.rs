mod angle;
mod print_type;
mod vec2d;

pub use angle::wrap_angle;
pub use print_type::{PrintType, UnknownPrintType};
pub use vec2d::Vec2D;
