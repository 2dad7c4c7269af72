mod bounds;
mod point;

pub use self::bounds::*;
pub use self::point::*;
