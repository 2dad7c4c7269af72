mod config;
mod hover;
mod item;
mod layout;

pub use self::config::*;
pub use self::hover::*;
pub use self::item::*;
pub use self::layout::*;
