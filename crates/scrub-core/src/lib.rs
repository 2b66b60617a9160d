pub mod constants;
pub mod controller;
pub mod ease;
pub mod input;
pub mod timeline;
pub mod tween;

pub use constants::*;
pub use controller::*;
pub use input::*;
pub use timeline::*;
pub use tween::*;
