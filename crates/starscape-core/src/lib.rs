pub mod config;
pub mod constants;
pub mod field;
pub mod mapper;
pub mod random;
pub mod scene;
pub mod subscription;
pub mod surface;
pub mod ticker;
pub mod tween;

pub use config::*;
pub use field::*;
pub use mapper::*;
pub use scene::*;
pub use subscription::*;
pub use surface::*;
pub use ticker::*;
pub use tween::*;
