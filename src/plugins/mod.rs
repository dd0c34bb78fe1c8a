pub mod controls;
pub mod draw;
pub mod routing;
pub mod scene;

pub use controls::*;
pub use draw::*;
pub use routing::*;
pub use scene::*;
