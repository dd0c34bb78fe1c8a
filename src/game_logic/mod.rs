pub mod errors;
pub mod layout;
pub mod movement;

pub use layout::*;
pub use movement::*;
