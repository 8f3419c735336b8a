pub mod command;
pub mod surface;
pub mod tessellate;

pub use command::*;
pub use surface::*;
pub use tessellate::*;
