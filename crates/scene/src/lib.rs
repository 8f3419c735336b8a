pub mod boundary;
pub mod observer;
pub mod track;

pub use boundary::*;
pub use observer::*;
pub use track::*;
