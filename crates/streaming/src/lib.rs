pub mod client;
pub mod error;
pub mod fetch;
pub mod source;

pub use client::*;
pub use error::*;
pub use fetch::*;
pub use source::*;
