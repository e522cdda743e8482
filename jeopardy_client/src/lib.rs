mod assembler;
mod config;
mod controller;
mod error;
#[cfg(test)]
mod fakes;
mod presenter;
mod source;
pub use assembler::*;
pub use config::*;
pub use controller::*;
pub use error::*;
pub use presenter::*;
pub use source::*;
