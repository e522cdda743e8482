pub use board::*;
pub use errors::*;
pub use protocol_types::*;
pub use reveal::*;
pub use selection::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod errors;
mod protocol_types;
mod reveal;
mod selection;
mod visualization;
